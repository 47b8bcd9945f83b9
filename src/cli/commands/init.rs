use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Handle the `init` command
///
/// Writes the default configuration (with `--home` applied) to the standard
/// location or to `--config FILE`.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path: PathBuf = match &cli.config {
            Some(p) => expand_tilde(p),
            None => Config::config_file(),
        };

        if path.exists() && !force {
            warning(format!(
                "Configuration already exists: {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        let mut cfg = Config::default();
        if let Some(home) = &cli.home {
            cfg.home_city = home.clone();
        }
        if let Some(mode) = cli.travel {
            cfg.travel_mode = mode;
        }
        cfg.validate()?;
        cfg.save_to(&path)?;

        info(format!("Home base   : {}", cfg.home_city));
        success(format!("Config file : {}", path.display()));
    }
    Ok(())
}

