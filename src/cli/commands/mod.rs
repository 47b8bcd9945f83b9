pub mod config;
pub mod edit;
pub mod export;
pub mod init;
pub mod parse;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::travel::TravelSettings;
use crate::errors::AppResult;
use crate::utils::path::{expand_tilde, is_stdio};
use std::fs;
use std::io::{self, Read};

/// Read itinerary text from a file, or stdin for `-`.
pub(crate) fn read_input(path: &str) -> AppResult<String> {
    if is_stdio(path) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(expand_tilde(path))?)
    }
}

/// Travel settings from the config, with `--home` / `--travel` applied.
/// `fallback_home` (e.g. a session's home city) wins over the config file.
pub(crate) fn travel_settings(cli: &Cli, cfg: &Config, fallback_home: Option<&str>) -> TravelSettings {
    let home = cli
        .home
        .as_deref()
        .or(fallback_home)
        .unwrap_or(&cfg.home_city);

    TravelSettings::new(home, cli.travel.unwrap_or(cfg.travel_mode))
}
