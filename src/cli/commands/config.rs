use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, check};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use crate::utils::path::expand_tilde;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check: do_check,
        fill,
        edit_config,
        editor,
    } = &cli.command
    {
        // Path del file di configurazione
        let path = match &cli.config {
            Some(p) => expand_tilde(p),
            None => Config::config_file(),
        };

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *do_check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use)",
                    path.display()
                ));
            } else if *fill {
                let added = check::fill_missing(&path)?;
                if added.is_empty() {
                    success("Configuration is complete.");
                } else {
                    success(format!("Added missing fields: {}", added.join(", ")));
                }
            } else {
                let missing = check::missing_keys(&path)?;
                if missing.is_empty() {
                    success("Configuration is complete.");
                } else {
                    warning(format!(
                        "Missing fields (defaults apply): {}",
                        missing.join(", ")
                    ));
                    info("Run `config --check --fill` to write them to the file.");
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            // Se l'utente ha passato --editor, usiamo quello
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration edited with '{editor_to_use}'"));
                }
                _ if editor_to_use != default_editor => {
                    warning(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    ));
                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => {
                            success(format!("Configuration edited with '{default_editor}'"));
                        }
                        _ => error(format!("Failed to run editor '{default_editor}'")),
                    }
                }
                _ => error(format!("Failed to run editor '{editor_to_use}'")),
            }
        }
    }

    Ok(())
}
