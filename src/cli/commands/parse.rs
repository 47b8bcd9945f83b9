use super::{read_input, travel_settings};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::parse::ParseLogic;
use crate::errors::AppResult;
use crate::export::view::{category_counts, render_events};
use crate::export::{Session, ViewFormat, save_session};
use crate::ui::messages::{detail, header, info, success, warning};
use crate::utils::formatting::plural;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Parse {
        input,
        format,
        save,
        force,
    } = &cli.command
    {
        let text = read_input(input)?;
        let settings = travel_settings(cli, cfg, None);
        let outcome = ParseLogic::apply(&text, &settings);

        let rendered = render_events(outcome.table.iter(), *format)?;

        // Machine-readable formats go to stdout untouched
        if *format != ViewFormat::Table {
            print!("{rendered}");
        } else {
            header("Events");
            print!("{rendered}");
            println!();

            let all: Vec<_> = outcome.table.iter().collect();
            info(category_counts(&all));
            info(format!(
                "Detected city runs: {}  •  away from '{}': {}  •  travel days added: {}",
                outcome.runs.len(),
                settings.home_city,
                outcome.trip_runs(&settings).len(),
                outcome.travel_added
            ));
        }

        if outcome.raw.is_empty() {
            warning("No events recognized in the input.");
        }

        if !outcome.unparsed.is_empty() {
            warning(format!(
                "{} could not be parsed (fix them up with `edit add`):",
                plural(outcome.unparsed.len(), "line")
            ));
            for u in &outcome.unparsed {
                detail(format!("line {:>3}: {}", u.line_no, u.text));
            }
        }

        if let Some(path) = save {
            let path = expand_tilde(path);
            let session = Session {
                home_city: settings.home_city.clone(),
                table: outcome.table,
            };
            save_session(&path, &session, *force)?;
            success(format!("Session saved: {}", path.display()));
        }
    }
    Ok(())
}
