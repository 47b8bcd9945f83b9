use super::{read_input, travel_settings};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::parse::ParseLogic;
use crate::core::tagger::{FixedRunId, RunIdSource, source_for};
use crate::errors::{AppError, AppResult};
use crate::export::{Schedule, load_session};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use chrono::Utc;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        session,
        out_dir,
        run_id,
        force,
    } = &cli.command
    {
        let table = match (input, session) {
            (_, Some(s)) => load_session(&expand_tilde(s))?.table,
            (Some(i), None) => {
                let text = read_input(i)?;
                let settings = travel_settings(cli, cfg, None);
                let outcome = ParseLogic::apply(&text, &settings);
                if !outcome.unparsed.is_empty() {
                    warning(format!(
                        "{} unparsed line(s) skipped; use `parse --save` + `edit` to fix them up",
                        outcome.unparsed.len()
                    ));
                }
                outcome.table
            }
            (None, None) => {
                return Err(AppError::Export(
                    "nothing to export: pass --input FILE or --session FILE".into(),
                ));
            }
        };

        let schedule = Schedule::from_config(cfg)?;

        let mut ids: Box<dyn RunIdSource> = match run_id {
            Some(id) if !id.trim().is_empty() => Box::new(FixedRunId::new(id.trim(), Utc::now())),
            Some(_) => return Err(AppError::Export("--run-id must not be empty".into())),
            None => source_for(cfg.run_id_style),
        };

        let (batch, written) =
            ExportLogic::export(&table, ids.as_mut(), &schedule, &expand_tilde(out_dir), *force)?;

        for (_, f) in &written {
            if f.event_count == 0 {
                warning(format!("{} has no events (empty calendar written)", f.file_name));
            }
        }

        info(format!("RunID: {}", batch.stamp.run_id));
        info(format!(
            "To bulk delete this import, search \"{}\" in your calendar.",
            batch.stamp.run_id.search_tag()
        ));
    }
    Ok(())
}
