use super::travel_settings;
use crate::cli::parser::{Cli, Commands, EditAction};
use crate::config::Config;
use crate::core::edit::{Edit, EditLogic};
use crate::core::table::{EventPatch, NewEvent};
use crate::errors::AppResult;
use crate::export::{load_session, update_session};
use crate::utils::path::expand_tilde;

fn to_edit(action: &EditAction) -> Edit {
    match action {
        EditAction::Add {
            date,
            city,
            label,
            category,
            time,
            end,
            notes,
        } => Edit::Add(NewEvent {
            date: date.clone(),
            time: time.clone(),
            end_time: end.clone(),
            city: city.clone(),
            label: label.clone(),
            category: category.clone(),
            notes: notes.clone(),
        }),
        EditAction::Remove { id } => Edit::Remove(*id),
        EditAction::Update {
            id,
            date,
            time,
            end,
            city,
            label,
            category,
            include_travel,
            notes,
        } => Edit::Update(
            *id,
            EventPatch {
                date: date.clone(),
                time: time.clone(),
                end_time: end.clone(),
                city: city.clone(),
                label: label.clone(),
                category: category.clone(),
                include_travel: *include_travel,
                notes: notes.clone(),
            },
        ),
        EditAction::Travel => Edit::Travel,
    }
}

/// Handle the `edit` command: load, apply one edit, save back.
/// A rejected edit leaves the session file untouched.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { session, action } = &cli.command {
        let path = expand_tilde(session);
        let mut sess = load_session(&path)?;

        let settings = travel_settings(cli, cfg, Some(&sess.home_city));
        EditLogic::apply(&mut sess.table, to_edit(action), &settings)?;

        sess.home_city = settings.home_city;
        update_session(&path, &sess)?;
    }
    Ok(())
}
