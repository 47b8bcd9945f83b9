use crate::core::table::{EventPatch, EventTable, NewEvent};
use crate::core::travel::TravelSettings;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// One user edit on the event table.
#[derive(Debug, Clone)]
pub enum Edit {
    Add(NewEvent),
    Remove(u32),
    Update(u32, EventPatch),
    /// Recompute inferred travel days
    Travel,
}

/// High-level business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    /// Apply `edit` to `table`. On error the table is unchanged.
    pub fn apply(table: &mut EventTable, edit: Edit, settings: &TravelSettings) -> AppResult<()> {
        match edit {
            Edit::Add(new) => {
                let id = table.add(new)?;
                success(format!("Added event {id}"));
            }
            Edit::Remove(id) => {
                let removed = table.remove(id)?;
                success(format!(
                    "Removed event {} ({} {})",
                    id,
                    removed.date_str(),
                    removed.summary()
                ));
            }
            Edit::Update(id, patch) => {
                if patch.is_empty() {
                    return Err(AppError::InvalidEdit(
                        "nothing to update: pass at least one field".into(),
                    ));
                }
                let ev = table.update(id, patch)?;
                success(format!("Updated event {} → {} {}", id, ev.date_str(), ev.summary()));
            }
            Edit::Travel => {
                let n = table.apply_travel(settings);
                info(format!(
                    "Travel recomputed for home base '{}': {n} travel days",
                    settings.home_city
                ));
            }
        }
        Ok(())
    }
}
