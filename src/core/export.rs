use crate::core::table::EventTable;
use crate::core::tagger::{RunIdSource, TaggedBatch, tag};
use crate::errors::AppResult;
use crate::export::ics::{CalendarFile, render_batch, write_batch};
use crate::export::schedule::Schedule;
use std::path::{Path, PathBuf};

/// High-level business logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Snapshot the table and stamp it with a fresh RunID.
    pub fn tag_table(table: &EventTable, ids: &mut dyn RunIdSource) -> TaggedBatch {
        let stamp = ids.issue();
        tag(&table.snapshot(), &stamp)
    }

    /// Tag and render the three calendars without touching the disk.
    pub fn render(
        table: &EventTable,
        ids: &mut dyn RunIdSource,
        schedule: &Schedule,
    ) -> (TaggedBatch, Vec<CalendarFile>) {
        let batch = Self::tag_table(table, ids);
        let files = render_batch(&batch, schedule);
        (batch, files)
    }

    /// Tag, render and write `work.ics`, `travel.ics`, `hold.ics` into `dir`.
    pub fn export(
        table: &EventTable,
        ids: &mut dyn RunIdSource,
        schedule: &Schedule,
        dir: &Path,
        force: bool,
    ) -> AppResult<(TaggedBatch, Vec<(PathBuf, CalendarFile)>)> {
        let batch = Self::tag_table(table, ids);
        let written = write_batch(&batch, schedule, dir, force)?;
        Ok((batch, written))
    }
}
