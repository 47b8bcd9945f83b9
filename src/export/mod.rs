// src/export/mod.rs

mod fs_utils;
pub mod ics;
mod model;
pub mod schedule;
pub mod session;
pub mod view;

pub use ics::{CalendarFile, render_batch, render_calendar, write_batch};
pub use model::EventRow;
pub use schedule::Schedule;
pub use session::{Session, load_session, save_session, update_session};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// How the event table is printed by `parse`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewFormat {
    Table,
    Csv,
    Json,
}
