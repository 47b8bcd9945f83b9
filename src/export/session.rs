// src/export/session.rs

use crate::core::table::EventTable;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::write_text;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const SESSION_VERSION: u32 = 1;

/// On-disk form of an event table between two CLI invocations.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    version: u32,
    home_city: String,
    table: EventTable,
}

/// A reloaded session: the table plus the home city it was parsed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub home_city: String,
    pub table: EventTable,
}

/// Save a session as pretty-printed JSON.
pub fn save_session(path: &Path, session: &Session, force: bool) -> AppResult<()> {
    let file = SessionFile {
        version: SESSION_VERSION,
        home_city: session.home_city.clone(),
        table: session.table.clone(),
    };
    let json = serde_json::to_string_pretty(&file)?;
    write_text(path, &json, force)
}

/// Overwrite an existing session file without asking (used after edits).
pub fn update_session(path: &Path, session: &Session) -> AppResult<()> {
    save_session(path, session, true)
}

pub fn load_session(path: &Path) -> AppResult<Session> {
    if !path.exists() {
        return Err(AppError::Other(format!(
            "Session file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let file: SessionFile = serde_json::from_str(&content)?;

    if file.version > SESSION_VERSION {
        return Err(AppError::Other(format!(
            "Session file version {} is newer than supported ({SESSION_VERSION})",
            file.version
        )));
    }

    Ok(Session {
        home_city: file.home_city,
        table: file.table,
    })
}
