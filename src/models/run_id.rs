use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Batch tag shared by every event of one export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text searched for in a calendar client to select the batch.
    pub fn search_tag(&self) -> String {
        format!("RunID: {}", self.0)
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A RunId plus the instant it was issued (used as DTSTAMP).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchStamp {
    pub run_id: RunId,
    pub issued_at: DateTime<Utc>,
}
