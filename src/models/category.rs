use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar an event is exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Work,
    Travel,
    Hold,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Work, Category::Travel, Category::Hold];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "WORK",
            Category::Travel => "TRAVEL",
            Category::Hold => "HOLD",
        }
    }

    /// Case-insensitive parse of `work` / `travel` / `hold`.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "travel" => Ok(Category::Travel),
            "hold" => Ok(Category::Hold),
            _ => Err(AppError::InvalidCategory(s.to_string())),
        }
    }

    /// Lowercase stem used for file names and UIDs.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Travel => "travel",
            Category::Hold => "hold",
        }
    }

    pub fn is_travel(&self) -> bool {
        matches!(self, Category::Travel)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
