use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::In => "IN",
            Direction::Out => "OUT",
        }
    }
}

/// Inferred travel day at the edge of a run away from home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelEvent {
    pub date: NaiveDate,
    pub direction: Direction,
    pub city: String,
    pub home_city: String,
}

impl TravelEvent {
    /// "Home → City" for IN, "City → Home" for OUT.
    pub fn route(&self) -> String {
        match self.direction {
            Direction::In => format!("{} → {}", self.home_city, self.city),
            Direction::Out => format!("{} → {}", self.city, self.home_city),
        }
    }
}
