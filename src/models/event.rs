use super::{
    category::Category,
    raw_event::RawEvent,
    run_id::RunId,
    travel::{Direction, TravelEvent},
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Where a table row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Parsed,
    Inferred,
    Manual,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Parsed => "parsed",
            Origin::Inferred => "inferred",
            Origin::Manual => "manual",
        }
    }
}

fn default_include_travel() -> bool {
    true
}

/// One editable row of the event table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    pub city: String,
    pub label: String,
    pub category: Category,
    pub origin: Origin,
    #[serde(default = "default_include_travel")]
    pub include_travel: bool,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub direction: Option<Direction>, // only for TRAVEL rows
    #[serde(default)]
    pub run_id: Option<RunId>,
}

impl Event {
    /// Row built from a parsed itinerary entry.
    /// - `origin = Parsed`
    /// - `include_travel = true`
    /// - no RunId until export
    pub fn from_raw(id: u32, raw: &RawEvent) -> Self {
        Self {
            id,
            date: raw.date,
            time: raw.start_time,
            end_time: None,
            city: raw.city.clone(),
            label: raw.label.clone(),
            category: raw.category,
            origin: Origin::Parsed,
            include_travel: true,
            notes: raw.notes.clone(),
            direction: None,
            run_id: None,
        }
    }

    pub fn from_travel(id: u32, travel: &TravelEvent) -> Self {
        Self {
            id,
            date: travel.date,
            time: None,
            end_time: None,
            city: travel.city.clone(),
            label: travel.route(),
            category: Category::Travel,
            origin: Origin::Inferred,
            include_travel: true,
            notes: match travel.direction {
                Direction::In => "Auto travel-in day (trip boundary).".to_string(),
                Direction::Out => "Auto travel-out day (trip boundary).".to_string(),
            },
            direction: Some(travel.direction),
            run_id: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }

    /// Calendar summary, e.g. `WORK: Show A` or `TRAVEL IN: Paris → LA`.
    pub fn summary(&self) -> String {
        match (self.category, self.direction) {
            (Category::Travel, Some(dir)) => format!("TRAVEL {}: {}", dir.as_str(), self.label),
            _ => format!("{}: {}", self.category.as_str(), self.label),
        }
    }

    /// LOCATION value: the route for travel days, the city otherwise.
    pub fn location(&self) -> &str {
        if self.direction.is_some() {
            &self.label
        } else {
            &self.city
        }
    }
}
