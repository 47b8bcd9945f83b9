//! Boundary travel inference: one travel-in day before and one travel-out day
//! after every run of events away from home.

use crate::config::TravelMode;
use crate::models::category::Category;
use crate::models::event::Event;
use crate::models::raw_event::RawEvent;
use crate::models::travel::{Direction, TravelEvent};
use crate::utils::date::{next_day, previous_day};
use crate::utils::location::{is_unknown_location, normalize_location};
use chrono::NaiveDate;

/// Anything that sits on a day in a city.
pub trait Stop {
    fn date(&self) -> NaiveDate;
    fn city(&self) -> &str;
    fn category(&self) -> Category;
    fn include_travel(&self) -> bool {
        true
    }
}

impl Stop for RawEvent {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn city(&self) -> &str {
        &self.city
    }
    fn category(&self) -> Category {
        self.category
    }
}

impl Stop for Event {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn city(&self) -> &str {
        &self.city
    }
    fn category(&self) -> Category {
        self.category
    }
    fn include_travel(&self) -> bool {
        self.include_travel
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelSettings {
    pub home_city: String,
    pub mode: TravelMode,
}

impl TravelSettings {
    pub fn new(home_city: impl Into<String>, mode: TravelMode) -> Self {
        Self {
            home_city: home_city.into(),
            mode,
        }
    }
}

/// Maximal stretch of consecutive events in one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub city: String,      // as written on the first event
    pub city_norm: String, // normalized key
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub len: usize,
    pub wants_travel: bool, // any event with include_travel
}

impl Run {
    pub fn is_home(&self, home_norm: &str) -> bool {
        self.city_norm == home_norm
    }

    /// Away from home and in a known city.
    pub fn is_trip(&self, home_norm: &str) -> bool {
        !self.is_home(home_norm) && !is_unknown_location(&self.city)
    }
}

/// Group WORK/HOLD stops (date order, input order on ties) into city runs.
/// TRAVEL stops are ignored.
pub fn city_runs<S: Stop>(stops: &[S]) -> Vec<Run> {
    let mut ordered: Vec<&S> = stops
        .iter()
        .filter(|s| !s.category().is_travel())
        .collect();
    ordered.sort_by_key(|s| s.date());

    let mut runs: Vec<Run> = Vec::new();

    for s in ordered {
        let norm = normalize_location(s.city());

        if let Some(cur) = runs.last_mut()
            && cur.city_norm == norm
        {
            cur.start = cur.start.min(s.date());
            cur.end = cur.end.max(s.date());
            cur.len += 1;
            cur.wants_travel |= s.include_travel();
            continue;
        }

        runs.push(Run {
            city: s.city().to_string(),
            city_norm: norm,
            start: s.date(),
            end: s.date(),
            len: 1,
            wants_travel: s.include_travel(),
        });
    }

    runs
}

/// Travel days for every eligible run.
///
/// Adjacent runs in two different away cities each get their own IN and OUT;
/// they are not merged into a city-to-city leg.
pub fn infer_travel<S: Stop>(stops: &[S], settings: &TravelSettings) -> Vec<TravelEvent> {
    if settings.mode == TravelMode::Off {
        return Vec::new();
    }

    let home_norm = normalize_location(&settings.home_city);
    let mut out = Vec::new();

    for run in city_runs(stops) {
        if !run.is_trip(&home_norm) {
            continue;
        }
        if settings.mode == TravelMode::Manual && !run.wants_travel {
            continue;
        }

        if let Some(day) = previous_day(run.start) {
            out.push(TravelEvent {
                date: day,
                direction: Direction::In,
                city: run.city.clone(),
                home_city: settings.home_city.clone(),
            });
        }
        if let Some(day) = next_day(run.end) {
            out.push(TravelEvent {
                date: day,
                direction: Direction::Out,
                city: run.city.clone(),
                home_city: settings.home_city.clone(),
            });
        }
    }

    out
}
