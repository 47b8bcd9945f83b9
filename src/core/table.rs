//! The editable event table a user reviews before export.

use crate::core::tokenizer::normalize_ws;
use crate::core::travel::{TravelSettings, infer_travel};
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::event::{Event, Origin};
use crate::models::raw_event::RawEvent;
use crate::utils::date::parse_iso;
use crate::utils::time::parse_time;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A row typed in by the user. Fields are raw text and validated on `add`.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub date: String,
    pub time: Option<String>,
    pub end_time: Option<String>,
    pub city: String,
    pub label: String,
    pub category: String,
    pub notes: Option<String>,
}

/// Partial update. `None` leaves a field alone; `time: Some("")` clears the time
/// (same for `end_time`).
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub date: Option<String>,
    pub time: Option<String>,
    pub end_time: Option<String>,
    pub city: Option<String>,
    pub label: Option<String>,
    pub category: Option<String>,
    pub include_travel: Option<bool>,
    pub notes: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.time.is_none()
            && self.end_time.is_none()
            && self.city.is_none()
            && self.label.is_none()
            && self.category.is_none()
            && self.include_travel.is_none()
            && self.notes.is_none()
    }
}

/// Immutable copy of the table split by category. Each partition is sorted
/// by `(date, time, id)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub work: Vec<Event>,
    pub travel: Vec<Event>,
    pub hold: Vec<Event>,
}

impl Snapshot {
    pub fn partition(&self, cat: Category) -> &[Event] {
        match cat {
            Category::Work => &self.work,
            Category::Travel => &self.travel,
            Category::Hold => &self.hold,
        }
    }

    pub fn partition_mut(&mut self, cat: Category) -> &mut Vec<Event> {
        match cat {
            Category::Work => &mut self.work,
            Category::Travel => &mut self.travel,
            Category::Hold => &mut self.hold,
        }
    }

    pub fn len(&self) -> usize {
        self.work.len() + self.travel.len() + self.hold.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.work.iter().chain(&self.travel).chain(&self.hold)
    }
}

/// Ordered, owned set of events for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTable {
    events: Vec<Event>,
    #[serde(default)]
    next_id: u32,
}

impl EventTable {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Table of Parsed rows, in the extractor's order.
    pub fn from_raw(raw: &[RawEvent]) -> Self {
        let mut table = Self::new();
        for r in raw {
            let id = table.allocate_id();
            table.events.push(Event::from_raw(id, r));
        }
        table
    }

    fn allocate_id(&mut self) -> u32 {
        // Tables deserialized from old sessions may carry next_id = 0
        let floor = self.events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let id = self.next_id.max(floor);
        self.next_id = id + 1;
        id
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn get(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    fn position(&self, id: u32) -> AppResult<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or(AppError::EventNotFound(id))
    }

    /// Add a manual row. Returns its id.
    pub fn add(&mut self, new: NewEvent) -> AppResult<u32> {
        let date = parse_date_field(&new.date)?;
        let time = parse_time_field(new.time.as_deref())?;
        let end_time = parse_time_field(new.end_time.as_deref())?;
        let category = parse_category_field(&new.category)?;
        let city = required_text("city", &new.city)?;
        let label = required_text("label", &new.label)?;

        let id = self.allocate_id();
        self.events.push(Event {
            id,
            date,
            time,
            end_time,
            city,
            label,
            category,
            origin: Origin::Manual,
            include_travel: true,
            notes: new.notes.unwrap_or_default(),
            direction: None,
            run_id: None,
        });
        Ok(id)
    }

    /// Remove a row and hand it back.
    pub fn remove(&mut self, id: u32) -> AppResult<Event> {
        let idx = self.position(id)?;
        Ok(self.events.remove(idx))
    }

    /// Apply a patch. Every field is validated before anything changes;
    /// on error the row is left exactly as it was.
    pub fn update(&mut self, id: u32, patch: EventPatch) -> AppResult<&Event> {
        let idx = self.position(id)?;
        let mut candidate = self.events[idx].clone();

        if let Some(d) = &patch.date {
            candidate.date = parse_date_field(d)?;
        }
        if let Some(t) = &patch.time {
            candidate.time = parse_time_field(Some(t))?;
        }
        if let Some(t) = &patch.end_time {
            candidate.end_time = parse_time_field(Some(t))?;
        }
        if let Some(c) = &patch.city {
            candidate.city = required_text("city", c)?;
        }
        if let Some(l) = &patch.label {
            candidate.label = required_text("label", l)?;
        }
        if let Some(c) = &patch.category {
            candidate.category = parse_category_field(c)?;
            // A travel day turned into WORK/HOLD belongs to the user from now on
            if !candidate.category.is_travel() && candidate.direction.take().is_some() {
                candidate.origin = Origin::Manual;
                if patch.label.is_none() {
                    candidate.label = candidate.city.clone();
                }
            }
        }
        if let Some(flag) = patch.include_travel {
            candidate.include_travel = flag;
        }
        if let Some(n) = patch.notes {
            candidate.notes = n;
        }

        self.events[idx] = candidate;
        Ok(&self.events[idx])
    }

    /// Drop previously inferred TRAVEL rows (edited or not) and infer them
    /// again from the current WORK/HOLD rows. Manual TRAVEL rows stay.
    /// Returns how many travel rows were added.
    pub fn apply_travel(&mut self, settings: &TravelSettings) -> usize {
        self.events
            .retain(|e| !(e.origin == Origin::Inferred && e.category.is_travel()));

        let travel = infer_travel(&self.events, settings);
        let added = travel.len();

        for t in &travel {
            let id = self.allocate_id();
            self.events.push(Event::from_travel(id, t));
        }

        added
    }

    /// Copy of the table split by category.
    pub fn snapshot(&self) -> Snapshot {
        let mut snap = Snapshot::default();

        for e in &self.events {
            snap.partition_mut(e.category).push(e.clone());
        }

        for cat in Category::ALL {
            snap.partition_mut(cat)
                .sort_by_key(|e| (e.date, e.time, e.id));
        }

        snap
    }
}

fn parse_date_field(s: &str) -> AppResult<NaiveDate> {
    parse_iso(s).ok_or_else(|| {
        AppError::InvalidEdit(format!("'{s}' is not a valid calendar date (YYYY-MM-DD)"))
    })
}

fn parse_time_field(s: Option<&str>) -> AppResult<Option<NaiveTime>> {
    match s.map(str::trim) {
        None | Some("") | Some("-") => Ok(None),
        Some(t) => parse_time(t)
            .map(Some)
            .ok_or_else(|| AppError::InvalidEdit(format!("'{t}' is not a valid time (HH:MM)"))),
    }
}

fn parse_category_field(s: &str) -> AppResult<Category> {
    Category::parse(s).map_err(|_| {
        AppError::InvalidEdit(format!("'{s}' is not a category (WORK, TRAVEL or HOLD)"))
    })
}

fn required_text(field: &str, s: &str) -> AppResult<String> {
    let v = normalize_ws(s);
    if v.is_empty() {
        Err(AppError::InvalidEdit(format!("{field} must not be empty")))
    } else {
        Ok(v)
    }
}
