// src/export/model.rs

use crate::models::event::Event;
use serde::Serialize;

/// Flat row used for the table / CSV / JSON views of the event table.
#[derive(Serialize, Clone, Debug)]
pub struct EventRow {
    pub id: u32,
    pub date: String,
    pub time: String,
    pub end: String,
    pub category: String,
    pub city: String,
    pub label: String,
    pub origin: String,
    pub travel: String,
    pub run_id: String,
}

impl From<&Event> for EventRow {
    fn from(e: &Event) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            time: e.time_str(),
            end: e
                .end_time
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default(),
            category: e.category.as_str().to_string(),
            city: e.city.clone(),
            label: e.label.clone(),
            origin: e.origin.as_str().to_string(),
            travel: if e.include_travel { "yes" } else { "no" }.to_string(),
            run_id: e
                .run_id
                .as_ref()
                .map(|r| r.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Header for the table view.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id", "date", "time", "end", "category", "city", "label", "origin", "travel",
    ]
}

/// Cells for the table view (same order as `get_headers`).
pub(crate) fn row_cells(r: &EventRow) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.date.clone(),
        r.time.clone(),
        r.end.clone(),
        r.category.clone(),
        r.city.clone(),
        r.label.clone(),
        r.origin.clone(),
        r.travel.clone(),
    ]
}
