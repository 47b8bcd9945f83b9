// src/export/ics.rs

use crate::core::tagger::TaggedBatch;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_export_success;
use crate::export::schedule::Schedule;
use crate::models::category::Category;
use crate::models::event::Event;
use crate::models::run_id::BatchStamp;
use chrono::NaiveDateTime;
use icalendar::{Calendar, Component, Event as IcsEvent};
use std::fs;
use std::path::{Path, PathBuf};

const UID_DOMAIN: &str = "itinerary-calendar.local";

/// Custom property carrying the batch tag.
pub const RUN_ID_PROPERTY: &str = "X-ITINERARY-RUN-ID";

fn ics_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// `X-WR-CALNAME` of a category calendar.
pub fn calendar_name(cat: Category) -> String {
    format!("{} (Itinerary)", cat.as_str())
}

/// `<run>-<category>-<YYYYMMDD>-<NNN>@itinerary-calendar.local`.
pub fn event_uid(stamp: &BatchStamp, cat: Category, e: &Event, index: usize) -> String {
    format!(
        "{}-{}-{}-{:03}@{}",
        stamp.run_id,
        cat.file_stem(),
        e.date.format("%Y%m%d"),
        index + 1,
        UID_DOMAIN
    )
}

/// Notes (or a short fallback) followed by the searchable `RunID: …` tag.
fn description(e: &Event, stamp: &BatchStamp) -> String {
    let tag = stamp.run_id.search_tag();
    let body = e.notes.trim();

    if body.contains(&tag) {
        body.to_string()
    } else if body.is_empty() {
        tag
    } else {
        format!("{body} | {tag}")
    }
}

fn to_vevent(
    e: &Event,
    cat: Category,
    index: usize,
    stamp: &BatchStamp,
    schedule: &Schedule,
) -> IcsEvent {
    let (start, end) = schedule.span(e);

    let mut ev = IcsEvent::new();
    ev.uid(&event_uid(stamp, cat, e, index))
        .timestamp(stamp.issued_at)
        .summary(&e.summary())
        .description(&description(e, stamp))
        .add_property("DTSTART", ics_datetime(start))
        .add_property("DTEND", ics_datetime(end))
        .add_property("LOCATION", e.location())
        .add_property("CATEGORIES", cat.as_str())
        .add_property(RUN_ID_PROPERTY, stamp.run_id.as_str());

    ev
}

/// Render one category as a calendar file.
///
/// Output depends only on the events, the stamp and the schedule. An empty
/// slice still yields a complete VCALENDAR.
pub fn render_calendar(
    cat: Category,
    events: &[Event],
    stamp: &BatchStamp,
    schedule: &Schedule,
) -> String {
    let mut calendar = Calendar::new();
    calendar.name(&calendar_name(cat));

    for (i, e) in events.iter().enumerate() {
        calendar.push(to_vevent(e, cat, i, stamp, schedule));
    }

    calendar.to_string()
}

/// Payload and event count for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFile {
    pub category: Category,
    pub file_name: String,
    pub content: String,
    pub event_count: usize,
}

/// The three calendar payloads of a tagged batch (WORK, TRAVEL, HOLD).
pub fn render_batch(batch: &TaggedBatch, schedule: &Schedule) -> Vec<CalendarFile> {
    Category::ALL
        .iter()
        .map(|&cat| {
            let events = batch.partition(cat);
            CalendarFile {
                category: cat,
                file_name: format!("{}.ics", cat.file_stem()),
                content: render_calendar(cat, events, &batch.stamp, schedule),
                event_count: events.len(),
            }
        })
        .collect()
}

/// Write `work.ics`, `travel.ics` and `hold.ics` into `dir`.
/// Existing files are only replaced with `force` or after confirmation.
pub fn write_batch(
    batch: &TaggedBatch,
    schedule: &Schedule,
    dir: &Path,
    force: bool,
) -> AppResult<Vec<(PathBuf, CalendarFile)>> {
    if dir.exists() && !dir.is_dir() {
        return Err(AppError::Export(format!(
            "Output path is not a directory: {}",
            dir.display()
        )));
    }
    fs::create_dir_all(dir)?;

    let files = render_batch(batch, schedule);

    // Ask for every file first so a refusal leaves nothing half-written
    for f in &files {
        ensure_writable(&dir.join(&f.file_name), force)?;
    }

    let mut written = Vec::with_capacity(files.len());
    for f in files {
        let path = dir.join(&f.file_name);
        fs::write(&path, f.content.as_bytes())?;
        notify_export_success(&format!("{} ({} events)", f.category, f.event_count), &path);
        written.push((path, f));
    }

    Ok(written)
}
