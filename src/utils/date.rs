//! Date utilities: the fixed set of itinerary date shapes.

use chrono::{Days, NaiveDate};

const MONTHS: [(&str, u32); 12] = [
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

/// Strict ISO date (YYYY-MM-DD), used for edits and CLI arguments.
pub fn parse_iso(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse any of the recognized itinerary date shapes:
/// - `YYYY-MM-DD`
/// - `YYYY/MM/DD`
/// - `MM/DD/YYYY` (month first)
/// - `Mon D YYYY`, `Mon D, YYYY`, `Month D YYYY`
///
/// Returns `None` when the text does not denote a real calendar date.
pub fn parse_flexible(s: &str) -> Option<NaiveDate> {
    let s = s.trim().trim_end_matches(',');

    if let Some(d) = parse_iso(s) {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y/%m/%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Some(d);
    }

    parse_month_name(s)
}

/// `Mar 1 2024`, `March 1, 2024`, `Mar. 1 2024`.
fn parse_month_name(s: &str) -> Option<NaiveDate> {
    let cleaned = s.replace([',', '.'], " ");
    let mut parts = cleaned.split_whitespace();

    let month = month_number(parts.next()?)?;
    let day: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;

    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// `jan`, `January`, `SEPT` → month number.
pub fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .find(|(abbr, _)| lower.starts_with(abbr) && full_name(*abbr).starts_with(&lower))
        .map(|(_, n)| *n)
}

fn full_name(abbr: &str) -> &'static str {
    match abbr {
        "jan" => "january",
        "feb" => "february",
        "mar" => "march",
        "apr" => "april",
        "may" => "may",
        "jun" => "june",
        "jul" => "july",
        "aug" => "august",
        // "sept" is a common abbreviation too
        "sep" => "september",
        "oct" => "october",
        "nov" => "november",
        _ => "december",
    }
}

pub fn previous_day(d: NaiveDate) -> Option<NaiveDate> {
    d.checked_sub_days(Days::new(1))
}

pub fn next_day(d: NaiveDate) -> Option<NaiveDate> {
    d.checked_add_days(Days::new(1))
}

/// Every day from `start` to `end`, both included. Empty when `end < start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;

    while d <= end {
        out.push(d);
        match next_day(d) {
            Some(n) => d = n,
            None => break,
        }
    }

    out
}
