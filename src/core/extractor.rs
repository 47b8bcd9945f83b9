//! Rule-based extraction of dated events from tokenized itinerary text.
//!
//! Rules are tried in the order of [`RULES`]; the first one that matches wins.
//! Block rules look at a whole blank-line-delimited block, line rules at one
//! line. Lines nobody claims are reported back as [`UnparsedLine`]s.

use crate::core::tokenizer::{Block, Line, normalize_ws};
use crate::models::category::Category;
use crate::models::raw_event::{RawEvent, UnparsedLine};
use crate::utils::date::{days_inclusive, parse_flexible};
use crate::utils::time::parse_time;
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

const DATE: &str =
    r"(?P<date>\d{4}[-/]\d{1,2}[-/]\d{1,2}|\d{1,2}/\d{1,2}/\d{4}|[A-Za-z]{3,9}\.? \d{1,2},? \d{4})";

static PIPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{DATE} ?\| ?(?P<city>[^|]*?) ?(?:\| ?(?P<label>.*?))?$"
    ))
    .expect("valid piped regex")
});

static TIMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{DATE} (?P<time>\d{{1,2}}:\d{{2}}) (?P<city>\S+)(?: (?P<label>.+))?$"
    ))
    .expect("valid timed regex")
});

static DATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{DATE} (?P<city>\S+)(?: (?P<label>.+))?$")).expect("valid dated regex")
});

static TIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}$").expect("valid time regex"));

static HOLD_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bhold\b").expect("valid hold regex"));

static RANGE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i) (?:to|through|until|–|-) ").expect("valid range regex"));

/// Longest `Dates:` range a labelled block may expand to.
pub const MAX_RANGE_DAYS: i64 = 366;

/// Status lines recognized inside a labelled block, most specific first.
pub const STATUS_WORDS: [&str; 6] = [
    "Confirmed",
    "Hold",
    "First Option",
    "Pending Signature",
    "Pending",
    "Option",
];

pub type BlockMatcher = fn(&Block) -> Option<Vec<RawEvent>>;
pub type LineMatcher = fn(&Line) -> Option<RawEvent>;

/// One extraction rule.
#[derive(Clone, Copy)]
pub enum Rule {
    Block {
        name: &'static str,
        matcher: BlockMatcher,
    },
    Line {
        name: &'static str,
        matcher: LineMatcher,
    },
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Block { name, .. } | Rule::Line { name, .. } => *name,
        }
    }
}

/// Extraction rules in priority order.
pub const RULES: [Rule; 4] = [
    Rule::Block {
        name: "labelled-block",
        matcher: labelled_block,
    },
    Rule::Line {
        name: "piped-line",
        matcher: piped_line,
    },
    Rule::Line {
        name: "dated-line-with-time",
        matcher: timed_line,
    },
    Rule::Line {
        name: "dated-line",
        matcher: dated_line,
    },
];

/// Events found plus the lines that matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub events: Vec<RawEvent>,
    pub unparsed: Vec<UnparsedLine>,
}

impl Extraction {
    /// Distinct input lines accounted for by events or diagnostics.
    pub fn lines_accounted(&self) -> usize {
        let mut consumed: Vec<usize> = self
            .events
            .iter()
            .flat_map(|e| e.source_lines.iter().copied())
            .collect();
        consumed.sort_unstable();
        consumed.dedup();
        consumed.len() + self.unparsed.len()
    }
}

/// Run every rule over the blocks. Events come back sorted by
/// `(date, start_time)`; input order breaks ties.
pub fn extract(blocks: &[Block]) -> Extraction {
    let mut out = Extraction::default();

    for block in blocks {
        if let Some(events) = match_block(block) {
            out.events.extend(events);
            continue;
        }

        for line in &block.lines {
            match match_line(line) {
                Some((_, ev)) => out.events.push(ev),
                None => out.unparsed.push(UnparsedLine {
                    line_no: line.number,
                    text: line.text.clone(),
                }),
            }
        }
    }

    out.events.sort_by_key(|e| (e.date, e.start_time));
    out
}

/// First block rule that claims the whole block.
pub fn match_block(block: &Block) -> Option<Vec<RawEvent>> {
    RULES.iter().find_map(|rule| match rule {
        Rule::Block { matcher, .. } => matcher(block),
        Rule::Line { .. } => None,
    })
}

/// First line rule that matches, with the rule name.
pub fn match_line(line: &Line) -> Option<(&'static str, RawEvent)> {
    RULES.iter().find_map(|rule| match rule {
        Rule::Line { name, matcher } => matcher(line).map(|ev| (*name, ev)),
        Rule::Block { .. } => None,
    })
}

// ---------------------------
// Line rules
// ---------------------------

fn piped_line(line: &Line) -> Option<RawEvent> {
    let caps = PIPED.captures(&line.text)?;
    let date = parse_flexible(&caps["date"])?;
    let city = caps["city"].trim();
    if city.is_empty() {
        return None;
    }
    let label = caps.name("label").map(|m| m.as_str()).unwrap_or("");

    Some(line_event(line, date, None, city, label))
}

/// The city is a single word here and in `dated_line`: `2024-03-05 New York Show`
/// reads as city `New`. Cities with spaces need the piped form.
fn timed_line(line: &Line) -> Option<RawEvent> {
    let caps = TIMED.captures(&line.text)?;
    let date = parse_flexible(&caps["date"])?;
    let time = parse_time(&caps["time"])?;
    let label = caps.name("label").map(|m| m.as_str()).unwrap_or("");

    Some(line_event(line, date, Some(time), &caps["city"], label))
}

fn dated_line(line: &Line) -> Option<RawEvent> {
    let caps = DATED.captures(&line.text)?;
    let date = parse_flexible(&caps["date"])?;
    let city = &caps["city"];
    // An out-of-range time ("25:00") must not become a city.
    if TIME_SHAPE.is_match(city) {
        return None;
    }
    let label = caps.name("label").map(|m| m.as_str()).unwrap_or("");

    Some(line_event(line, date, None, city, label))
}

fn line_event(
    line: &Line,
    date: NaiveDate,
    start_time: Option<NaiveTime>,
    city: &str,
    label: &str,
) -> RawEvent {
    let label = normalize_ws(label);
    let category = if HOLD_WORD.is_match(&label) {
        Category::Hold
    } else {
        Category::Work
    };

    RawEvent {
        date,
        start_time,
        city: normalize_ws(city),
        label: if label.is_empty() {
            "Untitled".to_string()
        } else {
            label
        },
        category,
        notes: String::new(),
        source_lines: vec![line.number],
    }
}

// ---------------------------
// Block rules
// ---------------------------

/// Agency-style block:
///
/// ```text
/// Spring Tour – Milan
/// Location: Milan, Italy
/// Dates: Mar 3 2024 to Mar 5 2024
/// Hold
/// Load-in 8am
/// ```
///
/// One event per day of the date range.
fn labelled_block(block: &Block) -> Option<Vec<RawEvent>> {
    let (first, rest) = block.lines.split_first()?;

    let mut location = String::new();
    let mut range = None;
    let mut status = String::new();
    let mut notes: Vec<&str> = Vec::new();

    let title = if field_value(&first.text, "dates:").is_some()
        || field_value(&first.text, "location:").is_some()
    {
        // No title line: treat the first line as a field too
        None
    } else {
        Some(first.text.as_str())
    };

    let field_lines = if title.is_some() {
        rest
    } else {
        &block.lines[..]
    };

    for line in field_lines {
        let l = line.text.as_str();

        if let Some(v) = field_value(l, "location:") {
            location = v.to_string();
            continue;
        }

        if let Some(v) = field_value(l, "dates:") {
            range = Some(parse_range(v)?);
            continue;
        }

        if let Some(w) = STATUS_WORDS.iter().find(|w| l.eq_ignore_ascii_case(w)) {
            status = w.to_string();
            continue;
        }

        notes.push(l);
    }

    let (start, end) = range?;

    let category = if status.to_lowercase().contains("hold") {
        Category::Hold
    } else {
        Category::Work
    };

    let city = if location.is_empty() {
        "TBD".to_string()
    } else {
        location
    };

    let notes = if notes.is_empty() && !status.is_empty() {
        format!("Status: {status}")
    } else {
        notes.join(" ")
    };

    let source_lines: Vec<usize> = block.lines.iter().map(|l| l.number).collect();
    let label = title.unwrap_or("Untitled").to_string();

    Some(
        days_inclusive(start, end)
            .into_iter()
            .map(|date| RawEvent {
                date,
                start_time: None,
                city: city.clone(),
                label: label.clone(),
                category,
                notes: notes.clone(),
                source_lines: source_lines.clone(),
            })
            .collect(),
    )
}

/// `Key: value` with a case-insensitive key. Returns the trimmed value.
fn field_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let head = line.get(..key.len())?;
    if head.eq_ignore_ascii_case(key) {
        Some(line[key.len()..].trim())
    } else {
        None
    }
}

/// `A to B`, `A - B` or a single date. `None` if a side is not a date, the
/// range runs backwards or it spans more than [`MAX_RANGE_DAYS`].
fn parse_range(v: &str) -> Option<(NaiveDate, NaiveDate)> {
    let parts: Vec<&str> = RANGE_SPLIT.splitn(v, 2).collect();

    let (start, end) = match parts.as_slice() {
        [single] => {
            let d = parse_flexible(single)?;
            (d, d)
        }
        [a, b] => (parse_flexible(a)?, parse_flexible(b)?),
        _ => return None,
    };

    if end < start || (end - start).num_days() >= MAX_RANGE_DAYS {
        return None;
    }

    Some((start, end))
}
