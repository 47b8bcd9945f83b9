use super::category::Category;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One dated entry recovered from the pasted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawEvent {
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub city: String,
    pub label: String,
    pub category: Category, // WORK or HOLD only
    pub notes: String,
    pub source_lines: Vec<usize>, // 1-based line numbers in the pasted text
}

/// A line no extraction rule could make sense of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnparsedLine {
    pub line_no: usize,
    pub text: String,
}
