//! Splits pasted itinerary text into blocks of cleaned, numbered lines.

use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-=*_~]{3,}$").expect("valid separator regex"));

/// A non-empty line with its 1-based position in the pasted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

/// A run of lines between blank lines (or separators).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub lines: Vec<Line>,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("//")
}

/// Tokenize raw text.
///
/// - CRLF / CR are treated as LF
/// - whitespace runs collapse to one space, lines are trimmed
/// - blank lines and separator lines (`---`, `===`, `***` …) end a block
/// - comment lines (`#`, `//`) are dropped
pub fn tokenize(text: &str) -> Vec<Block> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut blocks = Vec::new();
    let mut current = Block::default();

    for (idx, raw) in text.split('\n').enumerate() {
        let line = normalize_ws(raw);

        if line.is_empty() || SEPARATOR.is_match(&line) {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }

        if is_comment(&line) {
            continue;
        }

        current.lines.push(Line {
            number: idx + 1,
            text: line,
        });
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
