//! Formatting utilities used for CLI outputs.

use crate::models::category::Category;

pub fn pad_right(s: &str, width: usize) -> String {
    let w = unicode_width::UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Restituisce una descrizione testuale e un colore ANSI per la categoria.
pub fn describe_category(cat: Category) -> (&'static str, &'static str) {
    match cat {
        Category::Work => ("WORK", "\x1b[34m"),
        Category::Travel => ("TRAVEL", "\x1b[36m"),
        Category::Hold => ("HOLD", "\x1b[33m"),
    }
}

/// "1 event" / "3 events".
pub fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}
