//! Default time windows per category.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::event::Event;
use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Start/end hours used when an event has no explicit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub work: Window,
    pub travel: Window,
    pub hold: Window,
}

fn hour(name: &str, h: u32) -> AppResult<NaiveTime> {
    NaiveTime::from_hms_opt(h, 0, 0)
        .ok_or_else(|| AppError::Config(format!("{name} must be between 0 and 23 (found {h})")))
}

impl Schedule {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            work: Window {
                start: hour("work_start_hour", cfg.work_start_hour)?,
                end: hour("work_end_hour", cfg.work_end_hour)?,
            },
            travel: Window {
                start: hour("travel_start_hour", cfg.travel_start_hour)?,
                end: hour("travel_end_hour", cfg.travel_end_hour)?,
            },
            hold: Window {
                start: hour("hold_start_hour", cfg.hold_start_hour)?,
                end: hour("hold_end_hour", cfg.hold_end_hour)?,
            },
        })
    }

    pub fn window(&self, cat: Category) -> Window {
        match cat {
            Category::Work => self.work,
            Category::Travel => self.travel,
            Category::Hold => self.hold,
        }
    }

    /// Start and end of an event.
    ///
    /// The start is the event's own time or the category default. The end is
    /// the event's own end time or the category's default end, or start + 8h
    /// (WORK) / + 2h (TRAVEL, HOLD) when that is not after the start.
    pub fn span(&self, e: &Event) -> (NaiveDateTime, NaiveDateTime) {
        let w = self.window(e.category);
        let start = e.date.and_time(e.time.unwrap_or(w.start));
        let wanted_end = e.date.and_time(e.end_time.unwrap_or(w.end));

        let end = if wanted_end > start {
            wanted_end
        } else {
            let fallback = match e.category {
                Category::Work => TimeDelta::hours(8),
                Category::Travel | Category::Hold => TimeDelta::hours(2),
            };
            start + fallback
        };

        (start, end)
    }
}
