//! RunID generation and batch tagging.
//!
//! Generators are passed in explicitly so that tagging stays a pure function
//! of the snapshot and the stamp.

use crate::config::RunIdStyle;
use crate::core::table::Snapshot;
use crate::models::category::Category;
use crate::models::event::Event;
use crate::models::run_id::{BatchStamp, RunId};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Source of fresh batch stamps.
pub trait RunIdSource {
    fn issue(&mut self) -> BatchStamp;
}

/// `YYYY-MM-DD-001`, `YYYY-MM-DD-002`, … for one day.
#[derive(Debug, Clone)]
pub struct DailySequence {
    day: NaiveDate,
    counter: u32,
    clock: fn() -> DateTime<Utc>,
}

impl DailySequence {
    pub fn new(day: NaiveDate, clock: fn() -> DateTime<Utc>) -> Self {
        Self {
            day,
            counter: 0,
            clock,
        }
    }

    /// Sequence for today's local date, stamped with the system clock.
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive(), Utc::now)
    }
}

impl RunIdSource for DailySequence {
    fn issue(&mut self) -> BatchStamp {
        self.counter += 1;
        BatchStamp {
            run_id: RunId::new(format!("{}-{:03}", self.day.format("%Y-%m-%d"), self.counter)),
            issued_at: (self.clock)(),
        }
    }
}

/// `run-` followed by the first 8 hex digits of a v4 UUID.
#[derive(Debug, Clone, Default)]
pub struct RandomRunId;

impl RunIdSource for RandomRunId {
    fn issue(&mut self) -> BatchStamp {
        let uuid = Uuid::new_v4().simple().to_string();
        BatchStamp {
            run_id: RunId::new(format!("run-{}", &uuid[..8])),
            issued_at: Utc::now(),
        }
    }
}

/// Always the same stamp (user-supplied `--run-id`, tests).
#[derive(Debug, Clone)]
pub struct FixedRunId(pub BatchStamp);

impl FixedRunId {
    pub fn new(run_id: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self(BatchStamp {
            run_id: RunId::new(run_id),
            issued_at,
        })
    }
}

impl RunIdSource for FixedRunId {
    fn issue(&mut self) -> BatchStamp {
        self.0.clone()
    }
}

/// Generator for the configured style.
pub fn source_for(style: RunIdStyle) -> Box<dyn RunIdSource> {
    match style {
        RunIdStyle::Daily => Box::new(DailySequence::today()),
        RunIdStyle::Random => Box::new(RandomRunId),
    }
}

/// A snapshot where every event carries the batch RunId.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedBatch {
    pub stamp: BatchStamp,
    pub events: Snapshot,
}

impl TaggedBatch {
    pub fn partition(&self, cat: Category) -> &[Event] {
        self.events.partition(cat)
    }
}

/// Stamp every event of the snapshot. Earlier tags are overwritten.
pub fn tag(snapshot: &Snapshot, stamp: &BatchStamp) -> TaggedBatch {
    let mut events = snapshot.clone();

    for cat in Category::ALL {
        for e in events.partition_mut(cat) {
            e.run_id = Some(stamp.run_id.clone());
        }
    }

    TaggedBatch {
        stamp: stamp.clone(),
        events,
    }
}
