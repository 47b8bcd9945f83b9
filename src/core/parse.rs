use crate::core::extractor::{Extraction, extract};
use crate::core::table::EventTable;
use crate::core::tokenizer::tokenize;
use crate::core::travel::{Run, TravelSettings, city_runs};
use crate::models::raw_event::{RawEvent, UnparsedLine};

/// Everything a user needs to review after pasting an itinerary.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub raw: Vec<RawEvent>,
    pub unparsed: Vec<UnparsedLine>,
    pub table: EventTable,
    pub runs: Vec<Run>,
    pub travel_added: usize,
}

impl ParseOutcome {
    /// Runs away from home in a known city.
    pub fn trip_runs(&self, settings: &TravelSettings) -> Vec<&Run> {
        let home = crate::utils::location::normalize_location(&settings.home_city);
        self.runs.iter().filter(|r| r.is_trip(&home)).collect()
    }
}

/// High-level business logic for the `parse` command.
pub struct ParseLogic;

impl ParseLogic {
    /// text → tokens → raw events → table with inferred travel.
    pub fn apply(text: &str, settings: &TravelSettings) -> ParseOutcome {
        let blocks = tokenize(text);
        let Extraction { events, unparsed } = extract(&blocks);

        let mut table = EventTable::from_raw(&events);
        let travel_added = table.apply_travel(settings);
        let runs = city_runs(&events);

        ParseOutcome {
            raw: events,
            unparsed,
            table,
            runs,
            travel_added,
        }
    }
}
