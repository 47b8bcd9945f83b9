//! itinerary-ics main entrypoint.

use itinerary_ics::run;
use itinerary_ics::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
