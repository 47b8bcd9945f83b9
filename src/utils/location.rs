//! City name normalization used to group runs and detect the home base.

/// Lowercase, strip dots, collapse whitespace and apply the known aliases.
pub fn normalize_location(loc: &str) -> String {
    let x = loc
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace('.', "");

    match x.as_str() {
        "nyc" | "new york city" => "new york".to_string(),
        "milan italy" => "milan, italy".to_string(),
        "paris france" => "paris".to_string(),
        "tbd" | "na" | "n/a" | "-" | "" => "tbd".to_string(),
        _ => x,
    }
}

/// Locations that never get travel days.
pub fn is_unknown_location(loc: &str) -> bool {
    matches!(normalize_location(loc).as_str(), "tbd" | "unknown")
}
