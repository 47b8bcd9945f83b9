#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{TimeZone, Utc};
use itinerary_ics::config::Config;
use itinerary_ics::core::tagger::FixedRunId;
use itinerary_ics::export::Schedule;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SAMPLE: &str = "\
# Spring tour – pasted from the agency mail
2024-03-01 LA Show A
2024-03-02 LA Show B

2024-03-05 | New York | Press day
2024-03-07 19:30 Chicago Hold for late show
???

Festival Rock am Ring
Location: Nürburg
Dates: 2024-06-07 to 2024-06-09
Confirmed
Load-in 8am
";

pub fn cli() -> Command {
    cargo_bin_cmd!("itinerary-ics")
}

/// Unique path inside the system temp dir; any existing file/dir is removed
pub fn temp_path(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("itinerary_ics_{name}"));
    if path.is_dir() {
        fs::remove_dir_all(&path).ok();
    } else {
        fs::remove_file(&path).ok();
    }
    path
}

/// Write `content` to a fresh temp file and return its path as String
pub fn temp_file(name: &str, content: &str) -> String {
    let path = temp_path(name);
    fs::write(&path, content).expect("write temp file");
    path.to_string_lossy().to_string()
}

/// Write a config with the given home city and return its path
pub fn temp_config(name: &str, home: &str) -> String {
    let path = temp_path(&format!("{name}.conf"));
    let cfg = Config {
        home_city: home.to_string(),
        ..Config::default()
    };
    cfg.save_to(&path).expect("save config");
    path.to_string_lossy().to_string()
}

pub fn fixed_ids(run_id: &str) -> FixedRunId {
    FixedRunId::new(
        run_id,
        Utc.with_ymd_and_hms(2024, 2, 20, 12, 0, 0).unwrap(),
    )
}

pub fn default_schedule() -> Schedule {
    Schedule::from_config(&Config::default()).expect("default schedule")
}

pub fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
