mod common;
use common::{SAMPLE, cli, temp_config, temp_file, temp_path};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_writes_config_once() {
    let conf = temp_path("init_once.conf");
    let conf_str = conf.to_string_lossy().to_string();

    cli()
        .env("NO_COLOR", "1")
        .args(["--config", &conf_str, "--home", "Berlin", "init"])
        .assert()
        .success()
        .stdout(contains("Home base   : Berlin"));

    let content = fs::read_to_string(&conf).unwrap();
    assert!(content.contains("home_city: Berlin"));
    assert!(content.contains("travel_mode: auto"));

    cli()
        .env("NO_COLOR", "1")
        .args(["--config", &conf_str, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn test_config_print_and_check() {
    let conf = temp_file("config_partial.conf", "home_city: Lyon\n");

    cli()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("home_city: Lyon").and(contains("work_start_hour: 9")));

    cli()
        .env("NO_COLOR", "1")
        .args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields").and(contains("run_id_style")));

    cli()
        .env("NO_COLOR", "1")
        .args(["--config", &conf, "config", "--check", "--fill"])
        .assert()
        .success()
        .stdout(contains("Added missing fields"));

    let filled = fs::read_to_string(&conf).unwrap();
    assert!(filled.contains("home_city: Lyon"));
    assert!(filled.contains("hold_end_hour: 18"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let conf = temp_file("config_bad_hour.conf", "work_start_hour: 30\n");

    cli()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("work_start_hour"));
}

#[test]
fn test_parse_from_stdin_reports_unparsed_lines() {
    let conf = temp_config("parse_stdin", "Paris");

    cli()
        .env("NO_COLOR", "1")
        .args(["--config", &conf, "parse"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(
            contains("Show A")
                .and(contains("Paris → LA"))
                .and(contains("Rock am Ring"))
                .and(contains("1 line could not be parsed"))
                .and(contains("???")),
        );
}

#[test]
fn test_parse_json_output() {
    let conf = temp_config("parse_json", "Paris");

    let out = cli()
        .args(["--config", &conf, "parse", "--format", "json"])
        .write_stdin("2024-03-01 LA Show A\n")
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let json_end = stdout.rfind(']').unwrap();
    let rows: serde_json::Value = serde_json::from_str(&stdout[..=json_end]).unwrap();

    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["label"], "Show A");
    assert_eq!(rows[0]["category"], "WORK");
}

#[test]
fn test_parse_travel_off_from_cli() {
    let conf = temp_config("parse_off", "Paris");

    cli()
        .args(["--config", &conf, "--travel", "off", "parse", "--format", "csv"])
        .write_stdin("2024-03-01 LA Show A\n")
        .assert()
        .success()
        .stdout(contains("TRAVEL").not());
}

#[test]
fn test_export_with_fixed_run_id() {
    let conf = temp_config("export_fixed", "Paris");
    let input = temp_file("export_fixed.txt", "2024-03-01 LA Show A\n2024-03-02 LA Show B\n");
    let out_dir = temp_path("export_fixed_out");
    let out_str = out_dir.to_string_lossy().to_string();

    cli()
        .env("NO_COLOR", "1")
        .args([
            "--config", &conf, "export", "-i", &input, "--out-dir", &out_str, "--run-id",
            "TEST-RUN",
        ])
        .assert()
        .success()
        .stdout(
            contains("RunID: TEST-RUN")
                .and(contains("hold.ics has no events"))
                .and(contains("search \"RunID: TEST-RUN\"")),
        );

    let work = fs::read_to_string(out_dir.join("work.ics")).unwrap();
    let travel = fs::read_to_string(out_dir.join("travel.ics")).unwrap();
    let hold = fs::read_to_string(out_dir.join("hold.ics")).unwrap();

    assert_eq!(work.matches("BEGIN:VEVENT").count(), 2);
    assert_eq!(travel.matches("BEGIN:VEVENT").count(), 2);
    assert!(!hold.contains("BEGIN:VEVENT"));
    assert!(work.contains("X-ITINERARY-RUN-ID:TEST-RUN"));
    assert!(travel.contains("DTSTART:20240229T080000"));

    fs::remove_dir_all(&out_dir).ok();
}

#[test]
fn test_export_rejects_empty_run_id() {
    let conf = temp_config("export_empty_id", "Paris");
    let input = temp_file("export_empty_id.txt", "2024-03-01 LA Show A\n");
    let out_dir = temp_path("export_empty_id_out");
    let out_str = out_dir.to_string_lossy().to_string();

    cli()
        .args([
            "--config", &conf, "export", "-i", &input, "--out-dir", &out_str, "--run-id", " ",
        ])
        .assert()
        .failure()
        .stderr(contains("--run-id must not be empty"));

    assert!(!out_dir.join("work.ics").exists());
}

#[test]
fn test_export_needs_a_source() {
    let conf = temp_config("export_no_source", "Paris");

    cli()
        .args(["--config", &conf, "export"])
        .assert()
        .failure()
        .stderr(contains("nothing to export"));
}

#[test]
fn test_session_edit_then_export() {
    let conf = temp_config("session_flow", "Paris");
    let input = temp_file("session_flow.txt", "2024-03-01 LA Show A\n???\n");
    let session = temp_path("session_flow.json");
    let session_str = session.to_string_lossy().to_string();
    let out_dir = temp_path("session_flow_out");
    let out_str = out_dir.to_string_lossy().to_string();

    cli()
        .env("NO_COLOR", "1")
        .args(["--config", &conf, "parse", "-i", &input, "--save", &session_str])
        .assert()
        .success()
        .stdout(contains("Session saved"));

    // Fix up the unparsed line by hand
    cli()
        .env("NO_COLOR", "1")
        .args([
            "--config", &conf, "edit", "-s", &session_str, "add", "2024-03-05", "Rome", "Maybe show",
            "--category", "hold",
        ])
        .assert()
        .success()
        .stdout(contains("Added event"));

    cli()
        .args(["--config", &conf, "edit", "-s", &session_str, "remove", "999"])
        .assert()
        .failure()
        .stderr(contains("999"));

    cli()
        .args([
            "--config", &conf, "edit", "-s", &session_str, "update", "1", "--date", "2024-13-01",
        ])
        .assert()
        .failure();

    cli()
        .env("NO_COLOR", "1")
        .args(["--config", &conf, "edit", "-s", &session_str, "travel"])
        .assert()
        .success()
        .stdout(contains("4 travel days"));

    cli()
        .args([
            "--config", &conf, "export", "-s", &session_str, "--out-dir", &out_str, "--run-id",
            "S1", "--force",
        ])
        .assert()
        .success();

    let hold = fs::read_to_string(out_dir.join("hold.ics")).unwrap();
    assert!(hold.contains("SUMMARY:HOLD: Maybe show"));
    assert!(hold.contains("X-ITINERARY-RUN-ID:S1"));

    let travel = fs::read_to_string(out_dir.join("travel.ics")).unwrap();
    assert_eq!(travel.matches("BEGIN:VEVENT").count(), 4);

    fs::remove_dir_all(&out_dir).ok();
    fs::remove_file(&session).ok();
}
