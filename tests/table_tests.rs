mod common;
use common::date;
use itinerary_ics::config::TravelMode;
use itinerary_ics::core::edit::{Edit, EditLogic};
use itinerary_ics::core::parse::ParseLogic;
use itinerary_ics::core::table::{EventPatch, EventTable, NewEvent};
use itinerary_ics::core::travel::TravelSettings;
use itinerary_ics::errors::AppError;
use itinerary_ics::models::category::Category;
use itinerary_ics::models::event::Origin;

fn settings() -> TravelSettings {
    TravelSettings::new("Paris", TravelMode::Auto)
}

fn new_event(date: &str, city: &str, label: &str, category: &str) -> NewEvent {
    NewEvent {
        date: date.into(),
        city: city.into(),
        label: label.into(),
        category: category.into(),
        ..Default::default()
    }
}

#[test]
fn test_parse_builds_table_with_travel() {
    let out = ParseLogic::apply(
        "2024-03-01 LA Show A\n2024-03-02 LA Show B\n",
        &settings(),
    );

    assert_eq!(out.raw.len(), 2);
    assert!(out.unparsed.is_empty());
    assert_eq!(out.travel_added, 2);
    assert_eq!(out.table.len(), 4);
    assert_eq!(out.trip_runs(&settings()).len(), 1);

    let snap = out.table.snapshot();
    assert_eq!(snap.work.len(), 2);
    assert_eq!(snap.travel.len(), 2);
    assert!(snap.hold.is_empty());
    assert!(snap.work.iter().all(|e| e.origin == Origin::Parsed));
    assert!(snap.iter().all(|e| e.run_id.is_none()));
}

#[test]
fn test_add_manual_event() {
    let mut table = EventTable::new();
    let id = table
        .add(NewEvent {
            time: Some("20:00".into()),
            notes: Some("Soundcheck 17:00".into()),
            ..new_event("2024-04-01", "Lyon", "Club show", "hold")
        })
        .unwrap();

    let e = table.get(id).unwrap();
    assert_eq!(e.date, date(2024, 4, 1));
    assert_eq!(e.time_str(), "20:00");
    assert_eq!(e.category, Category::Hold);
    assert_eq!(e.origin, Origin::Manual);
    assert_eq!(e.summary(), "HOLD: Club show");
}

#[test]
fn test_ids_are_unique_after_remove() {
    let mut table = EventTable::new();
    let a = table.add(new_event("2024-04-01", "Lyon", "A", "WORK")).unwrap();
    table.remove(a).unwrap();
    let b = table.add(new_event("2024-04-02", "Lyon", "B", "WORK")).unwrap();

    assert_ne!(a, b);
    assert!(table.get(a).is_none());
}

#[test]
fn test_invalid_add_leaves_table_unchanged() {
    let mut table = EventTable::new();
    table.add(new_event("2024-04-01", "Lyon", "A", "WORK")).unwrap();
    let before = table.clone();

    let bad_date = table.add(new_event("2024-02-30", "Lyon", "B", "WORK"));
    assert!(matches!(bad_date, Err(AppError::InvalidEdit(_))));

    let bad_cat = table.add(new_event("2024-04-02", "Lyon", "B", "PARTY"));
    assert!(matches!(bad_cat, Err(AppError::InvalidEdit(_))));

    let blank_city = table.add(new_event("2024-04-02", "   ", "B", "WORK"));
    assert!(matches!(blank_city, Err(AppError::InvalidEdit(_))));

    assert_eq!(table, before);
}

#[test]
fn test_invalid_update_leaves_row_unchanged() {
    let mut table = EventTable::new();
    let id = table.add(new_event("2024-04-01", "Lyon", "A", "WORK")).unwrap();
    let before = table.clone();

    // Valid label, invalid time: nothing must be applied
    let res = table.update(
        id,
        EventPatch {
            label: Some("Renamed".into()),
            time: Some("24:61".into()),
            ..Default::default()
        },
    );

    assert!(matches!(res, Err(AppError::InvalidEdit(_))));
    assert_eq!(table, before);
}

#[test]
fn test_unknown_id_is_reported() {
    let mut table = EventTable::new();

    assert!(matches!(table.remove(42), Err(AppError::EventNotFound(42))));
    assert!(matches!(
        table.update(
            42,
            EventPatch {
                label: Some("x".into()),
                ..Default::default()
            }
        ),
        Err(AppError::EventNotFound(42))
    ));
}

#[test]
fn test_update_changes_category_and_clears_time() {
    let mut table = EventTable::new();
    let id = table
        .add(NewEvent {
            time: Some("21:00".into()),
            ..new_event("2024-04-01", "Lyon", "A", "WORK")
        })
        .unwrap();

    let e = table
        .update(
            id,
            EventPatch {
                category: Some("Hold".into()),
                time: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(e.category, Category::Hold);
    assert!(e.time.is_none());
}

#[test]
fn test_retagging_inferred_travel_drops_direction() {
    let mut table = EventTable::new();
    table.add(new_event("2024-04-01", "Lyon", "A", "WORK")).unwrap();
    table.apply_travel(&settings());

    let travel_id = table.snapshot().travel[0].id;
    let e = table
        .update(
            travel_id,
            EventPatch {
                category: Some("WORK".into()),
                ..Default::default()
            },
        )
        .unwrap();

    assert!(e.direction.is_none());
    assert!(e.summary().starts_with("WORK: "));
}

#[test]
fn test_retagged_travel_day_survives_recompute() {
    let mut table = EventTable::new();
    table.add(new_event("2024-03-01", "LA", "Show A", "WORK")).unwrap();
    let settings = TravelSettings::new("NYC", TravelMode::Auto);
    table.apply_travel(&settings);

    let travel_in = table.snapshot().travel[0].id;
    table
        .update(
            travel_in,
            EventPatch {
                category: Some("work".into()),
                label: Some("Rehearsal".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(table.snapshot().work.len(), 2);

    table.apply_travel(&settings);

    let snap = table.snapshot();
    assert_eq!(snap.work.len(), 2);
    let kept = table.get(travel_in).unwrap();
    assert_eq!(kept.label, "Rehearsal");
    assert_eq!(kept.origin, Origin::Manual);
    assert_eq!(kept.date, date(2024, 2, 29));
}

#[test]
fn test_retagged_travel_day_drops_route_label() {
    let mut table = EventTable::new();
    table.add(new_event("2024-03-01", "LA", "Show A", "WORK")).unwrap();
    table.apply_travel(&TravelSettings::new("NYC", TravelMode::Auto));

    let travel_in = table.snapshot().travel[0].id;
    let e = table
        .update(
            travel_in,
            EventPatch {
                category: Some("hold".into()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(e.summary(), "HOLD: LA");
}

#[test]
fn test_end_time_is_validated() {
    let mut table = EventTable::new();
    let before = table.clone();

    let res = table.add(NewEvent {
        end_time: Some("7pm".into()),
        ..new_event("2024-04-01", "Lyon", "A", "WORK")
    });

    assert!(matches!(res, Err(AppError::InvalidEdit(_))));
    assert_eq!(table, before);
}

#[test]
fn test_snapshot_partitions_are_sorted() {
    let mut table = EventTable::new();
    table.add(new_event("2024-04-03", "Lyon", "C", "WORK")).unwrap();
    table
        .add(NewEvent {
            time: Some("20:00".into()),
            ..new_event("2024-04-01", "Lyon", "B", "WORK")
        })
        .unwrap();
    table
        .add(NewEvent {
            time: Some("10:00".into()),
            ..new_event("2024-04-01", "Lyon", "A", "WORK")
        })
        .unwrap();

    let labels: Vec<String> = table
        .snapshot()
        .work
        .iter()
        .map(|e| e.label.clone())
        .collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
}

#[test]
fn test_empty_update_is_rejected() {
    let mut table = EventTable::new();
    let id = table.add(new_event("2024-04-01", "Lyon", "A", "WORK")).unwrap();

    let res = EditLogic::apply(&mut table, Edit::Update(id, EventPatch::default()), &settings());
    assert!(matches!(res, Err(AppError::InvalidEdit(_))));
}

#[test]
fn test_edit_logic_travel_recompute() {
    let mut table = EventTable::new();
    EditLogic::apply(
        &mut table,
        Edit::Add(new_event("2024-04-01", "Lyon", "A", "WORK")),
        &settings(),
    )
    .unwrap();
    EditLogic::apply(&mut table, Edit::Travel, &settings()).unwrap();

    assert_eq!(table.snapshot().travel.len(), 2);
}
