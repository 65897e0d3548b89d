use super::*;

#[test]
fn origin_and_destination_must_differ() {
    let mut db = seeded_db("flight_route");
    let outcome = db
        .insert(
            TableId::Flights,
            &mut answers(&["f11", "JFK", "JFK", "2025-02-01", "Scheduled", "a1"]),
        )
        .unwrap();
    assert_rejected(&outcome, "Destination");
    assert_eq!(row_count(&mut db, TableId::Flights), 10);

    let outcome = db
        .insert(
            TableId::Flights,
            &mut answers(&["f11", "JFK", "LAX", "2025-02-01", "Scheduled", "a1"]),
        )
        .unwrap();
    assert_eq!(outcome.rows_affected(), Some(1));
    assert_eq!(row_count(&mut db, TableId::Flights), 11);
}

#[test]
fn status_departure_and_aircraft_are_checked() {
    let mut db = seeded_db("flight_fields");
    let cases: [([&str; 6], &str); 4] = [
        (["f11", "JFK", "LAX", "01-02-2025", "Scheduled", "a1"], "Departure"),
        (["f11", "JFK", "LAX", "2025-02-01", "Boarding", "a1"], "Status"),
        (["f11", "JFK", "LAX", "2025-02-01", "landed", "a1"], "Status"),
        (["f11", "JFK", "LAX", "2025-02-01", "Landed", "a99"], "AircraftID"),
    ];
    for (input, field) in cases {
        let outcome = db.insert(TableId::Flights, &mut answers(&input)).unwrap();
        assert_rejected(&outcome, field);
    }
    assert_eq!(row_count(&mut db, TableId::Flights), 10);
}

#[test]
fn departure_may_be_in_the_past() {
    let mut db = seeded_db("flight_past");
    let outcome = db
        .insert(
            TableId::Flights,
            &mut answers(&["f11", "JFK", "LAX", "1999-12-31", "Landed", "a3"]),
        )
        .unwrap();
    assert!(outcome.is_committed());
}

#[test]
fn flight_key_uniqueness_is_enforced_by_pipeline() {
    // Flights has no PRIMARY KEY in the store, so only the pipeline stops duplicates
    let mut db = seeded_db("flight_dup");
    let mut src = answers(&["f1", "JFK", "LAX", "2025-02-01", "Scheduled", "a1"]);
    let outcome = db.insert(TableId::Flights, &mut src).unwrap();
    assert_key_conflict(&outcome, "Flight ID already exists.");
    assert_eq!(src.asked(), ["FlightID"]);
    assert_eq!(row_count(&mut db, TableId::Flights), 10);
}

#[test]
fn update_flight_status() {
    let mut db = seeded_db("flight_update");
    let outcome = db
        .update(
            TableId::Flights,
            &mut answers(&["f9", "Haneda Airport", "Heathrow Airport", "2024-05-26", "Delayed", "a1"]),
        )
        .unwrap();
    assert_eq!(outcome.rows_affected(), Some(1));

    let delayed = db.search_by_column(TableId::Flights, "Status", "Delayed").unwrap();
    assert_eq!(delayed.rows.len(), 4);
}

#[test]
fn delete_flight() {
    let mut db = seeded_db("flight_delete");
    let outcome = db.delete(TableId::Flights, &mut answers(&["f10"])).unwrap();
    assert_eq!(outcome.rows_affected(), Some(1));
    let missing = db.delete(TableId::Flights, &mut answers(&["f10"])).unwrap();
    assert_key_conflict(&missing, "Flight ID does not exist.");
}

#[test]
fn update_absent_flight_conflicts() {
    let mut db = seeded_db("flight_update_missing");
    let mut src = answers(&["f99", "JFK", "LAX", "2025-02-01", "Scheduled", "a1"]);
    let outcome = db.update(TableId::Flights, &mut src).unwrap();
    assert_key_conflict(&outcome, "Flight ID does not exist.");
    assert_eq!(src.asked(), ["FlightID"]);
    assert_eq!(row_count(&mut db, TableId::Flights), 10);
}

#[test]
fn aircraft_reference_rejected_when_aircrafts_dropped() {
    let mut db = test_db("flight_no_aircrafts");
    db.drop_table(TableId::Aircrafts).unwrap();
    let outcome = db
        .insert(
            TableId::Flights,
            &mut answers(&["f11", "JFK", "LAX", "2025-02-01", "Scheduled", "a1"]),
        )
        .unwrap();
    assert_rejected(&outcome, "AircraftID");
    assert_eq!(row_count(&mut db, TableId::Flights), 0);
}

#[test]
fn delete_flight_still_assigned_to_pilots() {
    let mut db = seeded_db("flight_delete_referenced");
    let outcome = db.delete(TableId::Flights, &mut answers(&["f2"])).unwrap();
    assert_eq!(outcome.rows_affected(), Some(1));
    assert_eq!(row_count(&mut db, TableId::OperatedBy), 20);
}
