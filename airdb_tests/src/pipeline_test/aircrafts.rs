use super::*;

#[test]
fn max_passengers_lower_bound() {
    let mut db = test_db("aircraft_bounds");
    let outcome = db
        .insert(TableId::Aircrafts, &mut answers(&["a9", "Embraer", "E190", "19", "4"]))
        .unwrap();
    assert_rejected(&outcome, "MaxPassengers");

    let outcome = db
        .insert(TableId::Aircrafts, &mut answers(&["a9", "Embraer", "E190", "20", "4"]))
        .unwrap();
    assert_eq!(outcome.rows_affected(), Some(1));

    let result = db.search_by_key(TableId::Aircrafts, &mut answers(&["a9"])).unwrap();
    let idx = result.column_index("MaxPassengers").unwrap();
    assert_eq!(result.rows[0][idx], Value::Int(20));
}

#[test]
fn numeric_fields_reject_out_of_range_and_text() {
    let mut db = test_db("aircraft_numeric");
    let cases: [([&str; 5], &str); 5] = [
        (["a9", "Embraer", "E190", "501", "4"], "MaxPassengers"),
        (["a9", "Embraer", "E190", "many", "4"], "MaxPassengers"),
        (["a9", "Embraer", "E190", "100", "1"], "CrewSize"),
        (["a9", "Embraer", "E190", "100", "11"], "CrewSize"),
        (["a9", "Embraer", "E190", "100", "2.5"], "CrewSize"),
    ];
    for (input, field) in cases {
        let outcome = db.insert(TableId::Aircrafts, &mut answers(&input)).unwrap();
        assert_rejected(&outcome, field);
    }
    assert_eq!(row_count(&mut db, TableId::Aircrafts), 0);
}

#[test]
fn manufacturer_and_model_rules() {
    let mut db = test_db("aircraft_text");
    let outcome = db
        .insert(TableId::Aircrafts, &mut answers(&["a9", "1234", "E190", "100", "4"]))
        .unwrap();
    assert_rejected(&outcome, "Manufacturer");

    let outcome = db
        .insert(TableId::Aircrafts, &mut answers(&["a9", "Embraer", "", "100", "4"]))
        .unwrap();
    assert_rejected(&outcome, "Model");

    // any non-empty model is fine, digits included
    let outcome = db
        .insert(TableId::Aircrafts, &mut answers(&["a9", "Embraer", "7", "100", "4"]))
        .unwrap();
    assert!(outcome.is_committed());
}

#[test]
fn insert_existing_aircraft_conflicts() {
    let mut db = seeded_db("aircraft_dup");
    let mut src = answers(&["a1", "Boeing", "777", "300", "9"]);
    let outcome = db.insert(TableId::Aircrafts, &mut src).unwrap();
    assert_key_conflict(&outcome, "Aircraft ID already exists.");
    assert_eq!(src.asked(), ["AircraftID"]);
    assert_eq!(row_count(&mut db, TableId::Aircrafts), 5);
}

#[test]
fn update_and_delete_aircraft() {
    let mut db = seeded_db("aircraft_update");
    let outcome = db
        .update(TableId::Aircrafts, &mut answers(&["a2", "Airbus", "A380", "500", "10"]))
        .unwrap();
    assert_eq!(outcome.rows_affected(), Some(1));
    let result = db.search_by_key(TableId::Aircrafts, &mut answers(&["a2"])).unwrap();
    assert_eq!(
        result.rows[0],
        vec![
            Value::text("a2"),
            Value::text("Airbus"),
            Value::text("A380"),
            Value::Int(500),
            Value::Int(10)
        ]
    );

    let missing = db.delete(TableId::Aircrafts, &mut answers(&["a99"])).unwrap();
    assert_key_conflict(&missing, "Aircraft ID does not exist.");
    let outcome = db.delete(TableId::Aircrafts, &mut answers(&["a2"])).unwrap();
    assert_eq!(outcome.rows_affected(), Some(1));
    assert_eq!(row_count(&mut db, TableId::Aircrafts), 4);
}

#[test]
fn update_absent_aircraft_conflicts() {
    let mut db = seeded_db("aircraft_update_missing");
    let mut src = answers(&["a99", "Airbus", "A380", "500", "10"]);
    let outcome = db.update(TableId::Aircrafts, &mut src).unwrap();
    assert_key_conflict(&outcome, "Aircraft ID does not exist.");
    assert_eq!(src.asked(), ["AircraftID"]);
    assert_eq!(row_count(&mut db, TableId::Aircrafts), 5);
}

#[test]
fn delete_aircraft_still_used_by_flights() {
    // f4 and f9 fly a1; delete is gated only by key existence
    let mut db = seeded_db("aircraft_delete_referenced");
    let outcome = db.delete(TableId::Aircrafts, &mut answers(&["a1"])).unwrap();
    assert_eq!(outcome.rows_affected(), Some(1));
    assert_eq!(row_count(&mut db, TableId::Aircrafts), 4);
    assert_eq!(row_count(&mut db, TableId::Flights), 10);
}
