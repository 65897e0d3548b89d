use super::*;

const VALID: [&str; 6] = ["p9", "Amelia", "Earhart", "Air Grand", "1990-01-01", "2010-01-01"];

fn with_field(idx: usize, value: &'static str) -> Vec<&'static str> {
    let mut v = VALID.to_vec();
    v[idx] = value;
    v
}

#[test]
fn insert_valid_pilot() {
    let mut db = seeded_db("pilot_insert");
    let mut src = answers(&VALID);
    let outcome = db.insert(TableId::Pilots, &mut src).unwrap();
    assert_eq!(outcome.rows_affected(), Some(1));
    assert_eq!(row_count(&mut db, TableId::Pilots), 8);
    assert_eq!(src.remaining(), 0);
}

#[test]
fn insert_existing_key_is_rejected_before_other_fields() {
    let mut db = seeded_db("pilot_dup");
    let mut src = answers(&with_field(0, "p1"));
    let outcome = db.insert(TableId::Pilots, &mut src).unwrap();
    assert_key_conflict(&outcome, "Pilot ID already exists.");
    assert_eq!(src.asked(), ["PilotID"]);
    assert_eq!(row_count(&mut db, TableId::Pilots), 7);
}

#[test]
fn names_must_be_long_and_non_numeric() {
    let mut db = test_db("pilot_names");
    for (idx, bad) in [(1, "A"), (1, "12"), (2, ""), (3, "7")] {
        let mut src = answers(&with_field(idx, bad));
        let outcome = db.insert(TableId::Pilots, &mut src).unwrap();
        let field = ["PilotID", "FirstName", "LastName", "School"][idx];
        assert_rejected(&outcome, field);
    }
    assert_eq!(row_count(&mut db, TableId::Pilots), 0);
}

#[test]
fn birth_date_must_give_age_between_18_and_70() {
    let mut db = test_db("pilot_birth");
    for bad in ["2010-01-01", "1950-01-01", "1990/01/01", "1990-1-01", "1990-02-30"] {
        let mut src = answers(&with_field(4, bad));
        let outcome = db.insert(TableId::Pilots, &mut src).unwrap();
        assert_rejected(&outcome, "BirthDate");
    }
    assert_eq!(row_count(&mut db, TableId::Pilots), 0);
}

#[test]
fn prof_since_must_follow_adulthood_and_be_past() {
    let mut db = test_db("pilot_prof");
    // 15 years after birth, in the future, and exactly today
    for bad in ["2005-01-01", "2025-06-01", "2025-01-01", "not-a-date"] {
        let mut src = answers(&with_field(5, bad));
        let outcome = db.insert(TableId::Pilots, &mut src).unwrap();
        assert_rejected(&outcome, "ProfSince");
    }
    let mut src = answers(&with_field(5, "2024-12-31"));
    assert!(db.insert(TableId::Pilots, &mut src).unwrap().is_committed());
}

#[test]
fn update_replaces_fields_and_keeps_key() {
    let mut db = seeded_db("pilot_update");
    let mut src = answers(&["p1", "Adam", "Jones", "Clearview", "1984-12-21", "2007-03-03"]);
    let outcome = db.update(TableId::Pilots, &mut src).unwrap();
    assert_eq!(outcome.rows_affected(), Some(1));

    let result = db.search_by_key(TableId::Pilots, &mut answers(&["p1"])).unwrap();
    assert_eq!(result.rows.len(), 1);
    let school = result.column_index("School").unwrap();
    let id = result.column_index("PilotID").unwrap();
    assert_eq!(result.rows[0][school], Value::text("Clearview"));
    assert_eq!(result.rows[0][id], Value::text("p1"));
}

#[test]
fn update_absent_key_asks_nothing_else() {
    let mut db = seeded_db("pilot_update_missing");
    let mut src = answers(&["p42", "Adam", "Jones", "Clearview", "1984-12-21", "2007-03-03"]);
    let outcome = db.update(TableId::Pilots, &mut src).unwrap();
    assert_key_conflict(&outcome, "Pilot ID does not exist.");
    assert_eq!(src.asked(), ["PilotID"]);
}

#[test]
fn rejected_update_leaves_row_unchanged() {
    let mut db = seeded_db("pilot_update_rejected");
    let mut src = answers(&["p1", "Adam", "Jones", "Clearview", "2015-01-01", "2007-03-03"]);
    let outcome = db.update(TableId::Pilots, &mut src).unwrap();
    assert_rejected(&outcome, "BirthDate");

    let result = db.search_by_key(TableId::Pilots, &mut answers(&["p1"])).unwrap();
    let school = result.column_index("School").unwrap();
    assert_eq!(result.rows[0][school], Value::text("Air Grand"));
}

#[test]
fn delete_by_key() {
    let mut db = seeded_db("pilot_delete");
    let outcome = db.delete(TableId::Pilots, &mut answers(&["p1"])).unwrap();
    assert_eq!(outcome.rows_affected(), Some(1));
    assert_eq!(row_count(&mut db, TableId::Pilots), 6);

    let again = db.delete(TableId::Pilots, &mut answers(&["p1"])).unwrap();
    assert_key_conflict(&again, "Pilot ID does not exist.");
    assert_eq!(row_count(&mut db, TableId::Pilots), 6);
}

#[test]
fn return_signal_discards_collected_fields() {
    let mut db = test_db("pilot_return");
    let mut src = answers(&["p9", "Amelia", "Earhart"]);
    let outcome = db.insert(TableId::Pilots, &mut src).unwrap();
    assert!(matches!(outcome, Outcome::Aborted(AirDbError::UserCancelled)));
    assert_eq!(src.asked(), ["PilotID", "FirstName", "LastName", "School"]);
    assert_eq!(row_count(&mut db, TableId::Pilots), 0);
}

#[test]
fn age_is_measured_against_pipeline_date() {
    let mut db = test_db("pilot_today").with_pipeline(
        MutationPipeline::new(false).with_today(today() + chrono::Duration::days(365 * 60)),
    );
    // 95 years old at the pinned date
    let mut src = answers(&VALID);
    let outcome = db.insert(TableId::Pilots, &mut src).unwrap();
    assert_rejected(&outcome, "BirthDate");
}

#[test]
fn delete_pilot_still_assigned_to_flights() {
    let mut db = seeded_db("pilot_delete_referenced");
    let outcome = db.delete(TableId::Pilots, &mut answers(&["p1"])).unwrap();
    assert_eq!(outcome.rows_affected(), Some(1));
    assert_eq!(row_count(&mut db, TableId::Pilots), 6);
    assert_eq!(row_count(&mut db, TableId::OperatedBy), 20);
}
