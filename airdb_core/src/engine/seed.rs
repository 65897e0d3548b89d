use tracing::info;

use crate::entity::TableId;
use crate::error::{AirDbError, Result};
use crate::storage::StorageGateway;
use crate::types::value::Value;

const PILOTS: [[&str; 6]; 7] = [
    ["p1", "Adam", "Jones", "Air Grand", "1984-12-21", "2007-03-03"],
    ["p2", "James", "Black", "Apple Air", "1981-09-01", "2003-09-03"],
    ["p3", "William", "Spencer", "Air Grand", "1974-12-11", "1996-06-25"],
    ["p4", "Christina", "Gloves", "Apple Air", "1988-05-11", "2011-07-09"],
    ["p5", "Edward", "Vladic", "Clearview", "1994-06-07", "2009-11-23"],
    ["p6", "Silvie", "Koolash", "Clearview", "1991-08-26", "2010-01-07"],
    ["p7", "John", "Porter", "Clearview", "1992-04-15", "2015-10-13"],
];

const AIRCRAFTS: [(&str, &str, &str, i64, i64); 5] = [
    ("a1", "Boeing", "747", 200, 8),
    ("a2", "Airbus", "320", 120, 6),
    ("a3", "Airbus", "320", 120, 6),
    ("a4", "Airbus", "320", 120, 6),
    ("a5", "Boeing", "747", 200, 8),
];

const FLIGHTS: [[&str; 6]; 10] = [
    ["f1", "Heathrow Airport", "Charles de Gaulle Airport", "2024-05-24", "Landed", "a2"],
    ["f2", "Athens International Airport", "Leonardo da Vinci–Fiumicino Airport", "2024-05-24", "Landed", "a4"],
    ["f3", "Los Angeles International Airport", "Heathrow Airport", "2024-05-24", "Delayed", "a3"],
    ["f4", "Haneda Airport", "Charles de Gaulle Airport", "2024-05-25", "Cancelled", "a1"],
    ["f5", "Heathrow Airport", "Athens International Airport", "2024-05-25", "Cancelled", "a5"],
    ["f6", "Heathrow Airport", "Los Angeles International Airport", "2024-05-25", "Delayed", "a4"],
    ["f7", "Heathrow Airport", "Haneda Airport", "2024-05-25", "Delayed", "a3"],
    ["f8", "Athens International Airport", "Leonardo da Vinci–Fiumicino Airport", "2024-05-25", "Landed", "a2"],
    ["f9", "Haneda Airport", "Heathrow Airport", "2024-05-26", "Scheduled", "a1"],
    ["f10", "Los Angeles International Airport", "Charles de Gaulle Airport", "2024-05-26", "Scheduled", "a5"],
];

const OPERATED_BY: [[&str; 2]; 20] = [
    ["f1", "p1"], ["f1", "p2"], ["f2", "p3"], ["f2", "p4"], ["f2", "p5"],
    ["f3", "p6"], ["f3", "p7"], ["f4", "p1"], ["f4", "p2"], ["f5", "p3"],
    ["f6", "p4"], ["f7", "p5"], ["f7", "p6"], ["f7", "p7"], ["f8", "p1"],
    ["f9", "p2"], ["f9", "p3"], ["f10", "p4"], ["f10", "p5"], ["f10", "p6"],
];

fn texts(row: &[&str]) -> Vec<Value> {
    row.iter().map(|s| Value::text(*s)).collect()
}

/// Loads the fixed sample rows into all four tables in one transaction.
/// Every table must exist and be empty.
pub fn load_seed_data(gateway: &mut dyn StorageGateway) -> Result<usize> {
    for table in TableId::ALL {
        let any_row = format!("SELECT 1 FROM {} LIMIT 1", table.name());
        if gateway.exists(&any_row, &[])? {
            return Err(AirDbError::KeyConflict(format!(
                "Table {table} is not empty. Drop and create all tables to load seed data."
            )));
        }
    }

    let mut inserted = 0usize;
    for row in &PILOTS {
        inserted += gateway.execute(TableId::Pilots.definition().insert_sql, &texts(row))?;
    }
    for (id, maker, model, max_passengers, crew) in AIRCRAFTS {
        let params = vec![
            Value::text(id),
            Value::text(maker),
            Value::text(model),
            Value::Int(max_passengers),
            Value::Int(crew),
        ];
        inserted += gateway.execute(TableId::Aircrafts.definition().insert_sql, &params)?;
    }
    for row in &FLIGHTS {
        inserted += gateway.execute(TableId::Flights.definition().insert_sql, &texts(row))?;
    }
    for row in &OPERATED_BY {
        inserted += gateway.execute(TableId::OperatedBy.definition().insert_sql, &texts(row))?;
    }
    gateway.commit()?;
    info!(rows = inserted, "seed data loaded");
    Ok(inserted)
}
