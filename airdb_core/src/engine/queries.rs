use crate::entity::{Candidate, TableId};
use crate::error::{AirDbError, Result};
use crate::storage::StorageGateway;
use crate::types::value::Value;
use crate::types::ResultSet;

pub fn select_all(gateway: &mut dyn StorageGateway, table: TableId) -> Result<ResultSet> {
    let sql = format!("SELECT * FROM {}", table.name());
    Ok(gateway.query(&sql, &[])?)
}

pub fn select_by_key(
    gateway: &mut dyn StorageGateway,
    table: TableId,
    key: &Candidate,
) -> Result<ResultSet> {
    let def = table.definition();
    Ok(gateway.query(def.select_by_key_sql, &key.params(def.key_fields()))?)
}

/// Equality search on one declared, non-key-only column.
pub fn select_by_column(
    gateway: &mut dyn StorageGateway,
    table: TableId,
    column: &str,
    value: &str,
) -> Result<ResultSet> {
    let def = table.definition();
    if def.is_composite_key() {
        return Err(AirDbError::NotFound(format!("Use PK-based search for {table}.")));
    }
    if !def.has_field(column) {
        return Err(AirDbError::NotFound(format!(
            "Unknown column '{column}' in {table}. Columns: {}",
            def.column_names().join(", ")
        )));
    }
    let sql = format!("SELECT * FROM {table} WHERE {column} = ?");
    Ok(gateway.query(&sql, &[Value::text(value)])?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryReport {
    FlightsByStatus,
    CapacityByStatus,
    PilotExperience,
    FlightsByPilotAndStatus,
}

impl SummaryReport {
    pub const ALL: [SummaryReport; 4] = [
        SummaryReport::FlightsByStatus,
        SummaryReport::CapacityByStatus,
        SummaryReport::PilotExperience,
        SummaryReport::FlightsByPilotAndStatus,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SummaryReport::FlightsByStatus => "Number of flights by status",
            SummaryReport::CapacityByStatus => "Max passengers capacity by flight status",
            SummaryReport::PilotExperience => "Pilots professional experience in years",
            SummaryReport::FlightsByPilotAndStatus => "Number of flights by pilot and flight status",
        }
    }

    fn sql(self) -> &'static str {
        match self {
            SummaryReport::FlightsByStatus => {
                "SELECT Status, COUNT(Status) AS 'Number of Flights'
                 FROM Flights
                 GROUP BY Status
                 ORDER BY COUNT(Status) DESC"
            }
            SummaryReport::CapacityByStatus => {
                "SELECT Status, ROUND(SUM(MaxPassengers), 1) AS 'Total Passengers Capacity'
                 FROM Aircrafts, Flights
                 WHERE Flights.AircraftID = Aircrafts.AircraftID
                 GROUP BY Status
                 ORDER BY ROUND(SUM(MaxPassengers), 1) DESC"
            }
            SummaryReport::PilotExperience => {
                "SELECT PilotID,
                        LastName || ' ' || FirstName AS Name,
                        ROUND((julianday('now') - julianday(ProfSince)) / 365, 1) AS ProfExperienceYears
                 FROM Pilots
                 ORDER BY ProfExperienceYears DESC"
            }
            SummaryReport::FlightsByPilotAndStatus => {
                "SELECT Pilots.PilotID, Status, COUNT(Flights.FlightID) AS 'Number of Flights'
                 FROM Flights, Pilots, OperatedBy
                 WHERE Flights.FlightID = OperatedBy.FlightID
                   AND Pilots.PilotID = OperatedBy.PilotID
                 GROUP BY Pilots.PilotID, Status"
            }
        }
    }
}

pub fn summary(gateway: &mut dyn StorageGateway, report: SummaryReport) -> Result<ResultSet> {
    Ok(gateway.query(report.sql(), &[])?)
}
