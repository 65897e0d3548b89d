use crate::entity::validate::{
    aircraft_ref, assigned_flight, assigned_pilot, birth_date, crew_size, departure,
    destination, manufacturer, max_passengers, person_name, prof_since, required, school,
    status,
};
use crate::entity::{EntityDefinition, FieldSpec, TableId};

macro_rules! table_sql {
    ($body:literal) => {
        (
            concat!("CREATE TABLE IF NOT EXISTS ", $body),
            concat!("CREATE TABLE ", $body),
        )
    };
}

const PILOTS_DDL: (&str, &str) = table_sql!(
    "Pilots (
        PilotID TEXT NOT NULL PRIMARY KEY,
        FirstName TEXT NOT NULL,
        LastName TEXT NOT NULL,
        School TEXT NOT NULL,
        BirthDate TEXT NOT NULL,
        ProfSince TEXT NOT NULL
    )"
);

const AIRCRAFTS_DDL: (&str, &str) = table_sql!(
    "Aircrafts (
        AircraftID TEXT NOT NULL PRIMARY KEY,
        Manufacturer TEXT NOT NULL,
        Model TEXT NOT NULL,
        MaxPassengers INTEGER NOT NULL,
        CrewSize INTEGER NOT NULL
    )"
);

// Flights carries no PRIMARY KEY constraint; FlightID uniqueness is enforced
// by the mutation pipeline.
const FLIGHTS_DDL: (&str, &str) = table_sql!(
    "Flights (
        FlightID TEXT NOT NULL,
        Origin TEXT NOT NULL,
        Destination TEXT NOT NULL,
        Departure TEXT NOT NULL,
        Status TEXT NOT NULL,
        AircraftID TEXT NOT NULL,
        FOREIGN KEY (AircraftID) REFERENCES Aircrafts(AircraftID)
    )"
);

const OPERATED_BY_DDL: (&str, &str) = table_sql!(
    "OperatedBy (
        FlightID TEXT NOT NULL,
        PilotID TEXT NOT NULL,
        PRIMARY KEY (FlightID, PilotID),
        FOREIGN KEY (PilotID) REFERENCES Pilots(PilotID),
        FOREIGN KEY (FlightID) REFERENCES Flights(FlightID)
    )"
);

pub static PILOTS: EntityDefinition = EntityDefinition {
    table: TableId::Pilots,
    fields: &[
        FieldSpec { name: "PilotID", label: "PilotID", key: true, validate: required },
        FieldSpec { name: "FirstName", label: "First Name", key: false, validate: person_name },
        FieldSpec { name: "LastName", label: "Last Name", key: false, validate: person_name },
        FieldSpec { name: "School", label: "Air School Name", key: false, validate: school },
        FieldSpec { name: "BirthDate", label: "Birth Date", key: false, validate: birth_date },
        FieldSpec { name: "ProfSince", label: "Prof Since Date", key: false, validate: prof_since },
    ],
    create_if_absent_sql: PILOTS_DDL.0,
    create_sql: PILOTS_DDL.1,
    insert_sql: "INSERT INTO Pilots (PilotID, FirstName, LastName, School, BirthDate, ProfSince)
                 VALUES (?, ?, ?, ?, ?, ?)",
    update_sql: Some(
        "UPDATE Pilots SET FirstName = ?, LastName = ?, School = ?, BirthDate = ?, ProfSince = ?
         WHERE PilotID = ?",
    ),
    delete_sql: "DELETE FROM Pilots WHERE PilotID = ?",
    select_by_key_sql: "SELECT * FROM Pilots WHERE PilotID = ?",
    key_taken: "Pilot ID already exists.",
    key_missing: "Pilot ID does not exist.",
};

pub static AIRCRAFTS: EntityDefinition = EntityDefinition {
    table: TableId::Aircrafts,
    fields: &[
        FieldSpec { name: "AircraftID", label: "AircraftID", key: true, validate: required },
        FieldSpec { name: "Manufacturer", label: "Manufacturer", key: false, validate: manufacturer },
        FieldSpec { name: "Model", label: "Model", key: false, validate: required },
        FieldSpec { name: "MaxPassengers", label: "Max Passengers", key: false, validate: max_passengers },
        FieldSpec { name: "CrewSize", label: "Crew Size", key: false, validate: crew_size },
    ],
    create_if_absent_sql: AIRCRAFTS_DDL.0,
    create_sql: AIRCRAFTS_DDL.1,
    insert_sql: "INSERT INTO Aircrafts (AircraftID, Manufacturer, Model, MaxPassengers, CrewSize)
                 VALUES (?, ?, ?, ?, ?)",
    update_sql: Some(
        "UPDATE Aircrafts SET Manufacturer = ?, Model = ?, MaxPassengers = ?, CrewSize = ?
         WHERE AircraftID = ?",
    ),
    delete_sql: "DELETE FROM Aircrafts WHERE AircraftID = ?",
    select_by_key_sql: "SELECT * FROM Aircrafts WHERE AircraftID = ?",
    key_taken: "Aircraft ID already exists.",
    key_missing: "Aircraft ID does not exist.",
};

pub static FLIGHTS: EntityDefinition = EntityDefinition {
    table: TableId::Flights,
    fields: &[
        FieldSpec { name: "FlightID", label: "FlightID", key: true, validate: required },
        FieldSpec { name: "Origin", label: "Origin Airport", key: false, validate: required },
        FieldSpec { name: "Destination", label: "Destination Airport", key: false, validate: destination },
        FieldSpec { name: "Departure", label: "Departure Date", key: false, validate: departure },
        FieldSpec { name: "Status", label: "Flight Status", key: false, validate: status },
        FieldSpec { name: "AircraftID", label: "AircraftID", key: false, validate: aircraft_ref },
    ],
    create_if_absent_sql: FLIGHTS_DDL.0,
    create_sql: FLIGHTS_DDL.1,
    insert_sql: "INSERT INTO Flights (FlightID, Origin, Destination, Departure, Status, AircraftID)
                 VALUES (?, ?, ?, ?, ?, ?)",
    update_sql: Some(
        "UPDATE Flights SET Origin = ?, Destination = ?, Departure = ?, Status = ?, AircraftID = ?
         WHERE FlightID = ?",
    ),
    delete_sql: "DELETE FROM Flights WHERE FlightID = ?",
    select_by_key_sql: "SELECT * FROM Flights WHERE FlightID = ?",
    key_taken: "Flight ID already exists.",
    key_missing: "Flight ID does not exist.",
};

pub static OPERATED_BY: EntityDefinition = EntityDefinition {
    table: TableId::OperatedBy,
    fields: &[
        FieldSpec { name: "FlightID", label: "FlightID", key: true, validate: assigned_flight },
        FieldSpec { name: "PilotID", label: "PilotID", key: true, validate: assigned_pilot },
    ],
    create_if_absent_sql: OPERATED_BY_DDL.0,
    create_sql: OPERATED_BY_DDL.1,
    insert_sql: "INSERT INTO OperatedBy (FlightID, PilotID) VALUES (?, ?)",
    update_sql: None,
    delete_sql: "DELETE FROM OperatedBy WHERE FlightID = ? AND PilotID = ?",
    select_by_key_sql: "SELECT * FROM OperatedBy WHERE FlightID = ? AND PilotID = ?",
    key_taken: "Composite PK already exists.",
    key_missing: "Composite PK does not exist.",
};
