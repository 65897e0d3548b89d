use chrono::NaiveDate;
use thiserror::Error;

use crate::entity::definitions::{AIRCRAFTS, FLIGHTS, PILOTS};
use crate::entity::{EntityDefinition, FieldSpec};
use crate::error::StoreError;
use crate::storage::StorageGateway;
use crate::types::value::Value;

/// Year length used for every age and seniority computation
pub const DAYS_PER_YEAR: f64 = 365.24;

pub const FLIGHT_STATUSES: [&str; 4] = ["Cancelled", "Landed", "Delayed", "Scheduled"];

/// Checks one raw field value and returns it normalized for binding.
pub type Validator =
    fn(&str, &Candidate, &mut ValidationContext<'_>) -> Result<Value, FieldError>;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn reject<T>(reason: impl Into<String>) -> Result<T, FieldError> {
    Err(FieldError::Rejected(reason.into()))
}

/// Why the fields of a candidate are being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Insert,
    Update,
    Delete,
    Lookup,
}

/// What a validator may consult besides the raw value.
pub struct ValidationContext<'a> {
    pub gateway: &'a mut dyn StorageGateway,
    pub today: NaiveDate,
    pub intent: Intent,
    pub strict_assignment_refs: bool,
}

/// Field values accepted so far for one mutation attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    values: Vec<(&'static str, Value)>,
}

impl Candidate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the candidate extended by one accepted field.
    pub fn with(mut self, field: &'static str, value: Value) -> Self {
        self.values.push((field, value));
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, v)| v)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_text)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values for `fields`, in the order given, ready for positional binding.
    pub fn params<'f>(&self, fields: impl IntoIterator<Item = &'f FieldSpec>) -> Vec<Value> {
        fields
            .into_iter()
            .map(|f| self.get(f.name).cloned().unwrap_or(Value::Null))
            .collect()
    }
}

/// Strict `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let b = raw.as_bytes();
    let shape_ok = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / DAYS_PER_YEAR
}

fn is_descriptive(raw: &str) -> bool {
    raw.chars().count() > 1 && !raw.chars().all(char::is_numeric)
}

pub(crate) fn required(raw: &str, _: &Candidate, _: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    if raw.is_empty() {
        return reject("A value is required.");
    }
    Ok(Value::text(raw))
}

pub(crate) fn person_name(raw: &str, _: &Candidate, _: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    if !is_descriptive(raw) {
        return reject("Pilot names must have at least two characters and be non-numeric.");
    }
    Ok(Value::text(raw))
}

pub(crate) fn school(raw: &str, _: &Candidate, _: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    if !is_descriptive(raw) {
        return reject("Air school names must have at least two characters and be non-numeric.");
    }
    Ok(Value::text(raw))
}

pub(crate) fn manufacturer(raw: &str, _: &Candidate, _: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    if !is_descriptive(raw) {
        return reject("Manufacturer names must have at least two characters and be non-numeric.");
    }
    Ok(Value::text(raw))
}

pub(crate) fn birth_date(raw: &str, _: &Candidate, ctx: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    let Some(date) = parse_iso_date(raw) else {
        return reject("Birth date must follow the 'YYYY-MM-DD' format.");
    };
    let age = years_between(date, ctx.today);
    if !(18.0..=70.0).contains(&age) {
        return reject("The pilot must be between 18 and 70 years old.");
    }
    Ok(Value::text(raw))
}

pub(crate) fn prof_since(raw: &str, candidate: &Candidate, ctx: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    let Some(date) = parse_iso_date(raw) else {
        return reject("'Prof since' date must follow the 'YYYY-MM-DD' format.");
    };
    let Some(birth) = candidate.text("BirthDate").and_then(parse_iso_date) else {
        return reject("'Prof since' requires an accepted birth date.");
    };
    if years_between(birth, date) < 18.0 {
        return reject(
            "The pilot must have been at least 18 years old when they started working as professionals.",
        );
    }
    if (ctx.today - date).num_days() <= 0 {
        return reject("'Prof since' date must be in the past.");
    }
    Ok(Value::text(raw))
}

fn bounded_int(raw: &str, lo: i64, hi: i64, reason: &str) -> Result<Value, FieldError> {
    match raw.trim().parse::<i64>() {
        Ok(n) if (lo..=hi).contains(&n) => Ok(Value::Int(n)),
        _ => reject(reason),
    }
}

pub(crate) fn max_passengers(raw: &str, _: &Candidate, _: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    bounded_int(raw, 20, 500, "Max passengers value must be numeric and between 20 and 500.")
}

pub(crate) fn crew_size(raw: &str, _: &Candidate, _: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    bounded_int(raw, 2, 10, "Cabin crew value must be numeric and between 2 and 10.")
}

pub(crate) fn destination(raw: &str, candidate: &Candidate, _: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    if raw.is_empty() {
        return reject("A value is required.");
    }
    if candidate.text("Origin") == Some(raw) {
        return reject("Flight origin and destination cannot be the same.");
    }
    Ok(Value::text(raw))
}

pub(crate) fn departure(raw: &str, _: &Candidate, _: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    if parse_iso_date(raw).is_none() {
        return reject("Flight departure date must follow the 'YYYY-MM-DD' format.");
    }
    Ok(Value::text(raw))
}

pub(crate) fn status(raw: &str, _: &Candidate, _: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    if !FLIGHT_STATUSES.contains(&raw) {
        return reject(format!(
            "Status must be one of: {}.",
            FLIGHT_STATUSES.join(", ")
        ));
    }
    Ok(Value::text(raw))
}

/// A dropped table holds no rows, so nothing can reference into it.
fn is_referenced(
    ctx: &mut ValidationContext<'_>,
    def: &EntityDefinition,
    value: &Value,
) -> Result<bool, FieldError> {
    if !ctx.gateway.has_table(def.table.name())? {
        return Ok(false);
    }
    Ok(ctx.gateway.exists(def.select_by_key_sql, std::slice::from_ref(value))?)
}

pub(crate) fn aircraft_ref(raw: &str, _: &Candidate, ctx: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    let value = Value::text(raw);
    if !is_referenced(ctx, &AIRCRAFTS, &value)? {
        return reject("The Aircraft ID must be available in the Aircrafts table.");
    }
    Ok(value)
}

pub(crate) fn assigned_flight(raw: &str, candidate: &Candidate, ctx: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    let value = required(raw, candidate, ctx)?;
    if ctx.strict_assignment_refs
        && ctx.intent == Intent::Insert
        && !is_referenced(ctx, &FLIGHTS, &value)?
    {
        return reject("The Flight ID must be available in the Flights table.");
    }
    Ok(value)
}

pub(crate) fn assigned_pilot(raw: &str, candidate: &Candidate, ctx: &mut ValidationContext<'_>) -> Result<Value, FieldError> {
    let value = required(raw, candidate, ctx)?;
    if ctx.intent == Intent::Insert && candidate.text("FlightID") == Some(raw) {
        return reject("FlightID and PilotID cannot be the same.");
    }
    if ctx.strict_assignment_refs
        && ctx.intent == Intent::Insert
        && !is_referenced(ctx, &PILOTS, &value)?
    {
        return reject("The Pilot ID must be available in the Pilots table.");
    }
    Ok(value)
}
