use std::fmt;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::engine::source::{Acquired, FieldSource};
use crate::entity::{
    Candidate, EntityDefinition, FieldError, FieldSpec, Intent, TableId, ValidationContext,
};
use crate::error::{AirDbError, Result};
use crate::storage::StorageGateway;

/// Structured result of one mutation request.
#[derive(Debug)]
pub enum Outcome {
    Committed { rows_affected: usize },
    /// Ended before any statement ran; the store is unchanged. A missing
    /// table or an unsupported operation arrives here as `NotFound`.
    Aborted(AirDbError),
}

impl Outcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Outcome::Committed { .. })
    }

    pub fn rows_affected(&self) -> Option<usize> {
        match self {
            Outcome::Committed { rows_affected } => Some(*rows_affected),
            _ => None,
        }
    }

    pub fn aborted_with(&self) -> Option<&AirDbError> {
        match self {
            Outcome::Aborted(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Committed { rows_affected } => write!(f, "Rows affected: {rows_affected}"),
            Outcome::Aborted(e) => write!(f, "Operation terminated: {e}"),
        }
    }
}

/// Acquire key, validate the remaining fields in order, then issue exactly
/// one statement and commit.
#[derive(Debug, Clone, Default)]
pub struct MutationPipeline {
    today: Option<NaiveDate>,
    strict_assignment_refs: bool,
}

impl MutationPipeline {
    pub fn new(strict_assignment_refs: bool) -> Self {
        Self {
            today: None,
            strict_assignment_refs,
        }
    }

    /// Pins the date that age and "in the past" rules are measured against.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn insert(
        &self,
        gateway: &mut dyn StorageGateway,
        table: TableId,
        source: &mut dyn FieldSource,
    ) -> Result<Outcome> {
        self.run(Intent::Insert, gateway, table, source)
    }

    /// Replaces every non-key field of an existing row.
    pub fn update(
        &self,
        gateway: &mut dyn StorageGateway,
        table: TableId,
        source: &mut dyn FieldSource,
    ) -> Result<Outcome> {
        self.run(Intent::Update, gateway, table, source)
    }

    pub fn delete(
        &self,
        gateway: &mut dyn StorageGateway,
        table: TableId,
        source: &mut dyn FieldSource,
    ) -> Result<Outcome> {
        self.run(Intent::Delete, gateway, table, source)
    }

    /// Collects and checks the key field(s) only; nothing is looked up.
    pub fn acquire_key(
        &self,
        gateway: &mut dyn StorageGateway,
        table: TableId,
        source: &mut dyn FieldSource,
    ) -> Result<Candidate> {
        let def = table.definition();
        let mut ctx = self.context(gateway, Intent::Lookup);
        let mut candidate = Candidate::new();
        for field in def.key_fields() {
            candidate = accept(def, field, candidate, source, &mut ctx)?;
        }
        Ok(candidate)
    }

    fn context<'a>(&self, gateway: &'a mut dyn StorageGateway, intent: Intent) -> ValidationContext<'a> {
        ValidationContext {
            gateway,
            today: self.today(),
            intent,
            strict_assignment_refs: self.strict_assignment_refs,
        }
    }

    fn run(
        &self,
        intent: Intent,
        gateway: &mut dyn StorageGateway,
        table: TableId,
        source: &mut dyn FieldSource,
    ) -> Result<Outcome> {
        match self.attempt(intent, gateway, table.definition(), source) {
            Ok(rows_affected) => {
                info!(table = %table, ?intent, rows_affected, "mutation committed");
                Ok(Outcome::Committed { rows_affected })
            }
            Err(e) if e.is_recoverable() => {
                warn!(table = %table, ?intent, reason = %e, "mutation aborted");
                Ok(Outcome::Aborted(e))
            }
            Err(e) => Err(e),
        }
    }

    fn attempt(
        &self,
        intent: Intent,
        gateway: &mut dyn StorageGateway,
        def: &'static EntityDefinition,
        source: &mut dyn FieldSource,
    ) -> Result<usize> {
        let (sql, params) = {
            let mut ctx = self.context(gateway, intent);
            let update_sql = match (intent, def.update_sql) {
                (Intent::Update, None) => {
                    return Err(AirDbError::NotFound(format!(
                        "{} has a composite PK; delete the record and insert a new one.",
                        def.table
                    )));
                }
                (_, sql) => sql,
            };

            let mut candidate = Candidate::new();
            for field in def.key_fields() {
                candidate = accept(def, field, candidate, source, &mut ctx)?;
            }
            let key = candidate.params(def.key_fields());
            let occupied = ctx.gateway.exists(def.select_by_key_sql, &key)?;
            match intent {
                Intent::Insert if occupied => {
                    return Err(AirDbError::KeyConflict(def.key_taken.to_string()));
                }
                Intent::Update | Intent::Delete if !occupied => {
                    return Err(AirDbError::KeyConflict(def.key_missing.to_string()));
                }
                _ => {}
            }

            if matches!(intent, Intent::Insert | Intent::Update) {
                for field in def.value_fields() {
                    candidate = accept(def, field, candidate, source, &mut ctx)?;
                }
            }

            match (intent, update_sql) {
                (Intent::Update, Some(sql)) => {
                    let mut params = candidate.params(def.value_fields());
                    params.extend(key);
                    (sql, params)
                }
                (Intent::Delete, _) => (def.delete_sql, key),
                _ => (def.insert_sql, candidate.params(def.fields)),
            }
        };

        let rows = gateway.execute(sql, &params)?;
        gateway.commit()?;
        Ok(rows)
    }
}

/// Asks for one field and runs its validator against the candidate so far.
fn accept(
    def: &EntityDefinition,
    field: &FieldSpec,
    candidate: Candidate,
    source: &mut dyn FieldSource,
    ctx: &mut ValidationContext<'_>,
) -> Result<Candidate> {
    let raw = match source.acquire(def.table, field) {
        Acquired::Value(raw) => raw,
        Acquired::Return => return Err(AirDbError::UserCancelled),
    };
    match (field.validate)(&raw, &candidate, ctx) {
        Ok(value) => Ok(candidate.with(field.name, value)),
        Err(FieldError::Rejected(reason)) => Err(AirDbError::rejected(field.name, reason)),
        Err(FieldError::Store(e)) => Err(e.into()),
    }
}

