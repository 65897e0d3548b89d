//! Entity kinds: the four fixed tables, their statement templates and their
//! ordered, validated field lists.

pub mod definitions;
pub mod validate;

use std::fmt;

pub use validate::{Candidate, FieldError, Intent, ValidationContext, Validator};

use crate::error::{AirDbError, Result};

/// The closed set of tables this tool manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableId {
    Pilots,
    Aircrafts,
    Flights,
    OperatedBy,
}

impl TableId {
    /// Canonical creation order (referenced tables first)
    pub const ALL: [TableId; 4] = [
        TableId::Pilots,
        TableId::Aircrafts,
        TableId::Flights,
        TableId::OperatedBy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TableId::Pilots => "Pilots",
            TableId::Aircrafts => "Aircrafts",
            TableId::Flights => "Flights",
            TableId::OperatedBy => "OperatedBy",
        }
    }

    /// Exact, case-sensitive match on the physical table name
    pub fn from_name(name: &str) -> Option<TableId> {
        TableId::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn parse(name: &str) -> Result<TableId> {
        TableId::from_name(name)
            .ok_or_else(|| AirDbError::NotFound(format!("Unknown table '{name}'")))
    }

    pub fn definition(self) -> &'static EntityDefinition {
        match self {
            TableId::Pilots => &definitions::PILOTS,
            TableId::Aircrafts => &definitions::AIRCRAFTS,
            TableId::Flights => &definitions::FLIGHTS,
            TableId::OperatedBy => &definitions::OPERATED_BY,
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One column of an entity together with the rule that accepts it.
pub struct FieldSpec {
    pub name: &'static str,
    /// Human label used when asking for the value
    pub label: &'static str,
    pub key: bool,
    pub validate: Validator,
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Declarative description of one entity kind.
#[derive(Debug)]
pub struct EntityDefinition {
    pub table: TableId,
    /// Every column in declared order; key fields come first.
    pub fields: &'static [FieldSpec],
    pub create_if_absent_sql: &'static str,
    pub create_sql: &'static str,
    pub insert_sql: &'static str,
    /// Absent for composite-key tables, which are changed by delete + insert.
    pub update_sql: Option<&'static str>,
    pub delete_sql: &'static str,
    pub select_by_key_sql: &'static str,
    /// Reason reported when an insert reuses an existing key
    pub key_taken: &'static str,
    /// Reason reported when an update/delete names an absent key
    pub key_missing: &'static str,
}

impl EntityDefinition {
    pub fn key_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| f.key)
    }

    pub fn value_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| !f.key)
    }

    pub fn is_composite_key(&self) -> bool {
        self.key_fields().count() > 1
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }
}
