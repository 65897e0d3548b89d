use crate::error::StoreError;
use crate::types::value::Value;
use crate::types::ResultSet;

/// Storage gateway trait - the only path from the core to the relational store.
///
/// One gateway spans one top-level operation. Statements run inside a single
/// transaction that `commit` makes durable; dropping an uncommitted gateway
/// discards everything it executed.
pub trait StorageGateway {
    /// Executes a parameterized statement and returns the number of rows affected
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<usize, StoreError>;

    /// Runs a parameterized query and collects every row
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<ResultSet, StoreError>;

    /// Names of all tables currently present, in catalog order
    fn list_table_names(&mut self) -> Result<Vec<String>, StoreError>;

    /// Commits the statements executed so far
    fn commit(&mut self) -> Result<(), StoreError>;

    /// True when a keyed select returns at least one row
    fn exists(&mut self, sql: &str, params: &[Value]) -> Result<bool, StoreError> {
        Ok(!self.query(sql, params)?.is_empty())
    }

    fn has_table(&mut self, name: &str) -> Result<bool, StoreError> {
        Ok(self.list_table_names()?.iter().any(|t| t == name))
    }
}
