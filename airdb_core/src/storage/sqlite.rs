use std::path::{Path, PathBuf};

use rusqlite::{params_from_iter, Connection};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::storage::gateway::StorageGateway;
use crate::types::value::Value;
use crate::types::{ResultSet, Row};

const LIST_TABLES: &str = "SELECT name FROM sqlite_master WHERE type = 'table'";

/// SQLite database file; hands out one gateway per top-level operation.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection with its own transaction.
    ///
    /// Foreign-key enforcement is switched off: reference rules are checked
    /// by the field validators, and `Flights.FlightID` carries no key the
    /// `OperatedBy` constraint could bind to.
    pub fn connect(&self) -> Result<SqliteGateway, StoreError> {
        let conn = Connection::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.display().to_string(),
            source,
        })?;
        // Has no effect once a transaction is open, so it must precede BEGIN.
        conn.execute_batch("PRAGMA foreign_keys = OFF; BEGIN")?;
        debug!(path = %self.path.display(), "opened connection");
        Ok(SqliteGateway { conn })
    }
}

/// A live connection. Rolls back and closes on drop unless committed.
#[derive(Debug)]
pub struct SqliteGateway {
    conn: Connection,
}

impl StorageGateway for SqliteGateway {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<usize, StoreError> {
        debug!(sql = sql.trim(), params = params.len(), "execute");
        let affected = self.conn.execute(sql, params_from_iter(params.iter()))?;
        Ok(affected)
    }

    fn query(&mut self, sql: &str, params: &[Value]) -> Result<ResultSet, StoreError> {
        debug!(sql = sql.trim(), params = params.len(), "query");
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let width = columns.len();
        let mut rows_iter = stmt.query(params_from_iter(params.iter()))?;

        let mut rows: Vec<Row> = Vec::new();
        while let Some(row) = rows_iter.next()? {
            let mut out: Row = Vec::with_capacity(width);
            for i in 0..width {
                out.push(Value::from(row.get_ref(i)?));
            }
            rows.push(out);
        }
        Ok(ResultSet { columns, rows })
    }

    fn list_table_names(&mut self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare(LIST_TABLES)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        if !self.conn.is_autocommit() {
            self.conn.execute_batch("COMMIT")?;
        }
        Ok(())
    }
}

impl Drop for SqliteGateway {
    fn drop(&mut self) {
        if !self.conn.is_autocommit() {
            if let Err(e) = self.conn.execute_batch("ROLLBACK") {
                warn!(error = %e, "rollback on close failed");
            } else {
                debug!("rolled back uncommitted work");
            }
        }
    }
}
