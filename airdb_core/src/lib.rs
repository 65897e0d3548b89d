use std::path::Path;

pub mod catalog;
pub mod config;
pub mod engine;
pub mod entity;
pub mod error;
pub mod storage;
pub mod types;

use tracing::info;

use catalog::TableCatalog;
use config::AirDbConfig;
use engine::{FieldSource, MutationPipeline, Outcome, SummaryReport};
use entity::TableId;
use error::{AirDbError, Result};
use storage::{SqliteGateway, SqliteStore, StorageGateway};
use types::ResultSet;

/// Entry point for every top-level operation. Each call opens its own
/// connection, commits what it did and closes the connection again.
#[derive(Debug)]
pub struct Database {
    store: SqliteStore,
    catalog: TableCatalog,
    pipeline: MutationPipeline,
}

impl Database {
    pub fn open(config: &AirDbConfig) -> Result<Self> {
        let store = SqliteStore::new(&config.db_path);
        let mut catalog = TableCatalog::new();

        let mut gateway = store.connect()?;
        if config.bootstrap_schema {
            for table in TableId::ALL {
                gateway.execute(table.definition().create_if_absent_sql, &[])?;
            }
        }
        gateway.commit()?;
        catalog.sync(&mut gateway)?;
        info!(path = %store.path().display(), tables = ?catalog.list_existing(), "database opened");

        Ok(Self {
            store,
            catalog,
            pipeline: MutationPipeline::new(config.strict_assignment_refs),
        })
    }

    /// Opens `path` with every other setting at its default
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let config = AirDbConfig {
            db_path: path.as_ref().to_path_buf(),
            ..AirDbConfig::default()
        };
        Self::open(&config)
    }

    pub fn with_pipeline(mut self, pipeline: MutationPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    pub fn catalog(&self) -> &TableCatalog {
        &self.catalog
    }

    fn connect_synced(&mut self) -> Result<SqliteGateway> {
        let mut gateway = self.store.connect()?;
        self.catalog.sync(&mut gateway)?;
        Ok(gateway)
    }

    fn require_existing(&self, table: TableId) -> Result<()> {
        if self.catalog.is_existing(table) {
            Ok(())
        } else {
            Err(AirDbError::NotFound(format!("Table {table} does not exist.")))
        }
    }

    /// Tables present in the store right now
    pub fn existing_tables(&mut self) -> Result<Vec<TableId>> {
        self.connect_synced()?;
        Ok(self.catalog.list_existing())
    }

    /// Tables dropped in this session and not yet recreated
    pub fn deleted_tables(&mut self) -> Result<Vec<TableId>> {
        self.connect_synced()?;
        Ok(self.catalog.list_deleted())
    }

    /// Reinstates a dropped table from its canonical definition.
    pub fn create_table(&mut self, table: TableId) -> Result<()> {
        let mut gateway = self.connect_synced()?;
        if !self.catalog.is_deleted(table) {
            return Err(AirDbError::NotFound(format!(
                "Table {table} has not been deleted."
            )));
        }
        gateway.execute(table.definition().create_sql, &[])?;
        gateway.commit()?;
        self.catalog.sync(&mut gateway)?;
        info!(table = %table, "table created");
        Ok(())
    }

    pub fn drop_table(&mut self, table: TableId) -> Result<()> {
        let mut gateway = self.connect_synced()?;
        self.require_existing(table)?;
        gateway.execute(&format!("DROP TABLE IF EXISTS {}", table.name()), &[])?;
        gateway.commit()?;
        self.catalog.record_dropped(table);
        self.catalog.sync(&mut gateway)?;
        info!(table = %table, "table dropped");
        Ok(())
    }

    pub fn insert(&mut self, table: TableId, source: &mut dyn FieldSource) -> Result<Outcome> {
        let mut gateway = self.connect_synced()?;
        if let Err(e) = self.require_existing(table) {
            return Ok(Outcome::Aborted(e));
        }
        self.pipeline.insert(&mut gateway, table, source)
    }

    pub fn update(&mut self, table: TableId, source: &mut dyn FieldSource) -> Result<Outcome> {
        let mut gateway = self.connect_synced()?;
        if let Err(e) = self.require_existing(table) {
            return Ok(Outcome::Aborted(e));
        }
        self.pipeline.update(&mut gateway, table, source)
    }

    pub fn delete(&mut self, table: TableId, source: &mut dyn FieldSource) -> Result<Outcome> {
        let mut gateway = self.connect_synced()?;
        if let Err(e) = self.require_existing(table) {
            return Ok(Outcome::Aborted(e));
        }
        self.pipeline.delete(&mut gateway, table, source)
    }

    pub fn select_all(&mut self, table: TableId) -> Result<ResultSet> {
        let mut gateway = self.connect_synced()?;
        self.require_existing(table)?;
        let result = engine::select_all(&mut gateway, table)?;
        gateway.commit()?;
        Ok(result)
    }

    /// Asks for the key field(s) of `table` and returns the matching rows.
    pub fn search_by_key(&mut self, table: TableId, source: &mut dyn FieldSource) -> Result<ResultSet> {
        let mut gateway = self.connect_synced()?;
        self.require_existing(table)?;
        let key = self.pipeline.acquire_key(&mut gateway, table, source)?;
        let result = engine::select_by_key(&mut gateway, table, &key)?;
        gateway.commit()?;
        Ok(result)
    }

    pub fn search_by_column(&mut self, table: TableId, column: &str, value: &str) -> Result<ResultSet> {
        let mut gateway = self.connect_synced()?;
        self.require_existing(table)?;
        let result = engine::select_by_column(&mut gateway, table, column, value)?;
        gateway.commit()?;
        Ok(result)
    }

    /// Bulk-loads the sample data set; all or nothing.
    pub fn load_seed_data(&mut self) -> Result<usize> {
        let mut gateway = self.connect_synced()?;
        engine::load_seed_data(&mut gateway)
    }

    pub fn summary(&mut self, report: SummaryReport) -> Result<ResultSet> {
        let mut gateway = self.connect_synced()?;
        let result = engine::summary(&mut gateway, report)?;
        gateway.commit()?;
        Ok(result)
    }
}
