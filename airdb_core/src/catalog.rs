use std::collections::BTreeMap;

use tracing::debug;

use crate::entity::TableId;
use crate::error::{AirDbError, Result, StoreError};
use crate::storage::StorageGateway;

/// Displayed selection index (1-based) to table.
pub type SelectionIds = BTreeMap<usize, TableId>;

/// In-memory view of which tables exist and which were dropped in this session.
///
/// Nothing here is persisted: the dropped set starts empty for every process.
#[derive(Debug, Clone, Default)]
pub struct TableCatalog {
    existing: Vec<TableId>,
    deleted: Vec<TableId>,
}

impl TableCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the existing view with what the store reports now.
    /// Tables outside the four managed ones are ignored.
    pub fn refresh_existing(&mut self, gateway: &mut dyn StorageGateway) -> std::result::Result<(), StoreError> {
        let names = gateway.list_table_names()?;
        let mut existing: Vec<TableId> = Vec::with_capacity(names.len());
        for name in &names {
            match TableId::from_name(name) {
                Some(id) if !existing.contains(&id) => existing.push(id),
                Some(_) => {}
                None => debug!(table = %name, "ignoring unmanaged table"),
            }
        }
        self.existing = existing;
        debug!(existing = ?self.existing, "refreshed table catalog");
        Ok(())
    }

    /// Keeps only the dropped tables that are still absent from the store.
    pub fn reconcile_deleted(&mut self) {
        let existing = &self.existing;
        self.deleted.retain(|t| !existing.contains(t));
    }

    /// Remembers a table the user just dropped.
    pub fn record_dropped(&mut self, table: TableId) {
        if !self.deleted.contains(&table) {
            self.deleted.push(table);
        }
        self.existing.retain(|t| *t != table);
    }

    /// Convenience for refresh followed by reconcile
    pub fn sync(&mut self, gateway: &mut dyn StorageGateway) -> std::result::Result<(), StoreError> {
        self.refresh_existing(gateway)?;
        self.reconcile_deleted();
        Ok(())
    }

    pub fn is_existing(&self, table: TableId) -> bool {
        self.existing.contains(&table)
    }

    pub fn is_deleted(&self, table: TableId) -> bool {
        self.deleted.contains(&table)
    }

    pub fn list_existing(&self) -> Vec<TableId> {
        self.existing.clone()
    }

    pub fn list_deleted(&self) -> Vec<TableId> {
        self.deleted.clone()
    }
}

/// Numbers `tables` from 1 in the order given.
pub fn selection_ids(tables: &[TableId]) -> SelectionIds {
    tables
        .iter()
        .enumerate()
        .map(|(i, t)| (i + 1, *t))
        .collect()
}

/// Looks up a displayed index.
pub fn resolve_selection(ids: &SelectionIds, chosen: usize) -> Result<TableId> {
    ids.get(&chosen).copied().ok_or_else(|| {
        let valid: Vec<String> = ids.keys().map(|k| k.to_string()).collect();
        AirDbError::NotFound(format!(
            "No table with ID {chosen}. Valid IDs: [{}]",
            valid.join(", ")
        ))
    })
}
