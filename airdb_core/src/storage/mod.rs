pub mod gateway;
pub mod sqlite;

// Re-export main types for convenience
pub use gateway::StorageGateway;
pub use sqlite::{SqliteGateway, SqliteStore};
