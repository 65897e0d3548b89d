use thiserror::Error;

/// Failure reported by the storage engine itself.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("statement failed: {0}")]
    Statement(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
pub enum AirDbError {
    #[error("invalid {field}: {reason}")]
    ValidationRejected { field: &'static str, reason: String },
    #[error("{0}")]
    KeyConflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
    #[error("returned to menu")]
    UserCancelled,
    #[error("configuration error: {0}")]
    Config(String),
}

impl AirDbError {
    pub fn rejected(field: &'static str, reason: impl Into<String>) -> Self {
        AirDbError::ValidationRejected {
            field,
            reason: reason.into(),
        }
    }

    /// Recoverable errors end only the current attempt and leave the store untouched.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AirDbError::StoreUnavailable(_) | AirDbError::Config(_))
    }
}

impl From<rusqlite::Error> for AirDbError {
    fn from(e: rusqlite::Error) -> Self {
        AirDbError::StoreUnavailable(StoreError::Statement(e))
    }
}

pub type Result<T> = std::result::Result<T, AirDbError>;
