use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected input; the message is meant to be shown to the shopper as-is.
    #[error("{0}")]
    Validation(String),

    #[error("storage unavailable")]
    Store(#[from] StoreError),

    #[error("corrupt record under key {key}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported schema version {found} under key {key} (expected {expected})")]
    Version { key: String, found: u32, expected: u32 },

    #[error("Internal Error")]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
