//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (open/write/fsync)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path and what failed         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (console) ← Shown in red, order not marked completed         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use cafe_core::OrderId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The durable record could not be written.
    ///
    /// ## When This Occurs
    /// - Data directory removed or read-only
    /// - Disk full
    /// - fsync failure
    ///
    /// The order is not added to the in-memory list.
    #[error("Could not save to {}: {source}", path.display())]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log file that was asked for does not exist yet.
    #[error("No {what} found at {}", path.display())]
    NotFound { what: String, path: PathBuf },

    /// An order with this id is already stored.
    #[error("Order {0} is already recorded")]
    DuplicateOrder(OrderId),

    /// Feedback with no text.
    #[error("Feedback message is empty")]
    EmptyFeedback,

    /// Any other I/O failure (reading logs back).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::PersistenceFailure {
            path: path.into(),
            source,
        }
    }

    pub fn not_found(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        StoreError::NotFound {
            what: what.into(),
            path: path.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
