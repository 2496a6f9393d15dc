//! # Console Error Type
//!
//! Unified error type for the operator console.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Handling Flow                                  │
//! │                                                                         │
//! │  CoreError / StoreError / toml / io                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (this module)                                                │
//! │       │                                                                 │
//! │       ├── InvalidInput, InvalidSelection → red message, ask again       │
//! │       ├── PersistenceFailure → red message, order NOT completed         │
//! │       ├── InputClosed (EOF) → leave the main loop like Exit             │
//! │       └── config errors → startup fails, exit code 1                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use cafe_core::CoreError;
use cafe_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Text typed where a number or y/n was expected.
    #[error("{0}")]
    InvalidInput(String),

    /// A config value that parses but makes no sense.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// No data directory could be determined or created.
    #[error("Data directory unavailable: {0}")]
    DataDir(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input reached end of file.
    #[error("Input closed")]
    InputClosed,
}

impl AppError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        AppError::InvalidConfig(message.into())
    }

    /// Errors the operator can fix by typing something else.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::InvalidInput(_)
                | AppError::Core(CoreError::InvalidSelection { .. })
                | AppError::Core(CoreError::InvalidQuantity { .. })
        )
    }
}

/// Result type for console operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_display_unchanged() {
        let err: AppError = CoreError::invalid_selection("menu item", 0, 9).into();
        assert_eq!(err.to_string(), "Invalid menu item selection 0: choose 1-9");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_retryable() {
        assert!(AppError::InvalidInput("abc".into()).is_retryable());
        assert!(!AppError::InputClosed.is_retryable());
        assert!(!AppError::Store(StoreError::EmptyFeedback).is_retryable());
    }

    #[test]
    fn test_invalid_input_shows_message_only() {
        let err = AppError::InvalidInput("'abc' is not a number, please try again".into());
        assert_eq!(err.to_string(), "'abc' is not a number, please try again");
    }
}
