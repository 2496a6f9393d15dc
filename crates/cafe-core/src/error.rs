//! # Error Types
//!
//! Domain-specific error types for cafe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cafe-core errors (this file)                                          │
//! │  ├── CoreError        - Order/menu rule violations                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  cafe-store errors (separate crate)                                    │
//! │  └── StoreError       - Durable log failures                           │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── AppError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Operator               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these is fatal: every variant is recovered by re-prompting or by
//! returning to the main menu.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A numbered choice is outside the list it picks from.
    ///
    /// ## When This Occurs
    /// - Menu item 0 or beyond the catalog size
    /// - Variant/topping number beyond the offered list
    /// - Payment choice other than 1, 2 or 3
    #[error("Invalid {field} selection {choice}: choose 1-{max}")]
    InvalidSelection {
        field: String,
        choice: i64,
        max: usize,
    },

    /// Quantity is zero, negative or above the per-line cap.
    #[error("Invalid quantity {requested}: must be between 1 and {max}")]
    InvalidQuantity { requested: i64, max: i64 },

    /// Operation called in the wrong builder state.
    ///
    /// ## When This Occurs
    /// - Adding items after `finish_items()`
    /// - Finishing while a customization is still pending
    /// - Starting a second order on the same builder
    #[error("Order is {actual}, cannot {operation}")]
    InvalidState { operation: String, actual: String },

    /// Finishing an order that has no line items.
    #[error("Order has no items")]
    EmptyOrder,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an InvalidSelection error.
    pub fn invalid_selection(field: impl Into<String>, choice: i64, max: usize) -> Self {
        CoreError::InvalidSelection {
            field: field.into(),
            choice,
            max,
        }
    }

    /// Creates an InvalidState error.
    pub fn invalid_state(operation: impl Into<String>, actual: impl std::fmt::Display) -> Self {
        CoreError::InvalidState {
            operation: operation.into(),
            actual: actual.to_string(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used by the catalog constructor, the builder and configuration loading.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., two menu items with one name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
