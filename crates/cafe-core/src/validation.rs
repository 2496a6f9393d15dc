//! # Validation Module
//!
//! Input validation rules for the cafe console.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console input (apps/console)                                 │
//! │  ├── Non-numeric text where a number is needed → re-prompt             │
//! │  └── Never coerced to a default                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Ranges (selection 1..=n, quantity 1..=999, tax 0..=100%)          │
//! │  └── Text limits (names)                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Builder / catalog invariants                                 │
//! │  └── State machine, unique item names                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::{MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest customer or menu item name accepted.
pub const MAX_NAME_LEN: usize = 100;

// =============================================================================
// Selection
// =============================================================================

/// Converts a 1-based operator choice into a 0-based index.
///
/// ## Example
/// ```rust
/// use cafe_core::validation::validate_selection;
///
/// assert_eq!(validate_selection("menu item", 1, 9).unwrap(), 0);
/// assert!(validate_selection("menu item", 0, 9).is_err());
/// assert!(validate_selection("menu item", 10, 9).is_err());
/// ```
pub fn validate_selection(field: &str, choice: i64, len: usize) -> CoreResult<usize> {
    match usize::try_from(choice) {
        Ok(c) if c >= 1 && c <= len => Ok(c - 1),
        _ => Err(CoreError::invalid_selection(field, choice, len)),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> CoreResult<()> {
    if qty <= 0 || qty > MAX_ITEM_QUANTITY {
        return Err(CoreError::InvalidQuantity {
            requested: qty,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in minor units.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed MAX_PRICE_CENTS
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

/// Validates the opt-in donation amount. It must be a real amount: a
/// zero donation would make "accepted" and "declined" indistinguishable.
pub fn validate_donation_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "donation".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item name: non-empty, at most 100 characters.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "menu item name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "menu item name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a customer name. Empty is allowed (walk-in customer).
///
/// ## Returns
/// The trimmed name.
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "customer name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_selection() {
        assert_eq!(validate_selection("item", 1, 3).unwrap(), 0);
        assert_eq!(validate_selection("item", 3, 3).unwrap(), 2);

        assert!(validate_selection("item", 0, 3).is_err());
        assert!(validate_selection("item", 4, 3).is_err());
        assert!(validate_selection("item", -2, 3).is_err());
        assert!(validate_selection("item", 1, 0).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(10_000).is_ok());
        assert!(validate_price_cents(-100).is_err());
        assert!(validate_price_cents(MAX_PRICE_CENTS).is_ok());
        assert!(validate_price_cents(MAX_PRICE_CENTS + 1).is_err());
        assert!(validate_price_cents(i64::MAX / 2).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1300).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }

    #[test]
    fn test_validate_donation_cents() {
        assert!(validate_donation_cents(10_000).is_ok());
        assert!(validate_donation_cents(0).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Karak Chai").is_ok());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_customer_name() {
        assert_eq!(validate_customer_name("  Ayesha ").unwrap(), "Ayesha");
        assert_eq!(validate_customer_name("").unwrap(), "");
        assert!(validate_customer_name(&"B".repeat(101)).is_err());
    }
}
