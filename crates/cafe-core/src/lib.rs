//! # cafe-core: Pure Business Logic for the Cafe Console
//!
//! Everything that has arithmetic or state rules lives here, as plain
//! functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cafe Console Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/console (operator)                      │   │
//! │  │    Menu screen ──► Order screen ──► Payment ──► Receipt         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cafe-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  builder  │  │  pricing  │  │   money   │  │   │
//! │  │   │ MenuItem  │  │ DraftOrder│  │ Totals    │  │   Money   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    cafe-store (persistence)                     │   │
//! │  │              orders.txt, feedback.txt, in-memory orders         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, OrderLineItem, Order, PaymentMethod)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The read-only menu
//! - [`builder`] - Order builder state machine
//! - [`pricing`] - Subtotal, tax, donation and total
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules shared by builder and config
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use cafe_core::{Donation, MenuCatalog, OrderBuilder, OrderId, PaymentMethod, PricingEngine};
//!
//! let catalog = MenuCatalog::rukaab_default();
//! let pricing = PricingEngine::default();
//!
//! let mut builder = OrderBuilder::new(&catalog);
//! builder.start_order(OrderId::new(1001), "Ayesha", Utc::now()).unwrap();
//! builder.add_line_item(9, 2).unwrap(); // Karak Chai
//! builder.choose_variant(1).unwrap();   // Regular
//! builder.finish_items().unwrap();
//!
//! let order = builder
//!     .finalize(&pricing, Donation::Declined, PaymentMethod::Cash)
//!     .unwrap();
//! assert_eq!(order.totals().total.cents(), 22_600);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use builder::{AddOutcome, BuilderState, CustomizationProgress, CustomizationRequest, OrderBuilder};
pub use catalog::{CategoryGroup, MenuCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Currency, Money};
pub use pricing::{PricingConfig, PricingEngine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest unit price accepted for a menu item: Rs.1,000,000.00.
///
/// Keeps `price × quantity` and order sums far inside `i64`.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// First order number handed out when no base is configured.
pub const DEFAULT_FIRST_ORDER_ID: u64 = 1001;

/// Default sales tax: 13%.
pub const DEFAULT_TAX_RATE_BPS: u32 = 1300;

/// Default opt-in donation: Rs.100.00.
pub const DEFAULT_DONATION_MINOR: i64 = 10_000;
