//! # cafe-store: Durable Logs for the Cafe Console
//!
//! Owns the order id sequence, the append-only order log, the in-memory
//! list of this run's orders and the feedback file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cafe Console Data Flow                           │
//! │                                                                         │
//! │  Payment selected (apps/console)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   cafe-store (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  OrderStore   │    │   OrderLog    │    │ FeedbackLog  │  │   │
//! │  │   │  (orders.rs)  │───►│   (log.rs)    │    │(feedback.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ id sequence   │    │ FileOrderLog  │    │ [ts] name:   │  │   │
//! │  │   │ Vec<Order>    │    │ MemoryOrderLog│    │   message    │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────┬───────┘  │   │
//! │  └────────────────────────────────┼───────────────────┼──────────┘   │
//! │                                   ▼                   ▼                │
//! │                          <data dir>/orders.txt  <data dir>/feedback.txt│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cafe_core::{Currency, OrderId};
//! use cafe_store::{FileOrderLog, OrderStore};
//!
//! let log = FileOrderLog::new("orders.txt", Currency::default());
//! let mut store = OrderStore::new(log, OrderId::new(1001));
//! let id = store.next_order_id();
//! assert_eq!(id.value(), 1001);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod feedback;
pub mod log;
pub mod orders;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use feedback::FeedbackLog;
pub use log::{format_record, FileOrderLog, MemoryOrderLog, OrderLog};
pub use orders::{OrderIdSequence, OrderStore};
