//! # Order Store
//!
//! Hands out order ids and keeps the orders of the current run.
//!
//! ## Persist Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  persist(order)                                                         │
//! │       │                                                                 │
//! │       ├── id already stored? ──────────► Err(DuplicateOrder)            │
//! │       │                                                                 │
//! │       ├── log.append(order) fails? ────► Err(PersistenceFailure)        │
//! │       │                                  memory untouched               │
//! │       ▼                                                                 │
//! │  orders.push(order) ──► daily_revenue / order_count see it              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are not recovered from the log: every run starts again at the
//! configured base, and reports cover the current run only.

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use cafe_core::{Money, Order, OrderId, DEFAULT_FIRST_ORDER_ID};

use crate::error::{StoreError, StoreResult};
use crate::log::{FileOrderLog, OrderLog};

// =============================================================================
// Id Sequence
// =============================================================================

/// Monotonic order numbers.
#[derive(Debug, Clone)]
pub struct OrderIdSequence {
    next: OrderId,
}

impl OrderIdSequence {
    pub fn starting_at(first: OrderId) -> Self {
        OrderIdSequence { next: first }
    }

    /// Returns the next id and advances. Never returns the same id twice.
    pub fn next_id(&mut self) -> OrderId {
        let id = self.next;
        self.next = id.next();
        id
    }

    pub fn peek(&self) -> OrderId {
        self.next
    }
}

impl Default for OrderIdSequence {
    fn default() -> Self {
        OrderIdSequence::starting_at(OrderId::new(DEFAULT_FIRST_ORDER_ID))
    }
}

// =============================================================================
// Order Store
// =============================================================================

/// The orders of this run, backed by a durable log.
#[derive(Debug)]
pub struct OrderStore<L = FileOrderLog> {
    log: L,
    ids: OrderIdSequence,
    orders: Vec<Order>,
}

impl<L: OrderLog> OrderStore<L> {
    pub fn new(log: L, first_id: OrderId) -> Self {
        OrderStore {
            log,
            ids: OrderIdSequence::starting_at(first_id),
            orders: Vec::new(),
        }
    }

    /// Id for the next order to be started.
    pub fn next_order_id(&mut self) -> OrderId {
        self.ids.next_id()
    }

    /// Makes an order durable, then keeps it for reports.
    ///
    /// ## Errors
    /// - `DuplicateOrder` if the id is already stored
    /// - `PersistenceFailure` if the log write fails; the order is then
    ///   not in [`orders`](Self::orders)
    pub fn persist(&mut self, order: Order) -> StoreResult<&Order> {
        if self.orders.iter().any(|o| o.id() == order.id()) {
            warn!(order_id = %order.id(), "Duplicate order rejected");
            return Err(StoreError::DuplicateOrder(order.id()));
        }

        if let Err(e) = self.log.append(&order) {
            warn!(order_id = %order.id(), error = %e, "Order not persisted");
            return Err(e);
        }

        info!(
            order_id = %order.id(),
            total = %order.totals().total,
            count = self.orders.len() + 1,
            "Order persisted"
        );
        let idx = self.orders.len();
        self.orders.push(order);
        Ok(&self.orders[idx])
    }

    /// Sum of totals of this run's orders created on `date` (local calendar).
    pub fn daily_revenue(&self, date: NaiveDate) -> Money {
        self.orders
            .iter()
            .filter(|o| o.local_date() == date)
            .map(|o| o.totals().total)
            .sum()
    }

    pub fn daily_revenue_today(&self) -> Money {
        self.daily_revenue(Local::now().date_naive())
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Orders in the sequence they were persisted.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn log(&self) -> &L {
        &self.log
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::MemoryOrderLog;
    use cafe_core::{Currency, Donation, MenuCatalog, OrderBuilder, PaymentMethod, PricingEngine};
    use chrono::{DateTime, Duration, Utc};

    struct FailingLog;

    impl OrderLog for FailingLog {
        fn append(&mut self, _order: &Order) -> StoreResult<()> {
            Err(StoreError::persistence(
                "/unwritable/orders.txt",
                std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            ))
        }
    }

    /// Karak Chai × qty (Rs.100 each), no donation.
    fn chai_order(id: OrderId, qty: i64, created_at: DateTime<Utc>) -> Order {
        let catalog = MenuCatalog::rukaab_default();
        let mut builder = OrderBuilder::new(&catalog);
        builder.start_order(id, "Walk-in", created_at).unwrap();
        builder.add_line_item(9, qty).unwrap();
        builder.choose_variant(1).unwrap();
        builder.finish_items().unwrap();
        builder
            .finalize(&PricingEngine::default(), Donation::Declined, PaymentMethod::Cash)
            .unwrap()
    }

    fn memory_store() -> OrderStore<MemoryOrderLog> {
        OrderStore::new(MemoryOrderLog::new(Currency::default()), OrderId::new(1001))
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut store = memory_store();
        let ids: Vec<u64> = (0..5).map(|_| store.next_order_id().value()).collect();
        assert_eq!(ids, [1001, 1002, 1003, 1004, 1005]);
    }

    #[test]
    fn test_sequence_default_base() {
        let mut seq = OrderIdSequence::default();
        assert_eq!(seq.peek(), OrderId::new(1001));
        assert_eq!(seq.next_id(), OrderId::new(1001));
        assert_eq!(seq.peek(), OrderId::new(1002));
    }

    #[test]
    fn test_persist_adds_one_order_and_one_record() {
        let mut store = memory_store();
        let id = store.next_order_id();

        let stored = store.persist(chai_order(id, 2, Utc::now())).unwrap();
        assert_eq!(stored.id(), id);
        assert_eq!(store.order_count(), 1);
        assert_eq!(store.log().records().len(), 1);
        assert!(store.log().records()[0].starts_with("Order ID: 1001\n"));
    }

    #[test]
    fn test_failed_log_leaves_memory_untouched() {
        let mut store = OrderStore::new(FailingLog, OrderId::new(1001));
        let id = store.next_order_id();

        let err = store.persist(chai_order(id, 1, Utc::now())).unwrap_err();
        assert!(matches!(err, StoreError::PersistenceFailure { .. }));
        assert_eq!(store.order_count(), 0);
        assert_eq!(store.daily_revenue_today(), Money::zero());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = memory_store();
        let now = Utc::now();
        store.persist(chai_order(OrderId::new(1001), 1, now)).unwrap();

        let err = store.persist(chai_order(OrderId::new(1001), 3, now)).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateOrder(id) if id == OrderId::new(1001)));
        assert_eq!(store.order_count(), 1);
        assert_eq!(store.log().records().len(), 1);
    }

    #[test]
    fn test_daily_revenue_counts_only_that_day() {
        let mut store = memory_store();
        let now = Utc::now();
        let yesterday = now - Duration::days(1);

        let today_a = store.next_order_id();
        store.persist(chai_order(today_a, 2, now)).unwrap(); // 226.00
        let old = store.next_order_id();
        store.persist(chai_order(old, 1, yesterday)).unwrap(); // 113.00
        let today_b = store.next_order_id();
        store.persist(chai_order(today_b, 1, now)).unwrap(); // 113.00

        let today = store.orders()[0].local_date();
        assert_eq!(store.daily_revenue(today), Money::from_major_minor(339, 0));

        let previous = store.orders()[1].local_date();
        assert_eq!(store.daily_revenue(previous), Money::from_major_minor(113, 0));
        assert_eq!(store.order_count(), 3);
    }

    #[test]
    fn test_daily_revenue_empty_store() {
        let store = memory_store();
        assert_eq!(store.daily_revenue_today(), Money::zero());
    }

    #[test]
    fn test_file_backed_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.txt");
        let mut store = OrderStore::new(FileOrderLog::new(&path, Currency::default()), OrderId::new(1001));

        let id = store.next_order_id();
        store.persist(chai_order(id, 2, Utc::now())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("  - Karak Chai x2 @ Rs.100.00\n"));
        assert!(contents.contains("Total: Rs.226.00\n"));
        assert_eq!(store.log().path(), path.as_path());
    }
}
