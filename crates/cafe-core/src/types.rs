//! # Domain Types
//!
//! Core domain types used throughout the cafe console.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │  OrderLineItem  │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  category       │──►│  name (frozen)  │──►│  id (1001, ..)  │       │
//! │  │  name           │   │  unit_price     │   │  items          │       │
//! │  │  price_cents    │   │  quantity       │   │  totals         │       │
//! │  │  variants       │   │  customizations │   │  payment_method │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │   OrderStatus   │   │ PaymentMethod   │       │
//! │  │  bps (u32)      │   │   Draft         │   │   Cash          │       │
//! │  │  1300 = 13%     │   │   Paid          │   │   Card          │       │
//! │  └─────────────────┘   └─────────────────┘   │   Online        │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A line item copies the menu item's category, name and price at selection
//! time. Editing the catalog later can never change an order that was
//! already placed.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1300 bps = 13% (the cafe's sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::from_bps(crate::DEFAULT_TAX_RATE_BPS)
    }
}

/// `13%`, `8.25%`, `7.5%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else {
            let frac = format!("{:02}", frac);
            write!(f, "{}.{}%", whole, frac.trim_end_matches('0'))
        }
    }
}

// =============================================================================
// Order Identity
// =============================================================================

/// Human-facing order number printed on receipts (`Order #: 1001`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(u64);

impl OrderId {
    #[inline]
    pub const fn new(value: u64) -> Self {
        OrderId(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    #[inline]
    pub const fn next(&self) -> Self {
        OrderId(self.0 + 1)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A purchasable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Grouping shown on the menu screen ("Ice Cream", "Shakes", ...).
    pub category: String,

    /// Display name, unique within the catalog.
    pub name: String,

    /// Unit price in minor units.
    pub price_cents: i64,

    /// Size/variant labels. When non-empty the operator must pick exactly one.
    #[serde(default)]
    pub variants: Vec<String>,
}

impl MenuItem {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        variants: &[&str],
    ) -> Self {
        MenuItem {
            category: category.into(),
            name: name.into(),
            price_cents: price.cents(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether selecting this item starts a customization step.
    #[inline]
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

// =============================================================================
// Order Line Item
// =============================================================================

/// One menu item with quantity and chosen customizations.
/// Uses snapshot pattern to freeze menu data at time of selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Category at time of selection (frozen).
    pub category: String,
    /// Item name at time of selection (frozen).
    pub name: String,
    /// Unit price in minor units at time of selection (frozen).
    pub unit_price_cents: i64,
    /// Always at least 1.
    pub quantity: i64,
    /// Variant first, then topping, in the order they were chosen.
    /// Informational only: they carry no price.
    pub customizations: Vec<String>,
}

impl OrderLineItem {
    /// Snapshots a menu item.
    pub fn from_menu_item(item: &MenuItem, quantity: i64) -> Self {
        OrderLineItem {
            category: item.category.clone(),
            name: item.name.clone(),
            unit_price_cents: item.price_cents,
            quantity,
            customizations: Vec::new(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line amount: unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order Status / Payment / Donation
// =============================================================================

/// Lifecycle of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Items are still being added.
    #[default]
    Draft,
    /// Payment captured, totals frozen.
    Paid,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Draft => write!(f, "Pending"),
            OrderStatus::Paid => write!(f, "Paid"),
        }
    }
}

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Online,
}

impl PaymentMethod {
    /// Menu order on the payment screen.
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::Online];

    /// Maps the operator's numbered choice (1 Cash, 2 Card, 3 Online).
    ///
    /// Anything else is rejected. There is no fallback method: the caller
    /// re-prompts.
    ///
    /// ```rust
    /// use cafe_core::PaymentMethod;
    ///
    /// assert_eq!(PaymentMethod::from_menu_choice(2).unwrap(), PaymentMethod::Card);
    /// assert!(PaymentMethod::from_menu_choice(4).is_err());
    /// ```
    pub fn from_menu_choice(choice: i64) -> CoreResult<Self> {
        usize::try_from(choice)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or_else(|| CoreError::invalid_selection("payment method", choice, Self::ALL.len()))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Card => write!(f, "Card"),
            PaymentMethod::Online => write!(f, "Online"),
        }
    }
}

/// The operator's answer to the charity prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Donation {
    #[default]
    Declined,
    Accepted,
}

impl From<bool> for Donation {
    fn from(accepted: bool) -> Self {
        if accepted {
            Donation::Accepted
        } else {
            Donation::Declined
        }
    }
}

// =============================================================================
// Draft Order
// =============================================================================

/// An order that is still being built. Only the [`OrderBuilder`] mutates it.
///
/// [`OrderBuilder`]: crate::builder::OrderBuilder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftOrder {
    pub(crate) id: OrderId,
    pub(crate) customer_name: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) items: Vec<OrderLineItem>,
}

impl DraftOrder {
    pub(crate) fn new(id: OrderId, customer_name: &str, created_at: DateTime<Utc>) -> Self {
        DraftOrder {
            id,
            customer_name: customer_name.trim().to_string(),
            created_at,
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Line items in the order they were added (= display order).
    pub fn items(&self) -> &[OrderLineItem] {
        &self.items
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Frozen amounts of a finalized order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub donation: Money,
    pub total: Money,
}

// =============================================================================
// Order
// =============================================================================

/// A finalized order: paid, totals frozen, immutable.
///
/// Fields are private; the only way to obtain an `Order` is
/// [`PricingEngine::finalize`], so every instance satisfies
/// `total == subtotal + tax + donation`.
///
/// [`PricingEngine::finalize`]: crate::pricing::PricingEngine::finalize
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    created_at: DateTime<Utc>,
    items: Vec<OrderLineItem>,
    totals: OrderTotals,
    payment_method: PaymentMethod,
    status: OrderStatus,
}

impl Order {
    pub(crate) fn from_draft(draft: DraftOrder, totals: OrderTotals, payment_method: PaymentMethod) -> Self {
        Order {
            id: draft.id,
            customer_name: draft.customer_name,
            created_at: draft.created_at,
            items: draft.items,
            totals,
            payment_method,
            status: OrderStatus::Paid,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Creation instant in the till's local time zone.
    pub fn created_at_local(&self) -> DateTime<Local> {
        self.created_at.with_timezone(&Local)
    }

    /// Local calendar day the order was started on.
    pub fn local_date(&self) -> NaiveDate {
        self.created_at_local().date_naive()
    }

    pub fn items(&self) -> &[OrderLineItem] {
        &self.items
    }

    pub fn totals(&self) -> &OrderTotals {
        &self.totals
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
