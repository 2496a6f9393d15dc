//! # Order Builder
//!
//! Accumulates line items into a [`DraftOrder`] while the operator takes an
//! order, then hands the draft to the pricing engine.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Empty ──start_order()──► Building ◄──────────────────────┐            │
//! │                              │  │                          │            │
//! │            add_line_item()   │  │ add_line_item()          │            │
//! │            (no variants)     │  │ (variants/toppings)      │            │
//! │              ┌───────────────┘  ▼                          │            │
//! │              │        AwaitingCustomization ──choose_*()───┤            │
//! │              │                  │                          │            │
//! │              │                  └──cancel_pending()────────┘            │
//! │              ▼                                                          │
//! │       finish_items() ──► ReadyForPayment ──finalize()──► Finalized      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A call that fails leaves the builder exactly as it was, so the console
//! can show the error and ask again.

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::catalog::MenuCatalog;
use crate::error::{CoreError, CoreResult};
use crate::pricing::PricingEngine;
use crate::types::{DraftOrder, Donation, Order, OrderId, OrderLineItem, PaymentMethod};
use crate::validation::{validate_customer_name, validate_quantity, validate_selection};

// =============================================================================
// Builder State
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Empty,
    Building,
    AwaitingCustomization,
    ReadyForPayment,
    Finalized,
}

impl fmt::Display for BuilderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BuilderState::Empty => "not started",
            BuilderState::Building => "building",
            BuilderState::AwaitingCustomization => "awaiting customization",
            BuilderState::ReadyForPayment => "ready for payment",
            BuilderState::Finalized => "finalized",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// The choices the operator has to make before a selected item is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationRequest {
    pub item_name: String,
    /// Variant labels, 1-based on screen. Empty when the item has none.
    pub variants: Vec<String>,
    /// Topping labels, present only for categories that take toppings.
    pub toppings: Option<Vec<String>>,
}

/// Result of [`OrderBuilder::add_line_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The line item is on the draft.
    Added,
    /// The item waits for [`OrderBuilder::choose_variant`] and/or
    /// [`OrderBuilder::choose_topping`].
    NeedsCustomization(CustomizationRequest),
}

/// What is still missing after a customization choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomizationProgress {
    NeedsTopping,
    /// The line item was appended.
    Complete,
}

/// An item selected but not yet on the draft.
#[derive(Debug, Clone)]
struct PendingItem {
    line: OrderLineItem,
    variants: Vec<String>,
    toppings: Vec<String>,
    variant_chosen: bool,
}

impl PendingItem {
    fn needs_variant(&self) -> bool {
        !self.variants.is_empty() && !self.variant_chosen
    }

    fn needs_topping(&self) -> bool {
        !self.toppings.is_empty()
    }
}

// =============================================================================
// Order Builder
// =============================================================================

/// Builds one order against a borrowed catalog.
///
/// One builder takes one order: after [`finalize`](Self::finalize) it stays
/// `Finalized` and the console creates a new builder for the next order.
#[derive(Debug)]
pub struct OrderBuilder<'a> {
    catalog: &'a MenuCatalog,
    state: BuilderState,
    draft: Option<DraftOrder>,
    pending: Option<PendingItem>,
}

impl<'a> OrderBuilder<'a> {
    pub fn new(catalog: &'a MenuCatalog) -> Self {
        OrderBuilder {
            catalog,
            state: BuilderState::Empty,
            draft: None,
            pending: None,
        }
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    pub fn draft(&self) -> Option<&DraftOrder> {
        self.draft.as_ref()
    }

    /// The item waiting for a variant or topping, if any.
    pub fn pending_item(&self) -> Option<&OrderLineItem> {
        self.pending.as_ref().map(|p| &p.line)
    }

    /// Opens a fresh draft. The customer name is trimmed and may be empty.
    pub fn start_order(
        &mut self,
        id: OrderId,
        customer_name: &str,
        created_at: DateTime<Utc>,
    ) -> CoreResult<&DraftOrder> {
        self.expect_state(BuilderState::Empty, "start an order")?;
        let name = validate_customer_name(customer_name)?;

        debug!(order_id = %id, customer = %name, "Order started");
        self.state = BuilderState::Building;
        Ok(self.draft.insert(DraftOrder::new(id, &name, created_at)))
    }

    /// Selects a menu item (1-based) with a quantity.
    ///
    /// ## Errors
    /// - `InvalidState` unless the builder is `Building`
    /// - `InvalidSelection` for an index outside `1..=catalog.len()`
    /// - `InvalidQuantity` for a quantity outside `1..=999`
    pub fn add_line_item(&mut self, menu_index: i64, quantity: i64) -> CoreResult<AddOutcome> {
        self.expect_state(BuilderState::Building, "add items")?;
        let item = self.catalog.item_at(menu_index)?;
        validate_quantity(quantity)?;

        let line = OrderLineItem::from_menu_item(item, quantity);
        let toppings = if self.catalog.takes_toppings(item) {
            self.catalog.toppings().to_vec()
        } else {
            Vec::new()
        };

        if !item.has_variants() && toppings.is_empty() {
            self.push_line(line);
            return Ok(AddOutcome::Added);
        }

        let request = CustomizationRequest {
            item_name: item.name.clone(),
            variants: item.variants.clone(),
            toppings: (!toppings.is_empty()).then(|| toppings.clone()),
        };
        self.pending = Some(PendingItem {
            line,
            variants: item.variants.clone(),
            toppings,
            variant_chosen: false,
        });
        self.state = BuilderState::AwaitingCustomization;

        Ok(AddOutcome::NeedsCustomization(request))
    }

    /// Picks the variant of the pending item (1-based).
    pub fn choose_variant(&mut self, choice: i64) -> CoreResult<CustomizationProgress> {
        let state = self.state;
        let pending = self
            .pending
            .as_mut()
            .filter(|p| p.needs_variant())
            .ok_or_else(|| CoreError::invalid_state("choose a variant", state))?;

        let idx = validate_selection("variant", choice, pending.variants.len())?;
        pending.line.customizations.push(pending.variants[idx].clone());
        pending.variant_chosen = true;

        if pending.needs_topping() {
            Ok(CustomizationProgress::NeedsTopping)
        } else {
            self.complete_pending();
            Ok(CustomizationProgress::Complete)
        }
    }

    /// Picks the topping of the pending item (1-based). The variant, if the
    /// item has variants, must be chosen first.
    pub fn choose_topping(&mut self, choice: i64) -> CoreResult<CustomizationProgress> {
        let state = self.state;
        let pending = self
            .pending
            .as_mut()
            .filter(|p| p.needs_topping() && !p.needs_variant())
            .ok_or_else(|| CoreError::invalid_state("choose a topping", state))?;

        let idx = validate_selection("topping", choice, pending.toppings.len())?;
        pending.line.customizations.push(pending.toppings[idx].clone());
        self.complete_pending();

        Ok(CustomizationProgress::Complete)
    }

    /// Drops the item awaiting customization.
    pub fn cancel_pending(&mut self) -> CoreResult<()> {
        self.expect_state(BuilderState::AwaitingCustomization, "cancel an item")?;
        if let Some(pending) = self.pending.take() {
            debug!(item = %pending.line.name, "Pending item cancelled");
        }
        self.state = BuilderState::Building;
        Ok(())
    }

    /// Closes the item list.
    pub fn finish_items(&mut self) -> CoreResult<&DraftOrder> {
        self.expect_state(BuilderState::Building, "finish items")?;

        let draft = match self.draft.as_ref() {
            Some(draft) if !draft.items.is_empty() => draft,
            _ => return Err(CoreError::EmptyOrder),
        };

        self.state = BuilderState::ReadyForPayment;
        Ok(draft)
    }

    /// Prices the draft and captures the payment method.
    pub fn finalize(
        &mut self,
        pricing: &PricingEngine,
        donation: Donation,
        payment_method: PaymentMethod,
    ) -> CoreResult<Order> {
        self.expect_state(BuilderState::ReadyForPayment, "take payment")?;
        let draft = self
            .draft
            .take()
            .ok_or_else(|| CoreError::invalid_state("take payment", BuilderState::Empty))?;

        self.state = BuilderState::Finalized;
        Ok(pricing.finalize(draft, donation, payment_method))
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn expect_state(&self, expected: BuilderState, operation: &str) -> CoreResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(CoreError::invalid_state(operation, self.state))
        }
    }

    fn complete_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.push_line(pending.line);
        }
        self.state = BuilderState::Building;
    }

    fn push_line(&mut self, line: OrderLineItem) {
        if let Some(draft) = self.draft.as_mut() {
            debug!(
                order_id = %draft.id,
                item = %line.name,
                quantity = line.quantity,
                "Line item added"
            );
            draft.items.push(line);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
