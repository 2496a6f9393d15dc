//! # Pricing Engine
//!
//! Turns line items into frozen totals.
//!
//! ## Calculation
//! ```text
//! subtotal = Σ (unit_price × quantity)          exact, integer paisa
//! tax      = round_half_up(subtotal × rate)     once, on the subtotal
//! donation = configured amount | 0              operator's choice
//! total    = subtotal + tax + donation          exact
//! ```
//!
//! Tax is never computed per line and never compounded with the donation.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{DraftOrder, Donation, Order, OrderLineItem, OrderTotals, PaymentMethod, TaxRate};
use crate::validation::{validate_donation_cents, validate_tax_rate_bps};
use crate::DEFAULT_DONATION_MINOR;

/// Rates loaded once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub tax_rate: TaxRate,
    /// Amount added when the customer opts in to the donation.
    pub donation_amount: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            tax_rate: TaxRate::default(),
            donation_amount: Money::from_cents(DEFAULT_DONATION_MINOR),
        }
    }
}

/// Pure calculator over a [`PricingConfig`].
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Builds an engine after checking the rates (tax 0-100%, donation > 0).
    pub fn new(config: PricingConfig) -> CoreResult<Self> {
        validate_tax_rate_bps(config.tax_rate.bps())?;
        validate_donation_cents(config.donation_amount.cents())?;
        Ok(PricingEngine { config })
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.config.tax_rate
    }

    pub fn donation_amount(&self) -> Money {
        self.config.donation_amount
    }

    /// Computes subtotal, tax, donation and total.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::{Donation, MenuCatalog, OrderLineItem, PricingEngine};
    ///
    /// let catalog = MenuCatalog::rukaab_default();
    /// let dream = catalog.item_at(1).unwrap();
    /// let items = [OrderLineItem::from_menu_item(dream, 2)];
    ///
    /// let totals = PricingEngine::default().compute_totals(&items, Donation::Declined);
    /// assert_eq!(totals.subtotal.cents(), 20_000);
    /// assert_eq!(totals.tax.cents(), 2_600);
    /// assert_eq!(totals.total.cents(), 22_600);
    /// ```
    pub fn compute_totals(&self, items: &[OrderLineItem], donation: Donation) -> OrderTotals {
        let subtotal: Money = items.iter().map(OrderLineItem::line_total).sum();
        let tax = subtotal.calculate_tax(self.config.tax_rate);
        let donation = match donation {
            Donation::Accepted => self.config.donation_amount,
            Donation::Declined => Money::zero(),
        };

        OrderTotals {
            subtotal,
            tax,
            donation,
            total: subtotal + tax + donation,
        }
    }

    /// Freezes a draft into a paid [`Order`].
    pub fn finalize(&self, draft: DraftOrder, donation: Donation, payment_method: PaymentMethod) -> Order {
        let totals = self.compute_totals(draft.items(), donation);
        info!(
            order_id = %draft.id(),
            subtotal = %totals.subtotal,
            tax = %totals.tax,
            donation = %totals.donation,
            total = %totals.total,
            payment = %payment_method,
            "Order finalized"
        );
        Order::from_draft(draft, totals, payment_method)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCatalog;
    use crate::types::{MenuItem, OrderId, OrderStatus};
    use chrono::Utc;

    fn lines(selections: &[(i64, i64)]) -> Vec<OrderLineItem> {
        let catalog = MenuCatalog::rukaab_default();
        selections
            .iter()
            .map(|&(index, qty)| OrderLineItem::from_menu_item(catalog.item_at(index).unwrap(), qty))
            .collect()
    }

    #[test]
    fn test_two_chocolate_dreams_no_donation() {
        let totals = PricingEngine::default().compute_totals(&lines(&[(1, 2)]), Donation::Declined);

        assert_eq!(totals.subtotal, Money::from_major_minor(200, 0));
        assert_eq!(totals.tax, Money::from_major_minor(26, 0));
        assert_eq!(totals.donation, Money::zero());
        assert_eq!(totals.total, Money::from_major_minor(226, 0));
    }

    #[test]
    fn test_one_chocolate_dream_with_donation() {
        let totals = PricingEngine::default().compute_totals(&lines(&[(1, 1)]), Donation::Accepted);

        assert_eq!(totals.subtotal, Money::from_major_minor(100, 0));
        assert_eq!(totals.tax, Money::from_major_minor(13, 0));
        assert_eq!(totals.donation, Money::from_major_minor(100, 0));
        assert_eq!(totals.total, Money::from_major_minor(213, 0));
    }

    #[test]
    fn test_tax_is_on_subtotal_not_per_line() {
        let items = vec![
            OrderLineItem::from_menu_item(&MenuItem::new("X", "A", Money::from_cents(50), &[]), 1),
            OrderLineItem::from_menu_item(&MenuItem::new("X", "B", Money::from_cents(50), &[]), 1),
        ];
        // Per line: 6.5 → 7 each = 14. On the subtotal: 100 × 13% = 13.
        let totals = PricingEngine::default().compute_totals(&items, Donation::Declined);
        assert_eq!(totals.tax.cents(), 13);
    }

    #[test]
    fn test_total_identity_holds() {
        let engine = PricingEngine::default();
        let items = lines(&[(1, 3), (5, 1), (7, 2), (9, 4)]);
        for donation in [Donation::Accepted, Donation::Declined] {
            let t = engine.compute_totals(&items, donation);
            let expected: i64 = items.iter().map(|l| l.unit_price_cents * l.quantity).sum();
            assert_eq!(t.subtotal.cents(), expected);
            assert_eq!(t.total, t.subtotal + t.tax + t.donation);
        }
    }

    #[test]
    fn test_most_expensive_line_stays_in_range() {
        let items = vec![MenuItem::new("Desserts", "Wedding Cake", Money::from_cents(crate::MAX_PRICE_CENTS), &[])];
        let catalog = MenuCatalog::new(items, vec![], vec![]).unwrap();
        let item = catalog.item_at(1).unwrap();
        let lines = vec![OrderLineItem::from_menu_item(item, crate::MAX_ITEM_QUANTITY); 3];

        let totals = PricingEngine::default().compute_totals(&lines, Donation::Accepted);
        assert_eq!(totals.subtotal.cents(), 3 * 999 * 100_000_000);
        assert_eq!(totals.total, totals.subtotal + totals.tax + totals.donation);
    }

    #[test]
    fn test_empty_items() {
        let totals = PricingEngine::default().compute_totals(&[], Donation::Declined);
        assert_eq!(totals, OrderTotals::default());
    }

    #[test]
    fn test_custom_config() {
        let engine = PricingEngine::new(PricingConfig {
            tax_rate: TaxRate::from_bps(825),
            donation_amount: Money::from_cents(5_000),
        })
        .unwrap();

        // Rs.120.00 × 8.25% = Rs.9.90
        let totals = engine.compute_totals(&lines(&[(3, 1)]), Donation::Accepted);
        assert_eq!(totals.tax.cents(), 990);
        assert_eq!(totals.total.cents(), 12_000 + 990 + 5_000);
    }

    #[test]
    fn test_new_rejects_bad_rates() {
        assert!(PricingEngine::new(PricingConfig {
            tax_rate: TaxRate::from_bps(10_001),
            ..PricingConfig::default()
        })
        .is_err());
        assert!(PricingEngine::new(PricingConfig {
            donation_amount: Money::zero(),
            ..PricingConfig::default()
        })
        .is_err());
    }

    #[test]
    fn test_finalize_sets_paid() {
        let mut draft = DraftOrder::new(OrderId::new(1005), "Bilal", Utc::now());
        draft.items = lines(&[(8, 2)]);

        let order = PricingEngine::default().finalize(draft, Donation::Declined, PaymentMethod::Online);
        assert_eq!(order.status(), OrderStatus::Paid);
        assert_eq!(order.payment_method(), PaymentMethod::Online);
        assert_eq!(order.totals().subtotal.cents(), 30_000);
        assert_eq!(order.totals().tax.cents(), 3_900);
        assert_eq!(order.items().len(), 1);
    }
}
