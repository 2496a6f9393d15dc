//! # Receipt Renderer
//!
//! Pure formatting of a finalized order; nothing here writes to the screen.
//!
//! ```text
//! ============================================================
//!                         RUKAAB CAFE
//!                           RECEIPT
//! ------------------------------------------------------------
//! Order #: 1001
//! Customer: Ayesha
//! Time: 2026-10-14 13:05:22
//! ------------------------------------------------------------
//! Chocolate Dream x2                                 Rs.200.00
//!    + Single Scoop
//!    + Caramel
//! ------------------------------------------------------------
//! Subtotal:                                          Rs.200.00
//! Tax (13%):                                          Rs.26.00
//! TOTAL:                                             Rs.226.00
//! Payment: Cash
//! ------------------------------------------------------------
//!               Thank you for visiting Rukaab Cafe!
//! ============================================================
//! ```

use cafe_core::{Currency, Order, TaxRate};

use crate::presenter::center;

/// Shown when no customer name was given.
pub const WALK_IN: &str = "Walk-in";

/// Everything about the till that appears on a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptContext {
    pub store_name: String,
    pub address: String,
    pub phone: String,
    pub currency: Currency,
    pub tax_rate: TaxRate,
    pub width: usize,
}

impl ReceiptContext {
    pub fn footer(&self) -> String {
        format!("Thank you for visiting {}!", self.store_name)
    }
}

pub fn render_receipt(order: &Order, ctx: &ReceiptContext) -> String {
    let width = ctx.width;
    let heavy = "=".repeat(width);
    let light = "-".repeat(width);
    let money = |m| ctx.currency.format(m);
    let totals = order.totals();

    let mut lines: Vec<String> = Vec::new();
    lines.push(heavy.clone());
    lines.push(center(&ctx.store_name.to_uppercase(), width));
    if !ctx.address.is_empty() {
        lines.push(center(&ctx.address, width));
    }
    if !ctx.phone.is_empty() {
        lines.push(center(&format!("Tel: {}", ctx.phone), width));
    }
    lines.push(center("RECEIPT", width));
    lines.push(light.clone());

    let customer = match order.customer_name() {
        "" => WALK_IN,
        name => name,
    };
    lines.push(format!("Order #: {}", order.id()));
    lines.push(format!("Customer: {customer}"));
    lines.push(format!("Time: {}", order.created_at_local().format("%Y-%m-%d %H:%M:%S")));
    lines.push(light.clone());

    for item in order.items() {
        let label = format!("{} x{}", item.name, item.quantity);
        lines.push(columns(&label, &money(item.line_total()), width));
        for detail in &item.customizations {
            lines.push(format!("   + {detail}"));
        }
    }
    lines.push(light.clone());

    lines.push(columns("Subtotal:", &money(totals.subtotal), width));
    lines.push(columns(&format!("Tax ({}):", ctx.tax_rate), &money(totals.tax), width));
    if !totals.donation.is_zero() {
        lines.push(columns("Donation:", &money(totals.donation), width));
    }
    lines.push(columns("TOTAL:", &money(totals.total), width));
    lines.push(format!("Payment: {}", order.payment_method()));
    lines.push(light);
    lines.push(center(&ctx.footer(), width));
    lines.push(heavy);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// `left` flush left, `right` flush right, at least one space between.
fn columns(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}
