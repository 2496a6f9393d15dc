//! # Orders & Reports
//!
//! Covers the orders of the current run only.

use std::io::{BufRead, Write};

use cafe_store::OrderLog;
use chrono::Local;

use crate::error::AppResult;
use crate::receipt::WALK_IN;
use crate::session::Session;

impl<R: BufRead, W: Write, L: OrderLog> Session<R, W, L> {
    pub(crate) fn show_reports(&mut self) -> AppResult<()> {
        let currency = &self.app.currency;
        let store = &self.store;
        let console = &mut self.console;
        let today = Local::now().date_naive();

        console.clear()?;
        console.title("ORDERS & REPORTS")?;
        console.blank()?;
        console.line(&format!(
            "Total Daily Revenue: {}",
            currency.format(store.daily_revenue(today))
        ))?;
        console.line(&format!("Total Orders this session: {}", store.order_count()))?;

        if !store.orders().is_empty() {
            console.section("Orders")?;
            for order in store.orders() {
                let customer = match order.customer_name() {
                    "" => WALK_IN,
                    name => name,
                };
                console.line(&format!(
                    "#{}  {:<20} {:>12}  {}",
                    order.id(),
                    customer,
                    currency.format(order.totals().total),
                    order.payment_method()
                ))?;
            }
        }

        console.pause()
    }
}
