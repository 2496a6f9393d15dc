//! # Place New Order
//!
//! ```text
//! customer name
//!   └─► loop: menu list → item → quantity → size → topping → "another?"
//!         └─► donation? → payment → persist → receipt
//! ```
//!
//! Every numeric answer is checked by the builder; a rejected answer is
//! shown in red and asked again. Answering 0 at the size or topping
//! prompt drops the item being customized.

use std::io::{BufRead, Write};

use cafe_core::validation::validate_customer_name;
use cafe_core::{
    AddOutcome, CoreResult, Currency, CustomizationRequest, Donation, MenuCatalog, OrderBuilder,
    PaymentMethod,
};
use cafe_store::OrderLog;
use chrono::Utc;
use tracing::{error, info};

use crate::error::{AppError, AppResult};
use crate::input::Console;
use crate::presenter::Tone;
use crate::receipt::render_receipt;
use crate::session::Session;

const CUSTOMIZE_PROMPT: &str = "Choice (0 to cancel item): ";

impl<R: BufRead, W: Write, L: OrderLog> Session<R, W, L> {
    pub(crate) fn place_order(&mut self) -> AppResult<()> {
        self.console.clear()?;
        self.console.title("PLACE NEW ORDER")?;

        let customer = loop {
            let name = self.console.prompt_line("Enter customer name: ")?;
            match validate_customer_name(&name) {
                Ok(name) => break name,
                Err(e) => self.console.error(&e.to_string())?,
            }
        };

        let catalog = &self.app.catalog;
        let console = &mut self.console;
        let id = self.store.next_order_id();

        let mut builder = OrderBuilder::new(catalog);
        builder.start_order(id, &customer, Utc::now())?;
        info!(order_id = %id, "Taking order");

        loop {
            print_numbered_menu(console, catalog, &self.app.currency)?;

            let select_prompt = format!("Select item (1-{}): ", catalog.len());
            let index = retry(console, &select_prompt, |n| catalog.item_at(n).map(|_| n))?;
            let outcome = retry(console, "Enter quantity: ", |qty| builder.add_line_item(index, qty))?;

            let kept = match outcome {
                AddOutcome::Added => true,
                AddOutcome::NeedsCustomization(request) => customize(console, &mut builder, &request)?,
            };

            if !kept {
                console.line("Item cancelled.")?;
            } else if let Some(line) = builder.draft().and_then(|d| d.items().last()) {
                let mut added = format!("Added {} x{}", line.name, line.quantity);
                if !line.customizations.is_empty() {
                    added.push_str(&format!(" ({})", line.customizations.join(", ")));
                }
                console.success(&added)?;
            }

            if builder.draft().map_or(true, |d| d.items().is_empty()) {
                continue;
            }

            console.blank()?;
            if !console.prompt_yes_no("Add another item? (y/n): ")? {
                break;
            }
        }

        builder.finish_items()?;

        console.blank()?;
        let donate = console.prompt_yes_no(&format!(
            "Would you like to donate {}? (y/n): ",
            self.app.donation_offer()
        ))?;

        console.blank()?;
        console.line("Payment method:")?;
        for (i, method) in PaymentMethod::ALL.iter().enumerate() {
            console.line(&format!("{}. {}", i + 1, method))?;
        }
        let payment = retry(console, "Choice: ", PaymentMethod::from_menu_choice)?;

        let order = builder.finalize(&self.app.pricing, Donation::from(donate), payment)?;

        match self.store.persist(order) {
            Ok(order) => {
                let receipt = render_receipt(order, &self.app.receipt);
                console.blank()?;
                console.block(&receipt)?;
                console.success(&format!("Order #{} completed.", order.id()))?;
            }
            Err(e) => {
                error!(order_id = %id, error = %e, "Order could not be saved");
                console.error(&format!("Order #{id} could not be saved: {e}"))?;
                console.error("The order was NOT recorded. Please try again.")?;
            }
        }

        console.pause()
    }
}

/// Menu list used while ordering: `  1. Chocolate Dream          Rs.100.00`.
fn print_numbered_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &MenuCatalog,
    currency: &Currency,
) -> AppResult<()> {
    console.blank()?;
    for (i, item) in catalog.list_items().iter().enumerate() {
        console.line(&format!(
            "{:>3}. {:<25}{}",
            i + 1,
            item.name,
            currency.format(item.price())
        ))?;
    }
    Ok(())
}

/// Asks for the size, then the topping. Choice 0 drops the item and
/// returns `false`.
fn customize<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    builder: &mut OrderBuilder<'_>,
    request: &CustomizationRequest,
) -> AppResult<bool> {
    if !request.variants.is_empty() {
        console.blank()?;
        console.line("Select size:")?;
        list_choices(console, &request.variants)?;
        let chosen = retry(console, CUSTOMIZE_PROMPT, |n| match n {
            0 => builder.cancel_pending().map(|_| false),
            n => builder.choose_variant(n).map(|_| true),
        })?;
        if !chosen {
            return Ok(false);
        }
    }

    if let Some(toppings) = &request.toppings {
        console.blank()?;
        console.line(&format!("Select topping (1-{}):", toppings.len()))?;
        list_choices(console, toppings)?;
        let chosen = retry(console, CUSTOMIZE_PROMPT, |n| match n {
            0 => builder.cancel_pending().map(|_| false),
            n => builder.choose_topping(n).map(|_| true),
        })?;
        if !chosen {
            return Ok(false);
        }
    }

    Ok(true)
}

fn list_choices<R: BufRead, W: Write>(console: &mut Console<R, W>, labels: &[String]) -> AppResult<()> {
    for (i, label) in labels.iter().enumerate() {
        let text = format!("  {}. {}", i + 1, label);
        console.painted(&text, Tone::Muted)?;
    }
    Ok(())
}

/// Reads numbers until `attempt` accepts one. Errors the operator can fix
/// by typing again are shown and asked again; any other error ends the attempt.
fn retry<R, W, T>(
    console: &mut Console<R, W>,
    prompt: &str,
    mut attempt: impl FnMut(i64) -> CoreResult<T>,
) -> AppResult<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        let n = console.prompt_number(prompt)?;
        match attempt(n).map_err(AppError::from) {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() => console.error(&e.to_string())?,
            Err(e) => return Err(e),
        }
    }
}
