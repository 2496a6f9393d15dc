//! # View Menu

use std::io::{BufRead, Write};

use cafe_store::OrderLog;

use crate::error::AppResult;
use crate::presenter::Tone;
use crate::session::Session;

impl<R: BufRead, W: Write, L: OrderLog> Session<R, W, L> {
    pub(crate) fn show_menu(&mut self) -> AppResult<()> {
        let catalog = &self.app.catalog;
        let currency = &self.app.currency;
        let console = &mut self.console;

        console.clear()?;
        console.title("OUR MENU")?;

        for group in catalog.categories() {
            console.section(group.category)?;
            for (_, item) in group.items {
                console.line(&format!("{:<30}{}", item.name, currency.format(item.price())))?;
                if item.has_variants() {
                    console.painted(&format!("  ({})", item.variants.join(" / ")), Tone::Muted)?;
                }
            }
        }

        if !catalog.toppings().is_empty() {
            let applies_to = catalog.topping_categories().join(", ");
            console.section(&format!("Toppings ({applies_to})"))?;
            console.line(&catalog.toppings().join(", "))?;
        }

        console.pause()
    }
}
