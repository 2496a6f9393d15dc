//! # State Module
//!
//! Read-only state built once at startup and owned by the session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │   AppConfig (cafe.toml + env)                                          │
//! │        │                                                                │
//! │        ▼ AppContext::from_config()                                     │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ MenuCatalog  │  │PricingEngine │  │ ReceiptContext   │              │
//! │  │ (the menu)   │  │ tax/donation │  │ store header     │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  Nothing here is global; screens borrow it from the session.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::{
    AppConfig, CurrencySettings, DisplaySettings, MenuSettings, OrderSettings, PricingSettings,
    StoreSettings, CONFIG_FILE_NAME,
};

use cafe_core::{Currency, MenuCatalog, PricingEngine};

use crate::error::AppResult;
use crate::receipt::ReceiptContext;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub catalog: MenuCatalog,
    pub pricing: PricingEngine,
    pub currency: Currency,
    pub receipt: ReceiptContext,
}

impl AppContext {
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        Ok(AppContext {
            catalog: config.catalog()?,
            pricing: config.pricing()?,
            currency: config.currency(),
            receipt: config.receipt_context(),
            config,
        })
    }

    /// Text of the donation prompt, e.g. `Rs.100.00 to Palestine Relief`.
    pub fn donation_offer(&self) -> String {
        format!(
            "{} to {}",
            self.currency.format(self.pricing.donation_amount()),
            self.config.pricing.donation_cause
        )
    }
}
