//! # Console Configuration
//!
//! Loaded once at startup; read-only afterwards.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CAFE_STORE_NAME="Rukaab Cafe"                                      │
//! │     CAFE_TAX_RATE=13          (percent)                                │
//! │     CAFE_DONATION=100         (rupees)                                 │
//! │     CAFE_FIRST_ORDER_ID=1001                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config PATH / CAFE_CONFIG, else                                  │
//! │     ~/.config/cafe/cafe.toml (Linux)                                   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     13% tax, Rs.100 donation, the house menu                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Rukaab Cafe"
//! address = "Gulberg, Lahore"
//! phone = "042-1234567"
//!
//! [pricing]
//! tax_rate_bps = 1300
//! donation_minor = 10000
//! donation_cause = "Palestine Relief"
//!
//! [display]
//! color = true
//! receipt_width = 60
//!
//! [[menu.items]]
//! category = "Beverages"
//! name = "Karak Chai"
//! price_cents = 10000
//! variants = ["Regular", "Masala"]
//! ```

use std::path::{Path, PathBuf};

use cafe_core::catalog::{default_items, default_toppings};
use cafe_core::validation::{validate_donation_cents, validate_tax_rate_bps};
use cafe_core::{
    Currency, MenuCatalog, MenuItem, Money, OrderId, PricingConfig, PricingEngine, TaxRate,
    DEFAULT_DONATION_MINOR, DEFAULT_FIRST_ORDER_ID, DEFAULT_TAX_RATE_BPS,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::receipt::ReceiptContext;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "cafe.toml";

const MIN_RECEIPT_WIDTH: usize = 40;
const MAX_RECEIPT_WIDTH: usize = 120;

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: "Rukaab Cafe".to_string(),
            address: String::new(),
            phone: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencySettings {
    pub code: String,
    pub symbol: String,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        let currency = Currency::default();
        CurrencySettings {
            code: currency.code,
            symbol: currency.symbol,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    /// Sales tax in basis points (1300 = 13%).
    pub tax_rate_bps: u32,
    /// Opt-in donation in minor units (10000 = Rs.100.00).
    pub donation_minor: i64,
    /// Named in the donation prompt.
    pub donation_cause: String,
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            donation_minor: DEFAULT_DONATION_MINOR,
            donation_cause: "Palestine Relief".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderSettings {
    /// First id handed out in each run.
    pub first_order_id: u64,
    /// Relative to the data directory.
    pub log_file: PathBuf,
    /// Relative to the data directory.
    pub feedback_file: PathBuf,
}

impl Default for OrderSettings {
    fn default() -> Self {
        OrderSettings {
            first_order_id: DEFAULT_FIRST_ORDER_ID,
            log_file: PathBuf::from("orders.txt"),
            feedback_file: PathBuf::from("feedback.txt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// ANSI colors and screen clearing.
    pub color: bool,
    pub receipt_width: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            color: true,
            receipt_width: 60,
        }
    }
}

/// Scalar lists come before `items` so TOML output keeps the
/// array of tables last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    pub toppings: Vec<String>,
    /// Categories whose items ask for a topping.
    pub topping_categories: Vec<String>,
    pub items: Vec<MenuItem>,
}

impl Default for MenuSettings {
    fn default() -> Self {
        MenuSettings {
            toppings: default_toppings(),
            topping_categories: vec!["Ice Cream".to_string()],
            items: default_items(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub orders: OrderSettings,

    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub menu: MenuSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file: an explicit path must exist; the platform default
    ///    path is optional
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `CAFE_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("CAFE_STORE_NAME") {
            debug!(store = %name, "Overriding store name from environment");
            self.store.name = name;
        }

        if let Some(rate) = lookup("CAFE_TAX_RATE") {
            match parse_hundredths(&rate).and_then(|bps| u32::try_from(bps).ok()) {
                Some(bps) => {
                    debug!(tax_rate_bps = bps, "Overriding tax rate from environment");
                    self.pricing.tax_rate_bps = bps;
                }
                None => warn!(value = %rate, "Ignoring invalid CAFE_TAX_RATE"),
            }
        }

        if let Some(amount) = lookup("CAFE_DONATION") {
            match parse_hundredths(&amount) {
                Some(minor) => {
                    debug!(donation_minor = minor, "Overriding donation from environment");
                    self.pricing.donation_minor = minor;
                }
                None => warn!(value = %amount, "Ignoring invalid CAFE_DONATION"),
            }
        }

        if let Some(id) = lookup("CAFE_FIRST_ORDER_ID") {
            match id.trim().parse::<u64>() {
                Ok(first) => self.orders.first_order_id = first,
                Err(_) => warn!(value = %id, "Ignoring invalid CAFE_FIRST_ORDER_ID"),
            }
        }
    }

    /// Validates the configuration, including the menu.
    pub fn validate(&self) -> AppResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(AppError::invalid_config("store.name must not be empty"));
        }

        validate_tax_rate_bps(self.pricing.tax_rate_bps)
            .map_err(|e| AppError::invalid_config(format!("pricing: {e}")))?;
        validate_donation_cents(self.pricing.donation_minor)
            .map_err(|e| AppError::invalid_config(format!("pricing: {e}")))?;

        if self.orders.first_order_id == 0 {
            return Err(AppError::invalid_config("orders.first_order_id must be at least 1"));
        }
        if self.orders.log_file.as_os_str().is_empty() || self.orders.feedback_file.as_os_str().is_empty() {
            return Err(AppError::invalid_config("orders.log_file and orders.feedback_file are required"));
        }
        if self.orders.log_file == self.orders.feedback_file {
            return Err(AppError::invalid_config(
                "orders.log_file and orders.feedback_file must differ",
            ));
        }

        let width = self.display.receipt_width;
        if !(MIN_RECEIPT_WIDTH..=MAX_RECEIPT_WIDTH).contains(&width) {
            return Err(AppError::invalid_config(format!(
                "display.receipt_width must be between {MIN_RECEIPT_WIDTH} and {MAX_RECEIPT_WIDTH}, got {width}"
            )));
        }

        self.catalog()
            .map_err(|e| AppError::invalid_config(format!("menu: {e}")))?;

        Ok(())
    }

    // =========================================================================
    // Derived Values
    // =========================================================================

    pub fn catalog(&self) -> AppResult<MenuCatalog> {
        Ok(MenuCatalog::new(
            self.menu.items.clone(),
            self.menu.toppings.clone(),
            self.menu.topping_categories.clone(),
        )?)
    }

    pub fn pricing(&self) -> AppResult<PricingEngine> {
        Ok(PricingEngine::new(PricingConfig {
            tax_rate: TaxRate::from_bps(self.pricing.tax_rate_bps),
            donation_amount: Money::from_cents(self.pricing.donation_minor),
        })?)
    }

    pub fn currency(&self) -> Currency {
        Currency::new(&self.currency.code, &self.currency.symbol)
    }

    pub fn first_order_id(&self) -> OrderId {
        OrderId::new(self.orders.first_order_id)
    }

    pub fn receipt_context(&self) -> ReceiptContext {
        ReceiptContext {
            store_name: self.store.name.clone(),
            address: self.store.address.clone(),
            phone: self.store.phone.clone(),
            currency: self.currency(),
            tax_rate: TaxRate::from_bps(self.pricing.tax_rate_bps),
            width: self.display.receipt_width,
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rukaab", "cafe")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

/// Parses `13`, `8.25` or `99.5` into hundredths (1300, 825, 9950).
fn parse_hundredths(text: &str) -> Option<i64> {
    let text = text.trim();
    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (text, ""),
    };
    if whole.is_empty() || frac.len() > 2 || !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = whole.parse().ok()?;
    let frac: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac)
}

// =============================================================================
// Unit Tests
// =============================================================================
