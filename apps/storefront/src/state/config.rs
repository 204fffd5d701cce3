//! # Configuration State
//!
//! Presentation configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GROCER_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex is needed.

use serde::{Deserialize, Serialize};

use grocer_core::Money;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the header.
    pub store_name: String,

    /// Currency symbol for display.
    pub currency_symbol: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Grocery Store".to_string(),
            currency_symbol: "₹".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `GROCER_STORE_NAME`: override the header store name
    /// - `GROCER_CURRENCY_SYMBOL`: override the display currency symbol
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("GROCER_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(symbol) = std::env::var("GROCER_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats an amount as a currency string.
    ///
    /// Whole units only; the catalog has no minor units.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_units(99)), "₹99");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let units = amount.units();
        format!(
            "{}{}{}",
            if units < 0 { "-" } else { "" },
            self.currency_symbol,
            units.abs()
        )
    }
}
