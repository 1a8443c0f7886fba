//! Application configuration.
//!
//! Loaded from environment variables (a `.env` file is read by `main`), with
//! fallback to defaults. The pricing section is the settings provider for
//! requests that carry no overrides of their own.

use crate::pricing::models::{DomesticShippingCosts, PriceSettings, DEFAULT_EXCHANGE_RATE};

/// Server and default pricing configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub pricing: PriceSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            pricing: PriceSettings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
            None => defaults.port,
        };

        let tiers = DomesticShippingCosts {
            regular: optional_rate(&lookup, "PRICING_SHIPPING_REGULAR")?,
            size60: optional_rate(&lookup, "PRICING_SHIPPING_SIZE60")?,
            size80: optional_rate(&lookup, "PRICING_SHIPPING_SIZE80")?,
            size100: optional_rate(&lookup, "PRICING_SHIPPING_SIZE100")?,
        };
        let has_tiers = tiers != DomesticShippingCosts::default();

        let pricing = PriceSettings {
            exchange_rate: rate(&lookup, "PRICING_EXCHANGE_RATE", DEFAULT_EXCHANGE_RATE)?,
            domestic_shipping_cost: rate(&lookup, "PRICING_DOMESTIC_SHIPPING", 0.0)?,
            domestic_shipping_costs: has_tiers.then_some(tiers),
            international_shipping_rate: rate(&lookup, "PRICING_INTERNATIONAL_RATE", 0.0)?,
            customs_duty_rate: rate(&lookup, "PRICING_CUSTOMS_DUTY_RATE", 0.0)?,
            profit_margin_percent: rate(&lookup, "PRICING_PROFIT_MARGIN", 0.0)?,
            sales_commission_percent: rate(&lookup, "PRICING_SALES_COMMISSION", 0.0)?,
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            pricing,
        })
    }

    /// Address to bind the HTTP listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn rate<F>(lookup: &F, key: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(optional_rate(lookup, key)?.unwrap_or(default))
}

fn optional_rate<F>(lookup: &F, key: &str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidValue(key.to_string())),
        None => Ok(None),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
