//! Pricing input models.
//!
//! Settings are caller-owned and may hold any float, including NaN or negative
//! values. Coercion to safe values happens in the calculators, never here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exchange rate used when the configured one is missing or unusable.
pub const DEFAULT_EXCHANGE_RATE: f64 = 22.0;

/// Parameters for a purchase price calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceSettings {
    /// Domestic currency units per foreign currency unit (JPY per CNY)
    pub exchange_rate: f64,
    /// Flat domestic shipping fee
    pub domestic_shipping_cost: f64,
    /// Per-size overrides for the domestic shipping fee
    pub domestic_shipping_costs: Option<DomesticShippingCosts>,
    /// Freight in foreign currency per kilogram
    pub international_shipping_rate: f64,
    /// Carried for display only; the formula applies a fixed 5% markup instead
    pub customs_duty_rate: f64,
    pub profit_margin_percent: f64,
    pub sales_commission_percent: f64,
}

impl Default for PriceSettings {
    fn default() -> Self {
        Self {
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            domestic_shipping_cost: 0.0,
            domestic_shipping_costs: None,
            international_shipping_rate: 0.0,
            customs_duty_rate: 0.0,
            profit_margin_percent: 0.0,
            sales_commission_percent: 0.0,
        }
    }
}

/// Domestic shipping overrides, one bucket per size tier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomesticShippingCosts {
    pub regular: Option<f64>,
    pub size60: Option<f64>,
    pub size80: Option<f64>,
    pub size100: Option<f64>,
}

impl DomesticShippingCosts {
    /// Configured override for a tier, if any
    pub fn for_tier(&self, tier: SizeTier) -> Option<f64> {
        match tier {
            SizeTier::Regular => self.regular,
            SizeTier::Size60 => self.size60,
            SizeTier::Size80 => self.size80,
            SizeTier::Size100 => self.size100,
        }
    }
}

/// Physical package size class used for domestic shipping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeTier {
    Regular,
    Size60,
    Size80,
    Size100,
}

impl SizeTier {
    /// Map an integer size classification onto the closed tier set.
    ///
    /// Only 30, 60, 80 and 100 are known; everything else has no tier.
    pub fn from_size(size: i64) -> Option<Self> {
        match size {
            30 => Some(SizeTier::Regular),
            60 => Some(SizeTier::Size60),
            80 => Some(SizeTier::Size80),
            100 => Some(SizeTier::Size100),
            _ => None,
        }
    }
}

/// Per-product inputs supplied by the product data source
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCostInput {
    /// Wholesale unit cost in foreign currency
    pub wholesale_cost: f64,
    /// Weight in kilograms, `None` when the product has not been weighed
    pub weight: Option<f64>,
    /// Size classification (30/60/80/100 are meaningful)
    pub size: Option<f64>,
}

/// Every component of a computed price, in domestic currency
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub exchange_rate: Decimal,
    pub landed_cost: Decimal,
    pub international_shipping: Decimal,
    pub domestic_shipping: Decimal,
    pub numerator: Decimal,
    pub denominator: Decimal,
    pub raw_price: Decimal,
    pub final_price: Decimal,
}
