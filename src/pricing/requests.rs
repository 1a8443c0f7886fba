//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use super::models::{DomesticShippingCosts, PriceSettings};

/// Request to calculate a purchase price
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePriceRequest {
    #[serde(default)]
    pub wholesale_cost: f64,
    /// Raw weight field: number, numeric text, or absent
    #[serde(default)]
    pub weight: Value,
    #[serde(default)]
    pub size: Option<f64>,
    /// Per-request overrides on top of the configured settings
    #[serde(default)]
    pub settings: Option<PriceSettingsOverride>,
}

/// Partial settings; unset fields keep the configured value
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSettingsOverride {
    pub exchange_rate: Option<f64>,
    pub domestic_shipping_cost: Option<f64>,
    pub domestic_shipping_costs: Option<DomesticShippingCosts>,
    pub international_shipping_rate: Option<f64>,
    pub customs_duty_rate: Option<f64>,
    pub profit_margin_percent: Option<f64>,
    pub sales_commission_percent: Option<f64>,
}

impl PriceSettingsOverride {
    pub fn apply(self, base: &PriceSettings) -> PriceSettings {
        PriceSettings {
            exchange_rate: self.exchange_rate.unwrap_or(base.exchange_rate),
            domestic_shipping_cost: self
                .domestic_shipping_cost
                .unwrap_or(base.domestic_shipping_cost),
            domestic_shipping_costs: self
                .domestic_shipping_costs
                .or_else(|| base.domestic_shipping_costs.clone()),
            international_shipping_rate: self
                .international_shipping_rate
                .unwrap_or(base.international_shipping_rate),
            customs_duty_rate: self.customs_duty_rate.unwrap_or(base.customs_duty_rate),
            profit_margin_percent: self
                .profit_margin_percent
                .unwrap_or(base.profit_margin_percent),
            sales_commission_percent: self
                .sales_commission_percent
                .unwrap_or(base.sales_commission_percent),
        }
    }
}

/// Request to normalize a raw weight field
#[derive(Debug, Deserialize)]
pub struct ExtractWeightRequest {
    #[serde(default)]
    pub weight: Value,
}

/// Request to format an amount for display
#[derive(Debug, Deserialize)]
pub struct FormatPriceRequest {
    pub amount: Decimal,
}
