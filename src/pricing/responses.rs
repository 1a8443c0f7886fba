//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::PriceBreakdown;

/// Domestic currency reported alongside every price
pub const DOMESTIC_CURRENCY: &str = "JPY";

/// Response for a purchase price calculation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePriceResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub formatted: String,
    pub currency: String,
    pub breakdown: PriceBreakdownResponse,
}

/// Intermediate amounts behind a price
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub exchange_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub landed_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub international_shipping: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub domestic_shipping: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub numerator: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub denominator: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub raw_price: Decimal,
}

impl From<&PriceBreakdown> for PriceBreakdownResponse {
    fn from(b: &PriceBreakdown) -> Self {
        Self {
            exchange_rate: b.exchange_rate.normalize(),
            landed_cost: b.landed_cost.normalize(),
            international_shipping: b.international_shipping.normalize(),
            domestic_shipping: b.domestic_shipping.normalize(),
            numerator: b.numerator.normalize(),
            denominator: b.denominator.normalize(),
            raw_price: b.raw_price.round_dp(2).normalize(),
        }
    }
}

/// Response for weight extraction
#[derive(Debug, Serialize)]
pub struct WeightResponse {
    pub weight: Option<f64>,
    pub available: bool,
}

/// Response for price formatting
#[derive(Debug, Serialize)]
pub struct FormattedPriceResponse {
    pub formatted: String,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
