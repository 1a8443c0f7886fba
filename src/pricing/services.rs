//! Pricing service functions.
//!
//! Glue between the HTTP DTOs and the pure calculators: resolves settings,
//! extracts the weight field, and logs each quote.

use thiserror::Error;

use super::calculators::{extract_weight, format_price, price_product};
use super::models::{PriceSettings, ProductCostInput};
use super::requests::PurchasePriceRequest;
use super::responses::{PriceBreakdownResponse, PurchasePriceResponse, DOMESTIC_CURRENCY};

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The product has no usable weight, so freight cannot be priced.
    #[error("Weight required: {reason}")]
    WeightRequired { reason: &'static str },
}

impl PricingError {
    /// Machine-readable error kind for API consumers
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::WeightRequired { .. } => "weight_required",
        }
    }

    /// Message suitable for showing to the person entering product data
    pub fn user_message(&self) -> &'static str {
        match self {
            PricingError::WeightRequired { .. } => "Please provide the product weight",
        }
    }

    /// Short machine-readable cause, e.g. `"no weight"`
    pub fn reason(&self) -> &'static str {
        match self {
            PricingError::WeightRequired { reason } => *reason,
        }
    }
}

/// Quote a purchase price for an API request.
///
/// Request settings override `defaults` field by field.
pub fn quote_purchase_price(
    defaults: &PriceSettings,
    request: PurchasePriceRequest,
) -> Result<PurchasePriceResponse, PricingError> {
    let settings = match request.settings {
        Some(overrides) => overrides.apply(defaults),
        None => defaults.clone(),
    };
    let product = ProductCostInput {
        wholesale_cost: request.wholesale_cost,
        weight: extract_weight(&request.weight),
        size: request.size,
    };

    let breakdown = price_product(&product, &settings).inspect_err(|e| {
        tracing::warn!(
            "Purchase price rejected for cost {}: {}",
            product.wholesale_cost,
            e
        )
    })?;

    tracing::debug!(
        "Quoted cost {} weight {:?} size {:?} -> {}",
        product.wholesale_cost,
        product.weight,
        product.size,
        breakdown.final_price
    );

    Ok(PurchasePriceResponse {
        price: breakdown.final_price,
        formatted: format_price(breakdown.final_price),
        currency: DOMESTIC_CURRENCY.to_string(),
        breakdown: PriceBreakdownResponse::from(&breakdown),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculators::WEIGHT_MISSING;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn request(body: serde_json::Value) -> PurchasePriceRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_quote_with_text_weight_and_overrides() {
        let quote = quote_purchase_price(
            &PriceSettings::default(),
            request(json!({
                "wholesaleCost": 10,
                "weight": "1",
                "settings": { "profitMarginPercent": 30, "salesCommissionPercent": 10 }
            })),
        )
        .unwrap();

        assert_eq!(quote.price, dec!(390));
        assert_eq!(quote.formatted, "¥390");
        assert_eq!(quote.currency, "JPY");
        assert_eq!(quote.breakdown.landed_cost, dec!(231));
        assert_eq!(quote.breakdown.numerator, dec!(231));
        assert_eq!(quote.breakdown.raw_price, dec!(385));
    }

    #[test]
    fn test_quote_uses_defaults_without_overrides() {
        let defaults = PriceSettings {
            profit_margin_percent: 30.0,
            sales_commission_percent: 10.0,
            ..PriceSettings::default()
        };
        let quote = quote_purchase_price(
            &defaults,
            request(json!({ "wholesaleCost": 10, "weight": 1 })),
        )
        .unwrap();

        assert_eq!(quote.price, dec!(390));
    }

    #[test]
    fn test_quote_unreadable_weight() {
        let err = quote_purchase_price(
            &PriceSettings::default(),
            request(json!({ "wholesaleCost": 10, "weight": "abc" })),
        )
        .unwrap_err();

        assert_eq!(
            err,
            PricingError::WeightRequired {
                reason: WEIGHT_MISSING
            }
        );
        assert_eq!(err.error_type(), "weight_required");
        assert_eq!(err.reason(), "no weight");
    }

    #[test]
    fn test_quote_huge_cost_is_priced() {
        let quote = quote_purchase_price(
            &PriceSettings::default(),
            request(json!({ "wholesaleCost": 1e27, "weight": 1 })),
        )
        .unwrap();

        assert!(quote.price > dec!(1000000000000000000000000000));
        assert!(quote.formatted.starts_with('¥'));
    }

    #[test]
    fn test_error_messages() {
        let err = PricingError::WeightRequired {
            reason: WEIGHT_MISSING,
        };
        assert_eq!(err.to_string(), "Weight required: no weight");
        assert_eq!(err.user_message(), "Please provide the product weight");
        assert_eq!(err.reason(), "no weight");
    }
}
