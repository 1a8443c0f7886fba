//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state.
//! Inputs are floats straight from settings and product data; they are coerced
//! into `Decimal` here so that NaN, infinities and negatives never reach the formula.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde_json::Value;

use super::models::{
    PriceBreakdown, PriceSettings, ProductCostInput, SizeTier, DEFAULT_EXCHANGE_RATE,
};
use super::services::PricingError;

/// Fixed landed-cost markup covering customs and duty handling.
///
/// `PriceSettings::customs_duty_rate` is deliberately not consulted; historical
/// quotes were produced with this constant.
pub const DUTY_MARKUP: Decimal = dec!(1.05);

/// Prices are quoted in steps of this many domestic currency units
pub const PRICE_STEP: Decimal = dec!(10);

/// Symbol prepended by [`format_price`]
pub const CURRENCY_SYMBOL: &str = "¥";

/// Below this magnitude the margin denominator is treated as zero
const DENOMINATOR_EPSILON: Decimal = dec!(0.000000001);

/// Smallest positive amount a `Decimal` can hold
const SMALLEST_STEP: Decimal = dec!(0.0000000000000000000000000001);

/// Reason reported when the weight field is absent or unreadable
pub const WEIGHT_MISSING: &str = "no weight";
/// Reason reported when the weight is zero, negative or not finite
pub const WEIGHT_NOT_POSITIVE: &str = "non-positive weight";

/// Normalize a raw weight field of unknown shape.
///
/// Returns `None` when the product cannot be priced yet. Never fails.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use import_pricing::pricing::extract_weight;
///
/// assert_eq!(extract_weight(&json!(1.5)), Some(1.5));
/// assert_eq!(extract_weight(&json!(" 0.75 ")), Some(0.75));
/// assert_eq!(extract_weight(&json!("abc")), None);
/// assert_eq!(extract_weight(&json!(null)), None);
/// ```
pub fn extract_weight(raw: &Value) -> Option<f64> {
    let weight = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    weight.filter(|w| w.is_finite() && *w >= 0.0)
}

/// Exchange rate to apply: the configured one when usable, otherwise the default.
pub fn resolve_exchange_rate(settings: &PriceSettings) -> Decimal {
    to_decimal(settings.exchange_rate)
        .filter(|rate| *rate > Decimal::ZERO)
        .unwrap_or_else(|| non_negative(DEFAULT_EXCHANGE_RATE))
}

/// Resolve the flat domestic shipping fee for a size classification.
///
/// Unknown sizes and unusable overrides fall back to the base fee.
/// Overrides may be lower or higher than the base fee, but never negative.
pub fn resolve_domestic_shipping(settings: &PriceSettings, size: Option<f64>) -> Decimal {
    let base = non_negative(settings.domestic_shipping_cost);

    let (Some(costs), Some(size)) = (settings.domestic_shipping_costs.as_ref(), size) else {
        return base;
    };
    if !size.is_finite() {
        return base;
    }
    let Some(tier) = SizeTier::from_size(size.round() as i64) else {
        return base;
    };

    match costs.for_tier(tier).and_then(to_decimal) {
        Some(fee) => fee.max(Decimal::ZERO),
        None => base,
    }
}

/// Calculate the domestic sale price needed to hit the target margin.
///
/// # Arguments
/// * `wholesale_cost` - Unit cost in foreign currency
/// * `weight` - Weight in kilograms; `None` means the product was never weighed
/// * `settings` - Rates and percentages supplied by the caller
/// * `size` - Optional package size classification
///
/// # Errors
/// [`PricingError::WeightRequired`] when the weight is absent, zero, negative or not finite.
pub fn calculate_purchase_price(
    wholesale_cost: f64,
    weight: Option<f64>,
    settings: &PriceSettings,
    size: Option<f64>,
) -> Result<Decimal, PricingError> {
    calculate_price_breakdown(wholesale_cost, weight, settings, size).map(|b| b.final_price)
}

/// Price a product record from the product data source.
pub fn price_product(
    product: &ProductCostInput,
    settings: &PriceSettings,
) -> Result<PriceBreakdown, PricingError> {
    calculate_price_breakdown(product.wholesale_cost, product.weight, settings, product.size)
}

/// Same as [`calculate_purchase_price`], keeping every intermediate amount.
pub fn calculate_price_breakdown(
    wholesale_cost: f64,
    weight: Option<f64>,
    settings: &PriceSettings,
    size: Option<f64>,
) -> Result<PriceBreakdown, PricingError> {
    let weight = weight.ok_or(PricingError::WeightRequired {
        reason: WEIGHT_MISSING,
    })?;

    let exchange_rate = resolve_exchange_rate(settings);
    let cost = non_negative(wholesale_cost);

    let weight = to_decimal(weight)
        .filter(|w| *w > Decimal::ZERO)
        .ok_or(PricingError::WeightRequired {
            reason: WEIGHT_NOT_POSITIVE,
        })?;

    let margin = finite_or_zero(settings.profit_margin_percent);
    let commission = finite_or_zero(settings.sales_commission_percent);
    let international_rate = non_negative(settings.international_shipping_rate);
    let domestic_shipping = resolve_domestic_shipping(settings, size);

    // Amounts beyond Decimal range saturate instead of failing
    let landed_cost = cost
        .saturating_mul(exchange_rate)
        .saturating_mul(DUTY_MARKUP);

    let international_shipping = international_rate
        .saturating_mul(weight)
        .saturating_mul(exchange_rate);

    let numerator = landed_cost
        .saturating_add(international_shipping)
        .saturating_add(domestic_shipping);

    let mut denominator = dec!(100).saturating_sub(margin.saturating_add(commission));
    if denominator.abs() < DENOMINATOR_EPSILON {
        denominator = Decimal::ONE;
    }

    // Divide before scaling by 100 so large numerators keep their magnitude
    let raw_price = saturating_div(numerator, denominator).saturating_mul(dec!(100));

    let rounded = round_to_price_step(raw_price);
    let final_price = if rounded < Decimal::ZERO {
        tracing::warn!(
            "Negative price {} clamped to zero (margin {}% + commission {}%)",
            rounded,
            margin,
            commission
        );
        Decimal::ZERO
    } else {
        rounded.normalize()
    };

    Ok(PriceBreakdown {
        exchange_rate,
        landed_cost,
        international_shipping,
        domestic_shipping,
        numerator,
        denominator,
        raw_price,
        final_price,
    })
}

/// Round to the nearest multiple of [`PRICE_STEP`], halves away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use import_pricing::pricing::round_to_price_step;
///
/// assert_eq!(round_to_price_step(dec!(385)), dec!(390));
/// assert_eq!(round_to_price_step(dec!(384.9)), dec!(380));
/// ```
pub fn round_to_price_step(amount: Decimal) -> Decimal {
    let steps = amount / PRICE_STEP;
    steps
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(PRICE_STEP)
        // Rounding up at the edge of Decimal range; stay on a step boundary
        .unwrap_or_else(|| steps.trunc() * PRICE_STEP)
}

/// Render a price for display, e.g. `¥1,234,560`.
///
/// Display only: fractional units are rounded away, nothing else is computed.
pub fn format_price(amount: Decimal) -> String {
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if whole < Decimal::ZERO { "-" } else { "" };
    format!(
        "{}{}{}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(&whole.abs().to_string())
    )
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Convert a finite float, saturating at the edges of Decimal range.
///
/// Magnitudes too large become `Decimal::MAX`; non-zero magnitudes too small
/// become the smallest positive step, so the sign of the input is preserved.
fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    if value == 0.0 {
        return Some(Decimal::ZERO);
    }
    let magnitude = match Decimal::from_f64(value.abs()) {
        Some(d) if !d.is_zero() => d,
        _ if value.abs() >= 1.0 => Decimal::MAX,
        _ => SMALLEST_STEP,
    };
    Some(if value < 0.0 { -magnitude } else { magnitude })
}

fn saturating_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() != denominator.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

fn non_negative(value: f64) -> Decimal {
    to_decimal(value)
        .map(|v| v.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

fn finite_or_zero(value: f64) -> Decimal {
    to_decimal(value).unwrap_or(Decimal::ZERO)
}
