//! Purchase price engine.
//!
//! Converts a foreign-currency wholesale cost plus weight and package size into
//! the domestic price a reseller must charge to keep its margin after
//! commission, duty and freight.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{
    calculate_price_breakdown, calculate_purchase_price, extract_weight, format_price,
    price_product, resolve_domestic_shipping, round_to_price_step,
};
pub use models::{DomesticShippingCosts, PriceBreakdown, PriceSettings, ProductCostInput, SizeTier};
pub use routes::router;
pub use services::PricingError;
