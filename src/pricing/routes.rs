//! Pricing API route handlers

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::calculators::{extract_weight, format_price};
use super::models::PriceSettings;
use super::requests::{ExtractWeightRequest, FormatPriceRequest, PurchasePriceRequest};
use super::responses::{FormattedPriceResponse, PurchasePriceResponse, WeightResponse};
use super::services;

/// Routes mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/purchase-price", post(purchase_price))
        .route("/extract-weight", post(weight))
        .route("/format", post(format))
        .route("/settings", get(settings))
}

/// Calculate a purchase price with its breakdown
async fn purchase_price(
    State(state): State<AppState>,
    Json(request): Json<PurchasePriceRequest>,
) -> Result<Json<PurchasePriceResponse>> {
    let quote = services::quote_purchase_price(&state.config.pricing, request)?;
    Ok(Json(quote))
}

async fn weight(Json(request): Json<ExtractWeightRequest>) -> Json<WeightResponse> {
    let weight = extract_weight(&request.weight);
    Json(WeightResponse {
        weight,
        available: weight.is_some(),
    })
}

async fn format(Json(request): Json<FormatPriceRequest>) -> Json<FormattedPriceResponse> {
    Json(FormattedPriceResponse {
        formatted: format_price(request.amount),
    })
}

/// Settings applied when a request carries no overrides
async fn settings(State(state): State<AppState>) -> Json<PriceSettings> {
    Json(state.config.pricing.clone())
}
