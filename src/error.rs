//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                PricingErrorResponse {
                    error_type: "not_found".to_string(),
                    message: "Not found".to_string(),
                    details: None,
                },
            ),
            AppError::Pricing(e) => {
                tracing::debug!("Pricing error: {}", e);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    PricingErrorResponse {
                        error_type: e.error_type().to_string(),
                        message: e.user_message().to_string(),
                        details: Some(json!({ "reason": e.reason() })),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_required_maps_to_unprocessable() {
        let err: AppError = PricingError::WeightRequired { reason: "no weight" }.into();
        assert_eq!(err.to_string(), "Pricing error: Weight required: no weight");
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
