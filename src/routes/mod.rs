//! Service-level route handlers

use crate::error::AppError;

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

/// Fallback for unmatched paths
pub async fn not_found() -> AppError {
    AppError::NotFound
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::{build_router, AppState};

    #[tokio::test]
    async fn test_health() {
        let app = build_router(AppState {
            config: Arc::new(Config::default()),
        });
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"ok");
    }
}
