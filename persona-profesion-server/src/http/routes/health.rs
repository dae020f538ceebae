//! Service banner and health check

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Banner response
#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
}

/// GET /
async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Microservicio persona-profesion funcionando",
    })
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
}
