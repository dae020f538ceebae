//! API error types with IntoResponse
//!
//! Client errors render as `{"message": ...}`, server errors as
//! `{"error": ...}` carrying the underlying cause.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;
use crate::upstream::UpstreamError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input (400)
    Validation(ValidationError),

    /// Nothing matched the request (404)
    NotFound { message: String },

    /// An upstream catalog failed (500, logged)
    Dependency(UpstreamError),

    /// Store read or write failed (500, logged)
    Persistence(DbError),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Dependency(_) | Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(e) => json!({ "message": e.to_string() }),
            Self::NotFound { message } => json!({ "message": message }),
            Self::Dependency(e) => {
                tracing::error!(service = ?e.service(), "Upstream error: {}", e);
                json!({ "error": format!("Error al consumir las APIs externas: {}", e) })
            }
            Self::Persistence(e) => {
                tracing::error!("Database error: {}", e);
                json!({ "error": e.to_string() })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<UpstreamError> for ApiError {
    fn from(e: UpstreamError) -> Self {
        Self::Dependency(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound {
                message: format!("{} '{}' no encontrado", resource, id),
            },
            _ => Self::Persistence(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(ValidationError::Body {
            reason: rejection.body_text(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_with_message() {
        let err = ApiError::Validation(ValidationError::Missing {
            fields: vec!["persona_id"],
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Faltan datos: persona_id son requeridos");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::not_found("Asignación no encontrada").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Asignación no encontrada");
    }

    #[tokio::test]
    async fn dependency_error_is_500_with_cause() {
        let err = ApiError::from(UpstreamError::Unavailable {
            service: "estatus",
            reason: "connection refused".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Error al consumir las APIs externas"));
        assert!(message.contains("connection refused"));
    }

    #[tokio::test]
    async fn persistence_error_is_500() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_json(response).await["error"].is_string());
    }

    #[test]
    fn db_not_found_maps_to_404() {
        let err = ApiError::from(DbError::NotFound {
            resource: "assignment",
            id: "p1/f1".into(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
