//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract a non-blank `persona_id` from the path
pub struct PersonIdPath(pub String);

impl<S> FromRequestParts<S> for PersonIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let missing = || {
            ApiError::Validation(ValidationError::Missing {
                fields: vec!["persona_id"],
            })
        };

        let Path(person_id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| missing())?;

        if person_id.trim().is_empty() {
            return Err(missing());
        }
        Ok(Self(person_id))
    }
}
