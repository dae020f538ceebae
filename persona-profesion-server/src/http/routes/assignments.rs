//! Assignment endpoints (`/persona-profesion`)
//!
//! Reads fetch the upstream catalogs first; if any catalog fails the store
//! is never queried.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::DbError;
use crate::http::error::ApiError;
use crate::http::extractors::PersonIdPath;
use crate::http::server::AppState;
use crate::join;
use crate::models::id::opaque_opt;
use crate::models::{AssignmentKey, CompositeView, NewAssignment, SummaryView};
use crate::upstream;

/// Assign request. Every field is optional here so absence is reported as a
/// validation error rather than a decode failure. IDs may arrive as strings
/// or integers.
#[derive(Debug, Default, Deserialize)]
pub struct AssignRequest {
    #[serde(default, deserialize_with = "opaque_opt")]
    pub persona_id: Option<String>,
    #[serde(default, deserialize_with = "opaque_opt")]
    pub profesion_id: Option<String>,
    pub fecha_asignacion: Option<String>,
    #[serde(default, deserialize_with = "opaque_opt")]
    pub estatus_id: Option<String>,
}

/// Query parameters for deactivation
#[derive(Debug, Default, Deserialize)]
pub struct DeactivateParams {
    pub persona_id: Option<String>,
    pub profesion_id: Option<String>,
}

/// Plain confirmation body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /persona-profesion - assign a profession to a person
async fn assign(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AssignRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(req) = payload?;
    let new = NewAssignment::new(
        req.persona_id,
        req.profesion_id,
        req.fecha_asignacion,
        req.estatus_id,
    )?;

    let created = state.store.insert(new).await?;
    tracing::info!(
        person_id = %created.person_id,
        profession_id = %created.profession_id,
        "assignment recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Asignación registrada correctamente",
        }),
    ))
}

/// GET /persona-profesion - every resolvable assignment with full records
async fn list_all(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CompositeView>>, ApiError> {
    let snapshot = upstream::fetch_snapshot(state.directory.as_ref()).await?;
    let rows = state.store.list_all().await?;

    Ok(Json(join::compose_full(&snapshot, &rows)))
}

/// GET /persona-profesion/{persona_id} - one person's assignments, summarized
async fn list_by_person(
    State(state): State<Arc<AppState>>,
    PersonIdPath(person_id): PersonIdPath,
) -> Result<Json<Vec<SummaryView>>, ApiError> {
    let snapshot = upstream::fetch_snapshot(state.directory.as_ref()).await?;
    let rows = state.store.list_by_person(&person_id).await?;

    let views = join::compose_summary(&snapshot, &rows);
    if views.is_empty() {
        return Err(ApiError::not_found("No se encontró relación para esa persona"));
    }
    Ok(Json(views))
}

/// DELETE /persona-profesion?persona_id=..&profesion_id=.. - soft delete
async fn deactivate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeactivateParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let key = AssignmentKey::new(params.persona_id, params.profesion_id)?;

    match state.store.soft_delete(&key).await {
        Ok(updated) => {
            tracing::info!(
                person_id = key.person_id(),
                profession_id = key.profession_id(),
                updated,
                "assignment deactivated"
            );
            Ok(Json(MessageResponse {
                message: "Asignación desactivada correctamente",
            }))
        }
        Err(DbError::NotFound { .. }) => Err(ApiError::not_found("Asignación no encontrada")),
        Err(e) => Err(e.into()),
    }
}

/// Assignment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/persona-profesion",
            get(list_all).post(assign).delete(deactivate),
        )
        .route("/persona-profesion/{persona_id}", get(list_by_person))
}
