//! Assignment repository
//!
//! - insert: single INSERT inside a transaction
//! - list: plain SELECTs; enrichment happens in the join engine
//! - soft_delete: UPDATE of estatus_id, never a DELETE

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::models::{Assignment, AssignmentKey, NewAssignment, INACTIVE_STATUS_ID};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Storage operations on assignments (testable)
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    /// Persist a validated assignment and return the stored row.
    async fn insert(&self, new: NewAssignment) -> Result<Assignment, DbError>;

    async fn list_all(&self) -> Result<Vec<Assignment>, DbError>;

    async fn list_by_person(&self, person_id: &str) -> Result<Vec<Assignment>, DbError>;

    /// Set every matching row to the inactive status.
    ///
    /// Returns the number of rows updated, or `DbError::NotFound` when none
    /// matched.
    async fn soft_delete(&self, key: &AssignmentKey) -> Result<u64, DbError>;
}

/// Row as stored in `persona_profesion`
#[derive(Debug, FromRow)]
struct AssignmentRow {
    persona_id: String,
    profesion_id: String,
    fecha_asignacion: NaiveDate,
    estatus_id: String,
}

impl From<AssignmentRow> for Assignment {
    fn from(row: AssignmentRow) -> Self {
        Self {
            person_id: row.persona_id,
            profession_id: row.profesion_id,
            assigned_on: row.fecha_asignacion,
            status_id: row.estatus_id,
        }
    }
}

pub(crate) fn not_found(key: &AssignmentKey) -> DbError {
    DbError::NotFound {
        resource: "assignment",
        id: format!("{}/{}", key.person_id(), key.profession_id()),
    }
}

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct PgAssignmentStore {
    pool: PgPool,
}

impl PgAssignmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentStore for PgAssignmentStore {
    async fn insert(&self, new: NewAssignment) -> Result<Assignment, DbError> {
        let assignment = new.into_assignment();

        // Dropping the transaction on an early return rolls it back
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"
            INSERT INTO persona_profesion (persona_id, profesion_id, fecha_asignacion, estatus_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&assignment.person_id)
        .bind(&assignment.profession_id)
        .bind(assignment.assigned_on)
        .bind(&assignment.status_id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(assignment)
    }

    async fn list_all(&self) -> Result<Vec<Assignment>, DbError> {
        let rows = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT persona_id, profesion_id, fecha_asignacion, estatus_id
            FROM persona_profesion
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Assignment::from).collect())
    }

    async fn list_by_person(&self, person_id: &str) -> Result<Vec<Assignment>, DbError> {
        let rows = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT persona_id, profesion_id, fecha_asignacion, estatus_id
            FROM persona_profesion
            WHERE persona_id = $1
            "#,
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Assignment::from).collect())
    }

    async fn soft_delete(&self, key: &AssignmentKey) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;
        let updated = sqlx::query(
            r#"
            UPDATE persona_profesion
            SET estatus_id = $1
            WHERE persona_id = $2 AND profesion_id = $3
            "#,
        )
        .bind(INACTIVE_STATUS_ID)
        .bind(key.person_id())
        .bind(key.profession_id())
        .execute(&mut *tx)
        .await?
        .rows_affected();
        tx.commit().await?;

        if updated == 0 {
            return Err(not_found(key));
        }
        Ok(updated)
    }
}
