//! Schema for the assignment table

use sqlx::PgPool;

/// Create the assignment table and its lookup index if missing.
///
/// Identifiers are opaque text. The (persona_id, profesion_id) pair is
/// intentionally left unconstrained.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running persona_profesion migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS persona_profesion (
            persona_id TEXT NOT NULL,
            profesion_id TEXT NOT NULL,
            fecha_asignacion DATE NOT NULL,
            estatus_id TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_persona_profesion_persona
            ON persona_profesion (persona_id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
