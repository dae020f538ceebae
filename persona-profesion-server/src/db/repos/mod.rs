//! Repository implementations for assignment storage
//!
//! - `PgAssignmentStore`: PostgreSQL via sqlx
//! - `MemoryAssignmentStore`: process-local, for tests and offline runs

pub mod assignments;
pub mod memory;

pub use assignments::{AssignmentStore, DbError, PgAssignmentStore};
pub use memory::MemoryAssignmentStore;
