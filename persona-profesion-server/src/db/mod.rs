//! Database layer - connection pool, schema, and the assignment store
//!
//! - Connection pool with an explicit limit; each operation checks out its
//!   own connection and returns it on every exit path
//! - Writes run inside a transaction and roll back on failure
//! - No uniqueness constraint on (persona_id, profesion_id)

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
