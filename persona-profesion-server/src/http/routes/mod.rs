//! Route handlers organized by resource

pub mod assignments;
pub mod health;
