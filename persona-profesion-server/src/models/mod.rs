//! Domain models with validation at construction
//!
//! Request input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod assignment;
pub mod directory;
pub(crate) mod id;
pub mod validation;
pub mod view;

pub use assignment::{Assignment, AssignmentKey, NewAssignment, INACTIVE_STATUS_ID};
pub use directory::{Keyed, Person, Profession, Snapshot, Status};
pub use validation::ValidationError;
pub use view::{CompositeView, SummaryView};
