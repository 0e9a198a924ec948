//! Domain model for execution tasks.
//!
//! The task domain models the execution task entity, its kind, and its
//! lifecycle statuses. Constraint checking is delegated to the validator
//! port so the entity stays free of schema details.

mod error;
mod status;
mod task;

pub use error::{ParseTaskStatusError, ParseTaskTypeError};
pub use status::{TaskStatus, TaskType};
pub use task::{ENTITY_NAME, ExecTask, unix_seconds};
