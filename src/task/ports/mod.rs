//! Port contracts for execution task validation.

pub mod validator;

pub use validator::{RecordValidator, ValidateResult, ValidationOptions};
