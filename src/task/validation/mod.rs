//! Schema validation for execution task records.
//!
//! This module provides the default implementation of the
//! [`RecordValidator`](crate::task::ports::RecordValidator) port: the
//! per-type field checks and the validator service that runs them over a
//! whole record, collecting every violation into an ordered report.

mod report;
pub mod rules;
pub mod service;

pub use report::{Violation, ViolationKind, ViolationReport};
pub use service::SchemaValidator;
