//! Error types for execution task validation and transport.
//!
//! Entity operations fail with [`ExecTaskError`]. Its [`TaskError`] variant
//! is the tagged error surfaced to callers: an [`ErrorCode`], a message, the
//! name of the entity that raised it and, for schema failures, the full list
//! of violations. Faults in the schema itself are kept apart as
//! [`SchemaError`] so they are never mistaken for invalid input.

use crate::task::validation::{Violation, ViolationReport};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Codes carried by [`TaskError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    /// An operation needed data and found none.
    NoData,
    /// Data was present but malformed or failed schema validation.
    InvalidData,
}

impl ErrorCode {
    /// Every recognised code, for callers discriminating on code values.
    pub const ALL: [Self; 2] = [Self::NoData, Self::InvalidData];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoData => "noData",
            Self::InvalidData => "invalidData",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged error raised by an entity.
///
/// # Examples
///
/// ```
/// use exec_task::task::error::{ErrorCode, TaskError};
///
/// let error = TaskError::new("no data", ErrorCode::NoData, "execTask");
/// assert_eq!(error.code(), ErrorCode::NoData);
/// assert_eq!(error.to_string(), "no data");
/// assert!(error.violations().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TaskError {
    code: ErrorCode,
    message: String,
    entity: String,
    violations: Vec<Violation>,
}

impl TaskError {
    /// Creates a tagged error for `entity`.
    #[must_use]
    pub fn new(message: impl Into<String>, code: ErrorCode, entity: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            entity: entity.into(),
            violations: Vec::new(),
        }
    }

    /// Attaches the violations that caused the error.
    #[must_use]
    pub fn with_violations(mut self, violations: impl IntoIterator<Item = Violation>) -> Self {
        self.violations = violations.into_iter().collect();
        self
    }

    /// Returns the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the name of the entity that raised the error.
    #[must_use]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Returns the attached violations, empty unless validation failed.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns `true` when the error carries `code`.
    #[must_use]
    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code
    }
}

/// Faults in a schema definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A field is declared more than once.
    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),

    /// A field declares an empty list of allowed values.
    #[error("field '{0}' declares no allowed values")]
    EmptyAllowedValues(String),

    /// Allowed values are declared on a field that does not hold strings.
    #[error("field '{0}' declares allowed values but is not a string field")]
    AllowedValuesOnNonString(String),

    /// A numeric bound is declared on a field that does not hold numbers.
    #[error("field '{0}' declares a bound but is not a number field")]
    BoundOnNonNumber(String),

    /// A required field declares a default.
    #[error("field '{0}' is required and cannot declare a default")]
    DefaultOnRequiredField(String),

    /// A default does not satisfy its own field rule.
    #[error("field '{0}' declares a default that violates its rule")]
    InvalidDefault(String),
}

/// Failure returned by a record validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// The record violates the schema.
    #[error("schema validation failed: {0}")]
    Violations(ViolationReport),

    /// The schema could not be applied.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Errors returned by entity operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecTaskError {
    /// A tagged entity error.
    #[error(transparent)]
    Task(#[from] TaskError),

    /// The validator failed for a reason other than invalid data.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl ExecTaskError {
    /// Returns the error code when this is a tagged entity error.
    #[must_use]
    pub const fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Task(error) => Some(error.code()),
            Self::Schema(_) => None,
        }
    }

    /// Returns the tagged entity error, if any.
    #[must_use]
    pub const fn as_task_error(&self) -> Option<&TaskError> {
        match self {
            Self::Task(error) => Some(error),
            Self::Schema(_) => None,
        }
    }

    /// Returns the schema violations carried by the error.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Task(error) => error.violations(),
            Self::Schema(_) => &[],
        }
    }
}
