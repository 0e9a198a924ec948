//! Field-level violations and the ordered report collecting them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Constraint a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViolationKind {
    /// A required field is absent or null.
    Required,
    /// The field is not declared by the schema.
    Unknown,
    /// The value has the wrong type.
    InvalidType,
    /// The value is not a valid UUID.
    InvalidUuid,
    /// The value is not one of the enumerated values.
    NotOneOf,
    /// The value is below the declared minimum.
    BelowMinimum,
    /// The value is not a valid unix timestamp.
    InvalidTimestamp,
}

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Path of the offending field.
    pub path: String,
    /// Human-readable description.
    pub message: String,
    /// Machine-readable constraint kind.
    pub kind: ViolationKind,
}

impl Violation {
    /// Creates a violation for `path`.
    #[must_use]
    pub fn new(path: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// A required field is missing.
    #[must_use]
    pub fn required(path: &str) -> Self {
        Self::new(path, ViolationKind::Required, format!("\"{path}\" is required"))
    }

    /// A field is not declared.
    #[must_use]
    pub fn unknown(path: &str) -> Self {
        Self::new(path, ViolationKind::Unknown, format!("\"{path}\" is not allowed"))
    }

    /// A value does not have the expected type.
    #[must_use]
    pub fn invalid_type(path: &str, expected: &str) -> Self {
        Self::new(
            path,
            ViolationKind::InvalidType,
            format!("\"{path}\" must be {expected}"),
        )
    }

    /// A string is not a UUID.
    #[must_use]
    pub fn invalid_uuid(path: &str) -> Self {
        Self::new(
            path,
            ViolationKind::InvalidUuid,
            format!("\"{path}\" must be a valid GUID"),
        )
    }

    /// A value is outside the enumerated set.
    #[must_use]
    pub fn not_one_of(path: &str, allowed: &[&str]) -> Self {
        Self::new(
            path,
            ViolationKind::NotOneOf,
            format!("\"{path}\" must be one of [{}]", allowed.join(", ")),
        )
    }

    /// A number is below its minimum.
    #[must_use]
    pub fn below_minimum(path: &str, minimum: f64, inclusive: bool) -> Self {
        let relation = if inclusive {
            "greater than or equal to"
        } else {
            "greater than"
        };
        Self::new(
            path,
            ViolationKind::BelowMinimum,
            format!("\"{path}\" must be {relation} {minimum}"),
        )
    }

    /// A value cannot be read as a unix timestamp.
    #[must_use]
    pub fn invalid_timestamp(path: &str) -> Self {
        Self::new(
            path,
            ViolationKind::InvalidTimestamp,
            format!("\"{path}\" must be a valid unix timestamp"),
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered list of violations found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationReport(Vec<Violation>);

impl ViolationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a violation.
    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// Returns `true` when no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the violations in discovery order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Returns the violated paths in discovery order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|violation| violation.path.as_str())
    }

    /// Consumes the report, returning its violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.0
    }
}

impl From<Vec<Violation>> for ViolationReport {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

impl IntoIterator for ViolationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ViolationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self
            .0
            .iter()
            .map(|violation| violation.message.as_str())
            .collect::<Vec<_>>();
        f.write_str(&messages.join("; "))
    }
}
