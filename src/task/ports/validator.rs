//! Validator port for execution task records.
//!
//! Defines the abstract interface the entity delegates constraint checking
//! to, together with the options that tune it.

use crate::task::error::ValidateError;
use serde_json::{Map, Value};

/// Result type for record validation.
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Port for validating an untyped task record.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect every violation before returning unless told to abort early
/// - Report invalid input as [`ValidateError::Violations`]
/// - Report faults in their own configuration as [`ValidateError::Schema`]
/// - Be stateless and thread-safe
#[cfg_attr(test, mockall::automock)]
pub trait RecordValidator: Send + Sync {
    /// Validates `raw`, returning the normalized record.
    ///
    /// The normalized record has coerced values and populated defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::Violations`] when `raw` breaks the schema,
    /// or [`ValidateError::Schema`] when the schema cannot be applied.
    fn validate(&self, raw: &Map<String, Value>) -> ValidateResult<Map<String, Value>>;
}

/// Options controlling record validation.
///
/// # Examples
///
/// ```
/// use exec_task::task::ports::validator::ValidationOptions;
///
/// let options = ValidationOptions::default();
/// assert!(options.convert);
/// assert!(!options.abort_early);
/// assert!(!options.allow_unknown);
///
/// assert!(!ValidationOptions::strict().convert);
/// assert!(ValidationOptions::lenient().allow_unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Convert compatible values (numeric strings, date strings) to their
    /// declared type.
    pub convert: bool,
    /// Stop at the first violation instead of collecting all of them.
    pub abort_early: bool,
    /// Keep undeclared fields instead of reporting them.
    pub allow_unknown: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            convert: true,
            abort_early: false,
            allow_unknown: false,
        }
    }
}

impl ValidationOptions {
    /// Options that accept only values already of their declared type.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            convert: false,
            abort_early: false,
            allow_unknown: false,
        }
    }

    /// Options that keep undeclared fields.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            allow_unknown: true,
            ..Default::default()
        }
    }
}
