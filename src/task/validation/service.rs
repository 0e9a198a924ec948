//! Validation service implementation.
//!
//! Provides the default implementation of the `RecordValidator` port,
//! applying a [`Schema`] to an untyped record in a single pass.

use super::{Violation, ViolationReport, rules};
use crate::task::{
    error::ValidateError,
    ports::validator::{RecordValidator, ValidateResult, ValidationOptions},
    schema::{Schema, TASK_SCHEMA},
};
use serde_json::{Map, Value};
use tracing::debug;

/// Schema-driven record validator.
///
/// Checks every declared field in declaration order, then rejects undeclared
/// fields, collecting all violations rather than failing on the first one.
/// A `null` value counts as absent.
///
/// # Examples
///
/// ```
/// use exec_task::task::ports::validator::RecordValidator;
/// use exec_task::task::validation::SchemaValidator;
/// use serde_json::json;
///
/// let raw = json!({
///     "id": "2c5ea4c0-4067-11e9-8bad-9b1deb4d3b7d",
///     "checkTaskId": "7d444840-9dc0-11d1-b245-5ffdce74fad2",
///     "type": "exec",
///     "data": {"command": "ping -c 1 localhost"}
/// });
/// let raw = raw.as_object().expect("object literal");
///
/// let normalized = SchemaValidator::new().validate(raw).expect("valid record");
/// assert_eq!(normalized["timeout"], json!(60));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator {
    schema: &'static Schema,
    options: ValidationOptions,
}

impl SchemaValidator {
    /// Creates a validator for the task schema with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::for_schema(&TASK_SCHEMA)
    }

    /// Creates a validator for `schema` with default options.
    #[must_use]
    pub fn for_schema(schema: &'static Schema) -> Self {
        Self {
            schema,
            options: ValidationOptions::default(),
        }
    }

    /// Replaces the validation options.
    #[must_use]
    pub const fn with_options(self, options: ValidationOptions) -> Self {
        Self { options, ..self }
    }

    /// Returns the schema being applied.
    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Returns the validation options.
    #[must_use]
    pub const fn options(&self) -> &ValidationOptions {
        &self.options
    }

    fn record(&self, report: &mut ViolationReport, violation: Violation) {
        if !self.is_saturated(report) {
            report.push(violation);
        }
    }

    fn is_saturated(&self, report: &ViolationReport) -> bool {
        self.options.abort_early && !report.is_empty()
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordValidator for SchemaValidator {
    fn validate(&self, raw: &Map<String, Value>) -> ValidateResult<Map<String, Value>> {
        self.schema.check()?;

        let mut normalized = Map::new();
        let mut report = ViolationReport::new();

        for rule in self.schema.fields() {
            let name = rule.name();
            match raw.get(name) {
                None | Some(Value::Null) => {
                    if rule.is_required() {
                        self.record(&mut report, Violation::required(name));
                    } else if let Some(default) = rule.default_value() {
                        normalized.insert(name.to_owned(), default.to_value());
                    }
                }
                Some(value) => match rules::check_field(rule, value, &self.options) {
                    Ok(checked) => {
                        normalized.insert(name.to_owned(), checked);
                    }
                    Err(violation) => self.record(&mut report, violation),
                },
            }
        }

        for (key, value) in raw {
            if self.schema.declares(key) {
                continue;
            }
            if self.options.allow_unknown {
                normalized.insert(key.clone(), value.clone());
            } else {
                self.record(&mut report, Violation::unknown(key));
            }
        }

        if report.is_empty() {
            debug!(fields = normalized.len(), "record passed schema validation");
            Ok(normalized)
        } else {
            debug!(violations = report.len(), %report, "record failed schema validation");
            Err(ValidateError::Violations(report))
        }
    }
}
