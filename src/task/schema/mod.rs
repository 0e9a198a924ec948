//! Declarative schema for the execution task record.
//!
//! A [`Schema`] is an immutable list of [`FieldRule`]s. The task schema is a
//! `static` shared read-only by every entity and validator; nothing in this
//! module holds mutable state.

mod rule;

pub use rule::{Bound, DefaultValue, FieldRule, FieldType};

use crate::task::{
    domain::{TaskStatus, TaskType},
    error::SchemaError,
};
use std::collections::HashSet;

/// Wire names of the task record fields.
pub mod fields {
    /// Task identifier.
    pub const ID: &str = "id";
    /// Identifier of the originating check task.
    pub const CHECK_TASK_ID: &str = "checkTaskId";
    /// Task kind.
    pub const TYPE: &str = "type";
    /// Execution timeout in seconds.
    pub const TIMEOUT: &str = "timeout";
    /// Opaque work payload.
    pub const DATA: &str = "data";
    /// Lifecycle status.
    pub const STATUS: &str = "status";
    /// Opaque work result.
    pub const RESULT: &str = "result";
    /// Time the task entered `created`.
    pub const CREATION_DATE: &str = "creationDate";
    /// Time the task entered `queued`.
    pub const QUEUED_DATE: &str = "queuedDate";
    /// Time the task entered `started`.
    pub const START_DATE: &str = "startDate";
    /// Time the task entered `finished`.
    pub const FINISH_DATE: &str = "finishDate";
}

/// Timeout applied when a record omits one, in seconds.
pub const DEFAULT_TIMEOUT_SECS: i64 = 60;

const TASK_FIELDS: &[FieldRule] = &[
    FieldRule::new(fields::ID, FieldType::Uuid).required(),
    FieldRule::new(fields::CHECK_TASK_ID, FieldType::Uuid).required(),
    FieldRule::new(fields::TYPE, FieldType::String)
        .required()
        .one_of(TaskType::NAMES),
    FieldRule::new(fields::TIMEOUT, FieldType::Number)
        .with_bound(Bound::above(0.0))
        .with_default(DefaultValue::Integer(DEFAULT_TIMEOUT_SECS)),
    FieldRule::new(fields::DATA, FieldType::Object).required(),
    FieldRule::new(fields::STATUS, FieldType::String).one_of(TaskStatus::NAMES),
    FieldRule::new(fields::RESULT, FieldType::Object),
    FieldRule::new(fields::CREATION_DATE, FieldType::Timestamp),
    FieldRule::new(fields::QUEUED_DATE, FieldType::Timestamp),
    FieldRule::new(fields::START_DATE, FieldType::Timestamp),
    FieldRule::new(fields::FINISH_DATE, FieldType::Timestamp),
];

/// Schema describing a valid execution task record.
pub static TASK_SCHEMA: Schema = Schema::new(TASK_FIELDS);

/// Ordered set of field rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schema {
    fields: &'static [FieldRule],
}

impl Schema {
    /// Creates a schema from its field rules, in declaration order.
    #[must_use]
    pub const fn new(fields: &'static [FieldRule]) -> Self {
        Self { fields }
    }

    /// Returns the field rules in declaration order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldRule] {
        self.fields
    }

    /// Returns the rule declared for `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldRule> {
        self.fields.iter().find(|rule| rule.name() == name)
    }

    /// Returns `true` when `name` is a declared field.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Checks that the schema itself is well formed.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found, in declaration order.
    pub fn check(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        for rule in self.fields {
            if !seen.insert(rule.name()) {
                return Err(SchemaError::DuplicateField(rule.name().to_owned()));
            }
            check_rule(rule)?;
        }
        Ok(())
    }
}

fn check_rule(rule: &FieldRule) -> Result<(), SchemaError> {
    let name = rule.name();
    let field_type = rule.field_type();

    if let Some(allowed) = rule.allowed() {
        if allowed.is_empty() {
            return Err(SchemaError::EmptyAllowedValues(name.to_owned()));
        }
        if !field_type.is_textual() {
            return Err(SchemaError::AllowedValuesOnNonString(name.to_owned()));
        }
    }

    if rule.bound().is_some() && field_type != FieldType::Number {
        return Err(SchemaError::BoundOnNonNumber(name.to_owned()));
    }

    let Some(default) = rule.default_value() else {
        return Ok(());
    };
    if rule.is_required() {
        return Err(SchemaError::DefaultOnRequiredField(name.to_owned()));
    }
    let default_fits = match default {
        DefaultValue::Integer(value) => {
            field_type.is_numeric()
                && rule
                    .bound()
                    .is_none_or(|bound| bound.admits_integer(value))
        }
        DefaultValue::Text(value) => {
            field_type == FieldType::String
                && rule
                    .allowed()
                    .is_none_or(|allowed| allowed.contains(&value))
        }
    };
    if default_fits {
        Ok(())
    } else {
        Err(SchemaError::InvalidDefault(name.to_owned()))
    }
}
