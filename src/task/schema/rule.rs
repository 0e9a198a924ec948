//! Field constraint descriptors.

use serde_json::Value;

/// Declared type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Any JSON string.
    String,
    /// A string holding a UUID.
    Uuid,
    /// A JSON number.
    Number,
    /// A JSON object with arbitrary keys.
    Object,
    /// A non-negative integer count of seconds since the unix epoch.
    Timestamp,
}

impl FieldType {
    /// Returns the noun used in violation messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::String | Self::Uuid => "a string",
            Self::Number => "a number",
            Self::Object => "an object",
            Self::Timestamp => "a valid unix timestamp",
        }
    }

    /// Returns `true` for types whose values are compared numerically.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Timestamp)
    }

    /// Returns `true` for types whose values are JSON strings.
    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::String | Self::Uuid)
    }
}

/// Lower bound on a numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    value: f64,
    inclusive: bool,
}

impl Bound {
    /// Bound satisfied by values greater than or equal to `value`.
    #[must_use]
    pub const fn at_least(value: f64) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    /// Bound satisfied by values strictly greater than `value`.
    #[must_use]
    pub const fn above(value: f64) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }

    /// Returns the bounding value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Returns `true` when the bounding value itself is accepted.
    #[must_use]
    pub const fn is_inclusive(self) -> bool {
        self.inclusive
    }

    /// Returns `true` when the integer `candidate` satisfies the bound.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "bounds are f64; rounding only affects integers beyond 2^53"
    )]
    pub fn admits_integer(self, candidate: i64) -> bool {
        self.admits(candidate as f64)
    }

    /// Returns `true` when `candidate` satisfies the bound.
    #[must_use]
    pub fn admits(self, candidate: f64) -> bool {
        if self.inclusive {
            candidate >= self.value
        } else {
            candidate > self.value
        }
    }
}

/// Value populated for an absent optional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// An integer default.
    Integer(i64),
    /// A string default.
    Text(&'static str),
}

impl DefaultValue {
    /// Converts the default into a JSON value.
    #[must_use]
    pub fn to_value(self) -> Value {
        match self {
            Self::Integer(value) => Value::from(value),
            Self::Text(value) => Value::from(value),
        }
    }
}

/// Constraint declared for a single record field.
///
/// Rules are assembled with `const` builders so a whole schema can live in a
/// `static`:
///
/// ```
/// use exec_task::task::schema::{Bound, DefaultValue, FieldRule, FieldType};
///
/// const TIMEOUT: FieldRule = FieldRule::new("timeout", FieldType::Number)
///     .with_bound(Bound::above(0.0))
///     .with_default(DefaultValue::Integer(60));
///
/// assert!(!TIMEOUT.is_required());
/// assert_eq!(TIMEOUT.default_value(), Some(DefaultValue::Integer(60)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    name: &'static str,
    field_type: FieldType,
    required: bool,
    allowed: Option<&'static [&'static str]>,
    bound: Option<Bound>,
    default: Option<DefaultValue>,
}

impl FieldRule {
    /// Creates an optional, unconstrained rule for `name`.
    #[must_use]
    pub const fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
            allowed: None,
            bound: None,
            default: None,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Restricts the field to the given values.
    #[must_use]
    pub const fn one_of(self, allowed: &'static [&'static str]) -> Self {
        Self {
            allowed: Some(allowed),
            ..self
        }
    }

    /// Attaches a numeric lower bound.
    #[must_use]
    pub const fn with_bound(self, bound: Bound) -> Self {
        Self {
            bound: Some(bound),
            ..self
        }
    }

    /// Attaches a default populated when the field is absent.
    #[must_use]
    pub const fn with_default(self, default: DefaultValue) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    /// Returns the field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared field type.
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Returns `true` when the field must be present.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the enumerated values, if any.
    #[must_use]
    pub const fn allowed(&self) -> Option<&'static [&'static str]> {
        self.allowed
    }

    /// Returns the numeric lower bound, if any.
    #[must_use]
    pub const fn bound(&self) -> Option<Bound> {
        self.bound
    }

    /// Returns the default value, if any.
    #[must_use]
    pub const fn default_value(&self) -> Option<DefaultValue> {
        self.default
    }
}
