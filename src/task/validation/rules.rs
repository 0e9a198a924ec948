//! Individual field rule checks.
//!
//! Each check is a pure function from a present, non-null value to either
//! its normalized form or the single [`Violation`] it breaks. Type checks run
//! first; enumeration and bound checks only see values of the right type.

use super::Violation;
use crate::task::{
    ports::validator::ValidationOptions,
    schema::{FieldRule, FieldType},
};
use chrono::DateTime;
use serde_json::{Number, Value};
use uuid::Uuid;

/// Checks `value` against `rule`, returning the normalized value.
///
/// # Errors
///
/// Returns the [`Violation`] for the first constraint `value` breaks.
pub fn check_field(
    rule: &FieldRule,
    value: &Value,
    options: &ValidationOptions,
) -> Result<Value, Violation> {
    let name = rule.name();
    let normalized = match rule.field_type() {
        FieldType::String => check_string(name, value),
        FieldType::Uuid => check_uuid(name, value),
        FieldType::Number => check_number(name, value, options.convert),
        FieldType::Object => check_object(name, value),
        FieldType::Timestamp => check_timestamp(name, value, options.convert),
    }?;
    check_allowed(rule, &normalized)?;
    check_bound(rule, &normalized)?;
    Ok(normalized)
}

fn check_string(name: &str, value: &Value) -> Result<Value, Violation> {
    match value {
        Value::String(_) => Ok(value.clone()),
        _ => Err(Violation::invalid_type(name, FieldType::String.describe())),
    }
}

fn check_uuid(name: &str, value: &Value) -> Result<Value, Violation> {
    let Value::String(text) = value else {
        return Err(Violation::invalid_type(name, FieldType::Uuid.describe()));
    };
    if Uuid::parse_str(text).is_err() {
        return Err(Violation::invalid_uuid(name));
    }
    Ok(value.clone())
}

fn check_number(name: &str, value: &Value, convert: bool) -> Result<Value, Violation> {
    match value {
        Value::Number(_) => Ok(value.clone()),
        Value::String(text) if convert => parse_number(text)
            .map(Value::Number)
            .ok_or_else(|| Violation::invalid_type(name, FieldType::Number.describe())),
        _ => Err(Violation::invalid_type(name, FieldType::Number.describe())),
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let trimmed = text.trim();
    if let Ok(unsigned) = trimmed.parse::<u64>() {
        return Some(Number::from(unsigned));
    }
    if let Ok(signed) = trimmed.parse::<i64>() {
        return Some(Number::from(signed));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
}

fn check_object(name: &str, value: &Value) -> Result<Value, Violation> {
    match value {
        Value::Object(_) => Ok(value.clone()),
        _ => Err(Violation::invalid_type(name, FieldType::Object.describe())),
    }
}

fn check_timestamp(name: &str, value: &Value, convert: bool) -> Result<Value, Violation> {
    let seconds = match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|_| convert)
                .and_then(integral_seconds)
        }),
        Value::String(text) if convert => parse_timestamp(text),
        _ => None,
    };
    seconds
        .map(Value::from)
        .ok_or_else(|| Violation::invalid_timestamp(name))
}

/// Reads epoch seconds from a numeric string or an RFC 3339 date.
fn parse_timestamp(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    if let Ok(seconds) = trimmed.parse::<u64>() {
        return Some(seconds);
    }
    if let Ok(seconds) = trimmed.parse::<f64>() {
        return integral_seconds(seconds);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .and_then(|date| u64::try_from(date.timestamp()).ok())
}

/// Exclusive upper limit of `u64`, exactly representable as `f64`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Converts a whole, non-negative float to epoch seconds.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is checked to be a whole number within u64 range"
)]
fn integral_seconds(value: f64) -> Option<u64> {
    let whole = value.fract() == 0.0 && value >= 0.0 && value < U64_LIMIT;
    whole.then_some(value as u64)
}

fn check_allowed(rule: &FieldRule, value: &Value) -> Result<(), Violation> {
    let (Some(allowed), Some(text)) = (rule.allowed(), value.as_str()) else {
        return Ok(());
    };
    if allowed.contains(&text) {
        Ok(())
    } else {
        Err(Violation::not_one_of(rule.name(), allowed))
    }
}

fn check_bound(rule: &FieldRule, value: &Value) -> Result<(), Violation> {
    let (Some(bound), Some(number)) = (rule.bound(), value.as_f64()) else {
        return Ok(());
    };
    if bound.admits(number) {
        Ok(())
    } else {
        Err(Violation::below_minimum(
            rule.name(),
            bound.value(),
            bound.is_inclusive(),
        ))
    }
}
