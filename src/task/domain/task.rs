//! Execution task entity.

use super::{TaskStatus, TaskType};
use crate::task::{
    error::{ErrorCode, ExecTaskError, TaskError, ValidateError},
    ports::validator::RecordValidator,
    schema::{DEFAULT_TIMEOUT_SECS, fields},
    validation::SchemaValidator,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde_json::{Map, Value};
use std::{fmt, sync::Arc, time::Duration};
use tracing::debug;

/// Name tagged onto every error raised by [`ExecTask`].
pub const ENTITY_NAME: &str = "execTask";

/// A unit of external work exchanged between processes as JSON.
///
/// The entity owns an untyped record of wire fields. Accessors read and write
/// that record directly without validating; [`validate`](Self::validate)
/// checks it against the task schema and replaces it with the normalized
/// form.
///
/// # Examples
///
/// ```
/// use exec_task::task::domain::{ExecTask, TaskStatus};
/// use mockable::DefaultClock;
/// use serde_json::json;
///
/// let raw = json!({
///     "id": "2c5ea4c0-4067-11e9-8bad-9b1deb4d3b7d",
///     "checkTaskId": "7d444840-9dc0-11d1-b245-5ffdce74fad2",
///     "type": "exec",
///     "data": {"command": "ping -c 1 localhost"}
/// });
/// let raw = raw.as_object().cloned().expect("object literal");
///
/// let mut task = ExecTask::from_raw(raw, &DefaultClock);
/// assert_eq!(task.status(), Some(TaskStatus::Created));
///
/// let serialized = task.serialize().expect("valid task");
///
/// let mut received = ExecTask::new();
/// received.deserialize(&serialized).expect("valid payload");
/// assert_eq!(received.data(), task.data());
/// ```
#[derive(Clone)]
pub struct ExecTask {
    record: Option<Map<String, Value>>,
    valid: bool,
    validator: Arc<dyn RecordValidator>,
}

impl ExecTask {
    /// Creates an empty task.
    ///
    /// Every field is null except `timeout`, which holds the default, and
    /// `data`, which holds an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self {
            record: Some(empty_record()),
            valid: false,
            validator: Arc::new(SchemaValidator::new()),
        }
    }

    /// Creates a task from a raw field mapping and marks it created.
    ///
    /// The mapping is taken as is; it is not validated.
    #[must_use]
    pub fn from_raw(raw: Map<String, Value>, clock: &impl Clock) -> Self {
        let mut task = Self {
            record: Some(raw),
            valid: false,
            validator: Arc::new(SchemaValidator::new()),
        };
        task.created(clock);
        task
    }

    /// Replaces the validator used by [`validate`](Self::validate).
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn RecordValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Replaces the whole record without validating it.
    pub fn replace_record(&mut self, record: Option<Map<String, Value>>) {
        self.record = record;
    }

    /// Returns the task identifier.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.field(fields::ID).and_then(Value::as_str)
    }

    /// Sets the task identifier.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.set_field(fields::ID, Value::String(id.into()));
    }

    /// Returns the identifier of the originating check task.
    #[must_use]
    pub fn check_task_id(&self) -> Option<&str> {
        self.field(fields::CHECK_TASK_ID).and_then(Value::as_str)
    }

    /// Sets the identifier of the originating check task.
    pub fn set_check_task_id(&mut self, check_task_id: impl Into<String>) {
        self.set_field(fields::CHECK_TASK_ID, Value::String(check_task_id.into()));
    }

    /// Returns the task type, if the record holds a recognised one.
    #[must_use]
    pub fn task_type(&self) -> Option<TaskType> {
        self.field(fields::TYPE)
            .and_then(Value::as_str)
            .and_then(|name| TaskType::try_from(name).ok())
    }

    /// Sets the task type.
    pub fn set_task_type(&mut self, task_type: TaskType) {
        self.set_field(fields::TYPE, Value::from(task_type.as_str()));
    }

    /// Returns the execution timeout, if the record holds a numeric one.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        let number = self.field(fields::TIMEOUT)?.as_number()?;
        number.as_u64().map(Duration::from_secs).or_else(|| {
            number
                .as_f64()
                .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok())
        })
    }

    /// Sets the execution timeout.
    ///
    /// Whole-second timeouts are stored as integers.
    pub fn set_timeout(&mut self, timeout: Duration) {
        let value = if timeout.subsec_nanos() == 0 {
            Value::from(timeout.as_secs())
        } else {
            Value::from(timeout.as_secs_f64())
        };
        self.set_field(fields::TIMEOUT, value);
    }

    /// Returns the work payload.
    #[must_use]
    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.field(fields::DATA).and_then(Value::as_object)
    }

    /// Sets the work payload.
    pub fn set_data(&mut self, data: Map<String, Value>) {
        self.set_field(fields::DATA, Value::Object(data));
    }

    /// Returns the work result.
    #[must_use]
    pub fn result(&self) -> Option<&Map<String, Value>> {
        self.field(fields::RESULT).and_then(Value::as_object)
    }

    /// Sets the work result.
    pub fn set_result(&mut self, result: Map<String, Value>) {
        self.set_field(fields::RESULT, Value::Object(result));
    }

    /// Returns the lifecycle status.
    ///
    /// The status has no setter; it changes only through the lifecycle
    /// transitions.
    #[must_use]
    pub fn status(&self) -> Option<TaskStatus> {
        self.field(fields::STATUS)
            .and_then(Value::as_str)
            .and_then(|name| TaskStatus::try_from(name).ok())
    }

    /// Returns when the task was created, in unix seconds.
    #[must_use]
    pub fn creation_date(&self) -> Option<i64> {
        self.date(TaskStatus::Created)
    }

    /// Returns when the task was queued, in unix seconds.
    #[must_use]
    pub fn queued_date(&self) -> Option<i64> {
        self.date(TaskStatus::Queued)
    }

    /// Returns when the task was started, in unix seconds.
    #[must_use]
    pub fn start_date(&self) -> Option<i64> {
        self.date(TaskStatus::Started)
    }

    /// Returns when the task was finished, in unix seconds.
    #[must_use]
    pub fn finish_date(&self) -> Option<i64> {
        self.date(TaskStatus::Finished)
    }

    /// Marks the task created and stamps `creationDate`.
    pub fn created(&mut self, clock: &impl Clock) {
        self.transition(TaskStatus::Created, clock);
    }

    /// Marks the task queued and stamps `queuedDate`.
    pub fn queued(&mut self, clock: &impl Clock) {
        self.transition(TaskStatus::Queued, clock);
    }

    /// Marks the task started and stamps `startDate`.
    pub fn started(&mut self, clock: &impl Clock) {
        self.transition(TaskStatus::Started, clock);
    }

    /// Marks the task finished and stamps `finishDate`.
    pub fn finished(&mut self, clock: &impl Clock) {
        self.transition(TaskStatus::Finished, clock);
    }

    /// Returns `true` if the last call to [`validate`](Self::validate)
    /// succeeded.
    ///
    /// The flag is not reset by later mutations, so it can report `true`
    /// for a record changed since it was validated.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Validates the record and replaces it with its normalized form.
    ///
    /// Normalization coerces compatible values and fills in defaults, so a
    /// record without a `timeout` gains the default one. An absent record
    /// is validated as an empty one.
    ///
    /// # Errors
    ///
    /// Returns [`ExecTaskError::Task`] with [`ErrorCode::InvalidData`] and
    /// the full violation list when the record breaks the schema, or
    /// [`ExecTaskError::Schema`] unchanged when the validator itself fails.
    pub fn validate(&mut self) -> Result<&mut Self, ExecTaskError> {
        let empty = Map::new();
        let raw = self.record.as_ref().unwrap_or(&empty);

        match self.validator.validate(raw) {
            Ok(normalized) => {
                self.valid = true;
                self.record = Some(normalized);
                debug!(task_id = self.id().unwrap_or_default(), "task validated");
                Ok(self)
            }
            Err(ValidateError::Violations(report)) => Err(Self::error(
                "invalid data",
                ErrorCode::InvalidData,
            )
            .with_violations(report)
            .into()),
            Err(ValidateError::Schema(error)) => Err(error.into()),
        }
    }

    /// Validates the task and encodes it as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::NoData`] without validating when the record is
    /// absent or has no fields; otherwise propagates the errors of
    /// [`validate`](Self::validate).
    pub fn serialize(&mut self) -> Result<String, ExecTaskError> {
        if self.record.as_ref().is_none_or(Map::is_empty) {
            return Err(Self::error("no data", ErrorCode::NoData).into());
        }

        let record = self
            .validate()?
            .record
            .as_ref()
            .ok_or_else(|| Self::error("no data", ErrorCode::NoData))?;
        let serialized = serde_json::to_string(record)
            .map_err(|_| Self::error("invalid data", ErrorCode::InvalidData))?;

        debug!(
            task_id = self.id().unwrap_or_default(),
            bytes = serialized.len(),
            "task serialized"
        );
        Ok(serialized)
    }

    /// Replaces the record with the decoded JSON object and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::NoData`] for empty input, and
    /// [`ErrorCode::InvalidData`] for input that is not JSON or not a
    /// non-empty object. Otherwise propagates the errors of
    /// [`validate`](Self::validate).
    pub fn deserialize(&mut self, raw: &str) -> Result<(), ExecTaskError> {
        if raw.is_empty() {
            return Err(Self::error("empty serialized data", ErrorCode::NoData).into());
        }

        let parsed: Value = serde_json::from_str(raw).map_err(|err| {
            debug!(error = %err, "serialized task is not JSON");
            Self::error("invalid serialized data", ErrorCode::InvalidData)
        })?;
        let record = match parsed {
            Value::Object(record) if !record.is_empty() => record,
            _ => {
                return Err(
                    Self::error("invalid serialized data", ErrorCode::InvalidData).into(),
                );
            }
        };

        self.record = Some(record);
        self.validate()?;
        debug!(task_id = self.id().unwrap_or_default(), "task deserialized");
        Ok(())
    }

    /// Returns an independent copy of the record.
    #[must_use]
    pub fn to_object(&self) -> Option<Map<String, Value>> {
        self.record.clone()
    }

    fn error(message: &str, code: ErrorCode) -> TaskError {
        TaskError::new(message, code, ENTITY_NAME)
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.record.as_ref()?.get(name)
    }

    fn set_field(&mut self, name: &str, value: Value) {
        self.record
            .get_or_insert_with(Map::new)
            .insert(name.to_owned(), value);
    }

    fn date(&self, status: TaskStatus) -> Option<i64> {
        self.field(status.date_field()).and_then(Value::as_i64)
    }

    fn transition(&mut self, status: TaskStatus, clock: &impl Clock) {
        let stamp = unix_seconds(clock.utc());
        self.set_field(fields::STATUS, Value::from(status.as_str()));
        self.set_field(status.date_field(), Value::from(stamp));
        debug!(
            task_id = self.id().unwrap_or_default(),
            status = status.as_str(),
            stamp,
            "task transitioned"
        );
    }
}

impl Default for ExecTask {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExecTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecTask")
            .field("record", &self.record)
            .field("valid", &self.valid)
            .finish_non_exhaustive()
    }
}

/// Rounds `instant` to the nearest whole unix second.
#[must_use]
pub fn unix_seconds(instant: DateTime<Utc>) -> i64 {
    let seconds = instant.timestamp();
    if instant.timestamp_subsec_millis() >= 500 {
        seconds.saturating_add(1)
    } else {
        seconds
    }
}

fn empty_record() -> Map<String, Value> {
    let mut record = Map::new();
    for name in [
        fields::ID,
        fields::CHECK_TASK_ID,
        fields::TYPE,
        fields::STATUS,
        fields::RESULT,
        fields::CREATION_DATE,
        fields::QUEUED_DATE,
        fields::START_DATE,
        fields::FINISH_DATE,
    ] {
        record.insert(name.to_owned(), Value::Null);
    }
    record.insert(fields::TIMEOUT.to_owned(), Value::from(DEFAULT_TIMEOUT_SECS));
    record.insert(fields::DATA.to_owned(), Value::Object(Map::new()));
    record
}
