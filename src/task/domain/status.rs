//! Task kind and lifecycle status enumerations.

use super::{ParseTaskStatusError, ParseTaskTypeError};
use crate::task::schema::fields;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of external work an execution task describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// A shell command run by an exec worker.
    Exec,
    /// An HTTP request issued by an http worker.
    Http,
}

impl TaskType {
    /// Every task type, in wire-name order.
    pub const ALL: [Self; 2] = [Self::Exec, Self::Http];

    /// Wire names accepted for the `type` field.
    pub const NAMES: &'static [&'static str] = &["exec", "http"];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exec => "exec",
            Self::Http => "http",
        }
    }
}

impl TryFrom<&str> for TaskType {
    type Error = ParseTaskTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "exec" => Ok(Self::Exec),
            "http" => Ok(Self::Http),
            _ => Err(ParseTaskTypeError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Execution task lifecycle status.
///
/// Statuses are stamped by the lifecycle transitions on
/// [`ExecTask`](super::ExecTask); no ordering between them is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// The task record has been created.
    Created,
    /// The task has been handed to a queue.
    Queued,
    /// A worker has started executing the task.
    Started,
    /// A worker has finished executing the task.
    Finished,
}

impl TaskStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Created, Self::Queued, Self::Started, Self::Finished];

    /// Wire names accepted for the `status` field.
    pub const NAMES: &'static [&'static str] = &["created", "queued", "started", "finished"];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Queued => "queued",
            Self::Started => "started",
            Self::Finished => "finished",
        }
    }

    /// Returns the record field stamped when a task enters this status.
    #[must_use]
    pub const fn date_field(self) -> &'static str {
        match self {
            Self::Created => fields::CREATION_DATE,
            Self::Queued => fields::QUEUED_DATE,
            Self::Started => fields::START_DATE,
            Self::Finished => fields::FINISH_DATE,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "created" => Ok(Self::Created),
            "queued" => Ok(Self::Queued),
            "started" => Ok(Self::Started),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
