//! Shared world state for execution task serialization scenarios.

use exec_task::task::{domain::ExecTask, error::ExecTaskError};
use rstest::fixture;
use serde_json::{Map, Value};

/// Scenario world for serialization behaviour tests.
#[derive(Debug, Default)]
pub struct ExecTaskWorld {
    pub task: Option<ExecTask>,
    pub original_data: Option<Map<String, Value>>,
    pub serialized: Option<String>,
    pub fresh_task: Option<ExecTask>,
    pub last_error: Option<ExecTaskError>,
}

impl ExecTaskWorld {
    /// Returns the task under test.
    pub fn task_mut(&mut self) -> Result<&mut ExecTask, eyre::Report> {
        self.task
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Records the outcome of an operation, keeping only its error.
    pub fn record<T>(&mut self, result: Result<T, ExecTaskError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Some(value)
            }
            Err(error) => {
                self.last_error = Some(error);
                None
            }
        }
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ExecTaskWorld {
    ExecTaskWorld::default()
}
