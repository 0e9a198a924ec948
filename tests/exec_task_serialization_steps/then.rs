//! Then steps for execution task serialization scenarios.

use super::world::ExecTaskWorld;
use exec_task::task::error::{ErrorCode, ExecTaskError};
use rstest_bdd_macros::then;
use std::time::Duration;

fn last_error(world: &ExecTaskWorld) -> Result<&ExecTaskError, eyre::Report> {
    world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the operation to fail"))
}

#[then("the fresh task data equals the original data")]
fn fresh_task_data_equals_original(world: &ExecTaskWorld) -> Result<(), eyre::Report> {
    if let Some(error) = world.last_error.as_ref() {
        return Err(eyre::eyre!("unexpected error: {error}"));
    }
    let fresh = world
        .fresh_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing fresh task"))?;

    if fresh.data() != world.original_data.as_ref() {
        return Err(eyre::eyre!(
            "expected data {:?}, found {:?}",
            world.original_data,
            fresh.data()
        ));
    }
    Ok(())
}

#[then("the fresh task timeout is {seconds:u64} seconds")]
fn fresh_task_timeout_is(world: &ExecTaskWorld, seconds: u64) -> Result<(), eyre::Report> {
    let fresh = world
        .fresh_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing fresh task"))?;

    if fresh.timeout() != Some(Duration::from_secs(seconds)) {
        return Err(eyre::eyre!(
            "expected timeout of {seconds}s, found {:?}",
            fresh.timeout()
        ));
    }
    Ok(())
}

#[then(r#"the operation fails with code "{code}""#)]
fn operation_fails_with_code(world: &ExecTaskWorld, code: String) -> Result<(), eyre::Report> {
    let expected = ErrorCode::ALL
        .into_iter()
        .find(|candidate| candidate.as_str() == code)
        .ok_or_else(|| eyre::eyre!("unknown error code in scenario: {code}"))?;
    let error = last_error(world)?;

    if error.code() != Some(expected) {
        return Err(eyre::eyre!("expected {expected} error, got {error:?}"));
    }
    Ok(())
}

#[then(r#"the error message is "{message}""#)]
fn error_message_is(world: &ExecTaskWorld, message: String) -> Result<(), eyre::Report> {
    let error = last_error(world)?;

    if error.to_string() != message {
        return Err(eyre::eyre!("expected message {message:?}, got {error}"));
    }
    Ok(())
}

#[then(r#"the violations include "{path}""#)]
fn violations_include(world: &ExecTaskWorld, path: String) -> Result<(), eyre::Report> {
    let error = last_error(world)?;

    if !error.violations().iter().any(|violation| violation.path == path) {
        return Err(eyre::eyre!(
            "expected a violation for {path}, got {:?}",
            error.violations()
        ));
    }
    Ok(())
}
