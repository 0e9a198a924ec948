//! Given steps for execution task serialization scenarios.

use super::world::ExecTaskWorld;
use exec_task::task::domain::ExecTask;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use serde_json::{Map, Value, json};
use uuid::Uuid;

fn object(value: Value) -> Result<Map<String, Value>, eyre::Report> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(eyre::eyre!("expected a JSON object, got {other}")),
    }
}

#[given(r#"a raw exec task with command "{command}""#)]
fn raw_exec_task(world: &mut ExecTaskWorld, command: String) -> Result<(), eyre::Report> {
    let raw = object(json!({
        "id": Uuid::new_v4().to_string(),
        "checkTaskId": Uuid::new_v4().to_string(),
        "type": "exec",
        "data": {"command": command}
    }))?;
    let task = ExecTask::from_raw(raw, &DefaultClock);
    world.original_data = task.data().cloned();
    world.task = Some(task);
    Ok(())
}

#[given(r#"a raw task with id "{id}", check task id "{check_task_id}" and type "{task_type}""#)]
fn raw_task_with_fields(
    world: &mut ExecTaskWorld,
    id: String,
    check_task_id: String,
    task_type: String,
) -> Result<(), eyre::Report> {
    let raw = object(json!({"id": id, "checkTaskId": check_task_id, "type": task_type}))?;
    world.task = Some(ExecTask::from_raw(raw, &DefaultClock));
    Ok(())
}

#[given("an empty task")]
fn empty_task(world: &mut ExecTaskWorld) {
    world.task = Some(ExecTask::new());
}

#[given("the task record has been cleared")]
fn task_record_cleared(world: &mut ExecTaskWorld) -> Result<(), eyre::Report> {
    world.task_mut()?.replace_record(None);
    Ok(())
}
