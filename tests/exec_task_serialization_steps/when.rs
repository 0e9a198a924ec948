//! When steps for execution task serialization scenarios.

use super::world::ExecTaskWorld;
use exec_task::task::domain::ExecTask;
use rstest_bdd_macros::when;

#[when("the task is serialized")]
fn task_serialized(world: &mut ExecTaskWorld) -> Result<(), eyre::Report> {
    let result = world.task_mut()?.serialize();
    world.serialized = world.record(result);
    Ok(())
}

#[when("the task is validated")]
fn task_validated(world: &mut ExecTaskWorld) -> Result<(), eyre::Report> {
    let result = world.task_mut()?.validate().map(|_| ());
    world.record(result);
    Ok(())
}

#[when("the serialized text is deserialized into a fresh task")]
fn serialized_text_deserialized(world: &mut ExecTaskWorld) -> Result<(), eyre::Report> {
    let serialized = world
        .serialized
        .clone()
        .ok_or_else(|| eyre::eyre!("missing serialized text in scenario world"))?;
    let mut fresh = ExecTask::new();
    let result = fresh.deserialize(&serialized);
    world.record(result);
    world.fresh_task = Some(fresh);
    Ok(())
}

#[when(r#"the text "{text}" is deserialized"#)]
fn text_deserialized(world: &mut ExecTaskWorld, text: String) -> Result<(), eyre::Report> {
    let result = world.task_mut()?.deserialize(&text);
    world.record(result);
    Ok(())
}

#[when("empty text is deserialized")]
fn empty_text_deserialized(world: &mut ExecTaskWorld) -> Result<(), eyre::Report> {
    let result = world.task_mut()?.deserialize("");
    world.record(result);
    Ok(())
}
