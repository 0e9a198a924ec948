//! Exec-task: the execution task entity exchanged between task processes.
//!
//! This crate models a single unit of external work, an "execution task",
//! that is created, validated against a declarative schema, transitioned
//! through a small lifecycle, and serialized to JSON for a transport layer
//! to move between processes.
//!
//! # Architecture
//!
//! Exec-task follows hexagonal architecture principles:
//!
//! - **Domain**: The task entity and its enumerations
//! - **Ports**: The validator trait the entity delegates to
//! - **Validation**: The schema-driven validator implementing that port
//!
//! # Modules
//!
//! - [`task`]: Task entity, schema, validation, and errors

pub mod task;
