//! Unit tests for the task module.
//!
//! Tests are organised by component: schema definition, record validation,
//! entity accessors, lifecycle transitions, and the serialization contract.
