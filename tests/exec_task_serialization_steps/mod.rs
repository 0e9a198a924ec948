//! Step definitions for execution task serialization scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
