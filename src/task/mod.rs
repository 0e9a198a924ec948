//! Execution task lifecycle and transport contract.
//!
//! An execution task is created, validated, transitioned through its
//! lifecycle, and exchanged between processes as JSON. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - The declarative task schema in [`schema`]
//! - Port contracts in [`ports`]
//! - The schema validator in [`validation`]
//! - Error taxonomy in [`error`]

pub mod domain;
pub mod error;
pub mod ports;
pub mod schema;
pub mod validation;

#[cfg(test)]
mod tests;
