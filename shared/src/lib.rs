//! Shared types and grading logic for the seed grading tools
//!
//! This crate holds the grading engine and the models shared between the
//! command-line grader and the browser form (via WASM). It performs no I/O.

pub mod models;
pub mod simulation;
pub mod standards;
pub mod validation;

pub use models::*;
pub use simulation::*;
pub use standards::*;
pub use validation::*;
