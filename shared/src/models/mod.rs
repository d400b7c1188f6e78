//! Domain models for seed grading

mod grading;
mod measurement;
mod report;

pub use grading::*;
pub use measurement::*;
pub use report::*;
