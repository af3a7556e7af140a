//! Validation helpers shared by the composite checks and the CLI.

pub mod constants;
pub mod input_validation;
