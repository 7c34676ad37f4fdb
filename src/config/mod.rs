//! Configuration module for loading simulation parameters.
//!
//! Parameters are loaded from JSON files with defaults as fallback.

mod parameters;

pub use parameters::{CouplingParameters, LatticeParameters, Parameters};
