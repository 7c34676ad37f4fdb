//! Export functionality for simulation data.
//!
//! Provides CSV snapshot export of the membrane displacement fields.

mod csv_export;

pub use csv_export::{CellRecord, CsvExporter};
