//! bookviz: clean a book listings CSV and render charts plus an HTML report.
//!
//! The pipeline runs strictly one way: [`data`] loads and cleans the table,
//! [`analysis`] summarizes it, [`charts`] renders static PNGs, and
//! [`reporting`] assembles the HTML report and optional dashboard.
//! [`pipeline::run`] sequences all of it.

pub mod analysis;
pub mod charts;
pub mod config;
pub mod core;
pub mod data;
pub mod pipeline;
pub mod reporting;
pub mod ui;

// Re-export commonly used items
pub use config::{CliConfig, Config};
pub use core::{BookVizError, Capabilities, Result, Table, Value};
pub use pipeline::{RunArtifacts, run};
