//! Data loading and cleaning
//!
//! This module reads the input CSV into a record table and produces
//! the cleaned table every later stage works from.

pub mod cleaner;
pub mod loader;

// Re-export commonly used items
pub use cleaner::clean;
pub use loader::{load_csv, read_table};
