//! Core types and foundational components
//!
//! This module contains the record table, the capability set, error
//! handling, and constants used throughout the application.

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{BookVizError, Result};
pub use types::{Capabilities, ColumnType, Table, Value};
