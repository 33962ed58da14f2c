//! Statistics
//!
//! Descriptive statistics, frequency tables, and the plain-text
//! summary written next to the charts.

pub mod stats;
pub mod summary;

// Re-export commonly used items
pub use stats::{Describe, describe};
pub use summary::summarize;
