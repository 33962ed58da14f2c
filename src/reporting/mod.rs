//! Reports and logging
//!
//! This module builds the static HTML report, the optional interactive
//! dashboard, and holds the structured logging helpers.

pub mod dashboard;
pub mod logging;
pub mod report;

// Re-export commonly used items
pub use dashboard::{DashboardData, HtmlDashboard, generate_interactive_dashboard};
pub use report::create_html_report;
