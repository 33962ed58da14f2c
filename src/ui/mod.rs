//! User interface
//!
//! CLI parsing and the artifact listing printed after a run.

pub mod cli;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config, validate_cli_args};
pub use output::display_artifacts;
