// Command-line interface definitions and parsing for bookviz

use crate::config::CliConfig;
use crate::core::constants::defaults;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Input & Output
    /// Input CSV of book listings (default: books.csv)
    #[arg(short = 'i', long, value_name = "FILE", help_heading = "Input & Output")]
    pub input: Option<String>,

    /// Output directory for charts and reports (default: outputs)
    #[arg(short = 'o', long, value_name = "DIR", help_heading = "Input & Output")]
    pub outdir: Option<String>,

    /// Also produce the interactive HTML dashboard
    #[arg(long, help_heading = "Input & Output")]
    pub interactive: bool,

    // Output & Verbosity
    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        input: non_empty(cli.input.as_deref()),
        output_dir: non_empty(cli.outdir.as_deref()),
        interactive: cli.interactive,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

/// Warn about arguments that would be ignored
pub fn validate_cli_args(cli: &Cli) {
    if cli.no_config && cli.config.is_some() {
        eprintln!("Warning: --config is ignored because --no-config is set.");
    }
    if cli.input.as_deref().is_some_and(|s| s.trim().is_empty()) {
        eprintln!(
            "Warning: Empty --input given. Falling back to '{}'.",
            defaults::INPUT
        );
    }
    if cli.outdir.as_deref().is_some_and(|s| s.trim().is_empty()) {
        eprintln!(
            "Warning: Empty --outdir given. Falling back to '{}'.",
            defaults::OUTPUT_DIR
        );
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
