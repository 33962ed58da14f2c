use bookviz::config::{CliConfig, Config};
use bookviz::pipeline;
use bookviz::reporting::logging;
use bookviz::ui::{Cli, cli_to_config, output, validate_cli_args};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    validate_cli_args(&cli);

    match run_bookviz_logic(&cli) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main visualization logic extracted from main() for testing
pub fn run_bookviz_logic(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false));

    let artifacts = pipeline::run(&config)?;
    output::display_artifacts(&artifacts)?;
    Ok(())
}

/// Load configuration from file and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI takes precedence
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
