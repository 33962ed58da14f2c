//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::defaults;
use crate::core::error::{BookVizError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input CSV path
    pub input: Option<String>,

    /// Directory receiving every artifact
    pub output_dir: Option<String>,

    /// Also build the interactive dashboard
    pub interactive: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: Some(defaults::INPUT.to_string()),
            output_dir: Some(defaults::OUTPUT_DIR.to_string()),
            interactive: Some(false),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BookVizError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config: Config = toml::from_str(&content)?;

        // Fields absent from the file keep their defaults
        let fallback = Config::default();
        config.input = config.input.or(fallback.input);
        config.output_dir = config.output_dir.or(fallback.output_dir);
        config.interactive = config.interactive.or(fallback.interactive);
        config.verbose = config.verbose.or(fallback.verbose);

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in the working directory or its parents
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(defaults::CONFIG_FILE_NAME) {
            return config;
        }

        for i in 1..=defaults::CONFIG_SEARCH_DEPTH {
            let path = format!("{}{}", "../".repeat(i), defaults::CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref input) = cli_config.input {
            self.input = Some(input.clone());
        }
        if let Some(ref output_dir) = cli_config.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if cli_config.interactive {
            self.interactive = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(self.input.as_deref().unwrap_or(defaults::INPUT))
    }

    pub fn output_dir_path(&self) -> PathBuf {
        PathBuf::from(self.output_dir.as_deref().unwrap_or(defaults::OUTPUT_DIR))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref input) = self.input
            && input.trim().is_empty()
        {
            return Err(BookVizError::Config(
                "Input path cannot be empty. Expected a path to a CSV file.".to_string(),
            ));
        }

        if let Some(ref output_dir) = self.output_dir
            && output_dir.trim().is_empty()
        {
            return Err(BookVizError::Config(
                "Output directory cannot be empty. Expected a directory path.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub input: Option<String>,       // --input
    pub output_dir: Option<String>,  // --outdir
    pub interactive: bool,           // --interactive
    pub verbose: bool,               // --verbose
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
