use crate::config::Config;
use crate::core::Capabilities;
use log::{debug, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity.
///
/// The level comes only from the flag; the environment is not consulted.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // try_init: a second initialization (tests, library callers) is not an error
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the effective configuration
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: input={}, output_dir={}, interactive={}",
        config.input_path().display(),
        config.output_dir_path().display(),
        config.interactive.unwrap_or(false)
    );
}

/// Log a loaded table's shape
pub fn log_load<P: AsRef<Path>>(path: P, rows: usize, columns: &[String]) {
    info!(
        "Loaded {rows} row(s) from {}",
        path.as_ref().display()
    );
    debug!("  columns: {}", columns.join(", "));
}

/// Log how many rows survived cleaning
pub fn log_clean(raw_rows: usize, cleaned_rows: usize) {
    let dropped = raw_rows.saturating_sub(cleaned_rows);
    if dropped == 0 {
        info!("Cleaning kept all {cleaned_rows} row(s)");
    } else {
        info!("Cleaning kept {cleaned_rows} of {raw_rows} row(s), {dropped} without a usable price");
    }
}

/// Log which optional columns are present
pub fn log_capabilities(caps: &Capabilities) {
    debug!(
        "Capabilities: price={}, rating={}, category={}, title={}",
        caps.has_price, caps.has_rating, caps.has_category, caps.has_title
    );
    if !caps.has_price {
        warn!("No price column found; price charts and statistics are skipped");
    }
}

/// Log a written artifact
pub fn log_artifact_written<P: AsRef<Path>>(kind: &str, path: P) {
    info!("{kind} written: {}", path.as_ref().display());
}
