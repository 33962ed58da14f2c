//! End-to-end run: load, clean, summarize, chart, report.

use chrono::Utc;
use std::fs;
use std::path::PathBuf;

use crate::analysis::summarize;
use crate::charts::{ChartRenderer, ChartStyle};
use crate::config::Config;
use crate::core::constants::files;
use crate::core::{Capabilities, Result};
use crate::data::{clean, load_csv};
use crate::reporting::logging;
use crate::reporting::{create_html_report, generate_interactive_dashboard};

/// Paths of everything a run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunArtifacts {
    pub images: Vec<PathBuf>,
    pub report: PathBuf,
    pub summary: PathBuf,
    pub dashboard: Option<PathBuf>,
}

impl RunArtifacts {
    /// Images, report, summary, then the dashboard if one was built.
    pub fn paths(&self) -> Vec<&PathBuf> {
        self.images
            .iter()
            .chain([&self.report, &self.summary])
            .chain(self.dashboard.as_ref())
            .collect()
    }
}

/// Run the whole pipeline with the default chart style.
pub fn run(config: &Config) -> Result<RunArtifacts> {
    run_with_style(config, ChartStyle::default())
}

/// Run the whole pipeline. Any failure aborts the run; files written before
/// the failure stay on disk.
pub fn run_with_style(config: &Config, style: ChartStyle) -> Result<RunArtifacts> {
    let input = config.input_path();
    let out_dir = config.output_dir_path();
    logging::log_config_info(config);

    fs::create_dir_all(&out_dir)?;

    let raw = load_csv(&input)?;
    logging::log_load(&input, raw.len(), raw.columns());
    let raw_rows = raw.len();

    let table = clean(raw);
    logging::log_clean(raw_rows, table.len());

    let caps = Capabilities::detect(&table);
    logging::log_capabilities(&caps);

    let summary_text = summarize(&table, &caps);
    let summary = out_dir.join(files::SUMMARY);
    fs::write(&summary, &summary_text)?;
    logging::log_artifact_written("Summary", &summary);

    let renderer = ChartRenderer::new(&out_dir, style);
    let images = renderer.render_all(&table, &caps)?;

    let report = create_html_report(&images, &summary_text, &out_dir, Utc::now())?;
    logging::log_artifact_written("Report", &report);

    let dashboard = if config.interactive.unwrap_or(false) {
        let path = generate_interactive_dashboard(&table, &caps, out_dir.join(files::DASHBOARD))?;
        logging::log_artifact_written("Dashboard", &path);
        Some(path)
    } else {
        None
    };

    Ok(RunArtifacts {
        images,
        report,
        summary,
        dashboard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BookVizError;

    #[test]
    fn test_artifact_paths_order() {
        let artifacts = RunArtifacts {
            images: vec![PathBuf::from("a.png"), PathBuf::from("b.png")],
            report: PathBuf::from("report.html"),
            summary: PathBuf::from("summary.txt"),
            dashboard: Some(PathBuf::from("interactive_dashboard.html")),
        };

        let paths: Vec<String> = artifacts
            .paths()
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        assert_eq!(
            paths,
            vec!["a.png", "b.png", "report.html", "summary.txt", "interactive_dashboard.html"]
        );
    }

    #[test]
    fn test_artifact_paths_without_dashboard() {
        let artifacts = RunArtifacts {
            images: vec![],
            report: PathBuf::from("report.html"),
            summary: PathBuf::from("summary.txt"),
            dashboard: None,
        };

        assert_eq!(artifacts.paths().len(), 2);
    }

    #[test]
    fn test_run_missing_input_fails_after_creating_out_dir() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let out_dir = dir.path().join("nested").join("out");
        let config = Config {
            input: Some(dir.path().join("missing.csv").display().to_string()),
            output_dir: Some(out_dir.display().to_string()),
            ..Default::default()
        };

        match run(&config) {
            Err(BookVizError::MissingInput(_)) => {}
            other => panic!("Expected MissingInput, got {other:?}"),
        }
        assert!(out_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_run_without_chartable_columns() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("books.csv");
        fs::write(&input, "title,stock\nA,In stock\nB,\n")?;
        let config = Config {
            input: Some(input.display().to_string()),
            output_dir: Some(dir.path().join("out").display().to_string()),
            interactive: Some(true),
            ..Default::default()
        };

        let artifacts = run(&config)?;
        assert!(artifacts.images.is_empty());
        assert!(artifacts.report.is_file());
        assert!(artifacts.dashboard.as_ref().is_some_and(|p| p.is_file()));
        assert!(fs::read_to_string(&artifacts.summary)?.starts_with("Rows: 2\n"));
        Ok(())
    }
}
