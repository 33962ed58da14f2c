//! Output formatting and display logic for bookviz

use std::io::{self, Write};

use crate::pipeline::RunArtifacts;

/// Heading printed above the artifact list
pub const COMPLETE_HEADING: &str = "Visualization complete. Outputs:";

/// Format the artifact list, one path per line
pub fn format_artifacts(artifacts: &RunArtifacts) -> String {
    let mut out = String::from(COMPLETE_HEADING);
    out.push('\n');
    for path in artifacts.paths() {
        out.push_str(&format!(" - {}\n", path.display()));
    }
    out
}

/// Print the artifact list to standard output
pub fn display_artifacts(artifacts: &RunArtifacts) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(format_artifacts(artifacts).as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_artifacts() {
        let artifacts = RunArtifacts {
            images: vec![PathBuf::from("out/price_distribution.png")],
            report: PathBuf::from("out/report.html"),
            summary: PathBuf::from("out/summary.txt"),
            dashboard: None,
        };

        assert_eq!(
            format_artifacts(&artifacts),
            "Visualization complete. Outputs:\n - out/price_distribution.png\n - out/report.html\n - out/summary.txt\n"
        );
    }
}
