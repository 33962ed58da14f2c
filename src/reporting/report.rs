//! Static HTML report: summary text plus the rendered chart images.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::core::constants::{files, report};

/// Write `report.html` into `out_dir` and return its path.
///
/// Images are linked by file name, so the report only works next to them.
pub fn create_html_report<P: AsRef<Path>>(
    image_paths: &[PathBuf],
    summary: &str,
    out_dir: P,
    generated_at: DateTime<Utc>,
) -> Result<PathBuf> {
    let report_path = out_dir.as_ref().join(files::REPORT);
    fs::write(&report_path, render_report(image_paths, summary, generated_at))?;
    Ok(report_path)
}

/// Build the report document.
pub fn render_report(image_paths: &[PathBuf], summary: &str, generated_at: DateTime<Utc>) -> String {
    let images_html = image_paths
        .iter()
        .map(|path| {
            let name = escape_html(&file_name(path));
            format!(
                r#"<div style="margin-bottom:30px"><img src="{name}" alt="{name}" style="max-width:100%;height:auto"><p style="font-size:0.9em;color:#444">{name}</p></div>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
<p>Generated: {timestamp}</p>
<h2>Dataset Summary</h2>
<pre>
{summary}</pre>
<h2>Charts</h2>
{images_html}
</body>
</html>
"#,
        title = report::TITLE,
        timestamp = generated_at.format(report::TIMESTAMP_FORMAT),
        summary = escape_html(summary),
    )
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
