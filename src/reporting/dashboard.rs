use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::{Value as JsonValue, json};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::stats::{self, Bin, PricePoint};
use crate::core::constants::{charts, dashboard, report};
use crate::core::{Capabilities, Result, Table};
use crate::reporting::report::escape_html;

/// Interactive chart kinds, in dashboard order
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardChart {
    PriceHistogram(Vec<Bin>),
    TopCategories(Vec<(String, usize)>),
    PriceVsRating(Vec<PricePoint>),
}

/// Data structure containing all information needed for dashboard generation
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Charts in display order
    pub charts: Vec<DashboardChart>,
    /// Timestamp when the dashboard was generated
    pub timestamp: String,
}

impl DashboardData {
    /// Collect the charts the capability set allows.
    pub fn from_table(table: &Table, caps: &Capabilities) -> Self {
        let mut charts = Vec::new();
        if caps.has_price {
            charts.push(DashboardChart::PriceHistogram(stats::histogram(
                &stats::prices(table),
                dashboard::PRICE_HISTOGRAM_BINS,
            )));
        }
        if caps.has_category {
            charts.push(DashboardChart::TopCategories(stats::top_categories(
                table,
                dashboard::TOP_CATEGORIES,
            )));
        }
        if caps.has_price_and_rating() {
            charts.push(DashboardChart::PriceVsRating(stats::price_rating_points(
                table,
            )));
        }

        Self {
            charts,
            timestamp: Utc::now().format(report::TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Point of the interactive strip plot; `x` is the jittered rating
#[derive(Debug, Serialize)]
struct StripPoint<'a> {
    x: f64,
    y: f64,
    rating: f64,
    title: &'a str,
    category: &'a str,
}

/// Build the dashboard for a cleaned table and write it to `out_path`.
pub fn generate_interactive_dashboard<P: AsRef<Path>>(
    table: &Table,
    caps: &Capabilities,
    out_path: P,
) -> Result<PathBuf> {
    let data = DashboardData::from_table(table, caps);
    HtmlDashboard::generate_dashboard(&data, out_path.as_ref())?;
    Ok(out_path.as_ref().to_path_buf())
}

/// HTML dashboard generator backed by Chart.js
pub struct HtmlDashboard;

impl HtmlDashboard {
    /// Generate and write an HTML dashboard to the specified path
    pub fn generate_dashboard(data: &DashboardData, output_path: &Path) -> Result<()> {
        let html_content = Self::generate_html_content(data)?;
        fs::write(output_path, html_content)?;
        Ok(())
    }

    /// Generate the complete HTML document content
    pub fn generate_html_content(data: &DashboardData) -> Result<String> {
        let mut blocks = Vec::with_capacity(data.charts.len());
        for (index, chart) in data.charts.iter().enumerate() {
            blocks.push(Self::generate_chart_block(index, chart)?);
        }
        let body = if blocks.is_empty() {
            "<p>No chartable columns were found in the input.</p>\n".to_string()
        } else {
            blocks.concat()
        };

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<h1>{title}</h1>
<p>Generated: {timestamp}</p>
{body}</body>
</html>
"#,
            title = report::DASHBOARD_TITLE,
            css = Self::generate_css(),
            timestamp = escape_html(&data.timestamp),
        ))
    }

    fn generate_css() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            color: #1e293b;
            max-width: 1200px;
            margin: 0 auto;
            padding: 2rem;
        }

        .chart-container {
            padding: 1.5rem;
            border: 1px solid #e2e8f0;
            border-radius: 12px;
            margin-bottom: 1.5rem;
        }

        .chart-title {
            font-size: 1.25rem;
            font-weight: 600;
            margin-bottom: 1rem;
        }
        "#
    }

    /// One chart: container, canvas and the script that draws it.
    ///
    /// Only the first block loads the Chart.js runtime; later blocks reuse it.
    fn generate_chart_block(index: usize, chart: &DashboardChart) -> Result<String> {
        let runtime = if index == 0 {
            format!(r#"<script src="{}"></script>"#, dashboard::CHART_JS_CDN)
        } else {
            String::new()
        };
        let (title, config) = Self::chart_config(chart);
        let config_json = script_safe(&serde_json::to_string(&config)?);
        let tooltip = match chart {
            DashboardChart::PriceVsRating(_) => STRIP_TOOLTIP_JS,
            _ => "",
        };

        Ok(format!(
            r#"<div class="chart-container">
{runtime}
<h3 class="chart-title">{title}</h3>
<canvas id="chart-{index}"></canvas>
<script>
(function() {{
    const config = {config_json};
    {tooltip}
    new Chart(document.getElementById('chart-{index}'), config);
}})();
</script>
</div>
<hr/>
"#,
            title = escape_html(title),
        ))
    }

    /// Chart title and Chart.js configuration
    fn chart_config(chart: &DashboardChart) -> (&'static str, JsonValue) {
        match chart {
            DashboardChart::PriceHistogram(bins) => {
                let labels: Vec<String> = bins
                    .iter()
                    .map(|b| format!("{:.2}-{:.2}", b.lo, b.hi))
                    .collect();
                let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
                (
                    "Interactive Price Distribution",
                    json!({
                        "type": "bar",
                        "data": {
                            "labels": labels,
                            "datasets": [{
                                "label": "Count",
                                "data": counts,
                                "barPercentage": 1.0,
                                "categoryPercentage": 1.0,
                                "backgroundColor": "#4c72b0"
                            }]
                        },
                        "options": {
                            "plugins": { "legend": { "display": false } },
                            "scales": {
                                "x": { "title": { "display": true, "text": "Price (GBP)" } },
                                "y": { "title": { "display": true, "text": "Count" }, "beginAtZero": true }
                            }
                        }
                    }),
                )
            }
            DashboardChart::TopCategories(top) => {
                let labels: Vec<&str> = top.iter().map(|(c, _)| c.as_str()).collect();
                let counts: Vec<usize> = top.iter().map(|(_, n)| *n).collect();
                let rotation = dashboard::CATEGORY_LABEL_ROTATION;
                (
                    "Top 20 Categories",
                    json!({
                        "type": "bar",
                        "data": {
                            "labels": labels,
                            "datasets": [{
                                "label": "Count",
                                "data": counts,
                                "backgroundColor": "#4c72b0"
                            }]
                        },
                        "options": {
                            "plugins": { "legend": { "display": false } },
                            "scales": {
                                "x": {
                                    "title": { "display": true, "text": "Category" },
                                    "ticks": { "minRotation": rotation, "maxRotation": rotation }
                                },
                                "y": { "title": { "display": true, "text": "Count" }, "beginAtZero": true }
                            }
                        }
                    }),
                )
            }
            DashboardChart::PriceVsRating(points) => {
                let mut rng = StdRng::seed_from_u64(charts::JITTER_SEED);
                let width = charts::JITTER_WIDTH;
                let data: Vec<StripPoint<'_>> = points
                    .iter()
                    .map(|p| StripPoint {
                        x: p.rating + rng.gen_range(-width..=width),
                        y: p.price,
                        rating: p.rating,
                        title: p.title.as_deref().unwrap_or(""),
                        category: p.category.as_deref().unwrap_or(""),
                    })
                    .collect();
                (
                    "Price vs Rating (interactive)",
                    json!({
                        "type": "scatter",
                        "data": {
                            "datasets": [{
                                "label": "Books",
                                "data": data,
                                "backgroundColor": "rgba(221, 132, 82, 0.7)"
                            }]
                        },
                        "options": {
                            "plugins": { "legend": { "display": false } },
                            "scales": {
                                "x": {
                                    "type": "linear",
                                    "title": { "display": true, "text": "Rating" },
                                    "ticks": { "stepSize": 1 }
                                },
                                "y": { "title": { "display": true, "text": "Price (GBP)" } }
                            }
                        }
                    }),
                )
            }
        }
    }
}

/// Row-level hover text of the strip plot
const STRIP_TOOLTIP_JS: &str = r#"config.options.plugins.tooltip = {
        callbacks: {
            label: function(ctx) {
                const p = ctx.raw;
                return [p.title, p.category, 'Price: ' + p.y, 'Rating: ' + p.rating];
            }
        }
    };"#;

/// Keep serialized JSON from closing the surrounding script element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
