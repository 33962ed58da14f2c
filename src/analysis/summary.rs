//! Plain-text dataset summary.

use std::fmt::Write;

use crate::analysis::stats::{self, describe};
use crate::core::{Capabilities, Table};

/// Build the summary text: row count, column types, missing counts, and the
/// price/rating sections when those columns are present.
pub fn summarize(table: &Table, caps: &Capabilities) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write_summary(&mut out, table, caps);
    out
}

fn write_summary(out: &mut String, table: &Table, caps: &Capabilities) -> std::fmt::Result {
    writeln!(out, "Rows: {}", table.len())?;

    let width = table
        .columns()
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0);

    writeln!(out, "\nColumns and types:")?;
    for (idx, name) in table.columns().iter().enumerate() {
        writeln!(out, "{name:<width$}    {}", table.column_type(idx))?;
    }

    writeln!(out, "\nMissing values per column:")?;
    for (idx, name) in table.columns().iter().enumerate() {
        writeln!(out, "{name:<width$}    {}", table.missing_count(idx))?;
    }

    if caps.has_price {
        writeln!(out, "\nPrice statistics:")?;
        let summary = describe(&stats::prices(table));
        for (label, value) in summary.rows() {
            writeln!(out, "{label:<5}    {}", format_stat(value))?;
        }
    }

    if caps.has_rating {
        writeln!(out, "\nRating distribution:")?;
        let counts = stats::rating_counts(table);
        let labels: Vec<String> = counts.iter().map(|(l, _)| stats::level_label(*l)).collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);
        for (label, (_, count)) in labels.iter().zip(&counts) {
            writeln!(out, "{label:<label_width$}    {count}")?;
        }
    }

    Ok(())
}

fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.6}")
    }
}
