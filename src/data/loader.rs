//! CSV loading.
//!
//! Reads a comma-separated file with a header row into a [`Table`]. Blank
//! cells and the usual NA markers load as missing; a column whose remaining
//! cells all parse as finite numbers loads as numeric, every other column as
//! text.

use csv::ReaderBuilder;
use log::debug;
use std::io::Read;
use std::path::Path;

use crate::core::constants::na_values;
use crate::core::{BookVizError, Result, Table, Value};

/// Load the CSV at `path`.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(BookVizError::MissingInput(path.display().to_string()));
    }

    let file = std::fs::File::open(path)?;
    let table = read_table(file)?;
    debug!(
        "Read {} row(s) x {} column(s) from {}",
        table.len(),
        table.columns().len(),
        path.display()
    );
    Ok(table)
}

/// Parse CSV content from any reader. Rows may be shorter or longer than the header.
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().map(String::from).collect();

    let mut cells: Vec<Vec<Option<String>>> = Vec::new();
    for record in rdr.records() {
        let record = record?;
        cells.push(record.iter().map(parse_cell).collect());
    }

    let width = columns.len();
    let numeric: Vec<bool> = (0..width)
        .map(|idx| is_numeric_column(&cells, idx))
        .collect();

    let rows = cells
        .into_iter()
        .map(|row| {
            row.into_iter()
                .take(width)
                .enumerate()
                .map(|(idx, cell)| match cell {
                    None => Value::Missing,
                    Some(raw) if numeric[idx] => raw
                        .trim()
                        .parse::<f64>()
                        .map(Value::Number)
                        .unwrap_or(Value::Text(raw)),
                    Some(raw) => Value::Text(raw),
                })
                .collect()
        })
        .collect();

    Ok(Table::new(columns, rows))
}

fn parse_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || na_values::ALL.contains(&trimmed) {
        None
    } else {
        Some(raw.to_string())
    }
}

fn is_numeric_column(cells: &[Vec<Option<String>>], idx: usize) -> bool {
    let mut seen = false;
    for cell in cells.iter().filter_map(|row| row.get(idx)).flatten() {
        match cell.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => seen = true,
            _ => return false,
        }
    }
    seen
}
