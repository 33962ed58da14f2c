use std::fmt;

use crate::core::constants::columns;

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Missing,
    Number(f64),
    Text(String),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Text representation of the cell; `None` for missing cells.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Missing => None,
            Value::Number(n) => Some(format_number(*n)),
            Value::Text(s) => Some(s.clone()),
        }
    }
}

/// Shortest representation of a number: `3` rather than `3.0`.
pub fn format_number(n: f64) -> String {
    format!("{n}")
}

/// Type of a column, inferred from its non-missing values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Number,
    Text,
    Mixed,
    Empty,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Number => "number",
            ColumnType::Text => "text",
            ColumnType::Mixed => "mixed",
            ColumnType::Empty => "empty",
        };
        write!(f, "{name}")
    }
}

/// In-memory record table: ordered column names and rows aligned with them.
///
/// Every row holds exactly one value per column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table, padding short rows with `Missing` and truncating long ones.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Value::Missing);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Values of one column in row order, or `None` if the column is absent.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Numeric view of a column; non-numeric cells become `None`.
    pub fn numeric_column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        self.column(name)
            .map(|values| values.map(Value::as_f64).collect())
    }

    /// Text view of a column; missing cells become `None`.
    pub fn text_column(&self, name: &str) -> Option<Vec<Option<String>>> {
        self.column(name)
            .map(|values| values.map(Value::to_text).collect())
    }

    pub fn missing_count(&self, idx: usize) -> usize {
        self.rows.iter().filter(|row| row[idx].is_missing()).count()
    }

    pub fn column_type(&self, idx: usize) -> ColumnType {
        let mut numbers = false;
        let mut texts = false;
        for row in &self.rows {
            match row[idx] {
                Value::Number(_) => numbers = true,
                Value::Text(_) => texts = true,
                Value::Missing => {}
            }
        }
        match (numbers, texts) {
            (true, false) => ColumnType::Number,
            (false, true) => ColumnType::Text,
            (true, true) => ColumnType::Mixed,
            (false, false) => ColumnType::Empty,
        }
    }

    /// Consume the table, returning its parts.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<Value>>) {
        (self.columns, self.rows)
    }
}

/// Optional columns present in a cleaned table.
///
/// Computed once after cleaning and handed to every later stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub has_price: bool,
    pub has_rating: bool,
    pub has_category: bool,
    pub has_title: bool,
}

impl Capabilities {
    pub fn detect(table: &Table) -> Self {
        Self {
            has_price: table.has_column(columns::PRICE),
            has_rating: table.has_column(columns::RATING),
            has_category: table.has_column(columns::CATEGORY),
            has_title: table.has_column(columns::TITLE),
        }
    }

    pub fn has_price_and_rating(&self) -> bool {
        self.has_price && self.has_rating
    }
}
