//! Table cleaning.
//!
//! Normalizes column names, coerces `price`/`rating` to numbers, turns the
//! free-text columns into text, and drops every row whose price is missing.
//! Malformed cells are never reported; they simply become missing.

use crate::core::constants::columns;
use crate::core::{Table, Value};

/// Clean a freshly loaded table. The raw table is consumed.
pub fn clean(raw: Table) -> Table {
    let (columns, mut rows) = raw.into_parts();
    let columns: Vec<String> = columns.iter().map(|c| normalize_column_name(c)).collect();

    let position = |name: &str| columns.iter().position(|c| c == name);
    let price_idx = position(columns::PRICE);
    let rating_idx = position(columns::RATING);
    let text_idxs: Vec<usize> = columns::TEXT_COLUMNS
        .iter()
        .filter_map(|name| position(name))
        .collect();

    for row in &mut rows {
        for idx in price_idx.iter().chain(rating_idx.iter()) {
            row[*idx] = coerce_number(&row[*idx]);
        }
        for idx in &text_idxs {
            row[*idx] = coerce_text(&row[*idx]);
        }
    }

    if let Some(idx) = price_idx {
        rows.retain(|row| !row[idx].is_missing());
    }

    Table::new(columns, rows)
}

/// Trim surrounding whitespace and lower-case.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Best-effort numeric coercion; anything that is not a finite number becomes missing.
pub fn coerce_number(value: &Value) -> Value {
    let parsed = match value {
        Value::Number(n) => Some(*n),
        Value::Text(s) => s.trim().parse::<f64>().ok(),
        Value::Missing => None,
    };
    match parsed {
        Some(n) if n.is_finite() => Value::Number(n),
        _ => Value::Missing,
    }
}

/// Text coercion; missing cells stay missing.
pub fn coerce_text(value: &Value) -> Value {
    value.to_text().map_or(Value::Missing, Value::Text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn test_normalize_column_names() {
        let raw = Table::new(
            vec![" Title".into(), "PRICE ".into(), "Rating".into()],
            vec![vec![text("a"), Value::Number(1.0), Value::Number(2.0)]],
        );

        let cleaned = clean(raw);
        assert_eq!(cleaned.columns(), &["title", "price", "rating"]);
    }

    #[test]
    fn test_drops_rows_with_unparseable_price() {
        let raw = Table::new(
            vec!["title".into(), "price".into()],
            vec![
                vec![text("a"), text("10.5")],
                vec![text("b"), text("£12")],
                vec![text("c"), Value::Missing],
                vec![text("d"), text(" 7 ")],
                vec![text("e"), text("inf")],
            ],
        );

        let cleaned = clean(raw);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(
            cleaned.numeric_column("price"),
            Some(vec![Some(10.5), Some(7.0)])
        );
    }

    #[test]
    fn test_no_price_column_keeps_all_rows() {
        let raw = Table::new(
            vec!["title".into()],
            vec![vec![text("a")], vec![Value::Missing], vec![text("c")]],
        );

        assert_eq!(clean(raw).len(), 3);
    }

    #[test]
    fn test_unparseable_rating_becomes_missing_but_row_is_kept() {
        let raw = Table::new(
            vec!["price".into(), "rating".into()],
            vec![
                vec![Value::Number(5.0), text("Three")],
                vec![Value::Number(6.0), text("4")],
            ],
        );

        let cleaned = clean(raw);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(
            cleaned.numeric_column("rating"),
            Some(vec![None, Some(4.0)])
        );
    }

    #[test]
    fn test_text_columns_become_text() {
        let raw = Table::new(
            vec!["price".into(), "category".into(), "stock".into(), "upc".into()],
            vec![
                vec![Value::Number(1.0), Value::Number(42.0), Value::Number(3.5), Value::Number(9.0)],
                vec![Value::Number(2.0), text("Poetry"), Value::Missing, Value::Number(8.0)],
            ],
        );

        let cleaned = clean(raw);
        assert_eq!(cleaned.rows()[0][1], text("42"));
        assert_eq!(cleaned.rows()[0][2], text("3.5"));
        assert_eq!(cleaned.rows()[1][1], text("Poetry"));
        assert_eq!(cleaned.rows()[1][2], Value::Missing);
        // columns outside the text set keep their loaded type
        assert_eq!(cleaned.rows()[0][3], Value::Number(9.0));
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&text("3.25")), Value::Number(3.25));
        assert_eq!(coerce_number(&text("NaN")), Value::Missing);
        assert_eq!(coerce_number(&text("")), Value::Missing);
        assert_eq!(coerce_number(&Value::Number(2.0)), Value::Number(2.0));
        assert_eq!(coerce_number(&Value::Missing), Value::Missing);
    }
}
