//! Property-based tests for bookviz using proptest
//!
//! These generate random cells and tables to check the cleaning and
//! statistics invariants hold for arbitrary input.

use bookviz::analysis::stats::{histogram, rating_counts, top_values};
use bookviz::data::clean;
use bookviz::data::cleaner::{coerce_number, normalize_column_name};
use bookviz::{Table, Value};
use proptest::prelude::*;

/// Cells as they might come out of a scraped CSV
fn cell_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Missing),
        (-1000.0f64..1000.0).prop_map(Value::Number),
        (0.0f64..100.0).prop_map(|n| Value::Text(format!("{n:.2}"))),
        "[a-zA-Z£$ ]{0,12}".prop_map(Value::Text),
        Just(Value::Text("inf".to_string())),
        Just(Value::Text("NaN".to_string())),
    ]
}

fn table_strategy() -> impl Strategy<Value = Table> {
    prop::collection::vec(
        (cell_strategy(), cell_strategy(), "[A-Za-z]{1,8}"),
        0..60,
    )
    .prop_map(|rows| {
        let rows = rows
            .into_iter()
            .map(|(price, rating, title)| vec![price, rating, Value::Text(title)])
            .collect();
        Table::new(
            vec![" Price ".to_string(), "RATING".to_string(), "Title".to_string()],
            rows,
        )
    })
}

/// The price a raw cell should clean to, if it parses to a finite number
fn expected_price(cell: &Value) -> Option<f64> {
    let parsed = match cell {
        Value::Number(n) => Some(*n),
        Value::Text(s) => s.trim().parse::<f64>().ok(),
        Value::Missing => None,
    };
    parsed.filter(|n| n.is_finite())
}

proptest! {
    #[test]
    fn test_parseable_prices_survive_unchanged(table in table_strategy()) {
        let before = table.len();
        let expected: Vec<Option<f64>> = table
            .column(" Price ")
            .map(|cells| cells.map(expected_price).collect())
            .unwrap_or_default();
        let cleaned = clean(table);

        let kept: Vec<f64> = expected.iter().flatten().copied().collect();
        let prices: Vec<f64> = cleaned
            .numeric_column("price")
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect();
        prop_assert_eq!(prices, kept);

        let all_parsed = expected.iter().all(Option::is_some);
        prop_assert_eq!(cleaned.len() == before, all_parsed);
    }

    #[test]
    fn test_cleaned_prices_are_finite_numbers(table in table_strategy()) {
        let cleaned = clean(table);
        for price in cleaned.numeric_column("price").unwrap_or_default() {
            prop_assert!(price.is_some_and(f64::is_finite));
        }
    }

    #[test]
    fn test_clean_never_adds_rows(table in table_strategy()) {
        let before = table.len();
        let cleaned = clean(table);
        prop_assert!(cleaned.len() <= before);
    }

    #[test]
    fn test_clean_is_idempotent(table in table_strategy()) {
        let once = clean(table);
        let twice = clean(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_ratings_are_number_or_missing(table in table_strategy()) {
        let cleaned = clean(table);
        for rating in cleaned.column("rating").into_iter().flatten() {
            prop_assert!(matches!(rating, Value::Missing | Value::Number(_)));
        }
    }

    #[test]
    fn test_coerce_number_never_yields_non_finite(cell in cell_strategy()) {
        match coerce_number(&cell) {
            Value::Number(n) => prop_assert!(n.is_finite()),
            other => prop_assert_eq!(other, Value::Missing),
        }
    }

    #[test]
    fn test_normalize_column_name_is_stable(name in "[ A-Za-z_]{0,20}") {
        let once = normalize_column_name(&name);
        prop_assert_eq!(normalize_column_name(&once), once.clone());
        prop_assert_eq!(once.trim(), once.as_str());
    }

    #[test]
    fn test_histogram_counts_every_value(
        values in prop::collection::vec(-500.0f64..500.0, 1..200),
        bins in 1usize..50,
    ) {
        let result = histogram(&values, bins);
        prop_assert_eq!(result.len(), bins);
        prop_assert_eq!(result.iter().map(|b| b.count).sum::<usize>(), values.len());
    }

    #[test]
    fn test_top_values_are_sorted_and_bounded(
        labels in prop::collection::vec("[a-e]", 0..100),
        n in 1usize..10,
    ) {
        let labels: Vec<Option<String>> = labels.into_iter().map(Some).collect();
        let top = top_values(&labels, n);
        prop_assert!(top.len() <= n);
        for pair in top.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_rating_counts_sum_to_present_ratings(
        ratings in prop::collection::vec(prop::option::of(1u8..=5), 0..100),
    ) {
        let present = ratings.iter().flatten().count();
        let rows = ratings
            .iter()
            .map(|r| vec![Value::Number(1.0), r.map_or(Value::Missing, |r| Value::Number(f64::from(r)))])
            .collect();
        let table = Table::new(vec!["price".to_string(), "rating".to_string()], rows);
        let counts = rating_counts(&table);
        prop_assert_eq!(counts.iter().map(|(_, c)| *c).sum::<usize>(), present);
    }
}
