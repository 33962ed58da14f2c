//! Descriptive statistics and the frequency tables behind the charts.
//!
//! Everything here is pure: the chart renderer, the dashboard and the
//! summary all draw from these functions so they agree on counts.

use std::collections::HashMap;

use crate::core::constants::{charts, columns};
use crate::core::types::format_number;
use crate::core::Table;

/// count, mean, std, min, quartiles and max of a numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    /// Labelled rows in display order.
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.q50),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

/// Describe a set of values. Undefined statistics are NaN (std needs two values).
pub fn describe(values: &[f64]) -> Describe {
    let count = values.len();
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mean = if count == 0 {
        f64::NAN
    } else {
        sorted.iter().sum::<f64>() / count as f64
    };
    let std = if count < 2 {
        f64::NAN
    } else {
        let var = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        var.sqrt()
    };

    Describe {
        count,
        mean,
        std,
        min: sorted.first().copied().unwrap_or(f64::NAN),
        q25: quantile(&sorted, 0.25),
        q50: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted.last().copied().unwrap_or(f64::NAN),
    }
}

/// Linear-interpolated quantile of already sorted values.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// One histogram bin, `[lo, hi)` except the last which is closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Split values into `bins` equal-width bins over their range.
///
/// A single distinct value is spread over `[v - 0.5, v + 0.5]`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        min -= 0.5;
        max += 0.5;
    }
    let width = (max - min) / bins as f64;

    let mut counts = vec![0usize; bins];
    for v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            lo: min + width * i as f64,
            hi: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count,
        })
        .collect()
}

/// The `n` most frequent values, highest count first; ties keep first-appearance order.
pub fn top_values(values: &[Option<String>], n: usize) -> Vec<(String, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values.iter().flatten() {
        let count = counts.entry(value.as_str()).or_insert(0);
        if *count == 0 {
            order.push(value.as_str());
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|v| (v.to_string(), counts[v]))
        .collect();
    // stable sort keeps first appearance among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Top categories of the table, or nothing when there is no category column.
pub fn top_categories(table: &Table, n: usize) -> Vec<(String, usize)> {
    table
        .text_column(columns::CATEGORY)
        .map(|values| top_values(&values, n))
        .unwrap_or_default()
}

/// Discrete rating levels, ascending.
///
/// Integral ratings spanning at most [`charts::RATING_GAP_FILL_SPAN`] yield
/// every integer between the lowest and highest observed rating, so
/// unobserved levels inside the range still get a slot. Any other ratings
/// yield their distinct observed values.
pub fn rating_levels(ratings: &[f64]) -> Vec<f64> {
    let mut distinct = ratings.to_vec();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();

    let (Some(&first), Some(&last)) = (distinct.first(), distinct.last()) else {
        return Vec::new();
    };
    let integral = distinct.iter().all(|r| r.fract() == 0.0);
    if integral && last - first <= charts::RATING_GAP_FILL_SPAN {
        let steps = (last - first) as usize;
        (0..=steps).map(|step| first + step as f64).collect()
    } else {
        distinct
    }
}

/// Rows per rating level, ascending by level. Missing ratings are not counted.
pub fn rating_counts(table: &Table) -> Vec<(f64, usize)> {
    let ratings: Vec<f64> = table
        .numeric_column(columns::RATING)
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .collect();

    rating_levels(&ratings)
        .into_iter()
        .map(|level| (level, ratings.iter().filter(|r| **r == level).count()))
        .collect()
}

/// Prices grouped by rating level, ascending by level. Rows with a missing
/// rating or price are left out; levels without rows get an empty group.
pub fn prices_by_rating(table: &Table) -> Vec<(f64, Vec<f64>)> {
    let points = price_rating_points(table);
    let ratings: Vec<f64> = points.iter().map(|p| p.rating).collect();

    rating_levels(&ratings)
        .into_iter()
        .map(|level| {
            let prices = points
                .iter()
                .filter(|p| p.rating == level)
                .map(|p| p.price)
                .collect();
            (level, prices)
        })
        .collect()
}

/// A row with both price and rating present
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub price: f64,
    pub rating: f64,
    pub title: Option<String>,
    pub category: Option<String>,
}

/// Rows with both a price and a rating, in table order.
pub fn price_rating_points(table: &Table) -> Vec<PricePoint> {
    let (Some(prices), Some(ratings)) = (
        table.numeric_column(columns::PRICE),
        table.numeric_column(columns::RATING),
    ) else {
        return Vec::new();
    };
    let titles = table.text_column(columns::TITLE);
    let categories = table.text_column(columns::CATEGORY);

    prices
        .into_iter()
        .zip(ratings)
        .enumerate()
        .filter_map(|(i, pair)| match pair {
            (Some(price), Some(rating)) => Some(PricePoint {
                price,
                rating,
                title: titles.as_ref().and_then(|t| t[i].clone()),
                category: categories.as_ref().and_then(|c| c[i].clone()),
            }),
            _ => None,
        })
        .collect()
}

/// Present prices of the table.
pub fn prices(table: &Table) -> Vec<f64> {
    table
        .numeric_column(columns::PRICE)
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .collect()
}

/// Display label of a rating level.
pub fn level_label(level: f64) -> String {
    format_number(level)
}
