//! Static PNG charts.
//!
//! Each chart method opens its own bitmap, draws, presents and drops it
//! before returning the path it wrote.

use log::{debug, info};
use plotters::prelude::*;
use plotters::style::FontTransform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

use crate::analysis::stats::{self, level_label};
use crate::charts::style::ChartStyle;
use crate::core::constants::{charts, files};
use crate::core::{Capabilities, Result, Table};

/// Renders the fixed chart set into one output directory.
pub struct ChartRenderer {
    out_dir: PathBuf,
    style: ChartStyle,
}

/// Category-axis bar chart input
struct BarChart<'a> {
    file: &'a str,
    size: (f64, f64),
    title: &'a str,
    x_desc: &'a str,
    bars: &'a [(String, usize)],
    rotate_labels: bool,
}

impl ChartRenderer {
    pub fn new<P: Into<PathBuf>>(out_dir: P, style: ChartStyle) -> Self {
        Self {
            out_dir: out_dir.into(),
            style,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Render every chart the capability set allows, in report order.
    pub fn render_all(&self, table: &Table, caps: &Capabilities) -> Result<Vec<PathBuf>> {
        let mut images = Vec::new();

        if caps.has_price {
            images.push(self.price_distribution(table)?);
        } else {
            debug!("Skipping {}: no price column", files::PRICE_DISTRIBUTION);
        }

        if caps.has_price_and_rating() {
            images.push(self.price_by_rating(table)?);
        } else {
            debug!("Skipping {}: needs price and rating", files::PRICE_BY_RATING);
        }

        if caps.has_category {
            images.push(self.top_categories(table)?);
        } else {
            debug!("Skipping {}: no category column", files::TOP_CATEGORIES);
        }

        if caps.has_rating {
            images.push(self.rating_distribution(table)?);
        } else {
            debug!("Skipping {}: no rating column", files::RATING_DISTRIBUTION);
        }

        if caps.has_price_and_rating() {
            images.push(self.price_vs_rating(table)?);
        } else {
            debug!("Skipping {}: needs price and rating", files::PRICE_VS_RATING);
        }

        info!("Rendered {} chart(s) into {}", images.len(), self.out_dir.display());
        Ok(images)
    }

    /// Histogram of prices, 30 equal-width bins.
    pub fn price_distribution(&self, table: &Table) -> Result<PathBuf> {
        let path = self.out_dir.join(files::PRICE_DISTRIBUTION);
        let bins = stats::histogram(&stats::prices(table), charts::PRICE_HISTOGRAM_BINS);

        let (x_lo, x_hi) = match (bins.first(), bins.last()) {
            (Some(first), Some(last)) => (first.lo, last.hi),
            _ => (0.0, 1.0),
        };
        let y_max = bins.iter().map(|b| b.count).max().unwrap_or(0) + 1;

        let root = BitMapBackend::new(&path, self.style.pixels(charts::PRICE_DISTRIBUTION_SIZE))
            .into_drawing_area();
        root.fill(&self.style.background)?;
        {
            let mut chart = ChartBuilder::on(&root)
                .caption("Price Distribution (GBP)", self.font(self.style.caption_size))
                .margin(20)
                .x_label_area_size(70)
                .y_label_area_size(90)
                .build_cartesian_2d(x_lo..x_hi, 0usize..y_max)?;

            chart
                .configure_mesh()
                .bold_line_style(&self.style.grid)
                .light_line_style(&self.style.background)
                .axis_style(&self.style.axis)
                .label_style(self.font(self.style.tick_label_size))
                .axis_desc_style(self.font(self.style.axis_desc_size))
                .x_desc("Price (GBP)")
                .y_desc("Count")
                .draw()?;

            chart.draw_series(bins.iter().map(|b| {
                Rectangle::new([(b.lo, 0), (b.hi, b.count)], self.style.bar.filled())
            }))?;
            chart.draw_series(bins.iter().map(|b| {
                Rectangle::new([(b.lo, 0), (b.hi, b.count)], &self.style.background)
            }))?;
        }
        root.present()?;
        // the backend borrows `path`
        drop(root);

        debug!("Wrote {}", path.display());
        Ok(path)
    }

    /// Box plot of prices per rating level.
    pub fn price_by_rating(&self, table: &Table) -> Result<PathBuf> {
        let path = self.out_dir.join(files::PRICE_BY_RATING);
        let groups = stats::prices_by_rating(table);
        let labels: Vec<String> = groups.iter().map(|(level, _)| level_label(*level)).collect();
        let slots = groups.len().max(1);
        let (y_lo, y_hi) = padded_range(groups.iter().flat_map(|(_, p)| p.iter().copied()));

        let root = BitMapBackend::new(&path, self.style.pixels(charts::PRICE_BY_RATING_SIZE))
            .into_drawing_area();
        root.fill(&self.style.background)?;
        {
            let mut chart = ChartBuilder::on(&root)
                .caption("Price by Rating", self.font(self.style.caption_size))
                .margin(20)
                .x_label_area_size(70)
                .y_label_area_size(90)
                .build_cartesian_2d((0..slots - 1).into_segmented(), y_lo as f32..y_hi as f32)?;

            let formatter = |v: &SegmentValue<usize>| segment_label(v, &labels);
            chart
                .configure_mesh()
                .bold_line_style(&self.style.grid)
                .light_line_style(&self.style.background)
                .axis_style(&self.style.axis)
                .label_style(self.font(self.style.tick_label_size))
                .axis_desc_style(self.font(self.style.axis_desc_size))
                .disable_x_mesh()
                .x_labels(slots + 1)
                .x_label_formatter(&formatter)
                .x_desc("Rating")
                .y_desc("Price (GBP)")
                .draw()?;

            chart.draw_series(
                groups
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, prices))| !prices.is_empty())
                    .map(|(i, (_, prices))| {
                        Boxplot::new_vertical(SegmentValue::CenterOf(i), &Quartiles::new(prices))
                            .width(60)
                            .whisker_width(0.5)
                            .style(&self.style.bar)
                    }),
            )?;
        }
        root.present()?;
        // the backend borrows `path`
        drop(root);

        debug!("Wrote {}", path.display());
        Ok(path)
    }

    /// Bar chart of the 15 most frequent categories.
    pub fn top_categories(&self, table: &Table) -> Result<PathBuf> {
        let bars = stats::top_categories(table, charts::TOP_CATEGORIES);
        let title = format!("Top {} Categories by Number of Books", charts::TOP_CATEGORIES);
        self.bar_chart(&BarChart {
            file: files::TOP_CATEGORIES,
            size: charts::TOP_CATEGORIES_SIZE,
            title: &title,
            x_desc: "Category",
            bars: &bars,
            rotate_labels: true,
        })
    }

    /// Bar chart of rows per rating level, zero-count levels included.
    pub fn rating_distribution(&self, table: &Table) -> Result<PathBuf> {
        let bars: Vec<(String, usize)> = stats::rating_counts(table)
            .into_iter()
            .map(|(level, count)| (level_label(level), count))
            .collect();
        self.bar_chart(&BarChart {
            file: files::RATING_DISTRIBUTION,
            size: charts::RATING_DISTRIBUTION_SIZE,
            title: "Rating Distribution",
            x_desc: "Rating",
            bars: &bars,
            rotate_labels: false,
        })
    }

    /// Strip plot of price against rating level with seeded horizontal jitter.
    pub fn price_vs_rating(&self, table: &Table) -> Result<PathBuf> {
        let path = self.out_dir.join(files::PRICE_VS_RATING);
        let points = stats::price_rating_points(table);
        let levels = stats::rating_levels(&points.iter().map(|p| p.rating).collect::<Vec<_>>());
        let labels: Vec<String> = levels.iter().map(|l| level_label(*l)).collect();
        let slots = levels.len().max(1);
        let (y_lo, y_hi) = padded_range(points.iter().map(|p| p.price));

        let root = BitMapBackend::new(&path, self.style.pixels(charts::PRICE_VS_RATING_SIZE))
            .into_drawing_area();
        root.fill(&self.style.background)?;
        {
            let mut chart = ChartBuilder::on(&root)
                .caption("Price vs Rating (jittered)", self.font(self.style.caption_size))
                .margin(20)
                .x_label_area_size(70)
                .y_label_area_size(90)
                .build_cartesian_2d(
                    0.5..slots as f64 + 0.5,
                    y_lo..y_hi,
                )?;

            let formatter = |x: &f64| slot_label(*x, &labels);
            chart
                .configure_mesh()
                .bold_line_style(&self.style.grid)
                .light_line_style(&self.style.background)
                .axis_style(&self.style.axis)
                .label_style(self.font(self.style.tick_label_size))
                .axis_desc_style(self.font(self.style.axis_desc_size))
                .disable_x_mesh()
                .x_labels(2 * slots + 2)
                .x_label_formatter(&formatter)
                .x_desc("Rating")
                .y_desc("Price (GBP)")
                .draw()?;

            let mut rng = StdRng::seed_from_u64(charts::JITTER_SEED);
            let width = charts::JITTER_WIDTH;
            let color = self.style.point.mix(0.7).filled();
            chart.draw_series(points.iter().map(|p| {
                let slot = levels.iter().position(|l| *l == p.rating).unwrap_or(0) + 1;
                let x = slot as f64 + rng.gen_range(-width..=width);
                Circle::new((x, p.price), 4, color)
            }))?;
        }
        root.present()?;
        // the backend borrows `path`
        drop(root);

        debug!("Wrote {}", path.display());
        Ok(path)
    }

    fn bar_chart(&self, def: &BarChart<'_>) -> Result<PathBuf> {
        let path = self.out_dir.join(def.file);
        let labels: Vec<String> = def.bars.iter().map(|(label, _)| label.clone()).collect();
        let slots = def.bars.len().max(1);
        let y_max = def.bars.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        let x_label_area = if def.rotate_labels { 220 } else { 70 };

        let root = BitMapBackend::new(&path, self.style.pixels(def.size)).into_drawing_area();
        root.fill(&self.style.background)?;
        {
            let mut chart = ChartBuilder::on(&root)
                .caption(def.title, self.font(self.style.caption_size))
                .margin(20)
                .x_label_area_size(x_label_area)
                .y_label_area_size(90)
                .build_cartesian_2d((0..slots - 1).into_segmented(), 0usize..y_max)?;

            let formatter = |v: &SegmentValue<usize>| segment_label(v, &labels);
            let mut mesh = chart.configure_mesh();
            mesh.bold_line_style(&self.style.grid)
                .light_line_style(&self.style.background)
                .axis_style(&self.style.axis)
                .label_style(self.font(self.style.tick_label_size))
                .axis_desc_style(self.font(self.style.axis_desc_size))
                .disable_x_mesh()
                .x_labels(slots + 1)
                .x_label_formatter(&formatter)
                .x_desc(def.x_desc)
                .y_desc("Count");
            if def.rotate_labels {
                mesh.x_label_style(
                    self.font(self.style.tick_label_size)
                        .transform(FontTransform::Rotate90),
                );
            }
            mesh.draw()?;

            chart.draw_series(
                Histogram::vertical(&chart)
                    .style(self.style.bar.filled())
                    .margin(8)
                    .data(def.bars.iter().enumerate().map(|(i, (_, count))| (i, *count))),
            )?;
        }
        root.present()?;
        // the backend borrows `path`
        drop(root);

        debug!("Wrote {}", path.display());
        Ok(path)
    }

    fn font(&self, size: u32) -> FontDesc<'_> {
        (self.style.font_family.as_str(), size).into_font()
    }
}

fn segment_label(value: &SegmentValue<usize>, labels: &[String]) -> String {
    match value {
        SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

/// Label of the rating slot at axis position `x`; slots sit on 1, 2, ...
/// and positions between slots stay unlabelled.
fn slot_label(x: f64, labels: &[String]) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 1.0 {
        return String::new();
    }
    labels.get(slot as usize - 1).cloned().unwrap_or_default()
}

/// Value range padded by 5% on each side; (0, 1) when there are no values.
fn padded_range<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 0.5 };
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_label() {
        let labels = vec!["1".to_string(), "2".to_string()];

        assert_eq!(segment_label(&SegmentValue::CenterOf(1), &labels), "2");
        assert_eq!(segment_label(&SegmentValue::CenterOf(5), &labels), "");
        assert_eq!(segment_label(&SegmentValue::Exact(0), &labels), "");
        assert_eq!(segment_label(&SegmentValue::Last, &labels), "");
    }

    #[test]
    fn test_slot_label() {
        let labels = vec!["1".to_string(), "2".to_string(), "4".to_string()];

        assert_eq!(slot_label(1.0, &labels), "1");
        assert_eq!(slot_label(3.0, &labels), "4");
        assert_eq!(slot_label(2.5, &labels), "");
        assert_eq!(slot_label(0.5, &labels), "");
        assert_eq!(slot_label(4.0, &labels), "");
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range([].into_iter()), (0.0, 1.0));
        assert_eq!(padded_range([2.0].into_iter()), (1.5, 2.5));

        let (lo, hi) = padded_range([10.0, 20.0].into_iter());
        assert!((lo - 9.5).abs() < 1e-9);
        assert!((hi - 20.5).abs() < 1e-9);
    }

    fn listings() -> Table {
        use crate::core::Value;

        let rows = (0..12)
            .map(|i| {
                vec![
                    Value::Text(format!("Book {i}")),
                    Value::Number(12.5 + i as f64 * 3.25),
                    if i == 4 { Value::Missing } else { Value::Number((i % 3 * 2 + 1) as f64) },
                    Value::Text(["Poetry", "Travel", "Mystery"][i % 3].to_string()),
                ]
            })
            .collect();
        Table::new(
            vec!["title".into(), "price".into(), "rating".into(), "category".into()],
            rows,
        )
    }

    #[test]
    fn test_render_all_writes_every_chart() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let table = listings();
        let renderer = ChartRenderer::new(dir.path(), ChartStyle::default());

        let images = renderer.render_all(&table, &Capabilities::detect(&table))?;

        let expected = [
            files::PRICE_DISTRIBUTION,
            files::PRICE_BY_RATING,
            files::TOP_CATEGORIES,
            files::RATING_DISTRIBUTION,
            files::PRICE_VS_RATING,
        ];
        assert_eq!(images.len(), expected.len());
        for (image, name) in images.iter().zip(expected) {
            assert_eq!(image, &dir.path().join(name));
            assert!(std::fs::metadata(image)?.len() > 0);
        }
        Ok(())
    }

    #[test]
    fn test_render_all_respects_capabilities() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let table = listings();
        let caps = Capabilities {
            has_rating: false,
            has_category: false,
            ..Capabilities::detect(&table)
        };
        let renderer = ChartRenderer::new(dir.path(), ChartStyle::default());

        let images = renderer.render_all(&table, &caps)?;

        assert_eq!(images, vec![dir.path().join(files::PRICE_DISTRIBUTION)]);
        Ok(())
    }

    #[test]
    fn test_renderer_keeps_out_dir_and_style() {
        let renderer = ChartRenderer::new("charts", ChartStyle::default());

        assert_eq!(renderer.out_dir(), Path::new("charts"));
        assert_eq!(renderer.style().dpi, charts::DPI);
    }
}
