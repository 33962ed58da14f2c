//! Chart styling handed to the renderer at construction.

use plotters::style::RGBColor;

/// Colors, fonts and resolution shared by every static chart.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub font_family: String,
    pub caption_size: u32,
    pub axis_desc_size: u32,
    pub tick_label_size: u32,
    pub background: RGBColor,
    pub grid: RGBColor,
    pub axis: RGBColor,
    pub bar: RGBColor,
    pub point: RGBColor,
    /// Pixels per inch
    pub dpi: u32,
}

impl Default for ChartStyle {
    /// White background with a light grid
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            caption_size: 30,
            axis_desc_size: 22,
            tick_label_size: 18,
            background: RGBColor(255, 255, 255),
            grid: RGBColor(228, 228, 232),
            axis: RGBColor(60, 60, 60),
            bar: RGBColor(76, 114, 176),
            point: RGBColor(221, 132, 82),
            dpi: crate::core::constants::charts::DPI,
        }
    }
}

impl ChartStyle {
    /// Pixel dimensions of a figure given in inches.
    pub fn pixels(&self, inches: (f64, f64)) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        ((inches.0 * dpi).round() as u32, (inches.1 * dpi).round() as u32)
    }
}
