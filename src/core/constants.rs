/// Application-wide constants to avoid magic values throughout the codebase.
///
/// File names, chart geometry and fixed chart parameters live here so the
/// renderer, report and dashboard agree on them.
/// Well-known column names (after normalization)
pub mod columns {
    pub const PRICE: &str = "price";
    pub const RATING: &str = "rating";
    pub const CATEGORY: &str = "category";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const STOCK: &str = "stock";

    /// Columns coerced to their text representation during cleaning
    pub const TEXT_COLUMNS: [&str; 4] = [CATEGORY, TITLE, DESCRIPTION, STOCK];
}

/// Output artifact file names
pub mod files {
    pub const PRICE_DISTRIBUTION: &str = "price_distribution.png";
    pub const PRICE_BY_RATING: &str = "price_by_rating_boxplot.png";
    pub const TOP_CATEGORIES: &str = "top_categories.png";
    pub const RATING_DISTRIBUTION: &str = "rating_distribution.png";
    pub const PRICE_VS_RATING: &str = "price_vs_rating_scatter.png";
    pub const REPORT: &str = "report.html";
    pub const SUMMARY: &str = "summary.txt";
    pub const DASHBOARD: &str = "interactive_dashboard.html";
}

/// Default configuration values
pub mod defaults {
    /// Input CSV used when none is given
    pub const INPUT: &str = "books.csv";
    /// Output directory used when none is given
    pub const OUTPUT_DIR: &str = "outputs";
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".bookviz.toml";
    /// How many parent directories are searched for the config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Cell values the loader treats as missing
pub mod na_values {
    pub const ALL: [&str; 8] = ["NA", "N/A", "NaN", "nan", "null", "NULL", "None", "#N/A"];
}

/// Static chart parameters
pub mod charts {
    /// Render resolution, pixels per inch
    pub const DPI: u32 = 150;
    /// Equal-width bins of the price histogram
    pub const PRICE_HISTOGRAM_BINS: usize = 30;
    /// Categories shown in the top categories chart
    pub const TOP_CATEGORIES: usize = 15;
    /// Half-width of the horizontal jitter in the strip plot
    pub const JITTER_WIDTH: f64 = 0.2;
    /// Seed of the jitter RNG; fixed so repeated runs draw the same points
    pub const JITTER_SEED: u64 = 0x5EED_B00C;
    /// Widest integral rating span whose unobserved levels still get a slot
    pub const RATING_GAP_FILL_SPAN: f64 = 10.0;

    /// Figure sizes in inches (width, height)
    pub const PRICE_DISTRIBUTION_SIZE: (f64, f64) = (8.0, 5.0);
    pub const PRICE_BY_RATING_SIZE: (f64, f64) = (8.0, 5.0);
    pub const TOP_CATEGORIES_SIZE: (f64, f64) = (10.0, 6.0);
    pub const RATING_DISTRIBUTION_SIZE: (f64, f64) = (6.0, 4.0);
    pub const PRICE_VS_RATING_SIZE: (f64, f64) = (8.0, 6.0);
}

/// Interactive dashboard parameters
pub mod dashboard {
    /// Chart.js CDN URL, embedded once per dashboard
    pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";
    /// Bins of the interactive price histogram
    pub const PRICE_HISTOGRAM_BINS: usize = 40;
    /// Categories shown in the interactive bar chart
    pub const TOP_CATEGORIES: usize = 20;
    /// Tick label rotation of the category axis, degrees
    pub const CATEGORY_LABEL_ROTATION: u32 = 45;
}

/// Report text constants
pub mod report {
    pub const TITLE: &str = "Book Listings - Visualization Report";
    pub const DASHBOARD_TITLE: &str = "Book Listings - Interactive Dashboard";
    /// Timestamp format of the "Generated" line
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";
}
