//! Static charts
//!
//! PNG rendering of the fixed chart set, styled by an explicit
//! [`ChartStyle`] handed to the renderer.

pub mod renderer;
pub mod style;

// Re-export commonly used items
pub use renderer::ChartRenderer;
pub use style::ChartStyle;
