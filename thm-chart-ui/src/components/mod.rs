//! Reusable Dioxus RSX components for THM heatmap apps.

mod chart_container;
mod chart_header;
mod error_display;
mod heatmap;
mod loading_spinner;
mod mode_toggle;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use heatmap::Heatmap;
pub use loading_spinner::LoadingSpinner;
pub use mode_toggle::ModeToggle;
