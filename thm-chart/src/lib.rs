//! Chart configuration and payload building for temperature heatmaps.
//!
//! This crate provides:
//! - `config`: chart geometry, variants and styling
//! - `view_mode`: the immutable max/min toggle value
//! - `payload`: `ChartModel` + `build_payload()` producing the JSON the
//!   heatmap script draws from

pub mod config;
pub mod payload;
pub mod view_mode;

pub use config::{ChartConfig, ChartVariant, LegendStops, Margin, TooltipStyle};
pub use payload::{build_payload, ChartModel, HeatmapPayload};
pub use view_mode::ViewMode;
