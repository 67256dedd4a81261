//! Chart geometry, variant presets and styling.

use serde::{Deserialize, Serialize};
use thm_core::{RowPolicy, YearRange};

/// Default dataset location, relative to the page.
pub const DEFAULT_DATA_URL: &str = "temperature_daily.csv";

/// The two heatmap pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartVariant {
    /// Plain year x month matrix
    #[default]
    Matrix,
    /// Matrix with daily max/min trend lines in each cell
    Trends,
}

impl ChartVariant {
    /// DOM id of the SVG drawing surface.
    pub fn surface_id(self) -> &'static str {
        match self {
            ChartVariant::Matrix => "matrixView",
            ChartVariant::Trends => "lineChart",
        }
    }

    /// DOM id of the max/min toggle button.
    pub fn toggle_id(self) -> &'static str {
        match self {
            ChartVariant::Matrix => "toggleTempLevel1",
            ChartVariant::Trends => "toggleTempLevel2",
        }
    }

    /// Id of the legend's `linearGradient` element.
    pub fn gradient_id(self) -> &'static str {
        match self {
            ChartVariant::Matrix => "tempGradientLevel1",
            ChartVariant::Trends => "tempGradientLevel2",
        }
    }

    pub fn has_trend_overlay(self) -> bool {
        matches!(self, ChartVariant::Trends)
    }

    pub fn default_years(self) -> (i32, i32) {
        match self {
            ChartVariant::Matrix => (1997, 2017),
            ChartVariant::Trends => (2008, 2017),
        }
    }
}

/// Space around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 80.0,
            right: 200.0,
            bottom: 50.0,
            left: 100.0,
        }
    }
}

/// Temperatures sampled by the legend gradient and labelled beside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendStops {
    /// Explicit values, lowest first
    Fixed(Vec<f64>),
    /// `n` values evenly spaced across the color domain
    Even(usize),
}

impl Default for LegendStops {
    fn default() -> Self {
        LegendStops::Fixed(vec![3.0, 12.0, 21.0, 30.0, 37.0])
    }
}

impl LegendStops {
    /// Resolve to concrete values for a color domain.
    pub fn values(&self, domain: (f64, f64)) -> Vec<f64> {
        match self {
            LegendStops::Fixed(values) => values.clone(),
            LegendStops::Even(0) => Vec::new(),
            LegendStops::Even(1) => vec![domain.0],
            LegendStops::Even(n) => {
                let (lo, hi) = domain;
                let last = (*n - 1) as f64;
                (0..*n).map(|i| lo + (hi - lo) * i as f64 / last).collect()
            }
        }
    }
}

/// Look and placement of the cell hover tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    pub background: String,
    pub color: String,
    pub padding: String,
    pub border_radius: String,
    pub font_size: String,
    /// Offset from the pointer's page position, in pixels
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background: "rgba(0, 0, 0, 0.8)".to_string(),
            color: "white".to_string(),
            padding: "5px".to_string(),
            border_radius: "5px".to_string(),
            font_size: "12px".to_string(),
            offset_x: 10.0,
            offset_y: -20.0,
        }
    }
}

/// Full configuration of one heatmap instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub variant: ChartVariant,
    /// Outer SVG width including margins
    pub width: f64,
    /// Outer SVG height including margins
    pub height: f64,
    pub margin: Margin,
    /// Inner and outer padding of the year/month bands, as a fraction of the step
    pub band_padding: f64,
    pub years: YearRange,
    pub data_url: String,
    pub row_policy: RowPolicy,
    /// Fill for (year, month) cells without data
    pub empty_fill: String,
    pub trend_day_domain: (f64, f64),
    /// Fixed vertical domain of every cell's trend lines, not fitted per cell
    pub trend_temperature_domain: (f64, f64),
    pub trend_max_stroke: String,
    pub trend_min_stroke: String,
    pub trend_stroke_width: f64,
    pub legend_stops: LegendStops,
    pub tooltip: TooltipStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::matrix()
    }
}

impl ChartConfig {
    /// Preset for the plain matrix page.
    pub fn matrix() -> Self {
        Self::for_variant(ChartVariant::Matrix)
    }

    /// Preset for the matrix-with-trend-lines page.
    pub fn trends() -> Self {
        Self::for_variant(ChartVariant::Trends)
    }

    fn for_variant(variant: ChartVariant) -> Self {
        let (start, end) = variant.default_years();
        Self {
            variant,
            width: 1000.0,
            height: 600.0,
            margin: Margin::default(),
            band_padding: 0.05,
            years: YearRange::spanning(start, end),
            data_url: DEFAULT_DATA_URL.to_string(),
            row_policy: RowPolicy::Skip,
            empty_fill: "white".to_string(),
            trend_day_domain: (1.0, 31.0),
            trend_temperature_domain: (0.0, 40.0),
            trend_max_stroke: "darkgreen".to_string(),
            trend_min_stroke: "lightgreen".to_string(),
            trend_stroke_width: 1.5,
            legend_stops: LegendStops::default(),
            tooltip: TooltipStyle::default(),
        }
    }

    /// Width of the cell area (outer width minus left/right margins).
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the cell area (outer height minus top/bottom margins).
    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}
