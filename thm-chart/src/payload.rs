//! Chart payload: everything the heatmap script needs for one draw.
//!
//! The payload is built from the loaded model and the current view mode and
//! serialized to JSON for the browser side, which owns the scales, color
//! ramp, curves and axes. Building is pure: the same model and mode always
//! give an equal payload, and the script replaces the previous drawing with it.

use crate::config::ChartConfig;
use crate::view_mode::ViewMode;
use serde::Serialize;
use thm_core::{aggregate, Aggregation, DailyRecord, LoadedDataset, Metric, MonthKey, MonthlyBucket};

/// Loaded data and configuration of one heatmap, ready to draw.
#[derive(Debug, Clone)]
pub struct ChartModel {
    pub config: ChartConfig,
    /// Every parsed row, including those outside the year range
    pub records: Vec<DailyRecord>,
    pub aggregation: Aggregation,
}

impl ChartModel {
    pub fn new(config: ChartConfig, records: Vec<DailyRecord>) -> Self {
        let aggregation = aggregate(&records, config.years);
        log::info!(
            "[THM] model: {} of {} records in {}..={}, {} months with data",
            aggregation.record_count,
            records.len(),
            config.years.start(),
            config.years.end(),
            aggregation.buckets.len()
        );
        if aggregation.is_empty() {
            log::warn!("[THM] model: no records inside the year range, drawing an empty chart");
        }
        Self {
            config,
            records,
            aggregation,
        }
    }

    pub fn from_dataset(config: ChartConfig, dataset: LoadedDataset) -> Self {
        Self::new(config, dataset.records)
    }

    /// `(min, max)` of the selected metric over *all* loaded records.
    ///
    /// Falls back to `(0, 0)` for an empty dataset.
    pub fn color_domain(&self, metric: Metric) -> (f64, f64) {
        metric.extent(&self.records).unwrap_or((0.0, 0.0))
    }
}

/// One day of a trend line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPoint {
    pub day: u32,
    pub max_temperature: f64,
    pub min_temperature: f64,
}

/// One (year, month) rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub year: i32,
    /// Zero-based
    pub month: u32,
    /// Selected metric of the month; `None` draws the empty fill
    pub value: Option<f64>,
    /// `None` for months without data; such cells show no tooltip
    pub tooltip: Option<String>,
    /// Daily rows for the trend overlay, empty on the matrix page
    pub days: Vec<DayPoint>,
}

impl HeatmapCell {
    pub fn key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month)
    }
}

/// Gradient legend values and their labels, lowest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSpec {
    pub gradient_id: String,
    pub values: Vec<f64>,
    pub labels: Vec<String>,
    /// Draw the "Daily Max" / "Daily Min" line key
    pub line_key: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapPayload {
    pub surface_id: String,
    pub metric: Metric,
    pub plot_width: f64,
    pub plot_height: f64,
    /// x band order
    pub years: Vec<i32>,
    /// y band order
    pub months: Vec<String>,
    pub color_domain: (f64, f64),
    pub cells: Vec<HeatmapCell>,
    pub legend: LegendSpec,
}

impl HeatmapPayload {
    pub fn cell(&self, key: MonthKey) -> Option<&HeatmapCell> {
        self.cells.iter().find(|c| c.key() == key)
    }
}

/// "Date: 2016-01 | Max: 8°C | Min: -5°C"
pub fn tooltip_text(key: MonthKey, bucket: &MonthlyBucket) -> String {
    format!(
        "Date: {} | Max: {}°C | Min: {}°C",
        key.label(),
        bucket.max_temperature,
        bucket.min_temperature
    )
}

/// "{value}°C" with at most one decimal.
fn format_celsius(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}°C", rounded)
}

/// A bucket with a non-finite extreme is drawn like a missing month.
fn is_drawable(bucket: &MonthlyBucket) -> bool {
    bucket.max_temperature.is_finite() && bucket.min_temperature.is_finite()
}

/// Build the payload for `mode`.
pub fn build_payload(model: &ChartModel, mode: ViewMode) -> HeatmapPayload {
    let config = &model.config;
    let variant = config.variant;
    let aggregation = &model.aggregation;
    let metric = mode.metric();
    let color_domain = model.color_domain(metric);

    let mut cells = Vec::with_capacity(aggregation.years.len() * aggregation.months.len());
    for &year in &aggregation.years {
        for month in 0..aggregation.months.len() as u32 {
            let key = MonthKey::new(year, month);
            let bucket = aggregation.bucket(key).filter(|b| is_drawable(b));
            let days = match aggregation.daily_group(key) {
                Some(days) if bucket.is_some() && variant.has_trend_overlay() => days
                    .iter()
                    .map(|r| DayPoint {
                        day: r.day,
                        max_temperature: r.max_temperature,
                        min_temperature: r.min_temperature,
                    })
                    .collect(),
                _ => Vec::new(),
            };
            cells.push(HeatmapCell {
                year,
                month,
                value: bucket.map(|b| b.value(metric)),
                tooltip: bucket.map(|b| tooltip_text(key, b)),
                days,
            });
        }
    }

    let values = config.legend_stops.values(color_domain);
    let legend = LegendSpec {
        gradient_id: variant.gradient_id().to_string(),
        labels: values.iter().map(|&v| format_celsius(v)).collect(),
        values,
        line_key: variant.has_trend_overlay(),
    };

    log::debug!(
        "[THM] payload: {:?} by {} -> {} cells, color domain {:?}",
        variant,
        metric.column(),
        cells.len(),
        color_domain
    );

    HeatmapPayload {
        surface_id: variant.surface_id().to_string(),
        metric,
        plot_width: config.plot_width(),
        plot_height: config.plot_height(),
        years: aggregation.years.clone(),
        months: aggregation.months.iter().map(|m| m.to_string()).collect(),
        color_domain,
        cells,
        legend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LegendStops;
    use chrono::NaiveDate;
    use thm_core::MONTH_NAMES;

    fn day(y: i32, m: u32, d: u32, max: f64, min: f64) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), max, min)
    }

    /// Two years inside the trends range, one row outside it that holds the
    /// global extremes.
    fn sample_records() -> Vec<DailyRecord> {
        vec![
            day(2007, 12, 31, 36.0, -3.0),
            day(2008, 1, 1, 18.0, 12.0),
            day(2008, 1, 2, 20.0, 10.0),
            day(2008, 1, 3, 17.0, 11.0),
            day(2008, 7, 1, 32.0, 26.0),
            day(2009, 1, 1, 16.0, 9.0),
        ]
    }

    fn trends_model() -> ChartModel {
        ChartModel::new(ChartConfig::trends(), sample_records())
    }

    #[test]
    fn one_cell_per_year_and_month() {
        let payload = build_payload(&trends_model(), ViewMode::default());
        assert_eq!(payload.cells.len(), 2 * 12);
        assert_eq!(payload.years, vec![2008, 2009]);
        assert_eq!(payload.months.len(), 12);
        assert_eq!(payload.months[0], "January");
        assert_eq!(payload.cells[0].key(), MonthKey::new(2008, 0));
        assert_eq!(payload.cells[23].key(), MonthKey::new(2009, 11));
        assert_eq!((payload.plot_width, payload.plot_height), (700.0, 470.0));
    }

    #[test]
    fn color_domain_uses_unfiltered_records() {
        let model = trends_model();
        let payload = build_payload(&model, ViewMode::default());
        assert_eq!(payload.color_domain, (16.0, 36.0));
        let payload = build_payload(&model, ViewMode::default().toggled());
        assert_eq!(payload.color_domain, (-3.0, 26.0));
    }

    #[test]
    fn years_follow_first_seen_order() {
        let records = vec![day(2010, 1, 1, 10.0, 5.0), day(2009, 1, 1, 11.0, 6.0)];
        let model = ChartModel::new(ChartConfig::trends(), records);
        let payload = build_payload(&model, ViewMode::default());
        assert_eq!(payload.years, vec![2010, 2009]);
    }

    #[test]
    fn missing_months_have_no_value_or_tooltip() {
        let model = trends_model();
        let payload = build_payload(&model, ViewMode::default());
        let empty = payload.cell(MonthKey::new(2008, 3)).unwrap();
        assert!(empty.value.is_none());
        assert!(empty.tooltip.is_none());
        assert!(empty.days.is_empty());
        for cell in &payload.cells {
            let has_bucket = model.aggregation.bucket(cell.key()).is_some();
            assert_eq!(cell.tooltip.is_some(), has_bucket);
            assert_eq!(cell.value.is_some(), has_bucket);
        }
    }

    #[test]
    fn tooltip_reports_both_extremes() {
        let payload = build_payload(&trends_model(), ViewMode::default().toggled());
        let jan = payload.cell(MonthKey::new(2008, 0)).unwrap();
        assert_eq!(
            jan.tooltip.as_deref(),
            Some("Date: 2008-01 | Max: 20°C | Min: 10°C")
        );

        let bucket = MonthlyBucket {
            max_temperature: 8.0,
            min_temperature: -5.0,
        };
        assert_eq!(
            tooltip_text(MonthKey::new(2016, 0), &bucket),
            "Date: 2016-01 | Max: 8°C | Min: -5°C"
        );
    }

    #[test]
    fn value_follows_view_mode() {
        let model = trends_model();
        let key = MonthKey::new(2008, 6);
        let max = build_payload(&model, ViewMode::default());
        let min = build_payload(&model, ViewMode::default().toggled());
        assert_eq!(max.cell(key).unwrap().value, Some(32.0));
        assert_eq!(min.cell(key).unwrap().value, Some(26.0));
        assert_eq!(max.metric, Metric::MaxTemperature);
        assert_eq!(min.metric, Metric::MinTemperature);
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let model = trends_model();
        let mode = ViewMode::default();
        let once = build_payload(&model, mode);
        let twice = build_payload(&model, mode);
        assert_eq!(once, twice);
        assert_eq!(build_payload(&model, mode.toggled().toggled()), once);
    }

    #[test]
    fn days_only_where_the_month_has_data() {
        let payload = build_payload(&trends_model(), ViewMode::default());
        let with_days: Vec<MonthKey> = payload
            .cells
            .iter()
            .filter(|c| !c.days.is_empty())
            .map(|c| c.key())
            .collect();
        assert_eq!(
            with_days,
            vec![MonthKey::new(2008, 0), MonthKey::new(2008, 6), MonthKey::new(2009, 0)]
        );
        let jan = payload.cell(MonthKey::new(2008, 0)).unwrap();
        let order: Vec<u32> = jan.days.iter().map(|d| d.day).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(jan.days[1].max_temperature, 20.0);
    }

    #[test]
    fn matrix_variant_has_no_days_or_line_key() {
        let model = ChartModel::new(ChartConfig::matrix(), sample_records());
        let payload = build_payload(&model, ViewMode::default());
        assert_eq!(payload.surface_id, "matrixView");
        assert!(payload.cells.iter().all(|c| c.days.is_empty()));
        assert!(!payload.legend.line_key);
        assert_eq!(payload.legend.gradient_id, "tempGradientLevel1");
        // 2007 is inside the matrix range
        assert_eq!(payload.cells.len(), 3 * 12);
    }

    #[test]
    fn non_finite_bucket_is_drawn_as_missing() {
        let mut aggregation = Aggregation {
            years: vec![2016],
            months: MONTH_NAMES,
            record_count: 1,
            ..Default::default()
        };
        aggregation.buckets.insert(
            MonthKey::new(2016, 0),
            MonthlyBucket {
                max_temperature: f64::NAN,
                min_temperature: 10.0,
            },
        );
        let model = ChartModel {
            config: ChartConfig::matrix(),
            records: Vec::new(),
            aggregation,
        };
        let payload = build_payload(&model, ViewMode::default());
        let jan = payload.cell(MonthKey::new(2016, 0)).unwrap();
        assert!(jan.value.is_none());
        assert!(jan.tooltip.is_none());
    }

    #[test]
    fn empty_dataset_keeps_the_legend() {
        let model = ChartModel::new(ChartConfig::trends(), Vec::new());
        let payload = build_payload(&model, ViewMode::default());
        assert!(payload.cells.is_empty());
        assert!(payload.years.is_empty());
        assert_eq!(payload.color_domain, (0.0, 0.0));
        assert_eq!(payload.legend.values.len(), 5);
    }

    #[test]
    fn default_legend_uses_fixed_temperatures() {
        let payload = build_payload(&trends_model(), ViewMode::default());
        assert_eq!(payload.legend.values, vec![3.0, 12.0, 21.0, 30.0, 37.0]);
        assert_eq!(payload.legend.labels, vec!["3°C", "12°C", "21°C", "30°C", "37°C"]);
        assert_eq!(payload.legend.gradient_id, "tempGradientLevel2");
        assert!(payload.legend.line_key);
    }

    #[test]
    fn even_legend_follows_color_domain() {
        let config = ChartConfig {
            legend_stops: LegendStops::Even(3),
            ..ChartConfig::trends()
        };
        let model = ChartModel::new(config, sample_records());
        let payload = build_payload(&model, ViewMode::default().toggled());
        assert_eq!(payload.legend.labels, vec!["-3°C", "11.5°C", "26°C"]);
    }

    #[test]
    fn celsius_formatting() {
        assert_eq!(format_celsius(12.25), "12.3°C");
        assert_eq!(format_celsius(-0.01), "0°C");
        assert_eq!(format_celsius(37.0), "37°C");
    }

    #[test]
    fn payload_serializes_for_the_chart_script() {
        let payload = build_payload(&trends_model(), ViewMode::default());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["surface_id"], "lineChart");
        assert_eq!(json["metric"], "max_temperature");
        assert_eq!(json["cells"].as_array().unwrap().len(), 24);
        assert_eq!(json["color_domain"][1], 36.0);
        assert!(json["cells"][3]["value"].is_null());
        assert_eq!(json["cells"][0]["days"][0]["day"], 1);
    }

    #[test]
    fn bundled_fixture_builds_both_variants() {
        let text = include_str!("../../fixtures/temperature_daily.csv");
        let dataset = thm_core::parse_daily_csv(text, thm_core::RowPolicy::Strict).unwrap();

        let model = ChartModel::from_dataset(ChartConfig::trends(), dataset.clone());
        assert_eq!(model.aggregation.record_count, 3653);
        let payload = build_payload(&model, ViewMode::default());
        assert_eq!(payload.cells.len(), 10 * 12);
        assert!(payload.cells.iter().all(|c| !c.days.is_empty()));
        assert_eq!(payload.years[0], 2008);
        assert_eq!(payload.color_domain, (19.1, 38.3));
        let jan = payload.cell(MonthKey::new(2008, 0)).unwrap();
        assert_eq!(jan.tooltip.as_deref(), Some("Date: 2008-01 | Max: 22°C | Min: 10.7°C"));

        // 2007-12 rows fall inside the matrix range
        let model = ChartModel::from_dataset(ChartConfig::matrix(), dataset);
        let payload = build_payload(&model, ViewMode::default().toggled());
        assert_eq!(payload.cells.len(), 11 * 12);
        assert_eq!(payload.years[0], 2007);
        assert_eq!(payload.color_domain, (10.6, 29.8));
    }
}
