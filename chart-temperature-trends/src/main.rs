//! Monthly Temperature Trends
//!
//! One cell per (year, month) from 2008 through 2017, colored by that
//! month's highest daily maximum or lowest daily minimum temperature. Each
//! cell also carries the month's daily max (dark green) and min (light green)
//! curves on a fixed 0-40 °C scale.
//!
//! Data flow:
//! 1. On mount, `temperature_daily.csv` is fetched from the app's `public/` dir.
//! 2. Rows are parsed into daily records and bucketed by (year, month).
//! 3. The heatmap payload is rebuilt and handed to the D3 chart script
//!    whenever the view mode changes.

use dioxus::prelude::*;
use thm_chart::ChartConfig;
use thm_chart_ui::components::{ChartHeader, ErrorDisplay, Heatmap, LoadingSpinner};
use thm_chart_ui::js_bridge;
use thm_chart_ui::loader::use_chart_model;
use thm_chart_ui::state::AppState;

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "trends-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("trends-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let config = ChartConfig::trends();
    let source = config.data_url.clone();
    let years = config.years;
    use_chart_model(config);

    let loaded = (state.model)().is_some();

    rsx! {
        document::Script { src: js_bridge::D3_SRC.to_string() }
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Monthly Temperature Trends".to_string(),
                mode: (state.view_mode)(),
                years: loaded.then_some(years),
            }

            if let Some(failure) = (state.error)() {
                ErrorDisplay { failure }
            } else if (state.loading)() {
                LoadingSpinner { source }
            } else {
                Heatmap { container_id: CHART_ID.to_string() }
            }
        }
    }
}
