//! Fetch, decode, parse and aggregate the dataset for one chart.

use crate::js_bridge;
use crate::state::{AppState, LoadFailure};
use anyhow::Context;
use dioxus::prelude::*;
use std::rc::Rc;
use thm_chart::{ChartConfig, ChartModel};
use thm_core::{decode_payload, parse_daily_csv};

/// Load the dataset at `config.data_url` and build the chart model.
pub async fn load_chart_model(config: ChartConfig) -> anyhow::Result<ChartModel> {
    let url = config.data_url.clone();
    let bytes = js_bridge::fetch_bytes(&url).await?;
    let text = decode_payload(bytes).with_context(|| format!("decoding {}", url))?;
    let dataset = parse_daily_csv(&text, config.row_policy)
        .with_context(|| format!("parsing {}", url))?;
    if dataset.skipped > 0 {
        log::warn!("[THM] load: skipped {} malformed rows in {}", dataset.skipped, url);
    }
    Ok(ChartModel::from_dataset(config, dataset))
}

/// Start loading once on mount and publish the result into `AppState`.
///
/// On failure the error is logged, written to the console, and stored in
/// `error`; nothing is drawn.
pub fn use_chart_model(config: ChartConfig) {
    let mut state = use_context::<AppState>();

    use_effect(move || {
        let config = config.clone();
        spawn(async move {
            match load_chart_model(config).await {
                Ok(model) => {
                    state.model.set(Some(Rc::new(model)));
                }
                Err(e) => {
                    let failure = LoadFailure::from_error(&e);
                    log::error!("[THM] load failed: {}", failure.message);
                    js_bridge::report_error(&failure.message);
                    state.error.set(Some(failure));
                }
            }
            state.loading.set(false);
        });
    });
}
