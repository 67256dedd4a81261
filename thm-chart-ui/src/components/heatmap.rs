//! The heatmap surface: a payload handed to the D3 chart script.
//!
//! `Heatmap` rebuilds the payload from `AppState` whenever the model or view
//! mode changes and asks the script to redraw; the script clears the
//! container first, so nothing from an earlier mode lingers.

use crate::components::{ChartContainer, ModeToggle};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use thm_chart::build_payload;

#[derive(Props, Clone, PartialEq)]
pub struct HeatmapProps {
    /// DOM id of the chart container
    pub container_id: String,
    #[props(default = 600)]
    pub min_height: u32,
}

/// Toggle button plus heatmap for the loaded model; empty until loaded.
#[component]
pub fn Heatmap(props: HeatmapProps) -> Element {
    let state = use_context::<AppState>();
    use_hook(js_bridge::init_charts);

    let container_id = props.container_id.clone();
    use_effect(move || {
        let Some(model) = (state.model)() else {
            return;
        };
        let mode = (state.view_mode)();

        let payload = build_payload(&model, mode);
        let data_json = serde_json::to_string(&payload).unwrap_or_default();
        let config_json = serde_json::to_string(&model.config).unwrap_or_default();
        log::debug!(
            "[THM] heatmap: drawing {} cells into #{}",
            payload.cells.len(),
            container_id
        );
        js_bridge::render_heatmap_chart(&container_id, &data_json, &config_json);
    });

    let container_id = props.container_id.clone();
    use_drop(move || js_bridge::destroy_chart(&container_id));

    let Some(model) = (state.model)() else {
        return rsx! {};
    };
    let mode = (state.view_mode)();

    rsx! {
        ModeToggle {
            id: model.config.variant.toggle_id().to_string(),
            label: mode.toggle_label().to_string(),
        }
        ChartContainer {
            id: props.container_id.clone(),
            min_height: props.min_height,
        }
    }
}
