//! Typed wrappers around the browser APIs the heatmap apps need.
//!
//! The D3 chart script lives in `assets/js/*.js`, is embedded at compile
//! time and evaluated as globals once `d3` is on the page. Rust hands it
//! JSON strings built from `HeatmapPayload` and `ChartConfig`.
//!
//! The dataset is fetched with `window.fetch` and read as raw bytes so a
//! gzip-compressed body can be inflated on the Rust side.

use js_sys::Uint8Array;
use thm_core::LoadError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// D3 bundle the chart scripts wait for.
pub const D3_SRC: &str = "https://d3js.org/d3.v7.min.js";

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static HEATMAP_CHART_JS: &str = include_str!("../assets/js/heatmap-chart.js");

/// Quote `s` as a JS string literal.
fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('THM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the chart scripts once D3 has loaded. Safe to call repeatedly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, HEATMAP_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__thmChartsReady && !window.__thmChartScripts) {{ window.__thmChartScripts = {}; }}",
        js_string_literal(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__thmChartsPolling || window.__thmChartsReady) return;
            window.__thmChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__thmChartScripts);
                    delete window.__thmChartScripts;
                    if (typeof renderHeatmapChart !== 'undefined') window.renderHeatmapChart = renderHeatmapChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__thmChartsReady = true;
                    console.log('THM charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the heatmap into `container_id`.
///
/// Polls until the scripts are ready and the container exists.
pub fn render_heatmap_chart(container_id: &str, data_json: &str, config_json: &str) {
    let id = js_string_literal(container_id);
    let data = js_string_literal(data_json);
    let config = js_string_literal(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__thmChartsReady &&
                    typeof window.renderHeatmapChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderHeatmapChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('[THM] renderHeatmapChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Clear a chart container and hide any open tooltip.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = ''; if (window.hideTooltip) window.hideTooltip();",
        js_string_literal(container_id)
    ));
}

/// Best-effort text of a JS exception or rejection value.
fn js_reason(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// GET `url` and return the response body.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, LoadError> {
    let fetch_err = |reason: String| LoadError::Fetch {
        url: url.to_string(),
        reason,
    };

    let window = web_sys::window().ok_or_else(|| fetch_err("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| fetch_err(js_reason(e)))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fetch_err(js_reason(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| fetch_err(js_reason(e)))?;

    if !response.ok() {
        return Err(LoadError::Http {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let buffer = response.array_buffer().map_err(|e| fetch_err(js_reason(e)))?;
    let buffer = JsFuture::from(buffer)
        .await
        .map_err(|e| fetch_err(js_reason(e)))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    log::info!("[THM] fetch: {} bytes from {}", bytes.len(), url);
    Ok(bytes)
}

/// Write a load failure to the browser console.
pub fn report_error(message: &str) {
    web_sys::console::error_1(&format!("Error loading data: {}", message).into());
}
