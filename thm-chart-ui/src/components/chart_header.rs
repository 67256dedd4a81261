//! Title block: chart name, what the colors mean, and the years covered.

use dioxus::prelude::*;
use thm_core::YearRange;
use thm_chart::ViewMode;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Current max/min coloring
    pub mode: ViewMode,
    /// Years shown; `None` until the data has loaded
    #[props(!optional)]
    pub years: Option<YearRange>,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let span = props
        .years
        .map(|r| format!(" | {}-{}", r.start(), r.end()))
        .unwrap_or_default();

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            p {
                style: "margin: 0; font-size: 12px; color: #666;",
                "Color: {props.mode.color_description()}{span}"
            }
        }
    }
}
