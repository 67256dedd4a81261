//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the chart script renders into
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 600)]
    pub min_height: u32,
}

/// An empty, positioned box owned by the D3 heatmap script.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
