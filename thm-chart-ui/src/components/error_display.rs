//! Load failure panel.

use crate::state::LoadFailure;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub failure: LoadFailure,
}

/// Names the failed load step, then the full error chain.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let failure = props.failure;

    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{failure.stage.title()}" }
            p {
                style: "margin: 4px 0 0 0; font-size: 12px; font-family: monospace;",
                "{failure.message}"
            }
        }
    }
}
