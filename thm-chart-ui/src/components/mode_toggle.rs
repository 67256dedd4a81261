//! Max/min temperature toggle button.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ModeToggleProps {
    /// DOM id of the button
    pub id: String,
    /// Button text, naming the mode a click switches to
    pub label: String,
}

/// Flips `AppState::view_mode` on click; the heatmap redraws from the new mode.
#[component]
pub fn ModeToggle(props: ModeToggleProps) -> Element {
    let mut state = use_context::<AppState>();

    let on_click = move |_: MouseEvent| {
        let next = (state.view_mode)().toggled();
        log::info!("[THM] view mode -> {:?}", next.metric());
        state.view_mode.set(next);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            button {
                id: "{props.id}",
                style: "padding: 4px 12px; font-size: 13px; cursor: pointer;",
                onclick: on_click,
                "{props.label}"
            }
        }
    }
}
