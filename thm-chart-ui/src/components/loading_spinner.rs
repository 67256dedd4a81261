//! Placeholder shown while the dataset is fetched.

use dioxus::prelude::*;

/// Names the file being fetched.
#[component]
pub fn LoadingSpinner(source: String) -> Element {
    rsx! {
        div {
            style: "padding: 40px; text-align: center; color: #666; font-size: 13px;",
            "Fetching {source}..."
        }
    }
}
