//! Shared Dioxus components and data loading for THM heatmap apps.
//!
//! This crate provides:
//! - `js_bridge`: D3 chart script glue, browser fetch and console diagnostics
//! - `loader`: the `use_chart_model` hook (fetch -> parse -> aggregate)
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (chart container, toggle, etc.)

pub mod components;
pub mod js_bridge;
pub mod loader;
pub mod state;
