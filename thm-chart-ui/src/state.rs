//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use std::rc::Rc;
use thm_chart::{ChartModel, ViewMode};
use thm_core::LoadError;

/// Which step of the load pipeline failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    Fetch,
    Decode,
    Parse,
    Other,
}

impl LoadStage {
    pub fn title(self) -> &'static str {
        match self {
            LoadStage::Fetch => "Could not fetch data",
            LoadStage::Decode => "Could not decode data",
            LoadStage::Parse => "Could not parse data",
            LoadStage::Other => "Could not load data",
        }
    }
}

/// A load failure ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub stage: LoadStage,
    /// Full context chain of the error
    pub message: String,
}

impl LoadFailure {
    pub fn from_error(err: &anyhow::Error) -> Self {
        let stage = match err.downcast_ref::<LoadError>() {
            Some(LoadError::Fetch { .. } | LoadError::Http { .. }) => LoadStage::Fetch,
            Some(LoadError::Decode(_) | LoadError::Utf8(_)) => LoadStage::Decode,
            Some(
                LoadError::Csv(_) | LoadError::MissingColumn(_) | LoadError::Row { .. },
            ) => LoadStage::Parse,
            None => LoadStage::Other,
        };
        Self {
            stage,
            message: format!("{:#}", err),
        }
    }
}

/// Shared application state for all THM heatmap apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded and aggregated data (None until loaded)
    pub model: Signal<Option<Rc<ChartModel>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Why the load failed, if it did
    pub error: Signal<Option<LoadFailure>>,
    /// Max or min temperature coloring
    pub view_mode: Signal<ViewMode>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            model: Signal::new(None),
            loading: Signal::new(true),
            error: Signal::new(None),
            view_mode: Signal::new(ViewMode::default()),
        }
    }
}
