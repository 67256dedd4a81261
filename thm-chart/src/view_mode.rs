//! Max/min display toggle as an immutable value.

use serde::Serialize;
use thm_core::Metric;

/// Which temperature the heatmap currently colors by.
///
/// Toggling returns a new value; the renderer takes it as an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ViewMode {
    metric: Metric,
}

impl ViewMode {
    pub fn new(metric: Metric) -> Self {
        Self { metric }
    }

    pub fn metric(self) -> Metric {
        self.metric
    }

    pub fn toggled(self) -> Self {
        let metric = match self.metric {
            Metric::MaxTemperature => Metric::MinTemperature,
            Metric::MinTemperature => Metric::MaxTemperature,
        };
        Self { metric }
    }

    /// Text of the toggle control: it names the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self.metric {
            Metric::MaxTemperature => "Show Min Temperature",
            Metric::MinTemperature => "Show Max Temperature",
        }
    }

    /// What the cell colors currently encode.
    pub fn color_description(self) -> &'static str {
        match self.metric {
            Metric::MaxTemperature => "Monthly maximum temperature, °C",
            Metric::MinTemperature => "Monthly minimum temperature, °C",
        }
    }
}
