use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::{GraphError, GraphResult};
use crate::interaction::TouchLineMode;

use super::GraphStyle;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load graph
/// setup without inventing their own ad-hoc format. The X/Y domain fields
/// only seed the first mapper; every refresh replaces them with the data
/// source's readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphEngineConfig {
    pub view_bounds: Rect,
    #[serde(default = "default_domain_min")]
    pub x_min: f64,
    #[serde(default = "default_domain_max")]
    pub x_max: f64,
    #[serde(default = "default_domain_min")]
    pub y_min: f64,
    #[serde(default = "default_domain_max")]
    pub y_max: f64,
    #[serde(default = "default_touch_line_mode")]
    pub touch_line_mode: TouchLineMode,
    #[serde(default)]
    pub style: GraphStyle,
}

impl GraphEngineConfig {
    /// Creates a minimal config with unit X/Y domains.
    #[must_use]
    pub fn new(view_bounds: Rect) -> Self {
        Self {
            view_bounds,
            x_min: default_domain_min(),
            x_max: default_domain_max(),
            y_min: default_domain_min(),
            y_max: default_domain_max(),
            touch_line_mode: default_touch_line_mode(),
            style: GraphStyle::default(),
        }
    }

    /// Sets the initial X domain.
    #[must_use]
    pub fn with_x_domain(mut self, x_min: f64, x_max: f64) -> Self {
        self.x_min = x_min;
        self.x_max = x_max;
        self
    }

    /// Sets the initial Y domain.
    #[must_use]
    pub fn with_y_domain(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    /// Sets the initial touch line mode.
    #[must_use]
    pub fn with_touch_line_mode(mut self, mode: TouchLineMode) -> Self {
        self.touch_line_mode = mode;
        self
    }

    /// Sets the initial style surface.
    #[must_use]
    pub fn with_style(mut self, style: GraphStyle) -> Self {
        self.style = style;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> GraphResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_domain_min() -> f64 {
    0.0
}

fn default_domain_max() -> f64 {
    1.0
}

fn default_touch_line_mode() -> TouchLineMode {
    TouchLineMode::Magnet
}
