use serde::{Deserialize, Serialize};

use crate::core::Margins;
use crate::error::{GraphError, GraphResult};
use crate::render::Color;

/// Host-facing style and behavior surface.
///
/// Pass-through configuration: nothing here transforms coordinates. Values
/// are validated once at engine construction and again after replacement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphStyle {
    #[serde(default = "default_true")]
    pub enable_graph_bounds_lines: bool,
    #[serde(default = "default_true")]
    pub enable_x_axis_labels: bool,
    #[serde(default = "default_true")]
    pub enable_y_axis_labels: bool,
    #[serde(default = "default_grid_lines_width")]
    pub grid_lines_width: f64,
    #[serde(default = "default_data_line_width")]
    pub data_line_width: f64,
    /// Radius of per-point markers; 0 draws no markers.
    #[serde(default)]
    pub data_point_radius: f64,
    #[serde(default = "default_touch_line_width")]
    pub touch_line_width: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    /// Fixed decimal places for axis labels; `None` picks per-value precision.
    #[serde(default)]
    pub label_numeric_precision: Option<u8>,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_data_line_color")]
    pub data_line_color: Color,
    #[serde(default = "default_data_line_color")]
    pub data_point_color: Color,
    #[serde(default = "default_grid_line_color")]
    pub vertical_grid_line_color: Color,
    #[serde(default = "default_grid_line_color")]
    pub horizontal_grid_line_color: Color,
    #[serde(default = "default_bounds_line_color")]
    pub bounds_line_color: Color,
    #[serde(default = "default_touch_line_color")]
    pub touch_line_color: Color,
    #[serde(default = "default_label_text_color")]
    pub label_text_color: Color,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            enable_graph_bounds_lines: true,
            enable_x_axis_labels: true,
            enable_y_axis_labels: true,
            grid_lines_width: default_grid_lines_width(),
            data_line_width: default_data_line_width(),
            data_point_radius: 0.0,
            touch_line_width: default_touch_line_width(),
            label_font_size_px: default_label_font_size_px(),
            label_numeric_precision: None,
            margins: Margins::default(),
            data_line_color: default_data_line_color(),
            data_point_color: default_data_line_color(),
            vertical_grid_line_color: default_grid_line_color(),
            horizontal_grid_line_color: default_grid_line_color(),
            bounds_line_color: default_bounds_line_color(),
            touch_line_color: default_touch_line_color(),
            label_text_color: default_label_text_color(),
        }
    }
}

impl GraphStyle {
    /// Toggles the rectangle drawn at the plotting-area edge.
    #[must_use]
    pub fn with_graph_bounds_lines(mut self, enabled: bool) -> Self {
        self.enable_graph_bounds_lines = enabled;
        self
    }

    /// Toggles X-axis labels under the plot.
    #[must_use]
    pub fn with_x_axis_labels(mut self, enabled: bool) -> Self {
        self.enable_x_axis_labels = enabled;
        self
    }

    /// Toggles Y-axis labels left of the plot.
    #[must_use]
    pub fn with_y_axis_labels(mut self, enabled: bool) -> Self {
        self.enable_y_axis_labels = enabled;
        self
    }

    /// Sets reference-line stroke width.
    #[must_use]
    pub fn with_grid_lines_width(mut self, width: f64) -> Self {
        self.grid_lines_width = width;
        self
    }

    /// Sets the default series stroke width.
    #[must_use]
    pub fn with_data_line_width(mut self, width: f64) -> Self {
        self.data_line_width = width;
        self
    }

    /// Sets the default point-marker radius; 0 disables markers.
    #[must_use]
    pub fn with_data_point_radius(mut self, radius: f64) -> Self {
        self.data_point_radius = radius;
        self
    }

    /// Sets label font size in pixels.
    #[must_use]
    pub fn with_label_font_size_px(mut self, font_size_px: f64) -> Self {
        self.label_font_size_px = font_size_px;
        self
    }

    /// Sets fixed axis-label precision; `None` restores adaptive formatting.
    #[must_use]
    pub fn with_label_numeric_precision(mut self, precision: Option<u8>) -> Self {
        self.label_numeric_precision = precision;
        self
    }

    /// Sets label margins around the plotting rectangle.
    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the default series stroke color.
    #[must_use]
    pub fn with_data_line_color(mut self, color: Color) -> Self {
        self.data_line_color = color;
        self
    }

    /// Sets the default point-marker color.
    #[must_use]
    pub fn with_data_point_color(mut self, color: Color) -> Self {
        self.data_point_color = color;
        self
    }

    /// Sets the color of vertical reference lines.
    #[must_use]
    pub fn with_vertical_grid_line_color(mut self, color: Color) -> Self {
        self.vertical_grid_line_color = color;
        self
    }

    /// Sets the color of horizontal reference lines.
    #[must_use]
    pub fn with_horizontal_grid_line_color(mut self, color: Color) -> Self {
        self.horizontal_grid_line_color = color;
        self
    }

    /// Sets the color of the plot-edge bounds lines.
    #[must_use]
    pub fn with_bounds_line_color(mut self, color: Color) -> Self {
        self.bounds_line_color = color;
        self
    }

    /// Sets the color of the touch readout line.
    #[must_use]
    pub fn with_touch_line_color(mut self, color: Color) -> Self {
        self.touch_line_color = color;
        self
    }

    /// Sets axis-label text color.
    #[must_use]
    pub fn with_label_text_color(mut self, color: Color) -> Self {
        self.label_text_color = color;
        self
    }

    pub fn validate(self) -> GraphResult<Self> {
        if !self.grid_lines_width.is_finite() || self.grid_lines_width <= 0.0 {
            return Err(GraphError::InvalidData(
                "grid lines width must be finite and > 0".to_owned(),
            ));
        }
        if !self.data_line_width.is_finite() || self.data_line_width <= 0.0 {
            return Err(GraphError::InvalidData(
                "data line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.touch_line_width.is_finite() || self.touch_line_width <= 0.0 {
            return Err(GraphError::InvalidData(
                "touch line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.data_point_radius.is_finite() || self.data_point_radius < 0.0 {
            return Err(GraphError::InvalidData(
                "data point radius must be finite and >= 0".to_owned(),
            ));
        }
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }

        self.margins.validate()?;

        for color in [
            self.data_line_color,
            self.data_point_color,
            self.vertical_grid_line_color,
            self.horizontal_grid_line_color,
            self.bounds_line_color,
            self.touch_line_color,
            self.label_text_color,
        ] {
            color.validate()?;
        }

        Ok(self)
    }
}

fn default_true() -> bool {
    true
}

fn default_grid_lines_width() -> f64 {
    1.0
}

fn default_data_line_width() -> f64 {
    1.5
}

fn default_touch_line_width() -> f64 {
    1.0
}

fn default_label_font_size_px() -> f64 {
    11.0
}

fn default_data_line_color() -> Color {
    Color::rgb(0.16, 0.38, 1.0)
}

fn default_grid_line_color() -> Color {
    Color::rgb(0.89, 0.92, 0.95)
}

fn default_bounds_line_color() -> Color {
    Color::rgb(0.82, 0.84, 0.88)
}

fn default_touch_line_color() -> Color {
    Color::rgb(0.30, 0.35, 0.44)
}

fn default_label_text_color() -> Color {
    Color::rgb(0.10, 0.12, 0.16)
}
