use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Point in graph space (data domain; Y increases upward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
}

impl GraphPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Point in screen space (pixel domain; Y increases downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in either coordinate space.
///
/// Mapping requires strictly positive extents; `is_degenerate` is the
/// check every mapper construction path goes through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn max_x(self) -> f64 {
        self.origin_x + self.width
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.origin_y + self.height
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !self.origin_x.is_finite()
            || !self.origin_y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Screen-space insets reserved for axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 35.0,
            top: 0.0,
            right: 0.0,
            bottom: 35.0,
        }
    }
}

impl Margins {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn validate(self) -> GraphResult<Self> {
        for (side, value) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// One axis of the graph-space domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Returns an ordered range with a strictly positive span.
    ///
    /// A collapsed range (`min == max`) expands symmetrically by
    /// `min_span / 2` per side. Reversed bounds are reordered. This is the
    /// documented fallback for degenerate axis domains, not an error path.
    pub fn normalized(self, min_span: f64) -> GraphResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(GraphError::InvalidData(
                "axis range must be finite".to_owned(),
            ));
        }
        if !min_span.is_finite() || min_span <= 0.0 {
            return Err(GraphError::InvalidData(
                "axis min span must be finite and > 0".to_owned(),
            ));
        }

        if self.min == self.max {
            let half = min_span / 2.0;
            return Ok(Self {
                min: self.min - half,
                max: self.max + half,
            });
        }

        Ok(Self {
            min: self.min.min(self.max),
            max: self.min.max(self.max),
        })
    }
}
