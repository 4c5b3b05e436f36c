use serde::{Deserialize, Serialize};

use crate::core::GraphPoint;
use crate::error::{GraphError, GraphResult};
use crate::render::Color;

use super::GraphStyle;

/// Optional per-point marker overrides.
///
/// Absent fields fall back to the series defaults, then to the view-level
/// style.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointStyleOverride {
    pub radius: Option<f64>,
    pub color: Option<Color>,
}

impl PointStyleOverride {
    pub fn validate(self) -> GraphResult<()> {
        if let Some(radius) = self.radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(GraphError::InvalidData(
                    "point radius override must be finite and >= 0".to_owned(),
                ));
            }
        }
        if let Some(color) = self.color {
            color.validate()?;
        }
        Ok(())
    }
}

/// Marker style for one point after override resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPointStyle {
    pub radius: f64,
    pub color: Color,
}

/// One drawable data series: ordered graph-space points plus style.
///
/// Point order is load-bearing: it defines the stroke path. The overrides
/// vector stays in lockstep with the points vector; every mutation below
/// preserves that pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    points: Vec<GraphPoint>,
    point_style_overrides: Vec<Option<PointStyleOverride>>,
    stroke_color: Option<Color>,
    stroke_width: Option<f64>,
    point_radius: Option<f64>,
    point_color: Option<Color>,
}

impl Default for Series {
    fn default() -> Self {
        Self::new()
    }
}

impl Series {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            point_style_overrides: Vec::new(),
            stroke_color: None,
            stroke_width: None,
            point_radius: None,
            point_color: None,
        }
    }

    /// Sets the series stroke color; `None` keeps the view-level default.
    #[must_use]
    pub const fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    #[must_use]
    pub const fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = Some(radius);
        self
    }

    #[must_use]
    pub const fn with_point_color(mut self, color: Color) -> Self {
        self.point_color = Some(color);
        self
    }

    #[must_use]
    pub fn points(&self) -> &[GraphPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn point_style_override(&self, index: usize) -> Option<PointStyleOverride> {
        self.point_style_overrides.get(index).copied().flatten()
    }

    /// Replaces all points, clearing any per-point overrides.
    pub fn set_points(&mut self, points: Vec<GraphPoint>) -> GraphResult<()> {
        for point in &points {
            validate_point(*point)?;
        }
        self.point_style_overrides = vec![None; points.len()];
        self.points = points;
        Ok(())
    }

    pub fn append_point(&mut self, point: GraphPoint) -> GraphResult<()> {
        validate_point(point)?;
        self.points.push(point);
        self.point_style_overrides.push(None);
        Ok(())
    }

    pub fn append_styled_point(
        &mut self,
        point: GraphPoint,
        style_override: PointStyleOverride,
    ) -> GraphResult<()> {
        validate_point(point)?;
        style_override.validate()?;
        self.points.push(point);
        self.point_style_overrides.push(Some(style_override));
        Ok(())
    }

    pub fn set_point_style_override(
        &mut self,
        index: usize,
        style_override: Option<PointStyleOverride>,
    ) -> GraphResult<()> {
        if index >= self.points.len() {
            return Err(GraphError::InvalidData(format!(
                "point index {index} out of bounds for series of {} points",
                self.points.len()
            )));
        }
        if let Some(style_override) = style_override {
            style_override.validate()?;
        }
        self.point_style_overrides[index] = style_override;
        Ok(())
    }

    pub fn clear_points(&mut self) {
        self.points.clear();
        self.point_style_overrides.clear();
    }

    #[must_use]
    pub fn resolved_stroke_color(&self, style: &GraphStyle) -> Color {
        self.stroke_color.unwrap_or(style.data_line_color)
    }

    #[must_use]
    pub fn resolved_stroke_width(&self, style: &GraphStyle) -> f64 {
        self.stroke_width.unwrap_or(style.data_line_width)
    }

    /// Resolves the marker style for point `index`.
    ///
    /// Resolution order: per-point override, series default, view style.
    #[must_use]
    pub fn resolved_point_style(&self, index: usize, style: &GraphStyle) -> ResolvedPointStyle {
        let style_override = self.point_style_override(index);
        let radius = style_override
            .and_then(|o| o.radius)
            .or(self.point_radius)
            .unwrap_or(style.data_point_radius);
        let color = style_override
            .and_then(|o| o.color)
            .or(self.point_color)
            .unwrap_or(style.data_point_color);
        ResolvedPointStyle { radius, color }
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.point_style_overrides.len() != self.points.len() {
            return Err(GraphError::InvalidData(
                "point style overrides out of lockstep with points".to_owned(),
            ));
        }
        for point in &self.points {
            validate_point(*point)?;
        }
        for style_override in self.point_style_overrides.iter().flatten() {
            style_override.validate()?;
        }
        if let Some(width) = self.stroke_width {
            if !width.is_finite() || width <= 0.0 {
                return Err(GraphError::InvalidData(
                    "series stroke width must be finite and > 0".to_owned(),
                ));
            }
        }
        if let Some(radius) = self.point_radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(GraphError::InvalidData(
                    "series point radius must be finite and >= 0".to_owned(),
                ));
            }
        }
        if let Some(color) = self.stroke_color {
            color.validate()?;
        }
        if let Some(color) = self.point_color {
            color.validate()?;
        }
        Ok(())
    }
}

fn validate_point(point: GraphPoint) -> GraphResult<()> {
    if !point.is_finite() {
        return Err(GraphError::InvalidData(
            "series point must be finite".to_owned(),
        ));
    }
    Ok(())
}
