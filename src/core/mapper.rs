use serde::{Deserialize, Serialize};

use crate::core::types::{GraphPoint, Rect, ScreenPoint};
use crate::error::{GraphError, GraphResult};

/// Bidirectional affine transform between graph space and screen space.
///
/// The mapper owns exactly one screen rectangle and one graph rectangle at a
/// time. Both are replaced together through `update`; there is no partial
/// mutation. The vertical axis flips between the two spaces: increasing graph
/// Y moves toward the top edge of the screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMapper {
    screen_rect: Rect,
    graph_rect: Rect,
}

impl CoordinateMapper {
    pub fn new(screen_rect: Rect, graph_rect: Rect) -> GraphResult<Self> {
        validate_pair(screen_rect, graph_rect)?;
        Ok(Self {
            screen_rect,
            graph_rect,
        })
    }

    /// Replaces both rectangles atomically.
    ///
    /// Rejected updates leave the previous valid pair in place.
    pub fn update(&mut self, screen_rect: Rect, graph_rect: Rect) -> GraphResult<()> {
        validate_pair(screen_rect, graph_rect)?;
        self.screen_rect = screen_rect;
        self.graph_rect = graph_rect;
        Ok(())
    }

    #[must_use]
    pub fn screen_rect(self) -> Rect {
        self.screen_rect
    }

    #[must_use]
    pub fn graph_rect(self) -> Rect {
        self.graph_rect
    }

    /// Maps a graph-space point to screen space.
    ///
    /// Points outside the graph rectangle map to screen coordinates outside
    /// the screen rectangle; clipping is the renderer's concern.
    pub fn screen_point_for_graph_point(self, point: GraphPoint) -> GraphResult<ScreenPoint> {
        if !point.is_finite() {
            return Err(GraphError::InvalidData(
                "graph point must be finite".to_owned(),
            ));
        }

        let scale_x = self.screen_rect.width / self.graph_rect.width;
        let scale_y = self.screen_rect.height / self.graph_rect.height;

        Ok(ScreenPoint {
            x: self.screen_rect.origin_x + (point.x - self.graph_rect.origin_x) * scale_x,
            y: self.screen_rect.origin_y + self.screen_rect.height
                - (point.y - self.graph_rect.origin_y) * scale_y,
        })
    }

    /// Maps a screen-space point back to graph space.
    ///
    /// Exact algebraic inverse of `screen_point_for_graph_point`. Input
    /// outside the screen rectangle extrapolates; it is not an error.
    pub fn graph_point_for_screen_point(self, point: ScreenPoint) -> GraphResult<GraphPoint> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(GraphError::InvalidData(
                "screen point must be finite".to_owned(),
            ));
        }

        let scale_x = self.screen_rect.width / self.graph_rect.width;
        let scale_y = self.screen_rect.height / self.graph_rect.height;

        Ok(GraphPoint {
            x: self.graph_rect.origin_x + (point.x - self.screen_rect.origin_x) / scale_x,
            y: self.graph_rect.origin_y
                + (self.screen_rect.origin_y + self.screen_rect.height - point.y) / scale_y,
        })
    }
}

fn validate_pair(screen_rect: Rect, graph_rect: Rect) -> GraphResult<()> {
    if screen_rect.is_degenerate() {
        return Err(GraphError::DegenerateScreenRect {
            width: screen_rect.width,
            height: screen_rect.height,
        });
    }
    if graph_rect.is_degenerate() {
        return Err(GraphError::DegenerateGraphRect {
            width: graph_rect.width,
            height: graph_rect.height,
        });
    }
    Ok(())
}
