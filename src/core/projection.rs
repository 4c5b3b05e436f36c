use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::mapper::CoordinateMapper;
use crate::core::types::{GraphPoint, ScreenPoint};
use crate::error::GraphResult;

/// Projected polyline segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolylineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects graph-space points into screen space, preserving order.
///
/// Output length always equals input length; ordering defines the stroke
/// path, so no reordering or filtering happens here.
pub fn project_points(
    points: &[GraphPoint],
    mapper: CoordinateMapper,
) -> GraphResult<Vec<ScreenPoint>> {
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<GraphResult<ScreenPoint>> = points
            .par_iter()
            .map(|point| mapper.screen_point_for_graph_point(*point))
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(points.len());
        for point in points {
            out.push(mapper.screen_point_for_graph_point(*point)?);
        }
        Ok(out)
    }
}

/// Projects ordered points into adjacent line segments.
///
/// Fewer than two points yield no segments. Consecutive segments share
/// their joint endpoint exactly.
pub fn project_polyline_segments(
    points: &[GraphPoint],
    mapper: CoordinateMapper,
) -> GraphResult<Vec<PolylineSegment>> {
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let mapped = project_points(points, mapper)?;

    let mut segments = Vec::with_capacity(mapped.len() - 1);
    for pair in mapped.windows(2) {
        segments.push(PolylineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        });
    }

    Ok(segments)
}
