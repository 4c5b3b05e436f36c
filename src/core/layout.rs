use crate::core::types::{AxisRange, Margins, Rect};
use crate::error::{GraphError, GraphResult};

/// Synthetic span substituted when an axis domain collapses to a single
/// value, keeping the graph rectangle non-degenerate.
pub const DEFAULT_MIN_AXIS_SPAN: f64 = 1.0;

/// Insets view bounds by the label margins to get the plotting rectangle.
///
/// Margins that consume the whole view are a configuration error; rendering
/// never proceeds from a non-positive rectangle.
pub fn plot_rect_for_view(view_bounds: Rect, margins: Margins) -> GraphResult<Rect> {
    let margins = margins.validate()?;

    let plot = Rect {
        origin_x: view_bounds.origin_x + margins.left,
        origin_y: view_bounds.origin_y + margins.top,
        width: view_bounds.width - margins.left - margins.right,
        height: view_bounds.height - margins.top - margins.bottom,
    };

    if plot.is_degenerate() {
        return Err(GraphError::MarginsExceedBounds {
            plot_width: plot.width,
            plot_height: plot.height,
        });
    }

    Ok(plot)
}

/// Builds the graph-space rectangle from per-axis domains.
///
/// Each range is normalized first, so collapsed domains (single data value,
/// zero- or one-point index axis) still yield a usable rectangle.
pub fn graph_rect_from_ranges(x_range: AxisRange, y_range: AxisRange) -> GraphResult<Rect> {
    let x = x_range.normalized(DEFAULT_MIN_AXIS_SPAN)?;
    let y = y_range.normalized(DEFAULT_MIN_AXIS_SPAN)?;

    Ok(Rect {
        origin_x: x.min,
        origin_y: y.min,
        width: x.span(),
        height: y.span(),
    })
}

/// X domain for series plotted by position: `[0, count - 1]`.
///
/// Zero- and one-point series collapse to `[0, 0]`, which normalization
/// expands downstream.
#[must_use]
pub fn index_domain(point_count: usize) -> AxisRange {
    let last = point_count.saturating_sub(1);
    AxisRange::new(0.0, last as f64)
}
