use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::layout::{graph_rect_from_ranges, index_domain, plot_rect_for_view};
use crate::core::projection::project_points;
use crate::core::{AxisRange, CoordinateMapper, GraphPoint, Margins, Rect, ScreenPoint};
use crate::error::GraphResult;

use super::{GraphDataSource, Series};

/// Vertical reference line derived for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalGridLine {
    pub x_value: f64,
    pub x_px: f64,
}

/// Horizontal reference line derived for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalGridLine {
    pub y_value: f64,
    pub y_px: f64,
}

/// Derives the live (plot rect, graph rect) pair and owns the mapper.
///
/// The engine is a pure function of view bounds, margins, and the data
/// source's readings at refresh time; the only ordering obligation on
/// callers is refresh-before-read. A failed refresh leaves the previous
/// mapper in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphLayoutEngine {
    margins: Margins,
    mapper: CoordinateMapper,
}

impl GraphLayoutEngine {
    pub fn new(
        view_bounds: Rect,
        margins: Margins,
        x_range: AxisRange,
        y_range: AxisRange,
    ) -> GraphResult<Self> {
        let margins = margins.validate()?;
        let plot = plot_rect_for_view(view_bounds, margins)?;
        let graph = graph_rect_from_ranges(x_range, y_range)?;
        Ok(Self {
            margins,
            mapper: CoordinateMapper::new(plot, graph)?,
        })
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Replaces the label margins; takes effect on the next refresh.
    pub fn set_margins(&mut self, margins: Margins) -> GraphResult<()> {
        self.margins = margins.validate()?;
        debug!(
            left = margins.left,
            top = margins.top,
            right = margins.right,
            bottom = margins.bottom,
            "set layout margins"
        );
        Ok(())
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        self.mapper
    }

    /// Screen rectangle the data is plotted into (view bounds minus margins).
    #[must_use]
    pub fn plot_rect(&self) -> Rect {
        self.mapper.screen_rect()
    }

    /// Graph-space rectangle covering the current axis domains.
    #[must_use]
    pub fn graph_rect(&self) -> Rect {
        self.mapper.graph_rect()
    }

    /// Recomputes both rectangles from the data source and swaps the mapper.
    ///
    /// X domain: the source's explicit range when present, otherwise the
    /// index axis `[0, count - 1]` over its primary values. Y domain: exactly
    /// `[y_min, y_max]` as reported. Idempotent for unchanged inputs.
    pub fn refresh(
        &mut self,
        view_bounds: Rect,
        data_source: &dyn GraphDataSource,
    ) -> GraphResult<()> {
        let x_range = match data_source.x_range() {
            Some(range) => range,
            None => index_domain(data_source.y_values().len()),
        };
        let y_range = AxisRange::new(data_source.y_min(), data_source.y_max());
        self.refresh_with_ranges(view_bounds, x_range, y_range)
    }

    /// Refresh variant for callers that already hold the axis domains.
    pub fn refresh_with_ranges(
        &mut self,
        view_bounds: Rect,
        x_range: AxisRange,
        y_range: AxisRange,
    ) -> GraphResult<()> {
        let plot = plot_rect_for_view(view_bounds, self.margins)?;
        let graph = graph_rect_from_ranges(x_range, y_range)?;
        self.mapper.update(plot, graph)?;
        trace!(
            plot_width = plot.width,
            plot_height = plot.height,
            graph_width = graph.width,
            graph_height = graph.height,
            "layout refreshed"
        );
        Ok(())
    }

    /// Lazily maps series points to screen space in input order.
    pub fn map_series_to_screen<'a>(
        &self,
        series: &'a Series,
    ) -> impl Iterator<Item = GraphResult<ScreenPoint>> + 'a {
        let mapper = self.mapper;
        series
            .points()
            .iter()
            .map(move |point| mapper.screen_point_for_graph_point(*point))
    }

    /// Strict collecting form of `map_series_to_screen`.
    pub fn project_series(&self, series: &Series) -> GraphResult<Vec<ScreenPoint>> {
        project_points(series.points(), self.mapper)
    }

    /// Derives reference-line screen positions from graph-space coordinates.
    ///
    /// Out-of-domain positions still map; dropping or clipping them is the
    /// renderer's call, never the layout engine's.
    pub fn map_reference_lines(
        &self,
        x_indices: &[f64],
        y_values: &[f64],
    ) -> GraphResult<(Vec<VerticalGridLine>, Vec<HorizontalGridLine>)> {
        let graph = self.mapper.graph_rect();

        let mut vertical = Vec::with_capacity(x_indices.len());
        for x_value in x_indices {
            let mapped = self
                .mapper
                .screen_point_for_graph_point(GraphPoint::new(*x_value, graph.origin_y))?;
            vertical.push(VerticalGridLine {
                x_value: *x_value,
                x_px: mapped.x,
            });
        }

        let mut horizontal = Vec::with_capacity(y_values.len());
        for y_value in y_values {
            let mapped = self
                .mapper
                .screen_point_for_graph_point(GraphPoint::new(graph.origin_x, *y_value))?;
            horizontal.push(HorizontalGridLine {
                y_value: *y_value,
                y_px: mapped.y,
            });
        }

        Ok((vertical, horizontal))
    }

    /// Forward transform for a single graph-space point.
    pub fn graph_point_to_screen_point(&self, point: GraphPoint) -> GraphResult<ScreenPoint> {
        self.mapper.screen_point_for_graph_point(point)
    }

    /// Inverse transform for pointer readout.
    ///
    /// Input outside the plot rectangle extrapolates; containment is not
    /// checked.
    pub fn screen_point_to_graph_point(&self, point: ScreenPoint) -> GraphResult<GraphPoint> {
        self.mapper.graph_point_for_screen_point(point)
    }
}
