use tracing::trace;

use crate::core::projection::{project_points, project_polyline_segments};
use crate::core::{GraphPoint, Rect};
use crate::error::GraphResult;
use crate::interaction::TouchLineMode;
use crate::render::{CirclePrimitive, GraphLayerKind, LinePrimitive, RenderFrame, Renderer};

use super::axis_labels::{x_axis_label_primitives, y_axis_label_primitives};
use super::{GraphDataSource, GraphEngine, HorizontalGridLine, VerticalGridLine};

impl<R: Renderer> GraphEngine<R> {
    /// Builds the layered primitive set for one pass.
    ///
    /// Layers fill in canonical z-order: bounds, grid, series, touch line,
    /// labels. Nothing is clipped here; primitives may extend past the plot
    /// rectangle and the backend decides what to do with them.
    pub fn build_render_frame(
        &self,
        data_source: &dyn GraphDataSource,
    ) -> GraphResult<RenderFrame> {
        let plot = self.layout.plot_rect();
        let mut frame = RenderFrame::new(self.view_bounds);

        if self.style.enable_graph_bounds_lines {
            self.append_bounds_primitives(&mut frame, plot);
        }

        let (vertical, horizontal) = self.reference_grid_lines(data_source)?;
        self.append_grid_primitives(&mut frame, plot, &vertical, &horizontal);
        self.append_primary_series_primitives(&mut frame, data_source)?;
        self.append_overlay_series_primitives(&mut frame)?;
        self.append_touch_line_primitives(&mut frame, plot);
        self.append_axis_label_primitives(&mut frame, plot, data_source, &vertical, &horizontal);

        trace!(
            lines = frame.line_count(),
            circles = frame.circle_count(),
            texts = frame.text_count(),
            "built render frame"
        );
        Ok(frame)
    }

    fn reference_grid_lines(
        &self,
        data_source: &dyn GraphDataSource,
    ) -> GraphResult<(Vec<VerticalGridLine>, Vec<HorizontalGridLine>)> {
        let x_indices = data_source
            .x_indices_for_reference_lines()
            .unwrap_or_default();
        let y_values = data_source
            .y_values_for_reference_lines()
            .unwrap_or_default();
        self.layout.map_reference_lines(&x_indices, &y_values)
    }

    fn append_bounds_primitives(&self, frame: &mut RenderFrame, plot: Rect) {
        let width = self.style.grid_lines_width;
        let color = self.style.bounds_line_color;
        let left = plot.origin_x;
        let top = plot.origin_y;
        let right = plot.max_x();
        let bottom = plot.max_y();

        frame.push_line(
            GraphLayerKind::Bounds,
            LinePrimitive::new(left, top, right, top, width, color),
        );
        frame.push_line(
            GraphLayerKind::Bounds,
            LinePrimitive::new(left, bottom, right, bottom, width, color),
        );
        frame.push_line(
            GraphLayerKind::Bounds,
            LinePrimitive::new(left, top, left, bottom, width, color),
        );
        frame.push_line(
            GraphLayerKind::Bounds,
            LinePrimitive::new(right, top, right, bottom, width, color),
        );
    }

    fn append_grid_primitives(
        &self,
        frame: &mut RenderFrame,
        plot: Rect,
        vertical: &[VerticalGridLine],
        horizontal: &[HorizontalGridLine],
    ) {
        let width = self.style.grid_lines_width;
        for line in vertical {
            frame.push_line(
                GraphLayerKind::Grid,
                LinePrimitive::new(
                    line.x_px,
                    plot.origin_y,
                    line.x_px,
                    plot.max_y(),
                    width,
                    self.style.vertical_grid_line_color,
                ),
            );
        }
        for line in horizontal {
            frame.push_line(
                GraphLayerKind::Grid,
                LinePrimitive::new(
                    plot.origin_x,
                    line.y_px,
                    plot.max_x(),
                    line.y_px,
                    width,
                    self.style.horizontal_grid_line_color,
                ),
            );
        }
    }

    fn append_primary_series_primitives(
        &self,
        frame: &mut RenderFrame,
        data_source: &dyn GraphDataSource,
    ) -> GraphResult<()> {
        let values = data_source.y_values();
        if values.is_empty() {
            return Ok(());
        }
        let points: Vec<GraphPoint> = values
            .iter()
            .enumerate()
            .map(|(index, value)| GraphPoint::new(index as f64, *value))
            .collect();

        let mapper = self.layout.mapper();
        for segment in project_polyline_segments(&points, mapper)? {
            frame.push_line(
                GraphLayerKind::Series,
                LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    self.style.data_line_width,
                    self.style.data_line_color,
                ),
            );
        }
        if self.style.data_point_radius > 0.0 {
            for screen in project_points(&points, mapper)? {
                frame.push_circle(
                    GraphLayerKind::Series,
                    CirclePrimitive::new(
                        screen.x,
                        screen.y,
                        self.style.data_point_radius,
                        self.style.data_point_color,
                    ),
                );
            }
        }
        Ok(())
    }

    fn append_overlay_series_primitives(&self, frame: &mut RenderFrame) -> GraphResult<()> {
        let mapper = self.layout.mapper();
        for series in self.series_set.values() {
            let stroke_width = series.resolved_stroke_width(&self.style);
            let stroke_color = series.resolved_stroke_color(&self.style);
            for segment in project_polyline_segments(series.points(), mapper)? {
                frame.push_line(
                    GraphLayerKind::Series,
                    LinePrimitive::new(
                        segment.x1,
                        segment.y1,
                        segment.x2,
                        segment.y2,
                        stroke_width,
                        stroke_color,
                    ),
                );
            }
            for (index, screen) in project_points(series.points(), mapper)?.iter().enumerate() {
                let marker = series.resolved_point_style(index, &self.style);
                if marker.radius > 0.0 {
                    frame.push_circle(
                        GraphLayerKind::Series,
                        CirclePrimitive::new(screen.x, screen.y, marker.radius, marker.color),
                    );
                }
            }
        }
        Ok(())
    }

    fn append_touch_line_primitives(&self, frame: &mut RenderFrame, plot: Rect) {
        if self.interaction.touch_line_mode() == TouchLineMode::Hidden {
            return;
        }
        let touch = self.interaction.touch();
        if !touch.visible {
            return;
        }

        let touch_x = touch
            .snapped_x
            .unwrap_or(touch.x)
            .clamp(plot.origin_x, plot.max_x());
        frame.push_line(
            GraphLayerKind::TouchLine,
            LinePrimitive::new(
                touch_x,
                plot.origin_y,
                touch_x,
                plot.max_y(),
                self.style.touch_line_width,
                self.style.touch_line_color,
            ),
        );
    }

    fn append_axis_label_primitives(
        &self,
        frame: &mut RenderFrame,
        plot: Rect,
        data_source: &dyn GraphDataSource,
        vertical: &[VerticalGridLine],
        horizontal: &[HorizontalGridLine],
    ) {
        if self.style.enable_y_axis_labels {
            for text in y_axis_label_primitives(horizontal, plot, &self.style, data_source) {
                frame.push_text(GraphLayerKind::Labels, text);
            }
        }
        if self.style.enable_x_axis_labels {
            for text in x_axis_label_primitives(vertical, plot, &self.style, data_source) {
                frame.push_text(GraphLayerKind::Labels, text);
            }
        }
    }
}
