use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{AxisRange, GraphPoint, Rect, ScreenPoint};
use crate::error::GraphResult;
use crate::interaction::{InteractionState, TouchLineMode, TouchState};
use crate::render::Renderer;

use super::{GraphDataSource, GraphEngineConfig, GraphLayoutEngine, GraphStyle, Series};

/// Main orchestration facade consumed by host applications.
///
/// `GraphEngine` coordinates the layout engine, overlay series set,
/// interaction state, style surface, and renderer calls. The primary series
/// is never stored here; it is read from the data source on every pass.
pub struct GraphEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) layout: GraphLayoutEngine,
    pub(super) view_bounds: Rect,
    pub(super) style: GraphStyle,
    pub(super) interaction: InteractionState,
    pub(super) series_set: IndexMap<String, Series>,
}

impl<R: Renderer> GraphEngine<R> {
    pub fn new(renderer: R, config: GraphEngineConfig) -> GraphResult<Self> {
        let style = config.style.validate()?;
        let layout = GraphLayoutEngine::new(
            config.view_bounds,
            style.margins,
            AxisRange::new(config.x_min, config.x_max),
            AxisRange::new(config.y_min, config.y_max),
        )?;

        let mut interaction = InteractionState::default();
        interaction.set_touch_line_mode(config.touch_line_mode);

        Ok(Self {
            renderer,
            layout,
            view_bounds: config.view_bounds,
            style,
            interaction,
            series_set: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn style(&self) -> GraphStyle {
        self.style
    }

    pub fn set_style(&mut self, style: GraphStyle) -> GraphResult<()> {
        let style = style.validate()?;
        self.layout.set_margins(style.margins)?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn view_bounds(&self) -> Rect {
        self.view_bounds
    }

    #[must_use]
    pub fn plot_rect(&self) -> Rect {
        self.layout.plot_rect()
    }

    #[must_use]
    pub fn graph_rect(&self) -> Rect {
        self.layout.graph_rect()
    }

    #[must_use]
    pub fn layout_engine(&self) -> &GraphLayoutEngine {
        &self.layout
    }

    /// Inserts or replaces a named overlay series.
    ///
    /// Insertion order defines draw order; replacing keeps the original slot.
    pub fn insert_series(&mut self, name: impl Into<String>, series: Series) -> GraphResult<()> {
        series.validate()?;
        let name = name.into();
        debug!(name = %name, points = series.len(), "insert series");
        self.series_set.insert(name, series);
        Ok(())
    }

    pub fn remove_series(&mut self, name: &str) -> Option<Series> {
        let removed = self.series_set.shift_remove(name);
        if removed.is_some() {
            debug!(name = %name, "remove series");
        }
        removed
    }

    #[must_use]
    pub fn series(&self, name: &str) -> Option<&Series> {
        self.series_set.get(name)
    }

    pub fn series_mut(&mut self, name: &str) -> Option<&mut Series> {
        self.series_set.get_mut(name)
    }

    #[must_use]
    pub fn series_names(&self) -> Vec<&str> {
        self.series_set.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series_set.len()
    }

    #[must_use]
    pub fn touch_line_mode(&self) -> TouchLineMode {
        self.interaction.touch_line_mode()
    }

    pub fn set_touch_line_mode(&mut self, mode: TouchLineMode) {
        self.interaction.set_touch_line_mode(mode);
    }

    #[must_use]
    pub fn touch(&self) -> TouchState {
        self.interaction.touch()
    }

    /// Updates the touch readout for a pointer position.
    ///
    /// In magnet mode the readout snaps to the nearest sample by screen-X
    /// distance across the primary values and every overlay series.
    pub fn pointer_move(&mut self, x: f64, y: f64, data_source: &dyn GraphDataSource) {
        self.interaction.on_pointer_move(x, y);
        let snap = match self.interaction.touch_line_mode() {
            TouchLineMode::Magnet => self.snap_at_x(x, data_source),
            TouchLineMode::Normal | TouchLineMode::Hidden => None,
        };
        self.interaction.set_touch_snap(snap);
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Graph-space readout for an arbitrary screen position.
    pub fn map_screen_point_to_graph(&self, point: ScreenPoint) -> GraphResult<GraphPoint> {
        self.layout.screen_point_to_graph_point(point)
    }

    pub fn map_graph_point_to_screen(&self, point: GraphPoint) -> GraphResult<ScreenPoint> {
        self.layout.graph_point_to_screen_point(point)
    }

    /// Recomputes the layout from current view bounds and data-source state.
    ///
    /// On failure the previous mapper and view bounds stay live.
    pub fn refresh(
        &mut self,
        view_bounds: Rect,
        data_source: &dyn GraphDataSource,
    ) -> GraphResult<()> {
        self.layout.refresh(view_bounds, data_source)?;
        self.view_bounds = view_bounds;
        Ok(())
    }

    /// Runs one full pass: refresh, build the frame, hand it to the renderer.
    ///
    /// A failed refresh degrades to the last valid layout instead of
    /// aborting the pass; frame-building and renderer errors still propagate.
    pub fn render(
        &mut self,
        view_bounds: Rect,
        data_source: &dyn GraphDataSource,
    ) -> GraphResult<()> {
        if let Err(err) = self.refresh(view_bounds, data_source) {
            warn!(error = %err, "refresh failed, rendering with previous layout");
        }
        let frame = self.build_render_frame(data_source)?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
