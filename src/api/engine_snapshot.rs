use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::{GraphError, GraphResult};
use crate::interaction::{TouchLineMode, TouchState};
use crate::render::Renderer;

use super::{GraphEngine, GraphStyle};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub view_bounds: Rect,
    pub plot_rect: Rect,
    pub graph_rect: Rect,
    pub style: GraphStyle,
    pub touch_line_mode: TouchLineMode,
    pub touch: TouchState,
    pub series_point_counts: IndexMap<String, usize>,
}

impl<R: Renderer> GraphEngine<R> {
    /// Builds a deterministic snapshot of engine state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            view_bounds: self.view_bounds,
            plot_rect: self.layout.plot_rect(),
            graph_rect: self.layout.graph_rect(),
            style: self.style,
            touch_line_mode: self.interaction.touch_line_mode(),
            touch: self.interaction.touch(),
            series_point_counts: self
                .series_set
                .iter()
                .map(|(name, series)| (name.clone(), series.len()))
                .collect(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
