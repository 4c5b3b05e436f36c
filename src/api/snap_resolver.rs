use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::GraphPoint;
use crate::interaction::TouchSnap;
use crate::render::Renderer;

use super::{GraphDataSource, GraphEngine};

impl<R: Renderer> GraphEngine<R> {
    /// Nearest sample to `pointer_x` by horizontal screen distance.
    ///
    /// Candidates come from the primary values and from every overlay
    /// series; ties keep the earlier sample.
    pub(super) fn snap_at_x(
        &self,
        pointer_x: f64,
        data_source: &dyn GraphDataSource,
    ) -> Option<TouchSnap> {
        let mut candidates: SmallVec<[(OrderedFloat<f64>, TouchSnap); 2]> = SmallVec::new();
        if let Some(snap) = self.nearest_primary_snap(pointer_x, data_source) {
            candidates.push(snap);
        }
        if let Some(snap) = self.nearest_overlay_snap(pointer_x) {
            candidates.push(snap);
        }

        candidates
            .into_iter()
            .min_by_key(|item| item.0)
            .map(|(_, snap)| snap)
    }

    fn nearest_primary_snap(
        &self,
        pointer_x: f64,
        data_source: &dyn GraphDataSource,
    ) -> Option<(OrderedFloat<f64>, TouchSnap)> {
        let mapper = self.layout.mapper();
        let mut best: Option<(OrderedFloat<f64>, TouchSnap)> = None;
        for (index, value) in data_source.y_values().iter().enumerate() {
            let graph = GraphPoint::new(index as f64, *value);
            let screen = match mapper.screen_point_for_graph_point(graph) {
                Ok(point) => point,
                Err(_) => continue,
            };
            let dist = OrderedFloat((screen.x - pointer_x).abs());
            match best {
                Some((current, _)) if current <= dist => {}
                _ => {
                    best = Some((
                        dist,
                        TouchSnap {
                            x: screen.x,
                            y: screen.y,
                            graph_x: graph.x,
                            graph_y: graph.y,
                        },
                    ))
                }
            }
        }
        best
    }

    fn nearest_overlay_snap(&self, pointer_x: f64) -> Option<(OrderedFloat<f64>, TouchSnap)> {
        let mapper = self.layout.mapper();
        let mut best: Option<(OrderedFloat<f64>, TouchSnap)> = None;
        for series in self.series_set.values() {
            for graph in series.points() {
                let screen = match mapper.screen_point_for_graph_point(*graph) {
                    Ok(point) => point,
                    Err(_) => continue,
                };
                let dist = OrderedFloat((screen.x - pointer_x).abs());
                match best {
                    Some((current, _)) if current <= dist => {}
                    _ => {
                        best = Some((
                            dist,
                            TouchSnap {
                                x: screen.x,
                                y: screen.y,
                                graph_x: graph.x,
                                graph_y: graph.y,
                            },
                        ))
                    }
                }
            }
        }
        best
    }
}
