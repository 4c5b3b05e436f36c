use crate::core::Rect;
use crate::error::{GraphError, GraphResult};
use crate::render::{CirclePrimitive, LinePrimitive, TextPrimitive};

/// Draw layers in back-to-front order.
///
/// Bounds lines sit behind everything; the touch readout line covers the
/// series; labels draw last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphLayerKind {
    Bounds,
    Grid,
    Series,
    TouchLine,
    Labels,
}

impl GraphLayerKind {
    #[must_use]
    pub const fn canonical_order() -> [GraphLayerKind; 5] {
        [
            GraphLayerKind::Bounds,
            GraphLayerKind::Grid,
            GraphLayerKind::Series,
            GraphLayerKind::TouchLine,
            GraphLayerKind::Labels,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: GraphLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    fn empty(kind: GraphLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.circles.is_empty() && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one draw pass.
///
/// Layer order in `layers` is the z-order contract: backends draw in list
/// order, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub view_bounds: Rect,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(view_bounds: Rect) -> Self {
        let layers = GraphLayerKind::canonical_order()
            .into_iter()
            .map(LayerPrimitives::empty)
            .collect();
        Self {
            view_bounds,
            layers,
        }
    }

    pub fn push_line(&mut self, kind: GraphLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_circle(&mut self, kind: GraphLayerKind, circle: CirclePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.circles.push(circle);
        }
    }

    pub fn push_text(&mut self, kind: GraphLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: GraphLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: GraphLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.view_bounds.is_degenerate() {
            return Err(GraphError::DegenerateScreenRect {
                width: self.view_bounds.width,
                height: self.view_bounds.height,
            });
        }

        for layer in &self.layers {
            for line in &layer.lines {
                line.validate()?;
            }
            for circle in &layer.circles {
                circle.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.circles.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }
}
