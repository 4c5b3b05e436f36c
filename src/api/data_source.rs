use crate::core::AxisRange;
use crate::error::{GraphError, GraphResult};

/// Dynamic bounds and content supplied by the host per render pass.
///
/// `y_min`/`y_max`/`y_values` are the required capabilities. The default
/// methods are the optional ones: the engine treats `None` as "capability
/// absent" rather than probing the implementor. Autoscaling, when wanted,
/// happens inside the data source; the layout engine consumes the reported
/// range verbatim.
pub trait GraphDataSource {
    /// Lower edge of the Y-axis domain for the next render pass.
    fn y_min(&self) -> f64;

    /// Upper edge of the Y-axis domain for the next render pass.
    fn y_max(&self) -> f64;

    /// Primary series values, plotted against their position index.
    fn y_values(&self) -> Vec<f64>;

    /// Explicit X domain; `None` keeps the index-based `[0, count - 1]` axis.
    fn x_range(&self) -> Option<AxisRange> {
        None
    }

    /// X positions for vertical reference lines; `None` draws no vertical lines.
    fn x_indices_for_reference_lines(&self) -> Option<Vec<f64>> {
        None
    }

    /// Y values for horizontal reference lines; `None` draws no horizontal lines.
    fn y_values_for_reference_lines(&self) -> Option<Vec<f64>> {
        None
    }

    /// Custom X-axis tick text; `None` falls back to numeric formatting.
    fn x_axis_label(&self, _value: f64) -> Option<String> {
        None
    }

    /// Custom Y-axis tick text; `None` falls back to numeric formatting.
    fn y_axis_label(&self, _value: f64) -> Option<String> {
        None
    }
}

/// Fixed-content data source for tests, demos, and non-streaming hosts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticDataSource {
    values: Vec<f64>,
    y_min: f64,
    y_max: f64,
    x_range: Option<AxisRange>,
    reference_x_indices: Option<Vec<f64>>,
    reference_y_values: Option<Vec<f64>>,
}

impl StaticDataSource {
    /// Builds a source whose Y domain is the min/max of `values`.
    ///
    /// An empty value list reports a `[0, 0]` domain, which the layout engine
    /// expands through its degenerate-range fallback.
    pub fn from_values(values: Vec<f64>) -> GraphResult<Self> {
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for value in &values {
            if !value.is_finite() {
                return Err(GraphError::InvalidData(
                    "data source values must be finite".to_owned(),
                ));
            }
            y_min = y_min.min(*value);
            y_max = y_max.max(*value);
        }
        if values.is_empty() {
            y_min = 0.0;
            y_max = 0.0;
        }

        Ok(Self {
            values,
            y_min,
            y_max,
            x_range: None,
            reference_x_indices: None,
            reference_y_values: None,
        })
    }

    /// Overrides the reported Y domain, e.g. to pad above and below the data.
    #[must_use]
    pub fn with_y_range(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    /// Supplies an explicit X domain instead of the index axis.
    #[must_use]
    pub fn with_x_range(mut self, x_range: AxisRange) -> Self {
        self.x_range = Some(x_range);
        self
    }

    #[must_use]
    pub fn with_reference_x_indices(mut self, indices: Vec<f64>) -> Self {
        self.reference_x_indices = Some(indices);
        self
    }

    #[must_use]
    pub fn with_reference_y_values(mut self, values: Vec<f64>) -> Self {
        self.reference_y_values = Some(values);
        self
    }
}

impl GraphDataSource for StaticDataSource {
    fn y_min(&self) -> f64 {
        self.y_min
    }

    fn y_max(&self) -> f64 {
        self.y_max
    }

    fn y_values(&self) -> Vec<f64> {
        self.values.clone()
    }

    fn x_range(&self) -> Option<AxisRange> {
        self.x_range
    }

    fn x_indices_for_reference_lines(&self) -> Option<Vec<f64>> {
        self.reference_x_indices.clone()
    }

    fn y_values_for_reference_lines(&self) -> Option<Vec<f64>> {
        self.reference_y_values.clone()
    }
}
