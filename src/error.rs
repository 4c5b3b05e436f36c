use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("degenerate screen rect: width={width}, height={height}")]
    DegenerateScreenRect { width: f64, height: f64 },

    #[error("degenerate graph rect: width={width}, height={height}")]
    DegenerateGraphRect { width: f64, height: f64 },

    #[error("margins leave no plot area: width={plot_width}, height={plot_height}")]
    MarginsExceedBounds { plot_width: f64, plot_height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
