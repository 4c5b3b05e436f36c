mod axis_labels;
mod data_source;
mod engine;
mod engine_config;
mod engine_snapshot;
mod frame_builder;
mod layout_engine;
mod series;
mod snap_resolver;
mod style;

pub use data_source::{GraphDataSource, StaticDataSource};
pub use engine::GraphEngine;
pub use engine_config::GraphEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use layout_engine::{GraphLayoutEngine, HorizontalGridLine, VerticalGridLine};
pub use series::{PointStyleOverride, ResolvedPointStyle, Series};
pub use style::GraphStyle;
