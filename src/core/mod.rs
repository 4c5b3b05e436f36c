pub mod layout;
pub mod mapper;
pub mod projection;
pub mod types;

pub use mapper::CoordinateMapper;
pub use projection::PolylineSegment;
pub use types::{AxisRange, GraphPoint, Margins, Rect, ScreenPoint};
