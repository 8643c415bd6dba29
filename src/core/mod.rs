pub mod arrow;
pub mod line_series;
pub mod primitives;
pub mod series;
pub mod transform;
pub mod types;
pub mod windowing;

pub use arrow::{AxisArrow, axis_arrow};
pub use line_series::{SeriesPath, build_series_path};
pub use series::Series;
pub use transform::{AxisTransform, DataExtents, project_points};
pub use types::{DataPoint, Rect, ScreenPoint, Viewport};
pub use windowing::{indices_in_window, points_in_window};
