use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;

/// Polyline geometry for the plotted series in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPath {
    pub vertices: Vec<ScreenPoint>,
    /// `true` in fill mode: the path is closed and meant to be filled.
    pub filled: bool,
}

impl SeriesPath {
    /// Whether the last vertex joins back to the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.filled
    }
}

/// Builds the series path from projected display points in series order.
///
/// Returns `None` when there is nothing to draw. Stroked and filled output
/// share the same vertices; fill mode only closes the path.
#[must_use]
pub fn build_series_path(display: &[ScreenPoint], filled: bool) -> Option<SeriesPath> {
    if display.is_empty() {
        return None;
    }

    Some(SeriesPath {
        vertices: display.to_vec(),
        filled,
    })
}
