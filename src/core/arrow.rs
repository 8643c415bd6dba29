use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;

/// Geometry of one axis arrow: a stem plus a triangular head at `tip`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisArrow {
    pub stem_start: ScreenPoint,
    pub stem_end: ScreenPoint,
    /// Triangle vertices: tip first, then the two back corners.
    pub head: [ScreenPoint; 3],
}

/// Builds an arrow from `origin` to `tip`.
///
/// `head_size` is the head length measured along the stem and `spread` the
/// half-angle of the head in radians. The stem stops inside the head so wide
/// strokes do not poke through the tip.
#[must_use]
pub fn axis_arrow(origin: ScreenPoint, tip: ScreenPoint, head_size: f64, spread: f64) -> AxisArrow {
    let angle = (tip.y - origin.y).atan2(tip.x - origin.x);
    let side = head_size / spread.cos();
    let back = std::f64::consts::PI + angle;

    let corner_a = ScreenPoint::new(
        tip.x + side * (back - spread).cos(),
        tip.y + side * (back - spread).sin(),
    );
    let corner_b = ScreenPoint::new(
        tip.x + side * (back + spread).cos(),
        tip.y + side * (back + spread).sin(),
    );
    let stem_end = ScreenPoint::new(
        tip.x - 0.75 * side * angle.cos(),
        tip.y - 0.75 * side * angle.sin(),
    );

    AxisArrow {
        stem_start: origin,
        stem_end,
        head: [tip, corner_a, corner_b],
    }
}
