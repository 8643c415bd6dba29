use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Rect, ScreenPoint};
use crate::interaction::{InputEvent, InteractiveRegion};
use crate::render::{PathPrimitive, RenderFrame, ShapeStyle};

use super::HandleStyle;

/// Which end of the range a handle limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleSide {
    Lower,
    Upper,
}

/// Axis a handle slides along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SliderAxis {
    #[default]
    Horizontal,
    Vertical,
}

/// One triangular range-limiter handle.
///
/// The triangle points into the active range: a lower handle points toward
/// larger coordinates, an upper handle toward smaller ones. The handle's
/// coordinate is the triangle tip along the motion axis.
#[derive(Debug)]
pub struct LimiterHandle {
    region: InteractiveRegion,
    side: HandleSide,
    axis: SliderAxis,
    tip: f64,
    cross: f64,
    bounds: (f64, f64),
    style: HandleStyle,
}

impl LimiterHandle {
    #[must_use]
    pub fn new(side: HandleSide, axis: SliderAxis, style: HandleStyle) -> Self {
        let mut handle = Self {
            region: InteractiveRegion::embedded(),
            side,
            axis,
            tip: 0.0,
            cross: 0.0,
            bounds: (f64::NEG_INFINITY, f64::INFINITY),
            style,
        };
        handle.reshape();
        handle
    }

    #[must_use]
    pub fn side(&self) -> HandleSide {
        self.side
    }

    #[must_use]
    pub fn axis(&self) -> SliderAxis {
        self.axis
    }

    #[must_use]
    pub fn region(&self) -> &InteractiveRegion {
        &self.region
    }

    /// Triangle bounding box. Its extent along the motion axis is negative
    /// for upper handles.
    #[must_use]
    pub fn shape(&self) -> Rect {
        self.region.viewport()
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.region.is_hovered()
    }

    #[must_use]
    pub fn style(&self) -> HandleStyle {
        self.style
    }

    pub fn set_style(&mut self, style: HandleStyle) {
        self.style = style;
        self.reshape();
    }

    /// Tip position along the motion axis.
    #[must_use]
    pub fn coordinate(&self) -> f64 {
        self.tip
    }

    /// Places the tip at `coordinate`. No clamping happens here.
    pub fn move_to(&mut self, coordinate: f64) {
        self.tip = coordinate;
        self.reshape();
    }

    /// Positions the handle across its motion axis (top edge for horizontal
    /// handles, left edge for vertical ones).
    pub fn set_cross_position(&mut self, position: f64) {
        self.cross = position;
        self.reshape();
    }

    /// Allowed tip interval for drags.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        self.bounds
    }

    pub fn set_bounds(&mut self, min: f64, max: f64) {
        self.bounds = (min, max);
    }

    /// Rebuilds the triangle box from tip, cross position and size.
    ///
    /// The depth along the motion axis is `sqrt(3)/2 * size`, signed so the
    /// box extends away from the active range.
    fn reshape(&mut self) {
        let size = self.style.size;
        let depth = match self.side {
            HandleSide::Lower => 0.5 * 3f64.sqrt() * size,
            HandleSide::Upper => -0.5 * 3f64.sqrt() * size,
        };
        *self.region.viewport_mut() = match self.axis {
            SliderAxis::Horizontal => Rect::new(self.tip - depth, self.cross, depth, size),
            SliderAxis::Vertical => Rect::new(self.cross, self.tip - depth, size, depth),
        };
    }

    /// Forwards `event` to the handle region and moves the tip on drags that
    /// started on the handle and stay inside the bounds.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.region.handle_input(event) {
            return false;
        }

        if let InputEvent::MouseDragged { x, y, .. } = *event {
            if !self.region.is_pressed_inside() {
                return true;
            }
            let proposed = match self.axis {
                SliderAxis::Horizontal => x,
                SliderAxis::Vertical => y,
            };
            let (min, max) = self.bounds;
            if proposed >= min && proposed <= max {
                self.move_to(proposed);
                trace!(side = ?self.side, coordinate = proposed, "handle dragged");
            }
        }
        true
    }

    #[must_use]
    pub fn vertices(&self) -> [ScreenPoint; 3] {
        let s = self.shape();
        match self.axis {
            SliderAxis::Horizontal => [
                ScreenPoint::new(s.x, s.y),
                ScreenPoint::new(s.x, s.y + s.height),
                ScreenPoint::new(s.x + s.width, s.y + 0.5 * s.height),
            ],
            SliderAxis::Vertical => [
                ScreenPoint::new(s.x, s.y),
                ScreenPoint::new(s.x + s.width, s.y),
                ScreenPoint::new(s.x + 0.5 * s.width, s.y + s.height),
            ],
        }
    }

    /// Filled triangle (hover color while hovered) with an outline.
    pub fn draw(&self, frame: &mut RenderFrame) {
        let vertices = self.vertices().to_vec();
        let fill = if self.is_hovered() {
            self.style.hover_fill
        } else {
            self.style.fill
        };
        frame.push_path(PathPrimitive {
            vertices: vertices.clone(),
            closed: true,
            color: fill,
            style: ShapeStyle::Fill,
        });
        frame.push_path(PathPrimitive {
            vertices,
            closed: true,
            color: self.style.edge,
            style: ShapeStyle::Stroke { width: 1.0 },
        });
    }
}
