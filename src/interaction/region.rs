use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Rect, ScreenPoint};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{InputBus, InputClass, InputEvent, KeyCode, WidgetId};
use crate::render::{Color, RectPrimitive, RenderFrame};

/// Viewport assigned to freshly created widgets.
pub const DEFAULT_VIEWPORT: Rect = Rect::new(0.0, 0.0, 350.0, 350.0);

/// Background and hover-outline colors shared by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionStyle {
    pub background: Color,
    pub edge: Color,
    pub edge_width: f64,
}

impl Default for RegionStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba8(50, 50, 50, 0.85),
            edge: Color::rgba8(200, 200, 200, 0.95),
            edge_width: 1.0,
        }
    }
}

/// Pointer/keyboard state of one rectangular widget.
///
/// Widgets compose this struct and run their own logic after
/// [`InteractiveRegion::handle_input`] accepted an event. A region attached
/// to an [`InputBus`] subscribes per input class and unsubscribes on drop;
/// an embedded region receives events forwarded by its owning widget.
#[derive(Debug)]
pub struct InteractiveRegion {
    bus: Option<(InputBus, WidgetId)>,
    viewport: Rect,
    style: RegionStyle,
    mouse_enabled: bool,
    key_enabled: bool,
    hovered: bool,
    pressed_inside: bool,
    dragging: bool,
    held_key: Option<KeyCode>,
    cursor: ScreenPoint,
    press_point: ScreenPoint,
}

impl InteractiveRegion {
    /// Creates a region subscribed to mouse and keyboard input on `bus`.
    #[must_use]
    pub fn attached(bus: &InputBus) -> Self {
        Self::attached_as(bus, bus.register_widget())
    }

    /// Like [`InteractiveRegion::attached`] for a slot the owner already
    /// registered on `bus`.
    #[must_use]
    pub fn attached_as(bus: &InputBus, id: WidgetId) -> Self {
        let mut region = Self::with_bus(Some((bus.clone(), id)));
        region.enable_mouse_input();
        region.enable_key_input();
        region
    }

    /// Creates a region that only sees events forwarded by its owner.
    #[must_use]
    pub fn embedded() -> Self {
        let mut region = Self::with_bus(None);
        region.mouse_enabled = true;
        region.key_enabled = true;
        region
    }

    fn with_bus(bus: Option<(InputBus, WidgetId)>) -> Self {
        Self {
            bus,
            viewport: DEFAULT_VIEWPORT,
            style: RegionStyle::default(),
            mouse_enabled: false,
            key_enabled: false,
            hovered: false,
            pressed_inside: false,
            dragging: false,
            held_key: None,
            cursor: ScreenPoint::default(),
            press_point: ScreenPoint::default(),
        }
    }

    /// Bus slot, `None` for embedded regions.
    #[must_use]
    pub fn widget_id(&self) -> Option<WidgetId> {
        self.bus.as_ref().map(|(_, id)| *id)
    }

    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub(crate) fn viewport_mut(&mut self) -> &mut Rect {
        &mut self.viewport
    }

    pub fn set_position(&mut self, x: f64, y: f64) -> PlotResult<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(PlotError::InvalidData(
                "viewport position must be finite".to_owned(),
            ));
        }
        self.viewport.set_position(x, y);
        Ok(())
    }

    pub fn set_size(&mut self, width: f64, height: f64) -> PlotResult<()> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(PlotError::InvalidViewport { width, height });
        }
        self.viewport.set_size(width, height);
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> RegionStyle {
        self.style
    }

    pub fn set_style(&mut self, style: RegionStyle) -> PlotResult<()> {
        style.background.validate()?;
        style.edge.validate()?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_pressed_inside(&self) -> bool {
        self.pressed_inside
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn held_key(&self) -> Option<KeyCode> {
        self.held_key
    }

    #[must_use]
    pub fn cursor(&self) -> ScreenPoint {
        self.cursor
    }

    #[must_use]
    pub fn press_point(&self) -> ScreenPoint {
        self.press_point
    }

    #[must_use]
    pub fn is_input_enabled(&self, class: InputClass) -> bool {
        match class {
            InputClass::Mouse => self.mouse_enabled,
            InputClass::Keyboard => self.key_enabled,
        }
    }

    pub fn enable_mouse_input(&mut self) {
        self.set_input_enabled(InputClass::Mouse, true);
    }

    pub fn disable_mouse_input(&mut self) {
        self.set_input_enabled(InputClass::Mouse, false);
    }

    pub fn enable_key_input(&mut self) {
        self.set_input_enabled(InputClass::Keyboard, true);
    }

    pub fn disable_key_input(&mut self) {
        self.set_input_enabled(InputClass::Keyboard, false);
    }

    /// Toggles an input class. Subscriptions change only on an actual
    /// transition, so repeated calls are no-ops.
    pub fn set_input_enabled(&mut self, class: InputClass, enabled: bool) {
        if self.is_input_enabled(class) == enabled {
            return;
        }
        if let Some((bus, id)) = &self.bus {
            for kind in class.kinds() {
                if enabled {
                    bus.add_listener(*kind, *id);
                } else {
                    bus.remove_listener(*kind, *id);
                }
            }
        }
        match class {
            InputClass::Mouse => self.mouse_enabled = enabled,
            InputClass::Keyboard => self.key_enabled = enabled,
        }
        trace!(?class, enabled, "input class toggled");
    }

    /// Applies the base state machine for `event`.
    ///
    /// Returns `false`, leaving all state untouched, when the event's input
    /// class is disabled.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.is_input_enabled(event.kind().class()) {
            return false;
        }

        match *event {
            InputEvent::MouseMoved { x, y } => {
                self.cursor = ScreenPoint::new(x, y);
                self.hovered = self.viewport.contains(self.cursor);
            }
            InputEvent::MousePressed { x, y, .. } => {
                let point = ScreenPoint::new(x, y);
                if self.viewport.contains(point) {
                    self.press_point = point;
                    self.pressed_inside = true;
                }
            }
            InputEvent::MouseReleased { .. } => {
                self.pressed_inside = false;
                self.dragging = false;
            }
            InputEvent::MouseDragged { .. } => {
                self.dragging = true;
            }
            InputEvent::KeyPressed { key } => {
                self.held_key = Some(key);
            }
            InputEvent::KeyReleased { .. } => {
                self.held_key = None;
            }
        }
        true
    }

    /// Background fill plus an outline while hovered.
    pub fn draw_background(&self, frame: &mut RenderFrame) {
        frame.push_rect(RectPrimitive::filled(self.viewport, self.style.background));
        if self.hovered {
            frame.push_rect(RectPrimitive::stroked(
                self.viewport,
                self.style.edge_width,
                self.style.edge,
            ));
        }
    }
}

impl Drop for InteractiveRegion {
    fn drop(&mut self) {
        if let Some((bus, id)) = &self.bus {
            bus.remove_widget(*id);
        }
    }
}
