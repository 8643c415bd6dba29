use tracing::trace;

use crate::core::{Rect, ScreenPoint};
use crate::interaction::{
    InputEvent, SelectionEvent, hover_selection, marquee_rect, points_in_rect,
};

use super::PlotWidget;

impl PlotWidget {
    /// Runs the region state machine, then the selection gestures.
    ///
    /// Returns `false` when the event's input class is disabled.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.region.handle_input(event) {
            return false;
        }

        match *event {
            InputEvent::MouseMoved { .. } => self.hover_select(),
            InputEvent::MouseDragged { x, y, .. } => self.marquee_select(ScreenPoint::new(x, y)),
            InputEvent::MouseReleased { .. } => self.marquee = Rect::default(),
            _ => {}
        }
        true
    }

    fn select_key_held(&self) -> bool {
        self.region.held_key() == Some(self.style.select_key_code())
    }

    fn hover_select(&self) {
        if !self.region.is_hovered() || self.region.is_dragging() || !self.select_key_held() {
            return;
        }
        let event = hover_selection(
            &self.display,
            self.region.cursor(),
            self.style.max_select_distance,
        );
        self.selection_bus.emit(event);
    }

    fn marquee_select(&mut self, pointer: ScreenPoint) {
        if !self.region.is_pressed_inside() || !self.select_key_held() {
            return;
        }
        self.marquee = marquee_rect(self.region.press_point(), pointer, self.region.viewport());

        let indices = points_in_rect(&self.display, self.marquee);
        trace!(
            rect = ?self.marquee,
            hits = indices.len(),
            "marquee updated"
        );
        if !indices.is_empty() {
            self.selection_bus.emit(SelectionEvent::Selected(indices));
        }
    }
}
