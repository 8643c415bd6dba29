use crate::core::Viewport;
use crate::error::PlotResult;
use crate::interaction::{InputListener, InteractiveRegion};
use crate::render::{RenderFrame, Renderer};

/// Shared surface of every widget built on an [`InteractiveRegion`].
///
/// Hosts drive widgets once per frame: dispatch input through the
/// [`InputBus`](crate::interaction::InputBus), call [`update`], then
/// [`draw`] into a frame handed to a [`Renderer`].
///
/// [`update`]: InteractiveWidget::update
/// [`draw`]: InteractiveWidget::draw
pub trait InteractiveWidget: InputListener {
    fn region(&self) -> &InteractiveRegion;

    fn region_mut(&mut self) -> &mut InteractiveRegion;

    /// Per-frame state pass. Never fails.
    fn update(&mut self) {}

    /// Appends this widget's primitives to `frame`.
    fn draw(&mut self, frame: &mut RenderFrame);

    fn set_viewport_position(&mut self, x: f64, y: f64) -> PlotResult<()> {
        self.region_mut().set_position(x, y)
    }

    fn set_viewport_size(&mut self, width: f64, height: f64) -> PlotResult<()> {
        self.region_mut().set_size(width, height)
    }

    fn enable_mouse_input(&mut self) {
        self.region_mut().enable_mouse_input();
    }

    fn disable_mouse_input(&mut self) {
        self.region_mut().disable_mouse_input();
    }

    fn enable_key_input(&mut self) {
        self.region_mut().enable_key_input();
    }

    fn disable_key_input(&mut self) {
        self.region_mut().disable_key_input();
    }

    /// Runs `update`, draws into a fresh frame and hands it to `renderer`.
    fn render_with<R: Renderer>(&mut self, surface: Viewport, renderer: &mut R) -> PlotResult<()>
    where
        Self: Sized,
    {
        self.update();
        let mut frame = RenderFrame::new(surface);
        self.draw(&mut frame);
        renderer.render(&frame)
    }
}
