use tracing::{debug, trace};

use crate::core::{Rect, ScreenPoint, indices_in_window};
use crate::error::PlotResult;
use crate::interaction::{
    InputBus, InputEvent, InputListener, InteractiveRegion, SelectionBus, SelectionEvent,
    SelectionSet, SelectionSubscription, SharedBound, SharedHighlight, WidgetId,
};
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, ShapeStyle};

use super::validation::validate_finite;
use super::{HandleSide, InteractiveWidget, LimiterHandle, RangeControlStyle, SliderAxis};

/// Timeline with two limiter handles trimming the independent axis.
///
/// Each handle can be linked to a [`SharedBound`]. Once per
/// [`update`](PlotRangeControl::update) the link is resolved in one
/// direction: a hovered handle writes its position into the bound, any
/// other handle is moved to wherever the bound says. Without links, or
/// without at least two distinct data values, the handles act as a plain
/// slider pair.
///
/// The control also mirrors the highlight set published on the
/// [`SelectionBus`] as small markers along the timeline.
#[derive(Debug)]
pub struct PlotRangeControl {
    id: WidgetId,
    region: InteractiveRegion,
    highlight: SharedHighlight,
    _selection: SelectionSubscription,
    values: Vec<f64>,
    lower: LimiterHandle,
    upper: LimiterHandle,
    lower_link: Option<SharedBound>,
    upper_link: Option<SharedBound>,
    scale: f64,
    timeline: Rect,
    style: RangeControlStyle,
    placed: bool,
}

impl PlotRangeControl {
    #[must_use]
    pub fn new(input_bus: &InputBus, selection_bus: &SelectionBus) -> Self {
        let id = input_bus.register_widget();
        let region = InteractiveRegion::attached_as(input_bus, id);

        let highlight = SharedHighlight::new();
        let mirror = highlight.clone();
        let subscription = selection_bus.subscribe_scoped(move |event| match event {
            SelectionEvent::Selected(indices) => mirror.replace(indices.clone()),
            SelectionEvent::Deselected(_) => mirror.clear(),
        });

        let style = RangeControlStyle::default();
        let mut control = Self {
            id,
            region,
            highlight,
            _selection: subscription,
            values: Vec::new(),
            lower: LimiterHandle::new(HandleSide::Lower, SliderAxis::Horizontal, style.handle),
            upper: LimiterHandle::new(HandleSide::Upper, SliderAxis::Horizontal, style.handle),
            lower_link: None,
            upper_link: None,
            scale: 0.0,
            timeline: Rect::default(),
            style,
            placed: false,
        };
        if let Err(err) = control.region.set_style(style.region) {
            debug!(%err, "default region style rejected");
        }
        control
    }

    pub fn add_data_point(&mut self, value: f64) -> PlotResult<()> {
        validate_finite(value, "range control value")?;
        self.values.push(value);
        Ok(())
    }

    /// Replaces the independent values. Nothing changes if any value is not
    /// finite.
    pub fn set_data(&mut self, values: impl IntoIterator<Item = f64>) -> PlotResult<()> {
        let values: Vec<f64> = values.into_iter().collect();
        for value in &values {
            validate_finite(*value, "range control value")?;
        }
        debug!(count = values.len(), "range control data replaced");
        self.values = values;
        Ok(())
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Links both handles to externally owned bounds.
    pub fn link_bounds(&mut self, lower: SharedBound, upper: SharedBound) {
        self.lower_link = Some(lower);
        self.upper_link = Some(upper);
    }

    pub fn link_lower(&mut self, bound: SharedBound) {
        self.lower_link = Some(bound);
    }

    pub fn link_upper(&mut self, bound: SharedBound) {
        self.upper_link = Some(bound);
    }

    /// Drops both links; the handles keep their current positions.
    pub fn unlink(&mut self) {
        self.lower_link = None;
        self.upper_link = None;
        self.placed = true;
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.lower_link.is_some() && self.upper_link.is_some()
    }

    #[must_use]
    pub fn lower_handle(&self) -> &LimiterHandle {
        &self.lower
    }

    #[must_use]
    pub fn upper_handle(&self) -> &LimiterHandle {
        &self.upper
    }

    /// Timeline rectangle from the latest update.
    #[must_use]
    pub fn timeline(&self) -> Rect {
        self.timeline
    }

    /// Pixels per independent unit from the latest update, `0` when the data
    /// has no span.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn style(&self) -> RangeControlStyle {
        self.style
    }

    pub fn set_style(&mut self, style: RangeControlStyle) -> PlotResult<()> {
        style.validate()?;
        self.region.set_style(style.region)?;
        self.lower.set_style(style.handle);
        self.upper.set_style(style.handle);
        self.style = style;
        Ok(())
    }

    pub fn set_highlighted_indices(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.highlight.replace(indices.into_iter().collect());
    }

    #[must_use]
    pub fn highlighted_indices(&self) -> SelectionSet {
        self.highlight.snapshot()
    }

    fn domain_start(&self) -> Option<f64> {
        match (self.values.first(), self.values.last()) {
            (Some(first), Some(last)) if self.values.len() > 1 && first != last => Some(*first),
            _ => None,
        }
    }

    /// Independent value under a timeline coordinate.
    #[must_use]
    pub fn value_at(&self, coordinate: f64) -> Option<f64> {
        let first = self.domain_start()?;
        (self.scale > 0.0).then(|| (coordinate - self.timeline.x) / self.scale + first)
    }

    /// Timeline coordinate of an independent value.
    #[must_use]
    pub fn coordinate_of(&self, value: f64) -> Option<f64> {
        let first = self.domain_start()?;
        Some((value - first) * self.scale + self.timeline.x)
    }

    #[must_use]
    pub fn lower_value(&self) -> Option<f64> {
        match &self.lower_link {
            Some(link) => Some(link.get()),
            None => self.value_at(self.lower.coordinate()),
        }
    }

    #[must_use]
    pub fn upper_value(&self) -> Option<f64> {
        match &self.upper_link {
            Some(link) => Some(link.get()),
            None => self.value_at(self.upper.coordinate()),
        }
    }

    /// Indices of the values inside the current range, in data order.
    #[must_use]
    pub fn active_indices(&self) -> Vec<usize> {
        match (self.lower_value(), self.upper_value()) {
            (Some(lower), Some(upper)) => indices_in_window(&self.values, lower, upper),
            _ => Vec::new(),
        }
    }

    /// Per-frame layout and two-way binding pass.
    pub fn update(&mut self) {
        self.timeline = self
            .region
            .viewport()
            .inset(self.style.inset_x, self.style.inset_y);
        let timeline = self.timeline;
        let right = timeline.x + timeline.width;

        let first = self.domain_start();
        self.scale = match (first, self.values.last()) {
            (Some(first), Some(last)) => (timeline.width / (last - first)).abs(),
            _ => 0.0,
        };

        let links = self.lower_link.clone().zip(self.upper_link.clone());
        match (first, links) {
            (Some(first), Some((lower_link, upper_link))) if self.scale > 0.0 => {
                let scale = self.scale;
                sync_handle(&mut self.lower, &lower_link, first, scale, timeline.x);
                sync_handle(&mut self.upper, &upper_link, first, scale, timeline.x);
            }
            _ if !self.placed => {
                trace!("range control unbound; parking handles at the timeline ends");
                self.lower.move_to(timeline.x);
                self.upper.move_to(right);
                self.placed = true;
            }
            _ => {
                // Keep free handles on the timeline when it shrinks.
                for handle in [&mut self.lower, &mut self.upper] {
                    if !handle.is_hovered() {
                        let clamped = handle.coordinate().clamp(timeline.x, right.max(timeline.x));
                        handle.move_to(clamped);
                    }
                }
            }
        }

        let bottom = timeline.y + timeline.height;
        for handle in [&mut self.lower, &mut self.upper] {
            if !handle.is_hovered() {
                handle.set_cross_position(bottom);
            }
        }

        self.enforce_order();

        let lower = self.lower.coordinate();
        let upper = self.upper.coordinate();
        self.lower.set_bounds(timeline.x, upper);
        self.upper.set_bounds(lower, right);
    }

    fn enforce_order(&mut self) {
        let lower = self.lower.coordinate();
        let upper = self.upper.coordinate();
        if lower <= upper {
            return;
        }
        if self.upper.is_hovered() && !self.lower.is_hovered() {
            self.lower.move_to(upper);
        } else {
            self.upper.move_to(lower);
        }
        debug!(lower, upper, "crossed handles snapped together");
    }

    /// Forwards `event` to the control region and then to both handles.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.region.handle_input(event) {
            return false;
        }
        self.lower.handle_input(event);
        self.upper.handle_input(event);
        true
    }

    pub fn draw_scene(&self, frame: &mut RenderFrame) {
        self.region.draw_background(frame);

        let timeline = self.timeline;
        let top = timeline.y;
        let bottom = timeline.y + timeline.height;
        let right = timeline.x + timeline.width;
        let edge = self.region.style().edge;

        if self.scale > 0.0 {
            let center_y = timeline.center().y;
            for index in self.highlight.snapshot().iter() {
                let Some(x) = self
                    .values
                    .get(index)
                    .and_then(|value| self.coordinate_of(*value))
                else {
                    continue;
                };
                frame.push_circle(CirclePrimitive::new(
                    ScreenPoint::new(x, center_y),
                    self.style.highlight_radius,
                    self.style.highlight_color,
                    ShapeStyle::Fill,
                ));
            }
        }

        let lower = self.lower.coordinate();
        let upper = self.upper.coordinate();
        let inactive = [
            Rect::new(timeline.x, top, lower - timeline.x, timeline.height),
            Rect::new(upper, top, right - upper, timeline.height),
        ];
        for area in inactive {
            if area.width > 0.0 {
                frame.push_rect(RectPrimitive::filled(area, self.style.inactive_color));
            }
        }

        frame.push_rect(RectPrimitive::stroked(
            timeline,
            self.style.region.edge_width,
            edge,
        ));
        for x in [lower, upper] {
            frame.push_line(LinePrimitive::new(
                x,
                top,
                x,
                bottom,
                self.style.marker_line_width,
                edge,
            ));
        }

        self.lower.draw(frame);
        self.upper.draw(frame);
    }
}

/// Resolves one handle/bound pair for this tick.
fn sync_handle(handle: &mut LimiterHandle, link: &SharedBound, first: f64, scale: f64, origin: f64) {
    if handle.is_hovered() {
        let value = (handle.coordinate() - origin) / scale + first;
        link.set(value);
        trace!(side = ?handle.side(), value, "handle wrote bound");
        return;
    }

    let value = link.get();
    if !value.is_finite() {
        debug!(side = ?handle.side(), "linked bound is not finite; handle left in place");
        return;
    }
    handle.move_to((value - first) * scale + origin);
}

impl InputListener for PlotRangeControl {
    fn listener_id(&self) -> WidgetId {
        self.id
    }

    fn on_input(&mut self, event: &InputEvent) {
        self.handle_input(event);
    }
}

impl InteractiveWidget for PlotRangeControl {
    fn region(&self) -> &InteractiveRegion {
        &self.region
    }

    fn region_mut(&mut self) -> &mut InteractiveRegion {
        &mut self.region
    }

    fn update(&mut self) {
        PlotRangeControl::update(self);
    }

    fn draw(&mut self, frame: &mut RenderFrame) {
        self.draw_scene(frame);
    }
}
