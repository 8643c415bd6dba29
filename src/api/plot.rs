use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::core::{AxisTransform, DataPoint, Rect, ScreenPoint, Series, points_in_window};
use crate::error::PlotResult;
use crate::interaction::{
    InputBus, InputEvent, InputListener, InteractiveRegion, SelectionBus, SelectionEvent,
    SelectionSet, SelectionSubscription, SharedHighlight, WidgetId,
};
use crate::render::{Color, RenderFrame};

use super::validation::{validate_non_negative, validate_positive};
use super::{InteractiveWidget, PlotStyle};

/// Title and axis captions of a plot. Empty strings are not drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

/// Interactive line plot of one series.
///
/// The plot owns its data, projects it into the padded viewport on every
/// draw, and publishes hover and marquee selections on its
/// [`SelectionBus`]. It listens on the same bus and highlights whatever the
/// latest event selected, no matter which widget emitted it.
#[derive(Debug)]
pub struct PlotWidget {
    id: WidgetId,
    pub(super) region: InteractiveRegion,
    pub(super) selection_bus: SelectionBus,
    pub(super) highlight: SharedHighlight,
    _selection: SelectionSubscription,
    pub(super) series: Series,
    pub(super) display: Vec<ScreenPoint>,
    pub(super) transform: Option<AxisTransform>,
    pub(super) marquee: Rect,
    labels: PlotLabels,
    pub(super) style: PlotStyle,
}

impl PlotWidget {
    /// Creates a plot with the default viewport and style, subscribed to
    /// mouse and keyboard input on `input_bus`.
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

        let style = PlotStyle::default();
        let mut plot = Self {
            id,
            region,
            selection_bus: selection_bus.clone(),
            highlight,
            _selection: subscription,
            series: Series::new(),
            display: Vec::new(),
            transform: None,
            marquee: Rect::default(),
            labels: PlotLabels::default(),
            style,
        };
        plot.apply_region_style();
        plot
    }

    #[must_use]
    pub fn selection_bus(&self) -> &SelectionBus {
        &self.selection_bus
    }

    pub fn add_data_point(&mut self, x: f64, y: f64) -> PlotResult<()> {
        self.add_point(DataPoint::new(x, y))
    }

    pub fn add_point(&mut self, point: DataPoint) -> PlotResult<()> {
        self.series.push(point)
    }

    /// Appends a sample keyed by wall-clock time (unix seconds on the
    /// independent axis).
    pub fn add_data_point_decimal_time(
        &mut self,
        time: DateTime<Utc>,
        value: Decimal,
    ) -> PlotResult<()> {
        self.add_point(DataPoint::from_decimal_time(time, value)?)
    }

    /// Drops every data point together with the derived display points.
    ///
    /// The highlight is cleared through the selection bus so every widget
    /// mirroring it drops the stale indices too.
    pub fn clear_data(&mut self) {
        debug!(points = self.series.len(), "clearing plot data");
        self.series.clear();
        self.display.clear();
        self.transform = None;
        self.selection_bus.emit(SelectionEvent::Deselected(SelectionSet::new()));
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn data_points(&self) -> &[DataPoint] {
        self.series.points()
    }

    /// Data points whose independent value lies in `[start, end]`, typically
    /// the bounds driven by a [`PlotRangeControl`](super::PlotRangeControl).
    #[must_use]
    pub fn points_in_range(&self, start: f64, end: f64) -> Vec<DataPoint> {
        points_in_window(self.series.points(), start, end)
    }

    /// Pixel positions computed by the latest draw, index-aligned with the
    /// series.
    #[must_use]
    pub fn display_points(&self) -> &[ScreenPoint] {
        &self.display
    }

    /// Transform used by the latest draw.
    #[must_use]
    pub fn transform(&self) -> Option<AxisTransform> {
        self.transform
    }

    /// Maps a pixel back into data space using the latest draw's transform.
    #[must_use]
    pub fn pixel_to_data(&self, point: ScreenPoint) -> Option<DataPoint> {
        self.transform?.screen_to_data(point)
    }

    /// Viewport minus the padding on every side.
    #[must_use]
    pub fn plot_rect(&self) -> Rect {
        self.region
            .viewport()
            .inset(self.style.padding, self.style.padding)
    }

    #[must_use]
    pub fn labels(&self) -> &PlotLabels {
        &self.labels
    }

    pub fn set_labels(
        &mut self,
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) {
        self.labels = PlotLabels {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
        };
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.labels.title = title.into();
    }

    pub fn set_x_label(&mut self, label: impl Into<String>) {
        self.labels.x_label = label.into();
    }

    pub fn set_y_label(&mut self, label: impl Into<String>) {
        self.labels.y_label = label.into();
    }

    #[must_use]
    pub fn style(&self) -> PlotStyle {
        self.style
    }

    pub fn set_style(&mut self, style: PlotStyle) -> PlotResult<()> {
        style.validate()?;
        self.style = style;
        self.apply_region_style();
        Ok(())
    }

    fn apply_region_style(&mut self) {
        // Already validated as part of the plot style.
        if let Err(err) = self.region.set_style(self.style.region) {
            debug!(%err, "region style rejected");
        }
    }

    fn update_style(&mut self, edit: impl FnOnce(&mut PlotStyle)) -> PlotResult<()> {
        let mut next = self.style;
        edit(&mut next);
        self.set_style(next)
    }

    pub fn set_background_color(&mut self, color: Color) -> PlotResult<()> {
        self.update_style(|style| style.region.background = color)
    }

    pub fn set_line_color(&mut self, color: Color) -> PlotResult<()> {
        self.update_style(|style| style.line_color = color)
    }

    pub fn set_fill_color(&mut self, color: Color) -> PlotResult<()> {
        self.update_style(|style| style.fill_color = color)
    }

    pub fn set_axes_color(&mut self, color: Color) -> PlotResult<()> {
        self.update_style(|style| style.axes_color = color)
    }

    pub fn set_text_color(&mut self, color: Color) -> PlotResult<()> {
        self.update_style(|style| style.text_color = color)
    }

    pub fn set_highlight_color(&mut self, color: Color) -> PlotResult<()> {
        self.update_style(|style| style.highlight_color = color)
    }

    pub fn set_line_width(&mut self, width: f64) -> PlotResult<()> {
        validate_positive(width, "line width")?;
        self.update_style(|style| style.line_width = width)
    }

    pub fn set_padding(&mut self, padding: f64) -> PlotResult<()> {
        validate_non_negative(padding, "padding")?;
        self.update_style(|style| style.padding = padding)
    }

    pub fn set_max_select_distance(&mut self, distance: f64) -> PlotResult<()> {
        validate_non_negative(distance, "max select distance")?;
        self.update_style(|style| style.max_select_distance = distance)
    }

    pub fn set_select_key(&mut self, key: char) {
        self.style.select_key = key;
    }

    /// Switches between a stroked line and a closed filled shape.
    pub fn set_fill(&mut self, fill: bool) {
        self.style.fill = fill;
    }

    /// Replaces the highlighted indices. Indices past the end of the series
    /// are kept but not drawn.
    pub fn set_highlighted_indices(&mut self, indices: impl IntoIterator<Item = usize>) {
        let indices: SelectionSet = indices.into_iter().collect();
        trace!(count = indices.len(), "highlight replaced");
        self.highlight.replace(indices);
    }

    #[must_use]
    pub fn highlighted_indices(&self) -> SelectionSet {
        self.highlight.snapshot()
    }

    /// Current marquee rectangle, `None` when no drag selection is active.
    #[must_use]
    pub fn selection_rect(&self) -> Option<Rect> {
        (!self.marquee.is_zero()).then_some(self.marquee)
    }
}

impl InputListener for PlotWidget {
    fn listener_id(&self) -> WidgetId {
        self.id
    }

    fn on_input(&mut self, event: &InputEvent) {
        self.handle_input(event);
    }
}

impl InteractiveWidget for PlotWidget {
    fn region(&self) -> &InteractiveRegion {
        &self.region
    }

    fn region_mut(&mut self) -> &mut InteractiveRegion {
        &mut self.region
    }

    fn draw(&mut self, frame: &mut RenderFrame) {
        self.draw_scene(frame);
    }
}
