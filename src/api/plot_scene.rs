use tracing::debug;

use crate::core::{
    AxisTransform, DataExtents, Rect, ScreenPoint, axis_arrow, build_series_path, project_points,
};
use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, ShapeStyle,
    TextHAlign, TextPrimitive,
};

use super::PlotWidget;

// Baseline offset of captions from the edge they hang off.
const LABEL_GAP: f64 = 5.0;

impl PlotWidget {
    /// Recomputes the transform and display points for the current viewport.
    ///
    /// An empty series maps through unit extents so the axes still have a
    /// place to go.
    pub(super) fn project(&mut self) -> AxisTransform {
        let plot_rect = self.plot_rect();
        let transform = if self.series.is_empty() {
            AxisTransform::from_extents(DataExtents::UNIT, plot_rect)
        } else {
            match AxisTransform::fit(self.series.points(), plot_rect) {
                Ok(transform) => transform,
                Err(err) => {
                    debug!(%err, "plot rect rejected, falling back to unit extents");
                    AxisTransform::from_extents(DataExtents::UNIT, plot_rect)
                }
            }
        };

        self.display = project_points(self.series.points(), &transform);
        self.transform = Some(transform);
        transform
    }

    /// Draws the plot into `frame` and refreshes the display points.
    pub fn draw_scene(&mut self, frame: &mut RenderFrame) {
        self.region.draw_background(frame);

        let transform = self.project();
        let plot_rect = transform.plot_rect();

        self.draw_axes(frame, plot_rect, transform.origin());
        self.draw_labels(frame, plot_rect);
        self.draw_series(frame);
        self.draw_highlights(frame, plot_rect);

        if let Some(marquee) = self.selection_rect() {
            frame.push_rect(RectPrimitive::stroked(marquee, 1.0, self.style.axes_color));
        }
    }

    fn draw_axes(&self, frame: &mut RenderFrame, plot_rect: Rect, origin: ScreenPoint) {
        let bottom = plot_rect.y + plot_rect.height;
        let right = plot_rect.x + plot_rect.width;
        let axes = [
            (
                ScreenPoint::new(plot_rect.x, origin.y),
                ScreenPoint::new(right, origin.y),
            ),
            (
                ScreenPoint::new(origin.x, bottom),
                ScreenPoint::new(origin.x, plot_rect.y),
            ),
        ];

        for (start, tip) in axes {
            let arrow = axis_arrow(start, tip, self.style.arrow_size, self.style.arrow_spread);
            frame.push_line(LinePrimitive::between(
                arrow.stem_start,
                arrow.stem_end,
                self.style.axes_width,
                self.style.axes_color,
            ));
            frame.push_path(PathPrimitive {
                vertices: arrow.head.to_vec(),
                closed: true,
                color: self.style.axes_color,
                style: ShapeStyle::Fill,
            });
        }
    }

    fn draw_labels(&self, frame: &mut RenderFrame, plot_rect: Rect) {
        let viewport = self.region.viewport();
        let center = plot_rect.center();
        let labels = self.labels();
        let font = self.style.font_size_px;
        let color = self.style.text_color;

        if !labels.title.is_empty() {
            frame.push_text(TextPrimitive::new(
                labels.title.clone(),
                center.x,
                viewport.y + self.style.padding - LABEL_GAP,
                font,
                color,
                TextHAlign::Center,
            ));
        }
        if !labels.x_label.is_empty() {
            frame.push_text(TextPrimitive::new(
                labels.x_label.clone(),
                center.x,
                viewport.y + viewport.height - LABEL_GAP,
                font,
                color,
                TextHAlign::Center,
            ));
        }
        if !labels.y_label.is_empty() {
            frame.push_text(
                TextPrimitive::new(
                    labels.y_label.clone(),
                    plot_rect.x - LABEL_GAP,
                    center.y,
                    font,
                    color,
                    TextHAlign::Center,
                )
                .rotated(90.0),
            );
        }
    }

    fn draw_series(&self, frame: &mut RenderFrame) {
        let Some(path) = build_series_path(&self.display, self.style.fill) else {
            return;
        };
        let (color, style) = if path.filled {
            (self.style.fill_color, ShapeStyle::Fill)
        } else {
            (
                self.style.line_color,
                ShapeStyle::Stroke {
                    width: self.style.line_width,
                },
            )
        };
        let closed = path.is_closed();
        frame.push_path(PathPrimitive {
            vertices: path.vertices,
            closed,
            color,
            style,
        });
    }

    fn draw_highlights(&self, frame: &mut RenderFrame, plot_rect: Rect) {
        let highlighted = self.highlight.snapshot();
        let mut last = None;
        for index in highlighted.iter() {
            let Some(point) = self.display.get(index) else {
                continue;
            };
            frame.push_circle(CirclePrimitive::new(
                *point,
                self.style.highlight_radius,
                self.style.highlight_color,
                ShapeStyle::Stroke {
                    width: self.style.highlight_stroke_width,
                },
            ));
            last = Some(index);
        }

        let Some(index) = last else {
            return;
        };
        let (Some(point), Some(value)) = (self.display.get(index), self.series.get(index)) else {
            return;
        };

        let right = plot_rect.x + plot_rect.width;
        let bottom = plot_rect.y + plot_rect.height;
        frame.push_line(LinePrimitive::new(
            plot_rect.x,
            point.y,
            right,
            point.y,
            1.0,
            self.style.axes_color,
        ));
        frame.push_line(LinePrimitive::new(
            point.x,
            bottom,
            point.x,
            plot_rect.y,
            1.0,
            self.style.axes_color,
        ));
        frame.push_text(TextPrimitive::new(
            format!("({:.4}, {:.4})", value.x, value.y),
            right - self.style.padding,
            bottom + self.style.padding - LABEL_GAP,
            self.style.font_size_px,
            self.style.text_color,
            TextHAlign::Right,
        ));
    }
}
