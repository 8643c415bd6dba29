//! Data-to-pixel mapping for the plot area.
//!
//! Both axes always include the data origin so the axis arrows can be drawn
//! through `(0, 0)`. The vertical axis is inverted: larger dependent values
//! land on smaller screen `y`.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{DataPoint, Rect, ScreenPoint};
use crate::error::{PlotError, PlotResult};

/// Min/max of both variables over a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataExtents {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl DataExtents {
    /// `[0, 1]` on both axes, used when there is no data to fit.
    pub const UNIT: Self = Self {
        min_x: 0.0,
        max_x: 1.0,
        min_y: 0.0,
        max_y: 1.0,
    };

    /// Raw extents in a single pass. Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut extents = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for point in rest {
            extents.min_x = extents.min_x.min(point.x);
            extents.max_x = extents.max_x.max(point.x);
            extents.min_y = extents.min_y.min(point.y);
            extents.max_y = extents.max_y.max(point.y);
        }
        Some(extents)
    }

    /// Widens both ranges so that zero is representable on each axis.
    #[must_use]
    pub fn including_origin(self) -> Self {
        Self {
            min_x: self.min_x.min(0.0),
            max_x: self.max_x.max(0.0),
            min_y: self.min_y.min(0.0),
            max_y: self.max_y.max(0.0),
        }
    }

    /// Replaces any axis that cannot be mapped onto `plot_rect` with the unit
    /// span starting at its minimum.
    ///
    /// An axis is unmappable when its span is zero or so small that the
    /// pixel scale overflows. Once the origin is included such an axis sits
    /// at (or within a rounding error of) `0`, so the result still contains
    /// the origin.
    #[must_use]
    pub fn with_unit_span_for_unmappable_axes(mut self, plot_rect: Rect) -> Self {
        if !is_mappable(plot_rect.width, self.x_span()) {
            debug!(axis = "x", span = self.x_span(), "unmappable axis widened to unit span");
            self.max_x = self.min_x + 1.0;
        }
        if !is_mappable(plot_rect.height, self.y_span()) {
            debug!(axis = "y", span = self.y_span(), "unmappable axis widened to unit span");
            self.max_y = self.min_y + 1.0;
        }
        self
    }

    #[must_use]
    pub fn x_span(self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn y_span(self) -> f64 {
        self.max_y - self.min_y
    }
}

fn is_mappable(extent: f64, span: f64) -> bool {
    span != 0.0 && (extent / span).is_finite()
}

/// Pixels per data unit. Spans beyond `f64::MAX` are measured in halves so
/// the scale stays non-zero.
fn axis_scale(extent: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.is_finite() {
        extent / span
    } else {
        (0.5 * extent) / (0.5 * max - 0.5 * min)
    }
}

/// Affine data-to-pixel transform fitted to a series and a plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransform {
    plot_rect: Rect,
    extents: DataExtents,
    x_scale: f64,
    y_scale: f64,
    origin: ScreenPoint,
}

impl AxisTransform {
    /// Fits the transform so the origin-inclusive extents of `points` fill
    /// `plot_rect`.
    pub fn fit(points: &[DataPoint], plot_rect: Rect) -> PlotResult<Self> {
        plot_rect.validate()?;
        let extents = DataExtents::from_points(points).ok_or_else(|| {
            PlotError::InvalidData("cannot fit a transform to an empty series".to_owned())
        })?;
        Ok(Self::from_extents(
            extents
                .including_origin()
                .with_unit_span_for_unmappable_axes(plot_rect),
            plot_rect,
        ))
    }

    /// Builds the transform from already prepared extents.
    ///
    /// Spans must be non-zero; [`AxisTransform::fit`] guarantees this.
    #[must_use]
    pub fn from_extents(extents: DataExtents, plot_rect: Rect) -> Self {
        let x_scale = axis_scale(plot_rect.width, extents.min_x, extents.max_x);
        let y_scale = axis_scale(plot_rect.height, extents.min_y, extents.max_y);
        let plot_bottom = plot_rect.y + plot_rect.height;
        let origin = ScreenPoint::new(
            plot_rect.x - extents.min_x * x_scale,
            plot_bottom + extents.min_y * y_scale,
        );

        Self {
            plot_rect,
            extents,
            x_scale,
            y_scale,
            origin,
        }
    }

    #[must_use]
    pub fn plot_rect(&self) -> Rect {
        self.plot_rect
    }

    #[must_use]
    pub fn extents(&self) -> DataExtents {
        self.extents
    }

    #[must_use]
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    /// Pixel position of the data origin `(0, 0)`.
    #[must_use]
    pub fn origin(&self) -> ScreenPoint {
        self.origin
    }

    #[must_use]
    pub fn data_to_screen(&self, point: DataPoint) -> ScreenPoint {
        ScreenPoint::new(
            self.origin.x + self.x_scale * point.x,
            self.origin.y - self.y_scale * point.y,
        )
    }

    /// Inverse mapping. `None` when an axis collapsed to zero pixels.
    #[must_use]
    pub fn screen_to_data(&self, point: ScreenPoint) -> Option<DataPoint> {
        if self.x_scale == 0.0 || self.y_scale == 0.0 {
            return None;
        }
        Some(DataPoint::new(
            (point.x - self.origin.x) / self.x_scale,
            (self.origin.y - point.y) / self.y_scale,
        ))
    }
}

/// Maps every point through `transform`, preserving order and length.
#[must_use]
pub fn project_points(points: &[DataPoint], transform: &AxisTransform) -> Vec<ScreenPoint> {
    // Large series can be projected in parallel; ordering is preserved by
    // the indexed collect.
    #[cfg(feature = "parallel-projection")]
    {
        points
            .par_iter()
            .map(|point| transform.data_to_screen(*point))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points
            .iter()
            .map(|point| transform.data_to_screen(*point))
            .collect()
    }
}
