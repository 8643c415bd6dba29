use std::f64::consts::FRAC_PI_6;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::interaction::{KeyCode, RegionStyle};
use crate::render::Color;

use super::validation::{validate_non_negative, validate_positive};

/// Look and interaction tuning of a [`PlotWidget`](super::PlotWidget).
///
/// Serializable so hosts can keep plot styling in a config file; missing
/// fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub region: RegionStyle,
    pub line_color: Color,
    pub fill_color: Color,
    pub axes_color: Color,
    pub text_color: Color,
    pub highlight_color: Color,
    pub axes_width: f64,
    pub line_width: f64,
    /// Arrow head length of both axes.
    pub arrow_size: f64,
    /// Half-angle of the arrow heads in radians.
    pub arrow_spread: f64,
    /// Gap between the widget viewport and the plot area on every side.
    pub padding: f64,
    /// Hover selection only picks points strictly closer than this.
    pub max_select_distance: f64,
    /// Key that must be held for selection gestures.
    pub select_key: char,
    pub highlight_radius: f64,
    pub highlight_stroke_width: f64,
    pub font_size_px: f64,
    /// Draw the series as a closed filled shape instead of a stroked line.
    pub fill: bool,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            region: RegionStyle::default(),
            line_color: Color::rgba8(125, 125, 255, 1.0),
            fill_color: Color::rgba8(200, 200, 255, 0.9),
            axes_color: Color::rgba8(200, 200, 200, 0.9),
            text_color: Color::rgba8(200, 200, 200, 1.0),
            highlight_color: Color::YELLOW,
            axes_width: 3.0,
            line_width: 2.0,
            arrow_size: 10.0,
            arrow_spread: FRAC_PI_6,
            padding: 25.0,
            max_select_distance: 10.0,
            select_key: 'i',
            highlight_radius: 4.0,
            highlight_stroke_width: 2.0,
            font_size_px: 12.0,
            fill: false,
        }
    }
}

impl PlotStyle {
    #[must_use]
    pub fn select_key_code(&self) -> KeyCode {
        KeyCode::from_char(self.select_key)
    }

    pub fn validate(&self) -> PlotResult<()> {
        for color in [
            self.region.background,
            self.region.edge,
            self.line_color,
            self.fill_color,
            self.axes_color,
            self.text_color,
            self.highlight_color,
        ] {
            color.validate()?;
        }
        validate_positive(self.axes_width, "axes width")?;
        validate_positive(self.line_width, "line width")?;
        validate_positive(self.arrow_size, "arrow size")?;
        validate_positive(self.highlight_radius, "highlight radius")?;
        validate_positive(self.highlight_stroke_width, "highlight stroke width")?;
        validate_positive(self.font_size_px, "font size")?;
        validate_positive(self.region.edge_width, "edge width")?;
        validate_non_negative(self.padding, "padding")?;
        validate_non_negative(self.max_select_distance, "max select distance")?;
        if !self.arrow_spread.is_finite()
            || self.arrow_spread <= 0.0
            || self.arrow_spread >= std::f64::consts::FRAC_PI_2
        {
            return Err(PlotError::InvalidData(
                "arrow spread must be in (0, pi/2)".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::Config(format!("failed to serialize plot style: {e}")))
    }

    /// Parses and validates a style.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let style: Self = serde_json::from_str(input)
            .map_err(|e| PlotError::Config(format!("failed to parse plot style: {e}")))?;
        style.validate()?;
        Ok(style)
    }
}

/// Look of one range-limiter handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleStyle {
    pub fill: Color,
    pub hover_fill: Color,
    pub edge: Color,
    /// Extent across the motion axis; the triangle depth is derived from it.
    pub size: f64,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            fill: Color::rgba8(204, 163, 0, 0.9),
            hover_fill: Color::rgba8(255, 83, 26, 0.9),
            edge: Color::rgba8(200, 200, 200, 0.95),
            size: 15.0,
        }
    }
}

impl HandleStyle {
    pub fn validate(&self) -> PlotResult<()> {
        self.fill.validate()?;
        self.hover_fill.validate()?;
        self.edge.validate()?;
        validate_positive(self.size, "handle size")
    }
}

/// Look of a [`PlotRangeControl`](super::PlotRangeControl).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeControlStyle {
    pub region: RegionStyle,
    /// Shade over the trimmed parts of the timeline.
    pub inactive_color: Color,
    pub highlight_color: Color,
    pub highlight_radius: f64,
    pub marker_line_width: f64,
    /// Horizontal gap between the viewport and the timeline.
    pub inset_x: f64,
    /// Vertical gap between the viewport and the timeline.
    pub inset_y: f64,
    pub handle: HandleStyle,
}

impl Default for RangeControlStyle {
    fn default() -> Self {
        Self {
            region: RegionStyle::default(),
            inactive_color: Color::rgba8(125, 125, 125, 0.8),
            highlight_color: Color::YELLOW,
            highlight_radius: 2.0,
            marker_line_width: 2.0,
            inset_x: 15.0,
            inset_y: 20.0,
            handle: HandleStyle::default(),
        }
    }
}

impl RangeControlStyle {
    pub fn validate(&self) -> PlotResult<()> {
        self.region.background.validate()?;
        self.region.edge.validate()?;
        self.inactive_color.validate()?;
        self.highlight_color.validate()?;
        validate_positive(self.region.edge_width, "edge width")?;
        validate_positive(self.highlight_radius, "highlight radius")?;
        validate_positive(self.marker_line_width, "marker line width")?;
        validate_non_negative(self.inset_x, "horizontal inset")?;
        validate_non_negative(self.inset_y, "vertical inset")?;
        self.handle.validate()
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::Config(format!("failed to serialize range control style: {e}")))
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let style: Self = serde_json::from_str(input)
            .map_err(|e| PlotError::Config(format!("failed to parse range control style: {e}")))?;
        style.validate()?;
        Ok(style)
    }
}
