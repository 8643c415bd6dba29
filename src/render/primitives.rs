use serde::{Deserialize, Serialize};

use crate::core::{Rect, ScreenPoint};
use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// 8-bit channels with a normalized alpha, e.g. `rgba8(50, 50, 50, 0.85)`.
    #[must_use]
    pub fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeStyle {
    Fill,
    Stroke { width: f64 },
}

impl ShapeStyle {
    fn validate(self) -> PlotResult<()> {
        match self {
            ShapeStyle::Fill => Ok(()),
            ShapeStyle::Stroke { width } => validate_stroke_width(width),
        }
    }
}

fn validate_stroke_width(width: f64) -> PlotResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(PlotError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_point(point: ScreenPoint, what: &str) -> PlotResult<()> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return Err(PlotError::InvalidData(format!(
            "{what} coordinates must be finite"
        )));
    }
    Ok(())
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub fn between(from: ScreenPoint, to: ScreenPoint, stroke_width: f64, color: Color) -> Self {
        Self::new(from.x, from.y, to.x, to.y, stroke_width, color)
    }

    pub fn validate(self) -> PlotResult<()> {
        validate_point(ScreenPoint::new(self.x1, self.y1), "line")?;
        validate_point(ScreenPoint::new(self.x2, self.y2), "line")?;
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Filled or outlined rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub rect: Rect,
    pub color: Color,
    pub style: ShapeStyle,
}

impl RectPrimitive {
    #[must_use]
    pub const fn filled(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            color,
            style: ShapeStyle::Fill,
        }
    }

    #[must_use]
    pub const fn stroked(rect: Rect, width: f64, color: Color) -> Self {
        Self {
            rect,
            color,
            style: ShapeStyle::Stroke { width },
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        self.rect.validate()?;
        self.style.validate()?;
        self.color.validate()
    }
}

/// Filled or outlined circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center: ScreenPoint,
    pub radius: f64,
    pub color: Color,
    pub style: ShapeStyle,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(center: ScreenPoint, radius: f64, color: Color, style: ShapeStyle) -> Self {
        Self {
            center,
            radius,
            color,
            style,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        validate_point(self.center, "circle")?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PlotError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.style.validate()?;
        self.color.validate()
    }
}

/// Polyline or polygon through `vertices`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub vertices: Vec<ScreenPoint>,
    pub closed: bool,
    pub color: Color,
    pub style: ShapeStyle,
}

impl PathPrimitive {
    pub fn validate(&self) -> PlotResult<()> {
        if self.vertices.is_empty() {
            return Err(PlotError::InvalidData(
                "path primitive must have at least one vertex".to_owned(),
            ));
        }
        for vertex in &self.vertices {
            validate_point(*vertex, "path")?;
        }
        self.style.validate()?;
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    /// Counter-clockwise rotation around `(x, y)` in degrees.
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation_deg = degrees;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.text.is_empty() {
            return Err(PlotError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        validate_point(ScreenPoint::new(self.x, self.y), "text")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.rotation_deg.is_finite() {
            return Err(PlotError::InvalidData(
                "text rotation must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}
