//! rangeplot: interactive 2D plot widget core.
//!
//! The crate maps a data series into pixel space, runs point selection
//! (hover-nearest and marquee) and drives a pair of range-limiter handles
//! bound to shared external values. It produces backend-agnostic draw
//! primitives; windowing, text shaping and rasterization stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PlotRangeControl, PlotStyle, PlotWidget, RangeControlStyle};
pub use error::{PlotError, PlotResult};
