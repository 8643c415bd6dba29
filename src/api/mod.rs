//! Widgets consumed by host applications.

mod plot;
mod plot_config;
mod plot_input;
mod plot_scene;
mod range_control;
mod range_handle;
mod validation;
mod widget;

pub use plot::{PlotLabels, PlotWidget};
pub use plot_config::{HandleStyle, PlotStyle, RangeControlStyle};
pub use range_control::PlotRangeControl;
pub use range_handle::{HandleSide, LimiterHandle, SliderAxis};
pub use widget::InteractiveWidget;
