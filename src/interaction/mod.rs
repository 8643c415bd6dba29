//! Input state, event channels and the selection engine.

mod binding;
mod input;
mod input_bus;
mod region;
pub mod selection;
mod selection_bus;

pub use binding::{SharedBound, SharedHighlight};
pub use input::{InputClass, InputEvent, InputEventKind, KeyCode, PointerButton};
pub use input_bus::{InputBus, InputListener, WidgetId};
pub use region::{DEFAULT_VIEWPORT, InteractiveRegion, RegionStyle};
pub use selection::{
    NearestPoint, SelectionSet, hover_selection, marquee_rect, nearest_point, points_in_rect,
};
pub use selection_bus::{SelectionBus, SelectionEvent, SelectionSubscription, SubscriptionId};
