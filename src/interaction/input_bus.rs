use std::cell::RefCell;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::interaction::{InputEvent, InputEventKind};

/// Per-widget slot inside an [`InputBus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Receiver side of input dispatch.
pub trait InputListener {
    fn listener_id(&self) -> WidgetId;
    fn on_input(&mut self, event: &InputEvent);
}

#[derive(Debug, Default)]
struct InputBusState {
    next_id: u64,
    listeners: IndexMap<InputEventKind, IndexSet<WidgetId>>,
}

/// Injected input event source.
///
/// Tracks which widget slots listen to which event kinds and routes host
/// events to them. Cloning yields another handle to the same bus. The handle
/// is `!Send`: all dispatch happens on the host UI thread.
#[derive(Debug, Clone, Default)]
pub struct InputBus {
    inner: Rc<RefCell<InputBusState>>,
}

impl InputBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh widget slot.
    pub fn register_widget(&self) -> WidgetId {
        let mut state = self.inner.borrow_mut();
        state.next_id = state.next_id.wrapping_add(1);
        WidgetId(state.next_id)
    }

    /// Adds a listener. Returns `false` when it was already registered.
    pub fn add_listener(&self, kind: InputEventKind, widget: WidgetId) -> bool {
        let added = self
            .inner
            .borrow_mut()
            .listeners
            .entry(kind)
            .or_default()
            .insert(widget);
        if added {
            trace!(?kind, widget = widget.raw(), "input listener added");
        }
        added
    }

    /// Removes a listener. Returns `false` when it was not registered.
    pub fn remove_listener(&self, kind: InputEventKind, widget: WidgetId) -> bool {
        let removed = self
            .inner
            .borrow_mut()
            .listeners
            .get_mut(&kind)
            .is_some_and(|slots| slots.shift_remove(&widget));
        if removed {
            trace!(?kind, widget = widget.raw(), "input listener removed");
        }
        removed
    }

    /// Drops every subscription held by `widget`.
    pub fn remove_widget(&self, widget: WidgetId) {
        for slots in self.inner.borrow_mut().listeners.values_mut() {
            slots.shift_remove(&widget);
        }
    }

    #[must_use]
    pub fn listener_count(&self, kind: InputEventKind) -> usize {
        self.inner
            .borrow()
            .listeners
            .get(&kind)
            .map_or(0, IndexSet::len)
    }

    #[must_use]
    pub fn is_listening(&self, kind: InputEventKind, widget: WidgetId) -> bool {
        self.inner
            .borrow()
            .listeners
            .get(&kind)
            .is_some_and(|slots| slots.contains(&widget))
    }

    /// Delivers `event` to every widget in `widgets` subscribed to its kind.
    ///
    /// Widgets are visited in slice order. Subscriptions are read once before
    /// delivery, so handlers may enable or disable input while running.
    /// Returns the number of widgets that received the event.
    pub fn dispatch(&self, event: &InputEvent, widgets: &mut [&mut dyn InputListener]) -> usize {
        let subscribed = self
            .inner
            .borrow()
            .listeners
            .get(&event.kind())
            .cloned()
            .unwrap_or_default();

        let mut delivered = 0;
        for widget in widgets.iter_mut() {
            if subscribed.contains(&widget.listener_id()) {
                widget.on_input(event);
                delivered += 1;
            }
        }
        delivered
    }
}
