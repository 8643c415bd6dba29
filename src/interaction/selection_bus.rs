use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::interaction::SelectionSet;

/// Notification published when the highlighted point set changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected(SelectionSet),
    /// Clears highlights. May carry the index that was rejected.
    Deselected(SelectionSet),
}

impl SelectionEvent {
    #[must_use]
    pub fn indices(&self) -> &SelectionSet {
        match self {
            SelectionEvent::Selected(indices) | SelectionEvent::Deselected(indices) => indices,
        }
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        matches!(self, SelectionEvent::Selected(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<RefCell<dyn FnMut(&SelectionEvent)>>;

#[derive(Default)]
struct SelectionBusState {
    next_id: u64,
    listeners: IndexMap<SubscriptionId, Listener>,
}

/// Injected publish/subscribe channel for selection notifications.
///
/// Delivery is synchronous: [`SelectionBus::emit`] invokes every listener
/// registered when the emission starts, in subscription order, before
/// returning. Cloning yields another handle to the same channel.
#[derive(Clone, Default)]
pub struct SelectionBus {
    inner: Rc<RefCell<SelectionBusState>>,
}

impl fmt::Debug for SelectionBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl SelectionBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(&SelectionEvent) + 'static) -> SubscriptionId {
        let mut state = self.inner.borrow_mut();
        state.next_id = state.next_id.wrapping_add(1);
        let id = SubscriptionId(state.next_id);
        let listener: Listener = Rc::new(RefCell::new(listener));
        state.listeners.insert(id, listener);
        id
    }

    /// Subscribes and returns a guard that unsubscribes on drop.
    pub fn subscribe_scoped(
        &self,
        listener: impl FnMut(&SelectionEvent) + 'static,
    ) -> SelectionSubscription {
        SelectionSubscription {
            bus: self.clone(),
            id: self.subscribe(listener),
        }
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().listeners.shift_remove(&id).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn emit(&self, event: SelectionEvent) {
        let listeners: Vec<Listener> = self.inner.borrow().listeners.values().cloned().collect();
        debug!(
            selected = event.is_selected(),
            indices = event.indices().len(),
            listeners = listeners.len(),
            "selection event"
        );

        for listener in listeners {
            match listener.try_borrow_mut() {
                Ok(mut callback) => (&mut *callback)(&event),
                Err(_) => warn!("listener re-entered its own selection emission; skipped"),
            }
        }
    }
}

/// Live subscription on a [`SelectionBus`]; unsubscribes when dropped.
#[derive(Debug)]
pub struct SelectionSubscription {
    bus: SelectionBus,
    id: SubscriptionId,
}

impl SelectionSubscription {
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for SelectionSubscription {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.id);
    }
}
