use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::interaction::SelectionSet;

/// Shared scalar that a widget reads and writes but does not own.
///
/// The host keeps one clone, the range control another; whichever side is the
/// source of truth in a given update tick writes through it.
#[derive(Debug, Clone, Default)]
pub struct SharedBound(Rc<Cell<f64>>);

impl SharedBound {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    #[must_use]
    pub fn get(&self) -> f64 {
        self.0.get()
    }

    pub fn set(&self, value: f64) {
        self.0.set(value);
    }

    /// `true` when both handles point at the same value.
    #[must_use]
    pub fn ptr_eq(&self, other: &SharedBound) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Highlighted index set shared between a widget and its selection listener.
#[derive(Debug, Clone, Default)]
pub struct SharedHighlight(Rc<RefCell<SelectionSet>>);

impl SharedHighlight {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole set.
    pub fn replace(&self, indices: SelectionSet) {
        *self.0.borrow_mut() = indices;
    }

    pub fn clear(&self) {
        self.replace(SelectionSet::new());
    }

    #[must_use]
    pub fn snapshot(&self) -> SelectionSet {
        self.0.borrow().clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}
