//! Point selection queries over projected display points.
//!
//! Everything here is pure: widgets feed pointer positions and display
//! points in, and publish the resulting [`SelectionEvent`] themselves.

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{Rect, ScreenPoint};
use crate::interaction::SelectionEvent;

/// Ordered set of series indices. Indices are unique and kept in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet(SmallVec<[usize; 8]>);

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn single(index: usize) -> Self {
        let mut set = Self::new();
        set.0.push(index);
        set
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Most recently added index.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        self.0.to_vec()
    }
}

impl FromIterator<usize> for SelectionSet {
    /// Collects indices, dropping repeats while keeping first-seen order.
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for index in iter {
            if !set.0.contains(&index) {
                set.0.push(index);
            }
        }
        set
    }
}

impl From<Vec<usize>> for SelectionSet {
    fn from(indices: Vec<usize>) -> Self {
        indices.into_iter().collect()
    }
}

/// Closest display point to the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    pub index: usize,
    pub distance: f64,
}

/// Linear scan for the display point nearest to `pointer`.
///
/// Ties go to the lowest index. Returns `None` for an empty slice.
#[must_use]
pub fn nearest_point(points: &[ScreenPoint], pointer: ScreenPoint) -> Option<NearestPoint> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| (OrderedFloat(point.distance_to(pointer)), index))
        .min_by_key(|(distance, _)| *distance)
        .map(|(distance, index)| NearestPoint {
            index,
            distance: distance.into_inner(),
        })
}

/// Hover-nearest decision: `Selected` with the nearest index when it lies
/// strictly closer than `max_distance`, otherwise `Deselected`.
///
/// The deselection still carries the nearest index (empty when there are no
/// points at all).
#[must_use]
pub fn hover_selection(
    points: &[ScreenPoint],
    pointer: ScreenPoint,
    max_distance: f64,
) -> SelectionEvent {
    match nearest_point(points, pointer) {
        Some(nearest) if nearest.distance < max_distance => {
            SelectionEvent::Selected(SelectionSet::single(nearest.index))
        }
        Some(nearest) => SelectionEvent::Deselected(SelectionSet::single(nearest.index)),
        None => SelectionEvent::Deselected(SelectionSet::new()),
    }
}

/// Marquee rectangle anchored at `anchor`, with the moving corner clamped
/// to `bounds`.
#[must_use]
pub fn marquee_rect(anchor: ScreenPoint, pointer: ScreenPoint, bounds: Rect) -> Rect {
    Rect::from_corners(anchor, bounds.clamp_point(pointer))
}

/// Indices of display points inside `rect` (edges included), in scan order.
#[must_use]
pub fn points_in_rect(points: &[ScreenPoint], rect: Rect) -> SelectionSet {
    SelectionSet(
        points
            .iter()
            .enumerate()
            .filter(|(_, point)| rect.contains(**point))
            .map(|(index, _)| index)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_distances_resolve_to_first_index() {
        let points = [
            ScreenPoint::new(-5.0, 0.0),
            ScreenPoint::new(5.0, 0.0),
            ScreenPoint::new(0.0, 5.0),
        ];
        let nearest = nearest_point(&points, ScreenPoint::new(0.0, 0.0)).expect("nearest");
        assert_eq!(nearest.index, 0);
    }

    #[test]
    fn threshold_is_exclusive() {
        let points = [ScreenPoint::new(10.0, 0.0)];
        let event = hover_selection(&points, ScreenPoint::new(0.0, 0.0), 10.0);
        assert_eq!(event, SelectionEvent::Deselected(SelectionSet::single(0)));
    }

    #[test]
    fn collecting_drops_duplicates() {
        let set: SelectionSet = vec![3, 1, 3, 2, 1].into();
        assert_eq!(set.as_slice(), &[3, 1, 2]);
    }
}
