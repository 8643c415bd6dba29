use tracing::trace;

use crate::core::DataPoint;
use crate::error::{PlotError, PlotResult};

/// Append-only, insertion-ordered sequence of samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one sample. Non-finite values are rejected so every mapped
    /// display point stays finite.
    pub fn push(&mut self, point: DataPoint) -> PlotResult<()> {
        if !point.is_finite() {
            return Err(PlotError::InvalidData(
                "data point values must be finite".to_owned(),
            ));
        }
        self.points.push(point);
        trace!(count = self.points.len(), "append data point");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<DataPoint> {
        self.points.get(index).copied()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataPoint> {
        self.points.iter()
    }

    /// Independent values in insertion order, as consumed by a range control.
    #[must_use]
    pub fn independent_values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.x).collect()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
