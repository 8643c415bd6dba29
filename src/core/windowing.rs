use crate::core::DataPoint;

fn ordered(start: f64, end: f64) -> (f64, f64) {
    if start <= end {
        (start, end)
    } else {
        (end, start)
    }
}

/// Returns points whose independent value falls inside an inclusive window.
#[must_use]
pub fn points_in_window(points: &[DataPoint], start: f64, end: f64) -> Vec<DataPoint> {
    let (min_x, max_x) = ordered(start, end);

    points
        .iter()
        .copied()
        .filter(|point| point.x >= min_x && point.x <= max_x)
        .collect()
}

/// Returns indices of values inside an inclusive window, in scan order.
///
/// Used to turn a range-limiter pair into the set of active samples.
#[must_use]
pub fn indices_in_window(values: &[f64], start: f64, end: f64) -> Vec<usize> {
    let (min_v, max_v) = ordered(start, end);

    values
        .iter()
        .enumerate()
        .filter(|(_, value)| **value >= min_v && **value <= max_v)
        .map(|(index, _)| index)
        .collect()
}
