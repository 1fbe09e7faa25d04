use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("Cannot compute statistics over an empty sequence")]
    EmptyInput,
}

/// An extreme value and where it was found
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    /// The minimum or maximum value, as a float
    pub value: f64,
    /// Position of the value's first occurrence in the searched sequence
    pub index: usize,
}

/// Calculate the arithmetic mean of a sequence of numbers.
pub fn mean<T: Copy + Into<f64>>(values: &[T]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let sum: f64 = values.iter().map(|&v| v.into()).sum();
    Ok(sum / values.len() as f64)
}

/// Find the minimum value and the index of its first occurrence, or `None` for an empty
/// sequence.
pub fn find_min<T: Copy + Into<f64>>(values: &[T]) -> Option<Extremum> {
    find_extremum(values, |candidate, best| candidate < best)
}

/// Find the maximum value and the index of its first occurrence, or `None` for an empty
/// sequence.
pub fn find_max<T: Copy + Into<f64>>(values: &[T]) -> Option<Extremum> {
    find_extremum(values, |candidate, best| candidate > best)
}

/// Walk the values in order, replacing the current best only on a strict improvement so that
/// ties resolve to the earliest index.
fn find_extremum<T: Copy + Into<f64>>(
    values: &[T],
    improves: impl Fn(f64, f64) -> bool,
) -> Option<Extremum> {
    let mut iter = values.iter().map(|&v| v.into()).enumerate();
    let (index, value) = iter.next()?;
    let mut best = Extremum { value, index };
    for (index, value) in iter {
        if improves(value, best.value) {
            best = Extremum { value, index };
        }
    }
    Some(best)
}
