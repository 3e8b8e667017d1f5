//! Order-preserving accumulator
//!
//! Keeps every recorded value, in insertion order. Memory grows with the
//! number of observations; use [`NumericAccumulator`](super::NumericAccumulator)
//! when only a summary of numbers is needed.

use core::fmt;

use crate::traits::{Accumulate, Replay};
use crate::value::{write_list, Value};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Append-only log of values
///
/// # Example
///
/// ```
/// use streamtally::Accumulator;
///
/// let mut acc = Accumulator::new();
/// acc.append(1);
/// acc.append(2);
///
/// assert_eq!(acc.to_string(), "[1, 2]");
///
/// // Replay is repeatable
/// let first: Vec<_> = acc.iter().copied().collect();
/// let second: Vec<_> = acc.iter().copied().collect();
/// assert_eq!(first, vec![1, 2]);
/// assert_eq!(first, second);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Accumulator<T = Value> {
    /// Recorded values, oldest first
    values: Vec<T>,
}

impl<T> Default for Accumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Accumulator<T> {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create an empty accumulator with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Record a value at the end of the log
    pub fn append(&mut self, value: T) {
        self.values.push(value);
    }

    /// Iterate over the recorded values in insertion order
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// The recorded values as a slice
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consume the accumulator and return the recorded values
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recently recorded value
    pub fn last(&self) -> Option<&T> {
        self.values.last()
    }
}

impl<T: Clone + fmt::Debug> Accumulate for Accumulator<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        Accumulator::append(self, item);
    }

    fn merge(&mut self, other: &Self) {
        self.values.extend_from_slice(&other.values);
    }

    fn count(&self) -> u64 {
        self.values.len() as u64
    }
}

impl<T: Clone + fmt::Debug> Replay for Accumulator<T> {
    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a;

    fn replay(&self) -> Self::Iter<'_> {
        self.values.iter()
    }
}

impl<'a, T> IntoIterator for &'a Accumulator<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> IntoIterator for Accumulator<T> {
    type Item = T;
    type IntoIter = <Vec<T> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<T> Extend<T> for Accumulator<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<T> FromIterator<T> for Accumulator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Accumulator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.values)
    }
}
