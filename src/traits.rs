//! Core traits for accumulators
//!
//! Every accumulator implements [`Accumulate`]. On top of that, the two
//! concrete kinds expose disjoint capabilities: [`Replay`] for accumulators
//! that keep their values, [`Summarize`] for accumulators that keep only a
//! running summary. There is deliberately no trait offering both, so
//! replaying a summary-only accumulator does not compile.

use core::fmt::Debug;

use crate::math;

/// Core trait for all accumulators
pub trait Accumulate: Clone + Debug {
    /// The type of item this accumulator records
    type Item;

    /// Record an item
    fn append(&mut self, item: Self::Item);

    /// Fold another accumulator of the same type into this one
    ///
    /// The result is the accumulator that would have been obtained by
    /// appending all of `self`'s items followed by all of `other`'s.
    fn merge(&mut self, other: &Self);

    /// Number of items recorded
    fn count(&self) -> u64;

    /// Check if nothing has been recorded
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Accumulators that retain every item and can replay them in order
pub trait Replay: Accumulate {
    /// Borrowing iterator over recorded items
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Iterate over recorded items in insertion order
    ///
    /// Each call starts again from the first item; replaying never consumes
    /// or mutates the accumulator.
    fn replay(&self) -> Self::Iter<'_>;
}

/// Accumulators that keep a running summary instead of the items
pub trait Summarize: Accumulate {
    /// Mean of the recorded values, `0.0` when empty
    fn mean(&self) -> f64;

    /// Sample variance (Bessel's correction), `0.0` for fewer than two values
    fn variance(&self) -> f64;

    /// Sample standard deviation, `0.0` for fewer than two values
    fn stddev(&self) -> f64 {
        math::sqrt(self.variance())
    }
}
