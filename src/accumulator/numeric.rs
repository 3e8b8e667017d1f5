//! Summary-only numeric accumulator
//!
//! Computes a running mean and sample variance using Welford's numerically
//! stable online algorithm. Raw values are never stored.

use core::fmt;

use crate::error::{Error, Result};
use crate::math;
use crate::measurement::Measurement;
use crate::precision::{self, SignificantFigures};
use crate::traits::{Accumulate, Summarize};
use crate::value::Value;

/// Running mean and standard deviation using Welford's algorithm
///
/// Each [`append`](Self::append) is O(1) in time and memory. The variance
/// uses Bessel's correction and is `0.0` until at least two values have been
/// recorded.
///
/// There is no way to iterate a `NumericAccumulator`: the values it has
/// seen are gone once they are folded into the summary.
///
/// # Example
///
/// ```
/// use streamtally::NumericAccumulator;
///
/// let mut acc = NumericAccumulator::new();
/// acc.append(1.0);
/// acc.append(2.0);
///
/// assert_eq!(acc.mean(), 1.5);
/// assert!((acc.stddev() - 0.7071).abs() < 1e-4);
/// assert_eq!(acc.to_string(), "1.50 +/- 0.71 (2)");
/// ```
///
/// # Distributed Usage
///
/// ```
/// use streamtally::NumericAccumulator;
/// use streamtally::traits::Accumulate;
///
/// let mut worker1: NumericAccumulator = [1.0, 2.0, 3.0].into_iter().collect();
/// let worker2: NumericAccumulator = [4.0, 5.0, 6.0].into_iter().collect();
///
/// worker1.merge(&worker2);
/// assert_eq!(worker1.count(), 6);
/// assert!((worker1.mean() - 3.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumericAccumulator {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared differences from the mean (M2 in Welford's algorithm)
    m2: f64,
}

impl NumericAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Add a value
    ///
    /// NaN and infinities are folded in like any other value and will make
    /// the summary non-finite.
    pub fn append(&mut self, value: f64) {
        self.count += 1;

        // Welford's update: delta against the old mean, delta2 against the new one
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Coerce `value` to a float and add it
    ///
    /// Fails with [`Error::TypeMismatch`] for values with no numeric
    /// interpretation, text included. The accumulator is unchanged on error.
    pub fn try_append(&mut self, value: &Value) -> Result<()> {
        let x = value.to_f64().map_err(|source| Error::TypeMismatch {
            key: None,
            found: value.kind(),
            source,
        })?;
        self.append(x);
        Ok(())
    }

    /// Number of values seen
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Arithmetic mean, `0.0` when empty
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance (Bessel's correction)
    ///
    /// `0.0` for fewer than two values rather than a division by zero.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Population variance, `0.0` when empty
    pub fn population_variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Sample standard deviation, `0.0` for fewer than two values
    pub fn stddev(&self) -> f64 {
        math::sqrt(self.variance())
    }

    /// Sum of all values
    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }

    /// The mean with the sample standard deviation as its uncertainty
    pub fn to_measurement(&self) -> Measurement {
        Measurement::new(self.mean(), self.stddev())
    }

    /// Display with a custom number of significant figures in the stddev
    ///
    /// ```
    /// use streamtally::{NumericAccumulator, SignificantFigures};
    ///
    /// let acc: NumericAccumulator = [1.0, 2.0].into_iter().collect();
    /// let three = SignificantFigures::new(3).unwrap();
    /// assert_eq!(acc.display_with(three).to_string(), "1.500 +/- 0.707 (2)");
    /// ```
    pub fn display_with(&self, figures: SignificantFigures) -> SummaryDisplay<'_> {
        SummaryDisplay {
            acc: self,
            figures,
        }
    }

    /// Merge with another accumulator using Chan et al.'s parallel algorithm
    pub fn merge_stats(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }

        if self.count == 0 {
            *self = other.clone();
            return;
        }

        let combined_count = self.count + other.count;
        let delta = other.mean - self.mean;

        let combined_mean = self.mean + delta * (other.count as f64 / combined_count as f64);
        let combined_m2 = self.m2
            + other.m2
            + delta * delta * (self.count as f64 * other.count as f64 / combined_count as f64);

        self.count = combined_count;
        self.mean = combined_mean;
        self.m2 = combined_m2;
    }
}

impl Accumulate for NumericAccumulator {
    type Item = f64;

    fn append(&mut self, item: f64) {
        NumericAccumulator::append(self, item);
    }

    fn merge(&mut self, other: &Self) {
        self.merge_stats(other);
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Summarize for NumericAccumulator {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        NumericAccumulator::variance(self)
    }
}

impl Extend<f64> for NumericAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl FromIterator<f64> for NumericAccumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// `"<mean> +/- <stddev> (<count>)"` with two significant figures in the stddev
impl fmt::Display for NumericAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(SignificantFigures::DEFAULT), f)
    }
}

/// Display adapter returned by [`NumericAccumulator::display_with`]
#[derive(Clone, Copy, Debug)]
pub struct SummaryDisplay<'a> {
    acc: &'a NumericAccumulator,
    figures: SignificantFigures,
}

impl fmt::Display for SummaryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        precision::write_pair(f, self.acc.mean(), self.acc.stddev(), self.figures)?;
        write!(f, " ({})", self.acc.count())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NumericAccumulator {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("NumericAccumulator", 3)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("mean", &self.mean())?;
        state.serialize_field("stddev", &self.stddev())?;
        state.end()
    }
}
