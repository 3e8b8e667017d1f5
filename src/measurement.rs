//! Values with an attached standard uncertainty
//!
//! A [`Measurement`] is what a [`NumericAccumulator`](crate::NumericAccumulator)
//! reduces to once the count no longer matters: a central value and its
//! standard deviation. Arithmetic propagates uncertainty to first order,
//! treating operands as independent.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::math;
use crate::precision::{self, SignificantFigures};

/// A central value with a standard uncertainty
///
/// # Example
///
/// ```
/// use streamtally::Measurement;
///
/// let a = Measurement::new(10.0, 3.0);
/// let b = Measurement::new(5.0, 4.0);
///
/// let diff = a - b;
/// assert_eq!(diff.value(), 5.0);
/// assert_eq!(diff.uncertainty(), 5.0);
/// assert_eq!(diff.to_string(), "5.0 +/- 5.0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Measurement {
    value: f64,
    uncertainty: f64,
}

impl Measurement {
    /// Create a measurement; the sign of `uncertainty` is dropped
    pub fn new(value: f64, uncertainty: f64) -> Self {
        Self {
            value,
            uncertainty: math::abs(uncertainty),
        }
    }

    /// A measurement with no uncertainty
    pub fn exact(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn uncertainty(&self) -> f64 {
        self.uncertainty
    }

    /// Uncertainty relative to the magnitude of the value
    ///
    /// Infinite for a zero value with non-zero uncertainty, and `0.0` for an
    /// exact zero.
    pub fn relative_uncertainty(&self) -> f64 {
        if self.uncertainty == 0.0 {
            0.0
        } else {
            self.uncertainty / math::abs(self.value)
        }
    }

    /// Whether `x` lies within `k` uncertainties of the value
    pub fn is_consistent_with(&self, x: f64, k: f64) -> bool {
        math::abs(self.value - x) <= k * self.uncertainty
    }

    /// Display with a custom number of significant figures in the uncertainty
    pub fn display_with(&self, figures: SignificantFigures) -> MeasurementDisplay {
        MeasurementDisplay {
            measurement: *self,
            figures,
        }
    }
}

impl Add for Measurement {
    type Output = Measurement;

    fn add(self, rhs: Measurement) -> Measurement {
        Measurement::new(
            self.value + rhs.value,
            math::hypot(self.uncertainty, rhs.uncertainty),
        )
    }
}

impl Sub for Measurement {
    type Output = Measurement;

    fn sub(self, rhs: Measurement) -> Measurement {
        Measurement::new(
            self.value - rhs.value,
            math::hypot(self.uncertainty, rhs.uncertainty),
        )
    }
}

impl Mul<f64> for Measurement {
    type Output = Measurement;

    fn mul(self, rhs: f64) -> Measurement {
        Measurement::new(self.value * rhs, self.uncertainty * rhs)
    }
}

impl Neg for Measurement {
    type Output = Measurement;

    fn neg(self) -> Measurement {
        Measurement::new(-self.value, self.uncertainty)
    }
}

impl From<f64> for Measurement {
    fn from(value: f64) -> Self {
        Measurement::exact(value)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        precision::write_pair(f, self.value, self.uncertainty, SignificantFigures::DEFAULT)
    }
}

/// Display adapter returned by [`Measurement::display_with`]
#[derive(Clone, Copy, Debug)]
pub struct MeasurementDisplay {
    measurement: Measurement,
    figures: SignificantFigures,
}

impl fmt::Display for MeasurementDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        precision::write_pair(
            f,
            self.measurement.value,
            self.measurement.uncertainty,
            self.figures,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_propagation() {
        let a = Measurement::new(1.0, 0.3);
        let b = Measurement::new(2.0, 0.4);

        let sum = a + b;
        assert_eq!(sum.value(), 3.0);
        assert!((sum.uncertainty() - 0.5).abs() < 1e-12);

        let scaled = a * -2.0;
        assert_eq!(scaled.value(), -2.0);
        assert!((scaled.uncertainty() - 0.6).abs() < 1e-12);

        let neg = -b;
        assert_eq!(neg.value(), -2.0);
        assert_eq!(neg.uncertainty(), 0.4);
    }

    #[test]
    fn test_exact() {
        let m = Measurement::from(4.0);
        assert_eq!(m.uncertainty(), 0.0);
        assert_eq!(m.relative_uncertainty(), 0.0);
        assert_eq!(m.to_string(), "4.0 +/- 0.0");
    }

    #[test]
    fn test_consistency() {
        let m = Measurement::new(10.0, 2.0);
        assert!(m.is_consistent_with(13.0, 2.0));
        assert!(!m.is_consistent_with(15.0, 2.0));
        assert_eq!(m.relative_uncertainty(), 0.2);
    }

    #[test]
    fn test_display() {
        let m = Measurement::new(1.23456, 0.0123);
        assert_eq!(m.to_string(), "1.235 +/- 0.012");
        assert_eq!(
            m.display_with(SignificantFigures::new(1).unwrap()).to_string(),
            "1.23 +/- 0.01"
        );
    }
}
