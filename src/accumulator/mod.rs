//! Accumulators for repeated observations
//!
//! Two kinds of accumulator exist:
//!
//! - [`Accumulator`]: keeps every value in insertion order and can replay them
//! - [`NumericAccumulator`]: keeps only count, mean and variance
//!
//! [`AnyAccumulator`] holds either one behind a single type, which is what a
//! [`Collection`](crate::Collection) stores per key. The kind is picked by
//! [`AccumulatorFactory`](crate::AccumulatorFactory) from the first value.
//!
//! # Example
//!
//! ```
//! use streamtally::{AccumulatorFactory, AccumulatorKind, Value};
//!
//! let mut acc = AccumulatorFactory::create(&Value::from(3));
//! assert_eq!(acc.kind(), AccumulatorKind::Numeric);
//!
//! acc.append(Value::from(3)).unwrap();
//! acc.append(Value::from(5)).unwrap();
//! assert_eq!(acc.to_string(), "4.0 +/- 1.4 (2)");
//!
//! // Numeric accumulators do not keep their values
//! assert!(acc.values().is_err());
//! ```

mod generic;
mod numeric;

pub use generic::Accumulator;
pub use numeric::{NumericAccumulator, SummaryDisplay};

use core::fmt;

use crate::error::{Error, Result};
use crate::precision::SignificantFigures;
use crate::traits::Accumulate;
use crate::value::Value;

/// Which kind of accumulator backs a key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AccumulatorKind {
    /// Order-preserving, keeps every value
    Generic,
    /// Summary-only, keeps count/mean/variance
    Numeric,
}

impl AccumulatorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            AccumulatorKind::Generic => "generic",
            AccumulatorKind::Numeric => "numeric",
        }
    }
}

impl fmt::Display for AccumulatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either kind of accumulator over [`Value`]s
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AnyAccumulator {
    Generic(Accumulator<Value>),
    Numeric(NumericAccumulator),
}

impl AnyAccumulator {
    /// An empty accumulator of the given kind
    pub fn empty(kind: AccumulatorKind) -> Self {
        match kind {
            AccumulatorKind::Generic => AnyAccumulator::Generic(Accumulator::new()),
            AccumulatorKind::Numeric => AnyAccumulator::Numeric(NumericAccumulator::new()),
        }
    }

    pub fn kind(&self) -> AccumulatorKind {
        match self {
            AnyAccumulator::Generic(_) => AccumulatorKind::Generic,
            AnyAccumulator::Numeric(_) => AccumulatorKind::Numeric,
        }
    }

    /// Append a value
    ///
    /// Generic accumulators accept anything. Numeric accumulators fail with
    /// [`Error::TypeMismatch`] for values that do not coerce to a float, and
    /// are left unchanged.
    pub fn append(&mut self, value: Value) -> Result<()> {
        match self {
            AnyAccumulator::Generic(acc) => {
                acc.append(value);
                Ok(())
            }
            AnyAccumulator::Numeric(acc) => acc.try_append(&value),
        }
    }

    /// Number of values appended
    pub fn count(&self) -> u64 {
        match self {
            AnyAccumulator::Generic(acc) => Accumulate::count(acc),
            AnyAccumulator::Numeric(acc) => acc.count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Replay the recorded values in insertion order
    ///
    /// Fails with [`Error::InvalidOperation`] for a numeric accumulator,
    /// whatever its count, since it never retained the values.
    pub fn values(&self) -> Result<core::slice::Iter<'_, Value>> {
        match self {
            AnyAccumulator::Generic(acc) => Ok(acc.iter()),
            AnyAccumulator::Numeric(_) => Err(Error::InvalidOperation {
                operation: "replay",
                kind: AccumulatorKind::Numeric,
            }),
        }
    }

    pub fn as_generic(&self) -> Option<&Accumulator<Value>> {
        match self {
            AnyAccumulator::Generic(acc) => Some(acc),
            AnyAccumulator::Numeric(_) => None,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericAccumulator> {
        match self {
            AnyAccumulator::Numeric(acc) => Some(acc),
            AnyAccumulator::Generic(_) => None,
        }
    }

    /// Fold `other` into `self`
    ///
    /// Fails with [`Error::KindMismatch`] when the kinds differ.
    pub fn merge(&mut self, other: &AnyAccumulator) -> Result<()> {
        match (self, other) {
            (AnyAccumulator::Generic(a), AnyAccumulator::Generic(b)) => a.merge(b),
            (AnyAccumulator::Numeric(a), AnyAccumulator::Numeric(b)) => a.merge(b),
            (this, other) => {
                return Err(Error::KindMismatch {
                    key: None,
                    expected: this.kind(),
                    found: other.kind(),
                })
            }
        }
        Ok(())
    }

    /// Display with a custom number of significant figures
    ///
    /// Only numeric accumulators are affected; generic ones render as a list.
    pub fn display_with(&self, figures: SignificantFigures) -> AnyDisplay<'_> {
        AnyDisplay { acc: self, figures }
    }
}

impl From<Accumulator<Value>> for AnyAccumulator {
    fn from(acc: Accumulator<Value>) -> Self {
        AnyAccumulator::Generic(acc)
    }
}

impl From<NumericAccumulator> for AnyAccumulator {
    fn from(acc: NumericAccumulator) -> Self {
        AnyAccumulator::Numeric(acc)
    }
}

impl fmt::Display for AnyAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(SignificantFigures::DEFAULT), f)
    }
}

/// Display adapter returned by [`AnyAccumulator::display_with`]
#[derive(Clone, Copy, Debug)]
pub struct AnyDisplay<'a> {
    acc: &'a AnyAccumulator,
    figures: SignificantFigures,
}

impl fmt::Display for AnyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.acc {
            AnyAccumulator::Generic(acc) => fmt::Display::fmt(acc, f),
            AnyAccumulator::Numeric(acc) => fmt::Display::fmt(&acc.display_with(self.figures), f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_values_always_fail() {
        let mut acc = AnyAccumulator::empty(AccumulatorKind::Numeric);
        assert!(matches!(
            acc.values(),
            Err(Error::InvalidOperation {
                kind: AccumulatorKind::Numeric,
                ..
            })
        ));

        for v in 0..10 {
            acc.append(Value::from(v)).unwrap();
        }
        assert!(acc.values().is_err());
    }

    #[test]
    fn test_generic_accepts_anything() {
        let mut acc = AnyAccumulator::empty(AccumulatorKind::Generic);
        acc.append(Value::from("a")).unwrap();
        acc.append(Value::from(1.5)).unwrap();
        acc.append(Value::Null).unwrap();

        let values: Vec<_> = acc.values().unwrap().cloned().collect();
        assert_eq!(
            values,
            vec![Value::from("a"), Value::from(1.5), Value::Null]
        );
        assert_eq!(acc.count(), 3);
        assert_eq!(acc.to_string(), "[\"a\", 1.5, null]");
    }

    #[test]
    fn test_numeric_rejects_text() {
        let mut acc = AnyAccumulator::empty(AccumulatorKind::Numeric);
        acc.append(Value::from(1.0)).unwrap();

        let err = acc.append(Value::from("2")).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
        assert_eq!(acc.count(), 1);
    }

    #[test]
    fn test_merge_kind_mismatch() {
        let mut a = AnyAccumulator::empty(AccumulatorKind::Numeric);
        let b = AnyAccumulator::empty(AccumulatorKind::Generic);

        assert_eq!(
            a.merge(&b),
            Err(Error::KindMismatch {
                key: None,
                expected: AccumulatorKind::Numeric,
                found: AccumulatorKind::Generic,
            })
        );
    }

    #[test]
    fn test_merge_same_kind() {
        let mut a = AnyAccumulator::from(NumericAccumulator::from_iter([1.0, 2.0]));
        let b = AnyAccumulator::from(NumericAccumulator::from_iter([3.0]));
        a.merge(&b).unwrap();
        assert_eq!(a.count(), 3);
        assert_eq!(a.as_numeric().map(|n| n.mean()), Some(2.0));
    }

    #[test]
    fn test_count_only_grows() {
        let mut acc = AnyAccumulator::empty(AccumulatorKind::Numeric);
        let mut last = acc.count();
        for v in [1.0, -2.0, 3.5] {
            acc.append(Value::from(v)).unwrap();
            assert!(acc.count() > last);
            last = acc.count();
        }
        acc.merge(&AnyAccumulator::empty(AccumulatorKind::Numeric))
            .unwrap();
        assert_eq!(acc.count(), last);
    }
}
