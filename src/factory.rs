//! Choosing an accumulator kind from a sample value

use tracing::trace;

use crate::accumulator::{AccumulatorKind, AnyAccumulator};
use crate::value::Value;

/// Decides which accumulator kind suits a key, from its first value
///
/// A value is numeric when [`Value::to_f64`] succeeds. Text is never
/// numeric, even `"2.0"`, so strings always land in a generic accumulator.
///
/// ```
/// use streamtally::{AccumulatorFactory, AccumulatorKind, Value};
///
/// assert_eq!(AccumulatorFactory::classify(&Value::from(2.0)), AccumulatorKind::Numeric);
/// assert_eq!(AccumulatorFactory::classify(&Value::from("2.0")), AccumulatorKind::Generic);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AccumulatorFactory;

impl AccumulatorFactory {
    /// Classify a sample value
    pub fn classify(sample: &Value) -> AccumulatorKind {
        match sample.to_f64() {
            Ok(_) => AccumulatorKind::Numeric,
            Err(reason) => {
                trace!(kind = %sample.kind(), %reason, "sample is not numeric");
                AccumulatorKind::Generic
            }
        }
    }

    /// An empty accumulator of the kind `sample` classifies as
    ///
    /// The sample itself is not appended.
    pub fn create(sample: &Value) -> AnyAccumulator {
        AnyAccumulator::empty(Self::classify(sample))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let numeric = [
            Value::from(2.0),
            Value::from(-3),
            Value::from(7u64),
            Value::from(true),
            Value::from(f64::NAN),
        ];
        for v in &numeric {
            assert_eq!(AccumulatorFactory::classify(v), AccumulatorKind::Numeric, "{v}");
        }

        let generic = [
            Value::from("2.0"),
            Value::from("abc"),
            Value::from(""),
            Value::Null,
            Value::from(vec![2, 3]),
        ];
        for v in &generic {
            assert_eq!(AccumulatorFactory::classify(v), AccumulatorKind::Generic, "{v}");
        }
    }

    #[test]
    fn test_create_is_empty() {
        let acc = AccumulatorFactory::create(&Value::from(1));
        assert!(acc.is_empty());
        assert_eq!(acc.kind(), AccumulatorKind::Numeric);

        let acc = AccumulatorFactory::create(&Value::from("1"));
        assert!(acc.is_empty());
        assert_eq!(acc.kind(), AccumulatorKind::Generic);
    }
}
