//! Keyed collection of accumulators
//!
//! A [`Collection`] maps names to accumulators that are created on first
//! use. The first value recorded under a key decides, once, whether the key
//! gets a generic or a numeric accumulator; every later value is appended to
//! that same accumulator until the key is reset.
//!
//! # Example
//!
//! ```
//! use streamtally::{Collection, RESET};
//!
//! let mut collect = Collection::new();
//! for i in [4.0, 7.0, 13.0, 16.0] {
//!     collect.record("counts", 1e10 + i).unwrap();
//! }
//! collect.record("labels", "dark").unwrap();
//!
//! assert_eq!(collect.get("counts").unwrap().to_string(), "10000000010.0 +/- 5.5 (4)");
//! assert_eq!(collect.get("labels").unwrap().to_string(), "[\"dark\"]");
//!
//! // Resetting drops the accumulator; the next write starts over
//! collect.record("counts", RESET).unwrap();
//! assert!(collect.get("counts").is_none());
//! ```

use core::fmt;

#[cfg(feature = "std")]
use std::{collections::BTreeMap, string::String, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, string::String, vec::Vec};

use tracing::{debug, trace, warn};

use crate::accumulator::{Accumulator, AccumulatorKind, AnyAccumulator, NumericAccumulator};
use crate::error::{Error, Result};
use crate::factory::AccumulatorFactory;
use crate::precision::SignificantFigures;
use crate::value::Value;

/// Sentinel that removes a key's accumulator when recorded
///
/// It is its own type, so no observation value can ever be mistaken for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reset;

/// The reset sentinel, see [`Collection::record`]
pub const RESET: Reset = Reset;

/// What [`Collection::record`] accepts: a value to append, or a reset
#[derive(Clone, Debug, PartialEq)]
pub enum Observation {
    Value(Value),
    Reset,
}

impl From<Reset> for Observation {
    fn from(_: Reset) -> Self {
        Observation::Reset
    }
}

impl From<Value> for Observation {
    fn from(v: Value) -> Self {
        Observation::Value(v)
    }
}

macro_rules! impl_observation_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Observation {
                fn from(v: $t) -> Self {
                    Observation::Value(Value::from(v))
                }
            }
        )*
    };
}

impl_observation_from!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, &str, String
);

impl<T: Into<Value>> From<Vec<T>> for Observation {
    fn from(v: Vec<T>) -> Self {
        Observation::Value(Value::from(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Observation {
    fn from(v: Option<T>) -> Self {
        Observation::Value(Value::from(v))
    }
}

/// Configuration for a [`Collection`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Significant figures kept in the stddev when rendering numeric entries
    pub significant_figures: SignificantFigures,
}

/// Mapping from key to accumulator with lazy, type-resolving creation
///
/// Mutation needs `&mut self`, so a collection shared between threads must
/// sit behind a lock held across the whole [`record`](Self::record) call.
/// Otherwise two writers could race to create different kinds for one key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collection {
    entries: BTreeMap<String, AnyAccumulator>,
    config: CollectionConfig,
}

impl Collection {
    /// Create an empty collection with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CollectionConfig) -> Self {
        Self {
            entries: BTreeMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    /// Record an observation under `key`
    ///
    /// - [`RESET`] removes the key's accumulator, if any, and nothing else.
    /// - Otherwise, if the key is new, an accumulator is created with the
    ///   kind [`AccumulatorFactory::classify`] picks for this value.
    /// - The value is then appended. A numeric key rejects values with no
    ///   numeric interpretation with [`Error::TypeMismatch`], leaving the
    ///   accumulator as it was.
    pub fn record(&mut self, key: &str, observation: impl Into<Observation>) -> Result<()> {
        let value = match observation.into() {
            Observation::Reset => {
                self.reset(key);
                return Ok(());
            }
            Observation::Value(value) => value,
        };

        match self.entries.get_mut(key) {
            Some(acc) => {
                if let Err(err) = acc.append(value) {
                    let err = err.with_key(key);
                    warn!(key, error = %err, "rejected value");
                    return Err(err);
                }
            }
            None => {
                let mut acc = AccumulatorFactory::create(&value);
                debug!(key, kind = %acc.kind(), "created accumulator");
                acc.append(value).map_err(|err| err.with_key(key))?;
                self.entries.insert(key.into(), acc);
            }
        }
        trace!(key, "recorded value");
        Ok(())
    }

    /// Record every value of `values` under `key`, stopping at the first error
    pub fn record_all<I>(&mut self, key: &str, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Observation>,
    {
        for value in values {
            self.record(key, value)?;
        }
        Ok(())
    }

    /// Remove the accumulator for `key`, returning it
    ///
    /// The next write to `key` re-runs classification from scratch.
    pub fn reset(&mut self, key: &str) -> Option<AnyAccumulator> {
        let removed = self.entries.remove(key);
        if let Some(acc) = &removed {
            debug!(key, kind = %acc.kind(), count = acc.count(), "reset accumulator");
        }
        removed
    }

    pub fn get(&self, key: &str) -> Option<&AnyAccumulator> {
        self.entries.get(key)
    }

    /// The numeric accumulator for `key`, if the key exists and is numeric
    pub fn numeric(&self, key: &str) -> Option<&NumericAccumulator> {
        self.get(key).and_then(AnyAccumulator::as_numeric)
    }

    /// The generic accumulator for `key`, if the key exists and is generic
    pub fn generic(&self, key: &str) -> Option<&Accumulator<Value>> {
        self.get(key).and_then(AnyAccumulator::as_generic)
    }

    /// Kind of accumulator backing `key`
    pub fn kind(&self, key: &str) -> Option<AccumulatorKind> {
        self.get(key).map(AnyAccumulator::kind)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnyAccumulator)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Remove every key
    pub fn clear(&mut self) {
        debug!(keys = self.entries.len(), "cleared collection");
        self.entries.clear();
    }

    /// Fold every entry of `other` into this collection
    ///
    /// Keys only in `other` are copied over. Shared keys must have the same
    /// kind; if any does not, [`Error::KindMismatch`] is returned and
    /// nothing is changed.
    pub fn merge(&mut self, other: &Collection) -> Result<()> {
        for (key, theirs) in &other.entries {
            if let Some(ours) = self.entries.get(key) {
                if ours.kind() != theirs.kind() {
                    return Err(Error::KindMismatch {
                        key: Some(key.clone()),
                        expected: ours.kind(),
                        found: theirs.kind(),
                    });
                }
            }
        }

        for (key, theirs) in &other.entries {
            match self.entries.get_mut(key) {
                Some(ours) => ours.merge(theirs).map_err(|err| err.with_key(key))?,
                None => {
                    self.entries.insert(key.clone(), theirs.clone());
                }
            }
        }
        debug!(keys = other.entries.len(), "merged collection");
        Ok(())
    }

    /// One `key: summary` line per entry, in key order
    ///
    /// ```
    /// use streamtally::Collection;
    ///
    /// let mut c = Collection::new();
    /// c.record_all("x", [1, 2]).unwrap();
    /// c.record("tag", "a").unwrap();
    /// assert_eq!(c.report().to_string(), "tag: [\"a\"]\nx: 1.50 +/- 0.71 (2)\n");
    /// ```
    pub fn report(&self) -> Report<'_> {
        Report { collection: self }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a String, &'a AnyAccumulator);
    type IntoIter = <&'a BTreeMap<String, AnyAccumulator> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Display adapter returned by [`Collection::report`]
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    collection: &'a Collection,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let figures = self.collection.config.significant_figures;
        for (key, acc) in self.collection.iter() {
            writeln!(f, "{}: {}", key, acc.display_with(figures))?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Collection {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.entries, serializer)
    }
}
