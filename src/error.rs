//! Error types for accumulator operations

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
use alloc::string::String;

use thiserror::Error;

use crate::accumulator::AccumulatorKind;
use crate::value::{CoercionError, ValueKind};

/// Result type for accumulator operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors returned by accumulators and collections.
///
/// Every failure is deterministic: the same call with the same state fails
/// the same way, so none of these are worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The operation is not supported by this kind of accumulator.
    ///
    /// Raised when replaying a numeric accumulator, which keeps only a
    /// running summary and no raw values.
    #[error("{operation} is not supported by a {kind} accumulator")]
    InvalidOperation {
        operation: &'static str,
        kind: AccumulatorKind,
    },

    /// A value could not be appended to a numeric accumulator.
    #[error("cannot append {found} value to numeric accumulator{}: {source}", key_suffix(.key))]
    TypeMismatch {
        /// Collection key, when the append came through a [`Collection`](crate::Collection).
        key: Option<String>,
        found: ValueKind,
        #[source]
        source: CoercionError,
    },

    /// Two accumulators of different kinds cannot be merged.
    #[error("cannot merge {found} accumulator into {expected} accumulator{}", key_suffix(.key))]
    KindMismatch {
        key: Option<String>,
        expected: AccumulatorKind,
        found: AccumulatorKind,
    },

    /// A configuration value is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

fn key_suffix(key: &Option<String>) -> KeySuffix<'_> {
    KeySuffix(key.as_deref())
}

struct KeySuffix<'a>(Option<&'a str>);

impl core::fmt::Display for KeySuffix<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(key) => write!(f, " '{}'", key),
            None => Ok(()),
        }
    }
}

impl Error {
    /// Attach the collection key the failing operation was addressed to.
    pub(crate) fn with_key(self, name: &str) -> Self {
        match self {
            Error::TypeMismatch { found, source, .. } => Error::TypeMismatch {
                key: Some(name.into()),
                found,
                source,
            },
            Error::KindMismatch {
                expected, found, ..
            } => Error::KindMismatch {
                key: Some(name.into()),
                expected,
                found,
            },
            other => other,
        }
    }
}
