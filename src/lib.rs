//! # Streamtally
//!
//! Keyed streaming accumulators for repeated observations.
//!
//! Streamtally records values under names that are created on first use. A
//! key whose first value is numeric gets a summary-only accumulator that
//! tracks count, mean and sample standard deviation with Welford's online
//! algorithm, in constant memory. Any other key keeps every value it is
//! given, in order.
//!
//! ## Features
//!
//! - **Lazy keys**: [`Collection::record`] creates accumulators on demand
//! - **Type-resolved**: the first value decides generic vs numeric, once
//! - **Numerically stable**: Welford's update for mean and variance
//! - **Readable summaries**: `mean +/- stddev (count)` rounded to two
//!   significant figures of the stddev
//! - **Mergeable**: accumulators and whole collections combine exactly
//!
//! ## Quick Start
//!
//! ```rust
//! use streamtally::prelude::*;
//!
//! let mut collect = Collection::new();
//! for i in 0..10 {
//!     collect.record("counts", i).unwrap();
//!     collect.record("parity", if i % 2 == 0 { "even" } else { "odd" }).unwrap();
//! }
//!
//! let counts = collect.numeric("counts").unwrap();
//! assert_eq!(counts.mean(), 4.5);
//! assert_eq!(counts.to_string(), "4.5 +/- 3.0 (10)");
//!
//! let parity = collect.generic("parity").unwrap();
//! assert_eq!(parity.len(), 10);
//! ```
//!
//! ## Resetting
//!
//! Recording the [`RESET`] sentinel removes a key; the next value recorded
//! under it starts a fresh accumulator, classified again.
//!
//! ```rust
//! use streamtally::{AccumulatorKind, Collection, RESET};
//!
//! let mut collect = Collection::new();
//! collect.record("x", 1.0).unwrap();
//! collect.record("x", RESET).unwrap();
//! collect.record("x", "text").unwrap();
//! assert_eq!(collect.kind("x"), Some(AccumulatorKind::Generic));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it the crate is
//!   `no_std` + `alloc` and uses `libm` for math
//! - `serde`: Serialize values, accumulators and collections
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Collections emit [`tracing`] events: `debug` when a key is created,
//! reset or merged, `warn` when a value is rejected, `trace` per value.
//! Install any subscriber to see them.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub mod accumulator;
pub mod collection;
pub mod error;
pub mod factory;
pub mod measurement;
pub mod precision;
pub mod value;

mod math;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::accumulator::{Accumulator, AccumulatorKind, AnyAccumulator, NumericAccumulator};
    pub use crate::collection::{Collection, CollectionConfig, RESET};
    pub use crate::value::Value;
}

pub use accumulator::{Accumulator, AccumulatorKind, AnyAccumulator, NumericAccumulator};
pub use collection::{Collection, CollectionConfig, Observation, Reset, RESET};
pub use error::{Error, Result};
pub use factory::AccumulatorFactory;
pub use measurement::Measurement;
pub use precision::SignificantFigures;
pub use value::{CoercionError, Value, ValueKind};
