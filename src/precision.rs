//! Significant-figure formatting for `value +/- uncertainty` pairs
//!
//! The uncertainty decides the precision: it is rounded to a fixed number of
//! significant figures and the central value is printed to the same decimal
//! place. With two significant figures, a stddev of `0.7071` gives two
//! decimal places and a stddev of `1234` rounds both numbers to the hundreds.

use core::fmt;

use crate::error::{Error, Result};
use crate::math;

/// Number of significant figures kept in the uncertainty
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SignificantFigures(u32);

impl SignificantFigures {
    pub const DEFAULT: SignificantFigures = SignificantFigures(2);

    /// Most figures an `f64` can meaningfully carry
    pub const MAX: u32 = 17;

    /// Create a precision setting
    ///
    /// Returns [`Error::InvalidArgument`] for zero or for more than
    /// [`SignificantFigures::MAX`].
    pub fn new(figures: u32) -> Result<Self> {
        if figures == 0 {
            return Err(Error::InvalidArgument(
                "significant figures must be at least 1",
            ));
        }
        if figures > Self::MAX {
            return Err(Error::InvalidArgument(
                "significant figures must be at most 17",
            ));
        }
        Ok(Self(figures))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Decimal places needed to show `uncertainty` with this many figures
    ///
    /// Negative results mean rounding to tens, hundreds, and so on. Returns
    /// `None` when the uncertainty is zero or not finite, in which case no
    /// rounding should be applied at all.
    pub fn decimal_places(self, uncertainty: f64) -> Option<i32> {
        if uncertainty == 0.0 || !uncertainty.is_finite() {
            return None;
        }
        let magnitude = math::ceil(math::log10(math::abs(uncertainty))) as i32;
        Some(self.0 as i32 - magnitude)
    }
}

impl Default for SignificantFigures {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Round `x` to `places` decimal places
///
/// Non-negative places are handled by the formatter, which rounds on the
/// exact decimal expansion; scaling by a power of ten first would introduce
/// its own representation error. Negative places round half to even, the
/// same tie rule the formatter applies, so `250` to the hundreds is `200`.
pub fn round_to(x: f64, places: i32) -> f64 {
    if places >= 0 {
        return x;
    }
    let factor = math::powi(10.0, -places);
    math::round_ties_even(x / factor) * factor
}

/// Write `"<value> +/- <uncertainty>"` rounded per `figures`
///
/// When the uncertainty is zero or not finite no rounding is applied and
/// both numbers use the shortest round-trip `{:?}` form: `0.0`, `42.0`,
/// `1e16`, `inf`, `NaN`. Whole numbers therefore keep their `.0` and large
/// ones switch to exponent notation without a `+` sign.
pub(crate) fn write_pair(
    f: &mut fmt::Formatter<'_>,
    value: f64,
    uncertainty: f64,
    figures: SignificantFigures,
) -> fmt::Result {
    match figures.decimal_places(uncertainty) {
        None => write!(f, "{:?} +/- {:?}", value, uncertainty),
        Some(places) => {
            let value = round_to(value, places);
            let uncertainty = round_to(uncertainty, places);
            let precision = places.max(0) as usize;
            write!(
                f,
                "{:.*} +/- {:.*}",
                precision, value, precision, uncertainty
            )
        }
    }
}
