//! Math function wrappers for std/no_std compatibility
//!
//! Uses standard library math when available, falls back to libm for no_std.

#[cfg(feature = "std")]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn log10(x: f64) -> f64 {
    x.log10()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn log10(x: f64) -> f64 {
    libm::log10(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn round_ties_even(x: f64) -> f64 {
    x.round_ties_even()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn round_ties_even(x: f64) -> f64 {
    libm::roundeven(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn abs(x: f64) -> f64 {
    x.abs()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    x.powi(n)
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    libm::pow(x, n as f64)
}

/// `sqrt(a² + b²)`, used to combine independent uncertainties
#[cfg(feature = "std")]
#[inline]
pub fn hypot(a: f64, b: f64) -> f64 {
    a.hypot(b)
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn hypot(a: f64, b: f64) -> f64 {
    libm::hypot(a, b)
}
