//! Tolerances and search limits shared by the conversion routines.

/// Two decimals closer than this are considered equal.
pub const EPSILON: f64 = 1e-10;

/// The largest denominator the continued-fraction search will produce.
pub const MAX_DENOMINATOR: i64 = 10_000;

/// The largest radicand the surd search will try.
pub const MAX_RADICAND: i64 = 1000;

/// The largest denominator allowed in the coefficient of a detected surd.
pub const MAX_SURD_DENOMINATOR: i64 = 20;

/// The largest magnitude at which every integer is exactly representable as an `f64` (2^53).
/// Decimals beyond this are never reported as integers or fractions.
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Values at or above this magnitude are rendered in scientific notation.
pub const SCIENTIFIC_UPPER: f64 = 1e6;

/// Non-zero values below this magnitude are rendered in scientific notation.
pub const SCIENTIFIC_LOWER: f64 = 1e-4;

/// Values below this magnitude are displayed as `0`.
pub const DISPLAY_ZERO: f64 = 1e-15;
