//! Quantity and scale factor types
//!
//! Amounts and factors are exact rationals: denominators stay positive
//! and fractions stay in lowest terms through every operation, so
//! repeated scale/format cycles cannot drift.

use std::fmt;

use num_rational::Rational64;
use num_traits::Zero;
use thiserror::Error;

/// Largest accepted scale factor
const MAX_FACTOR: Rational64 = Rational64::new_raw(8, 1);

/// A parsed ingredient amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantity {
    /// A single exact amount
    Exact(Rational64),
    /// A low-to-high span, e.g. "2-3"; low never exceeds high
    Range(Rational64, Rational64),
    /// Text with no extractable numeric value, preserved verbatim
    Opaque(String),
}

impl Quantity {
    /// Multiply by a scale factor. Opaque amounts pass through
    /// unchanged; scaling never touches non-numeric text.
    pub fn scale(&self, factor: ScaleFactor) -> Quantity {
        match self {
            Quantity::Exact(value) => Quantity::Exact(*value * factor.ratio()),
            Quantity::Range(low, high) => {
                Quantity::Range(*low * factor.ratio(), *high * factor.ratio())
            }
            Quantity::Opaque(text) => Quantity::Opaque(text.clone()),
        }
    }

    /// Whether this amount carries a numeric value
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Quantity::Opaque(_))
    }
}

/// Scale factor rejection reasons
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleFactorError {
    #[error("scale factor must be positive, got {0}")]
    NotPositive(Rational64),

    #[error("scale factor {0} exceeds the 8x maximum")]
    TooLarge(Rational64),

    #[error("scale factor denominator cannot be zero")]
    ZeroDenominator,

    #[error("scale factor {0} cannot be represented as a fraction")]
    NotRepresentable(f64),
}

/// A positive rational multiplier applied uniformly to every amount in
/// a recipe. Construction enforces 0 < factor <= 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScaleFactor(Rational64);

impl ScaleFactor {
    /// The identity factor
    pub const ONE: ScaleFactor = ScaleFactor(Rational64::new_raw(1, 1));

    /// The discrete factors offered by the recipe scale stepper
    pub const UI_STEPS: [ScaleFactor; 8] = [
        ScaleFactor(Rational64::new_raw(1, 2)),
        ScaleFactor(Rational64::new_raw(1, 1)),
        ScaleFactor(Rational64::new_raw(3, 2)),
        ScaleFactor(Rational64::new_raw(2, 1)),
        ScaleFactor(Rational64::new_raw(5, 2)),
        ScaleFactor(Rational64::new_raw(3, 1)),
        ScaleFactor(Rational64::new_raw(7, 2)),
        ScaleFactor(Rational64::new_raw(4, 1)),
    ];

    /// Build a factor from a numerator and denominator
    pub fn new(numer: i64, denom: i64) -> Result<ScaleFactor, ScaleFactorError> {
        if denom == 0 {
            return Err(ScaleFactorError::ZeroDenominator);
        }
        Self::from_ratio(Rational64::new(numer, denom))
    }

    /// Build a factor from an exact ratio
    pub fn from_ratio(ratio: Rational64) -> Result<ScaleFactor, ScaleFactorError> {
        if ratio <= Rational64::zero() {
            Err(ScaleFactorError::NotPositive(ratio))
        } else if ratio > MAX_FACTOR {
            Err(ScaleFactorError::TooLarge(ratio))
        } else {
            Ok(ScaleFactor(ratio))
        }
    }

    /// Build a factor from a float, e.g. a UI stepper value. Exact for
    /// every stepper step since those are all multiples of one half.
    pub fn from_f64(value: f64) -> Result<ScaleFactor, ScaleFactorError> {
        let ratio = Rational64::approximate_float(value)
            .ok_or(ScaleFactorError::NotRepresentable(value))?;
        Self::from_ratio(ratio)
    }

    /// The underlying exact ratio
    pub fn ratio(self) -> Rational64 {
        self.0
    }

    /// Approximate float value, for servings arithmetic
    pub fn to_f64(self) -> f64 {
        *self.0.numer() as f64 / *self.0.denom() as f64
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        ScaleFactor::ONE
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
