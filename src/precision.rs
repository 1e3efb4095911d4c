//! Explicit numeric-precision context.
//!
//! Relativistic corrections at planetary scales sit 9 to 20 orders of
//! magnitude below 1, and the final answer is a subtraction of two dilation
//! factors that are both extremely close to 1. The whole pipeline therefore
//! runs on [`BigDecimal`] with a significant-digit count chosen up front and
//! held fixed for the lifetime of a comparison. Changing precision between
//! the two frame evaluations would make the comparison internally
//! inconsistent, so [`Precision`] is immutable once constructed and passed
//! by reference everywhere it is needed.

use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, Context, RoundingMode};
use thiserror::Error;

/// Precision-context construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrecisionError {
    #[error(
        "requested {0} significant digits, but quotients are computed at \
         the library's fixed {max}-digit working precision",
        max = Precision::MAX_DIGITS
    )]
    TooManyDigits(u64),
}

/// Significant-digit context for decimal arithmetic.
///
/// The context governs square roots and final rounding; addition,
/// subtraction, and multiplication on [`BigDecimal`] are exact, and
/// division runs at the library's fixed 100-digit working precision.
/// Digit counts above that working precision are rejected at
/// construction, since the extra digits could never be delivered.
#[derive(Debug, Clone)]
pub struct Precision {
    digits: NonZeroU64,
    ctx: Context,
}

impl Precision {
    /// Default significant-digit count. Comfortably above the ≥50 digits
    /// needed to resolve frame-dragging contributions near 1e-20.
    pub const DEFAULT_DIGITS: u64 = 100;

    /// Largest supported digit count — the working precision of
    /// [`BigDecimal`] division.
    pub const MAX_DIGITS: u64 = 100;

    /// Create a context carrying `digits` significant digits
    /// (half-even rounding).
    pub fn new(digits: NonZeroU64) -> Result<Self, PrecisionError> {
        if digits.get() > Self::MAX_DIGITS {
            return Err(PrecisionError::TooManyDigits(digits.get()));
        }
        Ok(Self {
            digits,
            ctx: Context::new(digits, RoundingMode::HalfEven),
        })
    }

    /// Significant digits carried by this context.
    pub fn digits(&self) -> u64 {
        self.digits.get()
    }

    /// Square root in the decimal domain.
    ///
    /// Returns `None` for negative input. Never falls back to binary
    /// floating point.
    pub fn sqrt(&self, value: &BigDecimal) -> Option<BigDecimal> {
        // Exact products upstream can be hundreds of digits wide, which
        // trips the scale handling of the underlying sqrt. The root only
        // carries `digits` anyway, so normalize the operand first.
        self.round(value).sqrt_with_context(&self.ctx)
    }

    /// Round a value to this context's significant-digit count.
    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        value.with_precision_round(self.digits, RoundingMode::HalfEven)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::new(NonZeroU64::new(Self::DEFAULT_DIGITS).expect("nonzero default"))
            .expect("default digit count is within the supported range")
    }
}
