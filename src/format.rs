//! Human-readable duration formatting.
//!
//! Picks the largest unit (days down to picoseconds) for which the
//! magnitude is at least 1, and prints six fractional digits. Works on
//! the absolute value; the caller reports the sign (faster/slower).

use bigdecimal::{BigDecimal, RoundingMode};

use crate::constants::dec;

/// Format a duration in seconds with an automatically chosen unit.
pub fn format_duration(seconds: &BigDecimal) -> String {
    let magnitude = seconds.abs();

    let (scaled, unit) = if magnitude >= dec("86400") {
        (&magnitude / dec("86400"), "days")
    } else if magnitude >= dec("3600") {
        (&magnitude / dec("3600"), "hours")
    } else if magnitude >= dec("60") {
        (&magnitude / dec("60"), "minutes")
    } else if magnitude >= dec("1") {
        (magnitude.clone(), "seconds")
    } else if magnitude >= dec("1e-3") {
        (&magnitude * dec("1e3"), "milliseconds")
    } else if magnitude >= dec("1e-6") {
        (&magnitude * dec("1e6"), "microseconds")
    } else if magnitude >= dec("1e-9") {
        (&magnitude * dec("1e9"), "nanoseconds")
    } else {
        (&magnitude * dec("1e12"), "picoseconds")
    };

    let rounded = scaled.with_scale_round(6, RoundingMode::HalfEven);
    format!("{rounded} {unit}")
}
