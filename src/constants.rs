//! Physical constants and unit conversions.
//!
//! Constants are stored as decimal string literals and materialized as
//! [`BigDecimal`] on demand, so no precision is lost before the first
//! arithmetic operation touches them.

use std::str::FromStr;

use bigdecimal::BigDecimal;

/// Newtonian gravitational constant G (m³ kg⁻¹ s⁻²) — CODATA 2018.
pub const GRAVITATIONAL_CONSTANT: &str = "6.67430e-11";

/// Speed of light in vacuum c (m/s) — exact by SI definition.
pub const SPEED_OF_LIGHT: &str = "299792458";

/// Meters per kilometer.
pub const METERS_PER_KM: &str = "1000";

/// G as a [`BigDecimal`].
pub fn gravitational_constant() -> BigDecimal {
    dec(GRAVITATIONAL_CONSTANT)
}

/// c as a [`BigDecimal`].
pub fn speed_of_light() -> BigDecimal {
    dec(SPEED_OF_LIGHT)
}

/// c² as a [`BigDecimal`].
pub fn speed_of_light_squared() -> BigDecimal {
    let c = speed_of_light();
    &c * &c
}

/// Convert kilometers to meters.
pub fn km_to_m(km: &BigDecimal) -> BigDecimal {
    km * dec(METERS_PER_KM)
}

/// Parse a known-good decimal literal.
pub(crate) fn dec(literal: &str) -> BigDecimal {
    BigDecimal::from_str(literal).expect("valid decimal literal")
}
