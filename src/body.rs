//! Spinning massive body model.
//!
//! A [`Body`] is an immutable description of a rotating mass: mass,
//! equatorial radius, spin rate, and a moment-of-inertia factor describing
//! how mass is distributed. Everything else — moment of inertia, angular
//! momentum, the Kerr spin parameter, the Schwarzschild radius — is derived
//! on demand so nothing can go stale.

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{dec, gravitational_constant, km_to_m, speed_of_light, speed_of_light_squared};

/// Moment-of-inertia factor of a uniform solid sphere.
pub const UNIFORM_SPHERE_INERTIA_FACTOR: &str = "0.4";

/// Body construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("body mass must be positive, got {0} kg")]
    NonPositiveMass(BigDecimal),

    #[error("body equatorial radius must be positive, got {0} km")]
    NonPositiveRadius(BigDecimal),
}

/// A rotating massive body.
///
/// Fields are private so a constructed body always satisfies
/// `mass > 0` and `equatorial_radius > 0`. The inertia factor is *not*
/// range-checked: values outside (0, 1] are accepted but produce
/// physically meaningless derived quantities — vetting custom bodies is
/// the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Mass (kg).
    mass: BigDecimal,
    /// Equatorial radius (m) — converted from km at construction.
    equatorial_radius: BigDecimal,
    /// Spin angular velocity (rad/s). Zero is valid; negative means
    /// retrograde.
    angular_velocity: BigDecimal,
    /// Moment-of-inertia factor k, dimensionless. 0.4 for a uniform
    /// sphere; real bodies use empirical values (Earth ≈ 0.3307,
    /// Sun ≈ 0.070).
    inertia_factor: BigDecimal,
}

impl Body {
    /// Construct a body from mass (kg), equatorial radius (km), spin
    /// angular velocity (rad/s), and moment-of-inertia factor.
    pub fn new(
        mass_kg: BigDecimal,
        radius_km: BigDecimal,
        angular_velocity: BigDecimal,
        inertia_factor: BigDecimal,
    ) -> Result<Self, BodyError> {
        if mass_kg <= BigDecimal::zero() {
            return Err(BodyError::NonPositiveMass(mass_kg));
        }
        if radius_km <= BigDecimal::zero() {
            return Err(BodyError::NonPositiveRadius(radius_km));
        }
        Ok(Self {
            mass: mass_kg,
            equatorial_radius: km_to_m(&radius_km),
            angular_velocity,
            inertia_factor,
        })
    }

    /// Construct a body with the uniform-sphere inertia factor k = 0.4.
    pub fn uniform_sphere(
        mass_kg: BigDecimal,
        radius_km: BigDecimal,
        angular_velocity: BigDecimal,
    ) -> Result<Self, BodyError> {
        Self::new(
            mass_kg,
            radius_km,
            angular_velocity,
            dec(UNIFORM_SPHERE_INERTIA_FACTOR),
        )
    }

    /// Mass (kg).
    pub fn mass(&self) -> &BigDecimal {
        &self.mass
    }

    /// Equatorial radius (m).
    pub fn equatorial_radius(&self) -> &BigDecimal {
        &self.equatorial_radius
    }

    /// Spin angular velocity (rad/s).
    pub fn angular_velocity(&self) -> &BigDecimal {
        &self.angular_velocity
    }

    /// Moment-of-inertia factor k (dimensionless).
    pub fn inertia_factor(&self) -> &BigDecimal {
        &self.inertia_factor
    }

    /// Moment of inertia I = k·M·R² (kg·m²).
    pub fn moment_of_inertia(&self) -> BigDecimal {
        &self.inertia_factor * &self.mass * &self.equatorial_radius * &self.equatorial_radius
    }

    /// Angular momentum J = I·ω (kg·m²/s).
    pub fn angular_momentum(&self) -> BigDecimal {
        self.moment_of_inertia() * &self.angular_velocity
    }

    /// Specific angular momentum a = J / (M·c) — the Kerr spin parameter,
    /// in meters.
    pub fn specific_angular_momentum(&self) -> BigDecimal {
        self.angular_momentum() / (&self.mass * speed_of_light())
    }

    /// Schwarzschild radius rs = 2·G·M / c² (m).
    pub fn schwarzschild_radius(&self) -> BigDecimal {
        dec("2") * gravitational_constant() * &self.mass / speed_of_light_squared()
    }
}
