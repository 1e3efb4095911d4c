//! Equatorial Kerr metric evaluation and proper-time dilation.
//!
//! Everything here is evaluated strictly in the equatorial plane
//! (θ = π/2) of a rotating body, for a prograde circular orbit at radial
//! coordinate `r`. Metric components use the x⁰ = ct convention, so
//! `g_tt` is dimensionless, `g_tφ` carries meters, and `g_φφ` carries
//! meters². With ω̂ = ω/c the line element along the orbit gives
//!
//! ```text
//! (dτ/dt)² = −(g_tt + 2·g_tφ·ω̂ + g_φφ·ω̂²)
//! ```
//!
//! Two validity gates guard the evaluation, in order:
//! 1. **Horizon gate** — `r` must lie strictly outside the Schwarzschild
//!    radius; the formulas diverge at and inside it.
//! 2. **Timelike gate** — the quadratic form above must be negative;
//!    otherwise no physical clock can follow that orbit.
//!
//! A failed gate is a typed error for that frame, never a NaN, a default
//! factor of 1, or a partial result.

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::body::Body;
use crate::constants::{dec, gravitational_constant, speed_of_light, speed_of_light_squared};
use crate::precision::Precision;

/// Frame-evaluation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("radius {r} m is at or inside the Schwarzschild radius {rs} m")]
    InsideHorizon { r: BigDecimal, rs: BigDecimal },

    #[error("no timelike circular orbit at this radius (ds²/dt² = {interval} ≥ 0)")]
    NonTimelikeOrbit { interval: BigDecimal },
}

/// Equatorial Kerr metric components at a radial coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricComponents {
    /// Time-time component, dimensionless: −(1 − 2GM/(r·c²)).
    pub g_tt: BigDecimal,
    /// Time-azimuth (frame-dragging) component, meters: −2GM·a/(r·c²).
    pub g_tphi: BigDecimal,
    /// Azimuth-azimuth component, meters²: r² + a² + 2GM·a²/(r·c²).
    pub g_phiphi: BigDecimal,
}

/// True iff `r` lies strictly outside the body's Schwarzschild radius.
pub fn is_outside_horizon(body: &Body, r: &BigDecimal) -> bool {
    *r > body.schwarzschild_radius()
}

/// Equatorial Kerr metric components at radial coordinate `r` (m).
///
/// For a non-spinning body (a = 0) the frame-dragging component vanishes
/// and the components collapse to the Schwarzschild values.
pub fn equatorial_metric(body: &Body, r: &BigDecimal) -> MetricComponents {
    let a = body.specific_angular_momentum();
    // 2GM/c², the Schwarzschild radius, reused across all three components.
    let two_gm_c2 = dec("2") * gravitational_constant() * body.mass() / speed_of_light_squared();

    let g_tt = -(BigDecimal::from(1) - &two_gm_c2 / r);
    let g_tphi = -(&two_gm_c2 * &a / r);
    let g_phiphi = r * r + &a * &a + &two_gm_c2 * &a * &a / r;

    MetricComponents { g_tt, g_tphi, g_phiphi }
}

/// Angular velocity ω (rad/s) of a prograde circular equatorial orbit.
///
/// ```text
/// ω = (√(GM·r³) − a·GM/c) / (r³ − a²·GM/c²)
/// ```
///
/// For a = 0 this reduces to the Keplerian √(GM/r³). The denominator is
/// `r³` when a = 0, so the expression is safe for every r > 0.
///
/// # Panics
///
/// Panics if `r` is not positive; callers are expected to have built `r`
/// from a body radius plus a non-negative altitude.
pub fn orbital_angular_velocity(precision: &Precision, body: &Body, r: &BigDecimal) -> BigDecimal {
    let gm = gravitational_constant() * body.mass();
    let a = body.specific_angular_momentum();
    let c = speed_of_light();

    let gm_r3 = &gm * r * r * r;
    let sqrt_gm_r3 = precision
        .sqrt(&gm_r3)
        .expect("GM·r³ is non-negative for r > 0");

    // √(GM)·r^(3/2) = √(GM·r³)
    let numerator = sqrt_gm_r3 - &a * &gm / &c;
    let denominator = r * r * r - &a * &a * &gm / speed_of_light_squared();
    numerator / denominator
}

/// Proper-time dilation factor dτ/dt for a circular equatorial orbit at
/// radial coordinate `r` (m).
///
/// Gates in order: the horizon check first, then the timelike check on
/// the completed metric/orbit algebra. The square root is taken in the
/// decimal domain at the context's precision.
pub fn dilation_factor(
    precision: &Precision,
    body: &Body,
    r: &BigDecimal,
) -> Result<BigDecimal, EvaluationError> {
    if !is_outside_horizon(body, r) {
        return Err(EvaluationError::InsideHorizon {
            r: r.clone(),
            rs: body.schwarzschild_radius(),
        });
    }

    let metric = equatorial_metric(body, r);
    let omega = orbital_angular_velocity(precision, body, r);

    // ω̂ = ω/c makes the quadratic form dimensionless.
    let omega_hat = omega / speed_of_light();
    let interval = &metric.g_tt
        + dec("2") * &metric.g_tphi * &omega_hat
        + &metric.g_phiphi * &omega_hat * &omega_hat;

    if interval >= BigDecimal::zero() {
        return Err(EvaluationError::NonTimelikeOrbit { interval });
    }

    let dilation = precision
        .sqrt(&-&interval)
        .ok_or(EvaluationError::NonTimelikeOrbit {
            interval: BigDecimal::zero(),
        })?;
    Ok(precision.round(&dilation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bigdecimal::ToPrimitive;

    fn earth() -> Body {
        Body::new(
            dec("5.97219e24"),
            dec("6371"),
            dec("7.2921150e-5"),
            dec("0.3307"),
        )
        .unwrap()
    }

    fn earth_non_spinning() -> Body {
        Body::new(dec("5.97219e24"), dec("6371"), dec("0"), dec("0.3307")).unwrap()
    }

    #[test]
    fn test_horizon_gate_at_and_inside() {
        let body = earth();
        let rs = body.schwarzschild_radius();

        // Exactly at the horizon
        let err = dilation_factor(&Precision::default(), &body, &rs).unwrap_err();
        assert!(matches!(err, EvaluationError::InsideHorizon { .. }));

        // Inside
        let inside = &rs / dec("2");
        let err = dilation_factor(&Precision::default(), &body, &inside).unwrap_err();
        assert!(matches!(err, EvaluationError::InsideHorizon { .. }));
    }

    #[test]
    fn test_just_outside_horizon_is_not_a_region_error() {
        // Immediately above the horizon orbits are non-timelike (the
        // photon orbit sits at 1.5·rs), but that must surface as the
        // timelike gate, not the horizon gate.
        let body = earth_non_spinning();
        let r = body.schwarzschild_radius() * dec("1.000001");
        let err = dilation_factor(&Precision::default(), &body, &r).unwrap_err();
        assert!(matches!(err, EvaluationError::NonTimelikeOrbit { .. }));
    }

    #[test]
    fn test_frame_dragging_component_vanishes_without_spin() {
        let body = earth_non_spinning();
        let r = dec("6771000");
        let metric = equatorial_metric(&body, &r);
        assert!(metric.g_tphi.is_zero());
    }

    #[test]
    fn test_g_tt_matches_schwarzschild_form() {
        let body = earth();
        let r = dec("6771000");
        let metric = equatorial_metric(&body, &r);
        let expected = -(1.0 - (body.schwarzschild_radius() / &r).to_f64().unwrap());
        assert_relative_eq!(metric.g_tt.to_f64().unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_keplerian_omega_for_non_spinning_body() {
        // √(GM/r³) at ISS altitude ≈ 1.1331e-3 rad/s → ~92.4 min period
        let body = earth_non_spinning();
        let omega = orbital_angular_velocity(&Precision::default(), &body, &dec("6771000"));
        let period_min = std::f64::consts::TAU / omega.to_f64().unwrap() / 60.0;
        assert_relative_eq!(period_min, 92.41, epsilon = 0.01);
    }

    #[test]
    fn test_keplerian_omega_at_small_radius() {
        // At r = 2·rs the exact product GM·r³ is hundreds of digits wide;
        // ω must still match the Keplerian √(GM/r³) to f64 accuracy.
        let precision = Precision::default();
        let body = earth_non_spinning();
        let r = body.schwarzschild_radius() * dec("2");
        let omega = orbital_angular_velocity(&precision, &body, &r)
            .to_f64()
            .unwrap();

        let gm = 6.67430e-11 * 5.97219e24;
        let r_f = r.to_f64().unwrap();
        let expected = (gm / (r_f * r_f * r_f)).sqrt();
        assert_relative_eq!(omega, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_spin_slows_prograde_orbit() {
        // Frame dragging subtracts a·GM/c from the numerator, so the
        // prograde ω is strictly below the Keplerian value.
        let precision = Precision::default();
        let r = dec("6771000");
        let with_spin = orbital_angular_velocity(&precision, &earth(), &r);
        let without = orbital_angular_velocity(&precision, &earth_non_spinning(), &r);
        assert!(with_spin < without);
    }

    #[test]
    fn test_reduces_to_schwarzschild_without_spin() {
        // a = 0 collapses Kerr to Schwarzschild: dτ/dt must agree with
        // √(1 − rs/r) to within the orbital-velocity term (~3e-10 at LEO).
        let precision = Precision::default();
        let body = earth_non_spinning();
        let r = dec("6771000");

        let dilation = dilation_factor(&precision, &body, &r).unwrap();
        let schwarzschild = precision
            .sqrt(&(BigDecimal::from(1) - body.schwarzschild_radius() / &r))
            .unwrap();

        let diff = (&dilation - &schwarzschild).abs();
        assert!(diff < dec("1e-9"), "Kerr vs Schwarzschild diff = {diff}");
    }

    #[test]
    fn test_dilation_factor_known_value_at_two_rs() {
        // For a = 0, (dτ/dt)² = 1 − 3·rs/(2r); at r = 2·rs that is 1/4.
        let precision = Precision::default();
        let body = earth_non_spinning();
        let r = body.schwarzschild_radius() * dec("2");
        let dilation = dilation_factor(&precision, &body, &r).unwrap();
        assert_relative_eq!(dilation.to_f64().unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_dilation_strictly_increasing_in_radius() {
        let precision = Precision::default();
        let body = earth_non_spinning();
        let rs = body.schwarzschild_radius();

        let radii = [
            &rs * dec("2"),
            &rs * dec("3"),
            &rs * dec("10"),
            dec("6371000"),
            dec("6771000"),
            dec("42164000"),
        ];

        let mut previous: Option<BigDecimal> = None;
        for r in radii {
            let dilation = dilation_factor(&precision, &body, &r).unwrap();
            if let Some(prev) = previous {
                assert!(dilation > prev, "dilation not increasing at r = {r}");
            }
            previous = Some(dilation);
        }
    }

    #[test]
    fn test_dilation_below_one_for_bound_orbit() {
        let precision = Precision::default();
        let dilation = dilation_factor(&precision, &earth(), &dec("6771000")).unwrap();
        assert!(dilation < BigDecimal::from(1));
        assert!(dilation > dec("0.999999"));
    }

    #[test]
    fn test_compact_body_rejected_at_surface() {
        // 1e35 kg in a 100 km radius: rs ≈ 1.485e8 m, far outside the body.
        let body = Body::uniform_sphere(dec("1e35"), dec("100"), dec("0")).unwrap();
        let err = dilation_factor(&Precision::default(), &body, body.equatorial_radius())
            .unwrap_err();
        match err {
            EvaluationError::InsideHorizon { rs, .. } => {
                assert_relative_eq!(rs.to_f64().unwrap(), 1.4852e8, max_relative = 1e-3);
            }
            other => panic!("expected InsideHorizon, got {other:?}"),
        }
    }
}
