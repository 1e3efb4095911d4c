//! Preset celestial bodies.
//!
//! Masses, equatorial radii, spin rates, and measured moment-of-inertia
//! factors for the major Solar System bodies, plus R136a1 as an example
//! of an extreme stellar mass. Constants are kept as decimal strings and
//! materialized as [`Body`] values on lookup.

use crate::body::Body;
use crate::constants::dec;

/// One catalog row: name plus the four construction scalars.
struct Preset {
    name: &'static str,
    mass_kg: &'static str,
    radius_km: &'static str,
    angular_velocity: &'static str,
    inertia_factor: &'static str,
}

const PRESETS: [Preset; 10] = [
    Preset {
        name: "Sun",
        mass_kg: "1.9885e30",
        radius_km: "696340",
        angular_velocity: "2.865e-6",
        inertia_factor: "0.070",
    },
    Preset {
        name: "Mercury",
        mass_kg: "3.3011e23",
        radius_km: "2439.7",
        angular_velocity: "1.240e-6",
        inertia_factor: "0.346",
    },
    Preset {
        name: "Venus",
        mass_kg: "4.8675e24",
        radius_km: "6051.8",
        angular_velocity: "2.99e-7",
        inertia_factor: "0.337",
    },
    Preset {
        name: "Earth",
        mass_kg: "5.97219e24",
        radius_km: "6371",
        angular_velocity: "7.2921150e-5",
        inertia_factor: "0.3307",
    },
    Preset {
        name: "Mars",
        mass_kg: "6.4171e23",
        radius_km: "3389.5",
        angular_velocity: "7.088e-5",
        inertia_factor: "0.366",
    },
    Preset {
        name: "Jupiter",
        mass_kg: "1.89813e27",
        radius_km: "69911",
        angular_velocity: "1.758e-4",
        inertia_factor: "0.254",
    },
    Preset {
        name: "Saturn",
        mass_kg: "5.68319e26",
        radius_km: "58232",
        angular_velocity: "1.637e-4",
        inertia_factor: "0.220",
    },
    Preset {
        name: "Uranus",
        mass_kg: "8.6810e25",
        radius_km: "25362",
        angular_velocity: "1.012e-4",
        inertia_factor: "0.229",
    },
    Preset {
        name: "Neptune",
        mass_kg: "1.02413e26",
        radius_km: "24622",
        angular_velocity: "1.083e-4",
        inertia_factor: "0.228",
    },
    Preset {
        name: "R136a1",
        mass_kg: "4.4e32",
        radius_km: "3885000",
        angular_velocity: "0",
        inertia_factor: "0.070",
    },
];

fn build(preset: &Preset) -> Body {
    Body::new(
        dec(preset.mass_kg),
        dec(preset.radius_km),
        dec(preset.angular_velocity),
        dec(preset.inertia_factor),
    )
    .expect("catalog constants are positive")
}

/// Look up a preset body by name (case-insensitive).
pub fn get(name: &str) -> Option<Body> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .map(build)
}

/// Names of all preset bodies, in catalog order.
pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

/// All preset bodies with their names, in catalog order.
pub fn all() -> Vec<(&'static str, Body)> {
    PRESETS.iter().map(|p| (p.name, build(p))).collect()
}
