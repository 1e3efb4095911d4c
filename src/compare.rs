//! Two-frame proper-time comparison.
//!
//! Combines two independent dilation-factor evaluations into one signed
//! number: how much more (or less) proper time elapses for the first
//! observer than the second over a fixed coordinate-time interval.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::body::Body;
use crate::constants::km_to_m;
use crate::kerr::{dilation_factor, EvaluationError};
use crate::precision::Precision;

/// Which of the two frames an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameLabel {
    First,
    Second,
}

impl std::fmt::Display for FrameLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameLabel::First => write!(f, "first"),
            FrameLabel::Second => write!(f, "second"),
        }
    }
}

/// A frame evaluation failed; carries which frame and why.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{frame} frame: {source}")]
pub struct FrameError {
    pub frame: FrameLabel,
    #[source]
    pub source: EvaluationError,
}

/// An observer frame: a body plus an altitude above its equatorial
/// surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub body: Body,
    /// Altitude above the equatorial surface (km).
    pub altitude_km: BigDecimal,
}

impl Frame {
    pub fn new(body: Body, altitude_km: BigDecimal) -> Self {
        Self { body, altitude_km }
    }

    /// Radial coordinate r = equatorial radius + altitude (m).
    pub fn radial_coordinate(&self) -> BigDecimal {
        self.body.equatorial_radius() + km_to_m(&self.altitude_km)
    }
}

/// Signed proper-time difference Δτ = T·(dτ/dt|first − dτ/dt|second)
/// over a coordinate-time interval of `interval_s` seconds.
///
/// Positive means the first frame ages faster (accumulates more proper
/// time) than the second over the interval. Either frame's evaluation
/// failing aborts the comparison with a [`FrameError`] naming the frame;
/// there is no partial result.
pub fn proper_time_difference(
    precision: &Precision,
    interval_s: &BigDecimal,
    first: &Frame,
    second: &Frame,
) -> Result<BigDecimal, FrameError> {
    let dilation_first = dilation_factor(precision, &first.body, &first.radial_coordinate())
        .map_err(|source| FrameError {
            frame: FrameLabel::First,
            source,
        })?;
    let dilation_second = dilation_factor(precision, &second.body, &second.radial_coordinate())
        .map_err(|source| FrameError {
            frame: FrameLabel::Second,
            source,
        })?;

    Ok(interval_s * (dilation_first - dilation_second))
}
