//! # kerrclock
//!
//! Proper-time comparison for observers near rotating massive bodies.
//!
//! Given a fixed coordinate-time interval, computes how much more or less
//! proper time elapses for one observer than another, each on a circular
//! equatorial orbit around a (possibly different) spinning body —
//! accounting for gravitational time dilation, orbital velocity, and
//! frame dragging in the equatorial Kerr metric.
//!
//! All physics runs on arbitrary-precision decimal arithmetic
//! ([`bigdecimal`]) under an explicit [`Precision`] context: the
//! interesting signal is a difference between two numbers that are each
//! within parts-per-billion of 1, which 64-bit floats would destroy by
//! cancellation.
//!
//! Modules:
//! - **constants**: physical constants and unit conversions
//! - **precision**: explicit significant-digit context
//! - **body**: spinning massive body model with derived quantities
//! - **kerr**: equatorial metric, circular-orbit angular velocity,
//!   dilation factor, and the validity gates
//! - **compare**: two-frame signed proper-time difference
//! - **catalog**: preset Solar System bodies
//! - **format**: human-readable duration strings
//!
//! # Example
//!
//! ```
//! use bigdecimal::BigDecimal;
//! use kerrclock::{catalog, compare::Frame, proper_time_difference, Precision};
//!
//! let precision = Precision::default();
//! let earth = catalog::get("Earth").unwrap();
//!
//! let surface = Frame::new(earth.clone(), BigDecimal::from(0));
//! let orbit = Frame::new(earth, BigDecimal::from(400)); // ISS-like altitude
//!
//! let one_day = BigDecimal::from(86400);
//! let dtau = proper_time_difference(&precision, &one_day, &orbit, &surface).unwrap();
//!
//! // The orbiting clock gains a few microseconds per day.
//! assert!(dtau > BigDecimal::from(0));
//! println!("{}", kerrclock::format::format_duration(&dtau));
//! ```

pub mod body;
pub mod catalog;
pub mod compare;
pub mod constants;
pub mod format;
pub mod kerr;
pub mod precision;

pub use body::{Body, BodyError};
pub use compare::{proper_time_difference, Frame, FrameError, FrameLabel};
pub use kerr::{dilation_factor, EvaluationError, MetricComponents};
pub use precision::{Precision, PrecisionError};
