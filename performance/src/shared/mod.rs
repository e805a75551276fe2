//! Plumbing shared by all analyzers: angle arithmetic and the
//! input record every analysis is performed against.
use crate::error::{calculation_failed, Result};
use num_traits::Float;
use std::fmt::Debug;
use uom::si::{angle::degree, f64::*};

mod flight_conditions;
#[cfg(test)]
pub use flight_conditions::test_helpers;
pub use flight_conditions::FlightConditions;

/// Performs an analysis of the given flight conditions, producing a report.
pub trait Analyze {
    type Report;

    fn analyze(&self, conditions: &FlightConditions) -> Result<Self::Report>;
}

/// Modulo whose result always carries the sign of the (positive) `limit`,
/// i.e. the result lies within `[0, limit)`.
pub fn true_modulo<T: Float + Debug>(value: T, limit: T) -> Result<T> {
    let remainder = value % limit;
    let wrapped = if remainder < T::zero() {
        remainder + limit
    } else {
        remainder
    };

    // A tiny negative remainder plus the limit can round up to the limit itself.
    let wrapped = if wrapped >= limit { T::zero() } else { wrapped };

    if wrapped.is_finite() {
        Ok(wrapped)
    } else {
        Err(calculation_failed(format!(
            "{:?} modulo {:?} has no finite result",
            value, limit
        )))
    }
}

/// Normalizes the angle into `[0, 360)` degrees.
pub fn normalize_angle(angle: Angle) -> Result<Angle> {
    true_modulo(angle.get::<degree>(), 360.).map(Angle::new::<degree>)
}

/// Folds an angle in `[0, 360)` degrees into `(-180, 180]` degrees.
pub fn fold_to_signed(angle: Angle) -> Angle {
    let degrees = angle.get::<degree>();
    if degrees > 180. {
        Angle::new::<degree>(degrees - 360.)
    } else {
        angle
    }
}
