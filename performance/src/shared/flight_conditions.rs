use crate::error::{illegal_value, Result};
use uom::si::{angle::degree, f64::*, length::foot, ratio::ratio, velocity::knot};

/// A single sample of aircraft state against which the
/// flight performance is determined.
#[derive(Debug, Clone, Copy)]
pub struct FlightConditions {
    pub true_airspeed: Velocity,
    pub groundspeed: Velocity,
    pub indicated_airspeed: Velocity,
    pub heading: Angle,
    pub track: Angle,
    pub mach: Ratio,
    pub altitude: Length,
    pub above_ground_level: Length,
    pub vertical_speed: Velocity,
    pub bank: Angle,
}
impl FlightConditions {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        true_airspeed: Velocity,
        groundspeed: Velocity,
        indicated_airspeed: Velocity,
        heading: Angle,
        track: Angle,
        mach: Ratio,
        altitude: Length,
        above_ground_level: Length,
        vertical_speed: Velocity,
        bank: Angle,
    ) -> FlightConditions {
        FlightConditions {
            true_airspeed,
            groundspeed,
            indicated_airspeed,
            heading,
            track,
            mach,
            altitude,
            above_ground_level,
            vertical_speed,
            bank,
        }
    }

    /// Rejects conditions which are well-formed numbers but make no sense
    /// for an aircraft in flight. Heading and track are left to the angle
    /// normalization, which fails the calculation on non-finite input.
    pub fn validate(&self) -> Result<()> {
        let zero_speed = Velocity::new::<knot>(0.);

        // Written as negated comparisons so that NaN is rejected too.
        if !(self.true_airspeed > zero_speed) {
            return Err(illegal_value("true airspeed", "must be greater than zero"));
        }

        if !(self.indicated_airspeed > zero_speed) {
            return Err(illegal_value(
                "indicated airspeed",
                "must be greater than zero",
            ));
        }

        if !(self.groundspeed >= zero_speed) {
            return Err(illegal_value("groundspeed", "must not be negative"));
        }

        if !(self.mach >= Ratio::new::<ratio>(0.)) {
            return Err(illegal_value("mach", "must not be negative"));
        }

        if !(self.bank.abs() < Angle::new::<degree>(90.)) {
            return Err(illegal_value(
                "bank",
                "must be less than 90 degrees either side",
            ));
        }

        if !(self.above_ground_level >= Length::new::<foot>(0.)) {
            return Err(illegal_value(
                "height above ground level",
                "must not be negative",
            ));
        }

        if !self.altitude.is_finite() {
            return Err(illegal_value("altitude", "must be finite"));
        }

        if !self.vertical_speed.is_finite() {
            return Err(illegal_value("vertical speed", "must be finite"));
        }

        Ok(())
    }
}
