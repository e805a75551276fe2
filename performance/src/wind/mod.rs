//! Resolution of the wind triangle from air and ground velocities.
use crate::{
    error::{calculation_failed, Result},
    history::HistorySnapshot,
    shared::{fold_to_signed, normalize_angle, Analyze, FlightConditions},
};
use serde::{ser::SerializeStruct, Serialize, Serializer};
use tracing::trace;
use uom::si::{
    angle::{degree, radian},
    f64::*,
    ratio::ratio,
    velocity::knot,
};

mod vector;
pub use vector::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindReport {
    speed: Velocity,
    direction_from: Angle,
    headwind: Velocity,
    crosswind: Velocity,
    gust_factor: Ratio,
}
impl WindReport {
    pub fn speed(&self) -> Velocity {
        self.speed
    }

    /// The compass direction the wind blows from, within `[0, 360)`.
    pub fn direction_from(&self) -> Angle {
        self.direction_from
    }

    /// Positive when the wind opposes the motion along the track.
    pub fn headwind(&self) -> Velocity {
        self.headwind
    }

    /// Positive when the wind comes from the right of the track.
    pub fn crosswind(&self) -> Velocity {
        self.crosswind
    }

    pub fn gust_factor(&self) -> Ratio {
        self.gust_factor
    }
}
impl Serialize for WindReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WindReport", 5)?;
        state.serialize_field("speed", &self.speed.get::<knot>())?;
        state.serialize_field("direction_from", &self.direction_from.get::<degree>())?;
        state.serialize_field("headwind", &self.headwind.get::<knot>())?;
        state.serialize_field("crosswind", &self.crosswind.get::<knot>())?;
        state.serialize_field("gust_factor", &self.gust_factor.get::<ratio>())?;
        state.end()
    }
}

/// Determines the wind by subtracting the ground velocity from the air
/// velocity. The gustiness is estimated from the spread of recent
/// indicated airspeed samples.
pub struct WindResolver<const CAPACITY: usize> {
    indicated_airspeeds: HistorySnapshot<CAPACITY>,
}
impl<const CAPACITY: usize> WindResolver<CAPACITY> {
    pub fn new(indicated_airspeeds: HistorySnapshot<CAPACITY>) -> WindResolver<CAPACITY> {
        WindResolver {
            indicated_airspeeds,
        }
    }

    /// The standard deviation of the indicated airspeed relative to its mean.
    /// Zero when fewer than two samples are available. Fails when the mean
    /// is not positive or the samples are too large to yield a finite ratio.
    pub fn gust_factor(&self) -> Result<Ratio> {
        let statistics = match self.indicated_airspeeds.statistics() {
            None => return Ok(Ratio::new::<ratio>(0.)),
            Some(statistics) => statistics,
        };

        let mean = statistics.mean();
        if !(mean > Velocity::new::<knot>(0.)) {
            return Err(calculation_failed(format!(
                "gust factor is undefined for a mean indicated airspeed of {} kt",
                mean.get::<knot>()
            )));
        }

        let gust_factor: Ratio = statistics.standard_deviation() / mean;
        if gust_factor.is_finite() {
            Ok(gust_factor)
        } else {
            Err(calculation_failed(format!(
                "gust factor has no finite value for a mean indicated airspeed of {} kt",
                mean.get::<knot>()
            )))
        }
    }
}
impl<const CAPACITY: usize> Analyze for WindResolver<CAPACITY> {
    type Report = WindReport;

    fn analyze(&self, conditions: &FlightConditions) -> Result<WindReport> {
        let air = Vector2D::from_bearing(conditions.true_airspeed, conditions.heading);
        let ground = Vector2D::from_bearing(conditions.groundspeed, conditions.track);

        // Pointing from the aircraft into the wind, hence its bearing is
        // where the wind comes from.
        let wind = air - ground;
        let speed = wind.magnitude();
        let direction_from = wind.bearing()?;

        let relative = fold_to_signed(normalize_angle(direction_from - conditions.track)?);
        let relative = relative.get::<radian>();

        let report = WindReport {
            speed,
            direction_from,
            headwind: speed * relative.cos(),
            crosswind: speed * relative.sin(),
            gust_factor: self.gust_factor()?,
        };

        trace!(
            "resolved wind {:.0}/{:.1} kt from {} samples",
            direction_from.get::<degree>(),
            speed.get::<knot>(),
            self.indicated_airspeeds.len()
        );

        Ok(report)
    }
}
