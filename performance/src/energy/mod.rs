//! Specific energy state of the aircraft.
use crate::{
    error::Result,
    shared::{Analyze, FlightConditions},
};
use serde::{ser::SerializeStruct, Serialize, Serializer};
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::*,
    length::foot,
    velocity::{foot_per_minute, knot},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyTrend {
    Increasing,
    Stable,
    Decreasing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    specific_energy: Length,
    energy_rate: Velocity,
    trend: EnergyTrend,
}
impl EnergyReport {
    /// The height the aircraft would reach when trading all of its
    /// kinetic energy for altitude.
    pub fn specific_energy(&self) -> Length {
        self.specific_energy
    }

    pub fn energy_rate(&self) -> Velocity {
        self.energy_rate
    }

    pub fn trend(&self) -> EnergyTrend {
        self.trend
    }
}
impl Serialize for EnergyReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EnergyReport", 3)?;
        state.serialize_field("specific_energy", &self.specific_energy.get::<foot>())?;
        state.serialize_field("energy_rate", &self.energy_rate.get::<knot>())?;
        state.serialize_field("trend", &self.trend)?;
        state.end()
    }
}

pub struct EnergyAnalyzer {}
impl EnergyAnalyzer {
    const STANDARD_GRAVITY_METERS_PER_SECOND_SQUARED: f64 = 9.80665;
    const TREND_THRESHOLD_FEET_PER_MINUTE: f64 = 50.;

    pub fn new() -> EnergyAnalyzer {
        EnergyAnalyzer {}
    }

    fn trend(vertical_speed: Velocity) -> EnergyTrend {
        let threshold =
            Velocity::new::<foot_per_minute>(EnergyAnalyzer::TREND_THRESHOLD_FEET_PER_MINUTE);

        if vertical_speed > threshold {
            EnergyTrend::Increasing
        } else if vertical_speed < -threshold {
            EnergyTrend::Decreasing
        } else {
            EnergyTrend::Stable
        }
    }
}
impl Default for EnergyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
impl Analyze for EnergyAnalyzer {
    type Report = EnergyReport;

    fn analyze(&self, conditions: &FlightConditions) -> Result<EnergyReport> {
        let gravity = Acceleration::new::<meter_per_second_squared>(
            EnergyAnalyzer::STANDARD_GRAVITY_METERS_PER_SECOND_SQUARED,
        );
        let tas = conditions.true_airspeed;
        let kinetic_height: Length = (tas * tas) / (gravity * 2.);

        Ok(EnergyReport {
            specific_energy: conditions.altitude + kinetic_height,
            // The vertical speed expressed in knots stands in for the energy rate.
            energy_rate: conditions.vertical_speed,
            trend: EnergyAnalyzer::trend(conditions.vertical_speed),
        })
    }
}
