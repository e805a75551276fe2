//! Margins between the current flight condition and the aircraft's limits.
use crate::{
    error::{illegal_value, Result},
    shared::{Analyze, FlightConditions},
};
use serde::{ser::SerializeStruct, Serialize, Serializer};
use std::f64::consts::SQRT_2;
use uom::si::{angle::radian, f64::*, ratio::percent, ratio::ratio, velocity::knot};

/// The speed limits of the aircraft being flown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftLimits {
    /// Stall speed at 1g.
    pub vso: Velocity,
    /// Never exceed speed.
    pub vne: Velocity,
    /// Maximum operating Mach number.
    pub mmo: Ratio,
}
impl AircraftLimits {
    pub fn new(vso: Velocity, vne: Velocity, mmo: Ratio) -> AircraftLimits {
        AircraftLimits { vso, vne, mmo }
    }

    pub fn validate(&self) -> Result<()> {
        let zero_speed = Velocity::new::<knot>(0.);

        if !(self.vso > zero_speed) {
            return Err(illegal_value("vso", "must be greater than zero"));
        }

        if !(self.vne > zero_speed) {
            return Err(illegal_value("vne", "must be greater than zero"));
        }

        if !(self.mmo > Ratio::new::<ratio>(0.)) {
            return Err(illegal_value("mmo", "must be greater than zero"));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeReport {
    stall_margin: Ratio,
    vmo_margin: Ratio,
    mmo_margin: Ratio,
    min_margin: Ratio,
    load_factor: Ratio,
    effective_stall_speed: Velocity,
    corner_speed: Velocity,
}
impl EnvelopeReport {
    pub fn stall_margin(&self) -> Ratio {
        self.stall_margin
    }

    pub fn vmo_margin(&self) -> Ratio {
        self.vmo_margin
    }

    pub fn mmo_margin(&self) -> Ratio {
        self.mmo_margin
    }

    /// The smallest of the stall, VMO and MMO margins.
    pub fn min_margin(&self) -> Ratio {
        self.min_margin
    }

    pub fn load_factor(&self) -> Ratio {
        self.load_factor
    }

    /// The stall speed at the current load factor.
    pub fn effective_stall_speed(&self) -> Velocity {
        self.effective_stall_speed
    }

    /// Rule of thumb estimate of the manoeuvring speed. Not a certified figure.
    pub fn corner_speed(&self) -> Velocity {
        self.corner_speed
    }
}
impl Serialize for EnvelopeReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EnvelopeReport", 6)?;
        state.serialize_field("stall_margin", &self.stall_margin.get::<percent>())?;
        state.serialize_field("vmo_margin", &self.vmo_margin.get::<percent>())?;
        state.serialize_field("mmo_margin", &self.mmo_margin.get::<percent>())?;
        state.serialize_field("min_margin", &self.min_margin.get::<percent>())?;
        state.serialize_field("load_factor", &self.load_factor.get::<ratio>())?;
        state.serialize_field("corner_speed", &self.corner_speed.get::<knot>())?;
        state.end()
    }
}

/// Determines how close the aircraft is to stalling and to its speed limits.
/// A bank approaching 90 degrees drives the load factor towards infinity;
/// the resulting margins are degenerate rather than an error.
pub struct EnvelopeAnalyzer {
    limits: AircraftLimits,
}
impl EnvelopeAnalyzer {
    pub fn new(limits: AircraftLimits) -> EnvelopeAnalyzer {
        EnvelopeAnalyzer { limits }
    }

    fn load_factor(bank: Angle) -> Ratio {
        Ratio::new::<ratio>(1. / bank.get::<radian>().cos())
    }
}
impl Analyze for EnvelopeAnalyzer {
    type Report = EnvelopeReport;

    fn analyze(&self, conditions: &FlightConditions) -> Result<EnvelopeReport> {
        let ias = conditions.indicated_airspeed;
        let load_factor = EnvelopeAnalyzer::load_factor(conditions.bank);

        // In a coordinated turn the stall speed grows with the root of the load factor.
        let effective_stall_speed = self.limits.vso * load_factor.get::<ratio>().sqrt();

        let stall_margin: Ratio = (ias - effective_stall_speed) / effective_stall_speed;
        let vmo_margin: Ratio = (self.limits.vne - ias) / self.limits.vne;
        let mmo_margin: Ratio = (self.limits.mmo - conditions.mach) / self.limits.mmo;

        Ok(EnvelopeReport {
            stall_margin,
            vmo_margin,
            mmo_margin,
            min_margin: Ratio::new::<ratio>(
                stall_margin
                    .get::<ratio>()
                    .min(vmo_margin.get::<ratio>())
                    .min(mmo_margin.get::<ratio>()),
            ),
            load_factor,
            effective_stall_speed,
            corner_speed: effective_stall_speed * SQRT_2,
        })
    }
}
