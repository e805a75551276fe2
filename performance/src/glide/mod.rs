//! Glide reach estimation.
use crate::{
    error::Result,
    shared::{Analyze, FlightConditions},
};
use serde::{ser::SerializeStruct, Serialize, Serializer};
use uom::si::{f64::*, length::nautical_mile, ratio::ratio, velocity::knot};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlideReport {
    still_air_range: Length,
    wind_adjusted_range: Length,
    glide_ratio: f64,
    best_glide_speed: Velocity,
}
impl GlideReport {
    pub fn still_air_range(&self) -> Length {
        self.still_air_range
    }

    /// A first order correction of the still air range. It is not clamped
    /// and can exceed the still air range with a tailwind, or become
    /// negative when the headwind exceeds the true airspeed.
    pub fn wind_adjusted_range(&self) -> Length {
        self.wind_adjusted_range
    }

    pub fn glide_ratio(&self) -> f64 {
        self.glide_ratio
    }

    pub fn best_glide_speed(&self) -> Velocity {
        self.best_glide_speed
    }
}
impl Serialize for GlideReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GlideReport", 4)?;
        state.serialize_field("still_air_range", &self.still_air_range.get::<nautical_mile>())?;
        state.serialize_field(
            "wind_adjusted_range",
            &self.wind_adjusted_range.get::<nautical_mile>(),
        )?;
        state.serialize_field("glide_ratio", &self.glide_ratio)?;
        state.serialize_field("best_glide_speed", &self.best_glide_speed.get::<knot>())?;
        state.end()
    }
}

/// Estimates how far the aircraft can glide from its current height.
/// The glide ratio and best glide speed are fixed assumptions rather
/// than properties of the aircraft being flown.
pub struct GlideAnalyzer {
    headwind: Velocity,
}
impl GlideAnalyzer {
    const GLIDE_RATIO: f64 = 12.;
    const REFERENCE_STALL_SPEED_KNOTS: f64 = 60.;
    const BEST_GLIDE_STALL_SPEED_FACTOR: f64 = 1.3;

    /// Creates an analyzer for the headwind component as resolved from the
    /// wind triangle. A negative headwind is a tailwind.
    pub fn new(headwind: Velocity) -> GlideAnalyzer {
        GlideAnalyzer { headwind }
    }
}
impl Analyze for GlideAnalyzer {
    type Report = GlideReport;

    fn analyze(&self, conditions: &FlightConditions) -> Result<GlideReport> {
        let still_air_range = conditions.above_ground_level * GlideAnalyzer::GLIDE_RATIO;
        let headwind_ratio: Ratio = self.headwind / conditions.true_airspeed;

        Ok(GlideReport {
            still_air_range,
            wind_adjusted_range: still_air_range * (1. - headwind_ratio.get::<ratio>()),
            glide_ratio: GlideAnalyzer::GLIDE_RATIO,
            best_glide_speed: Velocity::new::<knot>(
                GlideAnalyzer::REFERENCE_STALL_SPEED_KNOTS
                    * GlideAnalyzer::BEST_GLIDE_STALL_SPEED_FACTOR,
            ),
        })
    }
}
