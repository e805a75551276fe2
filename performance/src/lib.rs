//! Flight performance calculations for a simulated multi-function display.
//!
//! Raw aircraft state is turned into wind components, envelope margins,
//! energy state and glide reach. The [`FlightPerformanceCalculator`] ties the
//! individual analyzers together into one [`AggregateReport`].
mod calculator;
pub use calculator::FlightPerformanceCalculator;

mod energy;
pub use energy::{EnergyAnalyzer, EnergyReport, EnergyTrend};

mod envelope;
pub use envelope::{AircraftLimits, EnvelopeAnalyzer, EnvelopeReport};

pub mod error;
pub use error::{Outcome, PerformanceError, Result};

mod glide;
pub use glide::{GlideAnalyzer, GlideReport};

pub mod history;

mod report;
pub use report::{AggregateReport, ReportAssembler};

pub mod shared;

mod wind;
pub use wind::{Vector2D, WindReport, WindResolver};
