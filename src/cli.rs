use clap::{
    builder::TypedValueParser,
    error::{Error, ErrorKind},
    Arg, Command, Parser, ValueEnum,
};
use std::ffi::OsStr;
use performance::{shared::FlightConditions, AircraftLimits, PerformanceError};
use uom::si::{
    angle::degree,
    f64::*,
    length::foot,
    ratio::ratio,
    velocity::{foot_per_minute, knot},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Text,
}

/// Calculates wind, envelope margins, energy state and glide reach
/// from the current aircraft state.
#[derive(Parser, Debug)]
#[command(name = "flight_calculator", version, allow_negative_numbers = true)]
pub struct Args {
    #[arg(long, value_parser = FiniteScalarParser, help = "true airspeed [kt]")]
    pub tas: f64,

    #[arg(long, value_parser = FiniteScalarParser, help = "groundspeed [kt]")]
    pub gs: f64,

    #[arg(long, value_parser = FiniteScalarParser, help = "heading [deg]")]
    pub heading: f64,

    #[arg(long, value_parser = FiniteScalarParser, help = "ground track [deg]")]
    pub track: f64,

    #[arg(long, value_parser = FiniteScalarParser, help = "indicated airspeed [kt]")]
    pub ias: f64,

    #[arg(long, value_parser = FiniteScalarParser, help = "Mach number")]
    pub mach: f64,

    #[arg(long, value_parser = FiniteScalarParser, help = "altitude [ft]")]
    pub altitude: f64,

    #[arg(long, value_parser = FiniteScalarParser, help = "height above ground level [ft]")]
    pub agl: f64,

    #[arg(long, value_parser = FiniteScalarParser, help = "vertical speed [fpm]")]
    pub vs: f64,

    #[arg(long, value_parser = FiniteScalarParser, help = "bank angle [deg]")]
    pub bank: f64,

    #[arg(long, value_parser = FiniteScalarParser, help = "stall speed at 1g [kt]")]
    pub vso: f64,

    #[arg(long, value_parser = FiniteScalarParser, help = "never exceed speed [kt]")]
    pub vne: f64,

    #[arg(long, value_parser = FiniteScalarParser, help = "maximum operating Mach number")]
    pub mmo: f64,

    #[arg(
        long,
        value_parser = FiniteScalarParser,
        value_delimiter = ',',
        help = "recent indicated airspeed samples, oldest first [kt]; defaults to the current IAS"
    )]
    pub samples: Vec<f64>,

    #[arg(long, value_enum, default_value_t = Format::Json, help = "output format")]
    pub format: Format,
}
impl Args {
    pub fn flight_conditions(&self) -> FlightConditions {
        FlightConditions::new(
            Velocity::new::<knot>(self.tas),
            Velocity::new::<knot>(self.gs),
            Velocity::new::<knot>(self.ias),
            Angle::new::<degree>(self.heading),
            Angle::new::<degree>(self.track),
            Ratio::new::<ratio>(self.mach),
            Length::new::<foot>(self.altitude),
            Length::new::<foot>(self.agl),
            Velocity::new::<foot_per_minute>(self.vs),
            Angle::new::<degree>(self.bank),
        )
    }

    pub fn aircraft_limits(&self) -> AircraftLimits {
        AircraftLimits::new(
            Velocity::new::<knot>(self.vso),
            Velocity::new::<knot>(self.vne),
            Ratio::new::<ratio>(self.mmo),
        )
    }

    /// The indicated airspeed history to calculate with. Without explicit
    /// samples only the current IAS is known, which yields no gust factor.
    pub fn indicated_airspeed_samples(&self) -> Vec<Velocity> {
        if self.samples.is_empty() {
            vec![Velocity::new::<knot>(self.ias)]
        } else {
            self.samples
                .iter()
                .map(|s| Velocity::new::<knot>(*s))
                .collect()
        }
    }
}

/// Parses a finite number. Infinity and NaN are rejected, as all
/// calculations assume finite input.
fn finite_scalar(name: &str, value: &str) -> Result<f64, PerformanceError> {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(PerformanceError::ParseFailure {
            name: name.to_owned(),
            value: value.to_owned(),
        }),
    }
}

/// Hands the name of the parameter being parsed to [`finite_scalar`].
#[derive(Debug, Clone, Copy)]
struct FiniteScalarParser;
impl TypedValueParser for FiniteScalarParser {
    type Value = f64;

    fn parse_ref(&self, cmd: &Command, arg: Option<&Arg>, value: &OsStr) -> Result<f64, Error> {
        let name = arg.map_or("value", |arg| arg.get_id().as_str());

        finite_scalar(name, &value.to_string_lossy())
            .map_err(|e| Error::raw(ErrorKind::InvalidValue, format!("{}\n", e)).with_cmd(cmd))
    }
}
