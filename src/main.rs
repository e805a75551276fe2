use clap::Parser;
use num_traits::ToPrimitive;
use performance::{error::calculation_failed, FlightPerformanceCalculator, Outcome, Result};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{Args, Format};

fn main() {
    // Logs go to stderr, leaving stdout to the report. RUST_LOG sets the level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(exit_code(parse_outcome(&e)));
        }
    };

    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(exit_code(e.outcome()));
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let mut calculator = FlightPerformanceCalculator::new();
    for sample in args.indicated_airspeed_samples() {
        calculator.record_indicated_airspeed(sample);
    }
    debug!(
        "calculating with {} indicated airspeed samples",
        calculator.indicated_airspeeds().len()
    );

    let report = calculator.calculate(&args.flight_conditions(), &args.aircraft_limits())?;

    match args.format {
        Format::Json => report.to_json_pretty(),
        Format::Text => report.to_text(),
    }
    .map_err(calculation_failed)
}

/// Requests for help or the version end the parse early without failing.
fn parse_outcome(error: &clap::Error) -> Outcome {
    if error.use_stderr() {
        Outcome::ParseFailure
    } else {
        Outcome::Success
    }
}

fn exit_code(outcome: Outcome) -> i32 {
    outcome.to_i32().unwrap_or(1)
}
