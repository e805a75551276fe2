use crate::{
    error::Result,
    history::IndicatedAirspeedHistory,
    shared::{Analyze, FlightConditions},
    AggregateReport, AircraftLimits, EnergyAnalyzer, EnvelopeAnalyzer, GlideAnalyzer,
    ReportAssembler, WindResolver,
};
use tracing::{debug, warn};
use uom::si::{
    f64::*,
    ratio::{percent, ratio},
    velocity::knot,
};

/// Orchestrates the:
/// 1. Recording of indicated airspeed samples for gust estimation.
/// 2. Validation of the flight conditions and aircraft limits.
/// 3. Analysis of wind, envelope, energy and glide, in that order.
/// 4. Assembly of the analyses into one report.
///
/// Any failure aborts the calculation as a whole. A partial report could
/// misrepresent the aircraft's state, as the glide analysis depends on the
/// resolved wind.
pub struct FlightPerformanceCalculator {
    indicated_airspeeds: IndicatedAirspeedHistory,
}
impl FlightPerformanceCalculator {
    pub fn new() -> FlightPerformanceCalculator {
        FlightPerformanceCalculator {
            indicated_airspeeds: IndicatedAirspeedHistory::new(),
        }
    }

    pub fn record_indicated_airspeed(&mut self, indicated_airspeed: Velocity) {
        self.indicated_airspeeds.append(indicated_airspeed);
    }

    pub fn indicated_airspeeds(&self) -> &IndicatedAirspeedHistory {
        &self.indicated_airspeeds
    }

    pub fn calculate(
        &self,
        conditions: &FlightConditions,
        limits: &AircraftLimits,
    ) -> Result<AggregateReport> {
        limits.validate()?;
        conditions.validate()?;

        let wind = WindResolver::new(self.indicated_airspeeds.snapshot()).analyze(conditions)?;
        let envelope = EnvelopeAnalyzer::new(*limits).analyze(conditions)?;
        let energy = EnergyAnalyzer::new().analyze(conditions)?;
        let glide = GlideAnalyzer::new(wind.headwind()).analyze(conditions)?;

        if envelope.min_margin() < Ratio::new::<ratio>(0.) {
            warn!(
                "flight condition outside of envelope, min margin {:.1}%",
                envelope.min_margin().get::<percent>()
            );
        }

        debug!(
            "headwind {:.1} kt, load factor {:.2}, energy {:?}",
            wind.headwind().get::<knot>(),
            envelope.load_factor().get::<ratio>(),
            energy.trend()
        );

        Ok(ReportAssembler::assemble(wind, envelope, energy, glide))
    }
}
impl Default for FlightPerformanceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod flight_performance_calculator_tests {
    use super::*;
    use crate::{
        envelope::test_helpers::light_aircraft_limits,
        error::{Outcome, PerformanceError},
        shared::test_helpers::conditions_with,
        EnergyTrend,
    };
    use ntest::assert_about_eq;
    use uom::si::{angle::degree, length::nautical_mile};

    fn calculator_with_samples(samples: &[f64]) -> FlightPerformanceCalculator {
        let mut calculator = FlightPerformanceCalculator::new();
        samples
            .iter()
            .for_each(|s| calculator.record_indicated_airspeed(Velocity::new::<knot>(*s)));

        calculator
    }

    #[test]
    fn cruise_scenario_produces_a_complete_report() {
        let calculator = calculator_with_samples(&[150.; 20]);

        let report = calculator
            .calculate(&conditions_with().build(), &light_aircraft_limits())
            .unwrap();

        let expected_wind = (150_f64.powi(2) + 140_f64.powi(2)
            - 2. * 150. * 140. * 5_f64.to_radians().cos())
        .sqrt();
        assert_about_eq!(report.wind().speed().get::<knot>(), expected_wind, 1e-9);
        assert_about_eq!(report.wind().gust_factor().get::<ratio>(), 0.);
        assert_eq!(report.envelope().load_factor(), Ratio::new::<ratio>(1.));
        assert_eq!(report.energy().trend(), EnergyTrend::Increasing);
        assert_about_eq!(
            report.glide().still_air_range().get::<nautical_mile>(),
            5_000. * 12. / 6076.12,
            1e-3
        );
    }

    #[test]
    fn glide_range_is_adjusted_for_the_resolved_headwind() {
        let report = calculator_with_samples(&[150.])
            .calculate(&conditions_with().build(), &light_aircraft_limits())
            .unwrap();

        let headwind_ratio = report.wind().headwind().get::<knot>() / 150.;
        assert_about_eq!(
            report.glide().wind_adjusted_range().get::<nautical_mile>(),
            report.glide().still_air_range().get::<nautical_mile>() * (1. - headwind_ratio)
        );
    }

    #[test]
    fn calculating_twice_gives_identical_reports() {
        let calculator = calculator_with_samples(&[148., 152., 150., 149.]);
        let conditions = conditions_with().bank(20.).build();

        assert_eq!(
            calculator.calculate(&conditions, &light_aircraft_limits()),
            calculator.calculate(&conditions, &light_aircraft_limits())
        );
    }

    #[test]
    fn calculating_does_not_alter_the_history() {
        let calculator = calculator_with_samples(&[148., 152.]);
        let before = calculator.indicated_airspeeds().snapshot();

        calculator
            .calculate(&conditions_with().build(), &light_aircraft_limits())
            .unwrap();

        assert_eq!(calculator.indicated_airspeeds().snapshot(), before);
    }

    #[test]
    fn illegal_conditions_abort_the_calculation() {
        let result = calculator_with_samples(&[])
            .calculate(&conditions_with().bank(90.).build(), &light_aircraft_limits());

        assert_eq!(Outcome::from(&result), Outcome::IllegalValue);
    }

    #[test]
    fn illegal_limits_abort_the_calculation() {
        let mut limits = light_aircraft_limits();
        limits.vne = Velocity::new::<knot>(-1.);

        let result = calculator_with_samples(&[]).calculate(&conditions_with().build(), &limits);

        assert_eq!(Outcome::from(&result), Outcome::IllegalValue);
    }

    #[test]
    fn non_finite_heading_aborts_the_calculation() {
        let result = calculator_with_samples(&[])
            .calculate(&conditions_with().heading(f64::NAN).build(), &light_aircraft_limits());

        assert!(matches!(result, Err(PerformanceError::CalculationFailed(_))));
    }

    #[test]
    fn zero_mean_airspeed_history_aborts_the_calculation() {
        let result = calculator_with_samples(&[0., 0.])
            .calculate(&conditions_with().build(), &light_aircraft_limits());

        assert_eq!(Outcome::from(&result), Outcome::CalculationFailure);
    }

    #[test]
    fn only_the_latest_twenty_samples_determine_the_gust_factor() {
        let mut samples = vec![10.; 5];
        samples.extend_from_slice(&[150.; 20]);

        let report = calculator_with_samples(&samples)
            .calculate(&conditions_with().build(), &light_aircraft_limits())
            .unwrap();

        assert_about_eq!(report.wind().gust_factor().get::<ratio>(), 0.);
    }

    #[test]
    fn wind_direction_is_within_a_full_circle() {
        let report = calculator_with_samples(&[])
            .calculate(
                &conditions_with().heading(-45.).track(-60.).build(),
                &light_aircraft_limits(),
            )
            .unwrap();

        let direction = report.wind().direction_from().get::<degree>();
        assert!((0. ..360.).contains(&direction));
    }
}
