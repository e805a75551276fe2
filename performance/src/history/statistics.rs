use uom::si::{f64::*, velocity::knot};

/// Mean and spread of a set of airspeed samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStatistics {
    count: usize,
    mean: Velocity,
    variance: f64,
}
impl SampleStatistics {
    /// Returns `None` when fewer than two samples are given, as no
    /// meaningful spread can be determined.
    pub fn of(samples: &[Velocity]) -> Option<SampleStatistics> {
        if samples.len() < 2 {
            return None;
        }

        let count = samples.len() as f64;
        let mean = samples.iter().map(|v| v.get::<knot>()).sum::<f64>() / count;
        let variance = samples
            .iter()
            .map(|v| (v.get::<knot>() - mean).powi(2))
            .sum::<f64>()
            / count;

        Some(SampleStatistics {
            count: samples.len(),
            mean: Velocity::new::<knot>(mean),
            variance,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> Velocity {
        self.mean
    }

    /// Population variance, in knots squared.
    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn standard_deviation(&self) -> Velocity {
        Velocity::new::<knot>(self.variance.sqrt())
    }
}

#[cfg(test)]
mod sample_statistics_tests {
    use super::*;
    use ntest::assert_about_eq;

    fn samples(values: &[f64]) -> Vec<Velocity> {
        values.iter().map(|v| Velocity::new::<knot>(*v)).collect()
    }

    #[test]
    fn no_statistics_for_empty_samples() {
        assert_eq!(SampleStatistics::of(&[]), None);
    }

    #[test]
    fn no_statistics_for_a_single_sample() {
        assert_eq!(SampleStatistics::of(&samples(&[150.])), None);
    }

    #[test]
    fn calculates_mean() {
        let statistics = SampleStatistics::of(&samples(&[140., 150., 160.])).unwrap();

        assert_eq!(statistics.count(), 3);
        assert_about_eq!(statistics.mean().get::<knot>(), 150.);
    }

    #[test]
    fn calculates_population_variance() {
        let statistics = SampleStatistics::of(&samples(&[2., 4., 4., 4., 5., 5., 7., 9.])).unwrap();

        assert_about_eq!(statistics.variance(), 4.);
        assert_about_eq!(statistics.standard_deviation().get::<knot>(), 2.);
    }

    #[test]
    fn identical_samples_have_no_spread() {
        let statistics = SampleStatistics::of(&samples(&[150.; 20])).unwrap();

        assert_about_eq!(statistics.standard_deviation().get::<knot>(), 0.);
    }
}
