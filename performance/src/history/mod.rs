//! Bounded history of a single airspeed channel.
use uom::si::{f64::*, velocity::knot};

mod statistics;
pub use statistics::SampleStatistics;

/// Number of indicated airspeed samples retained for gust estimation.
pub const GUST_SAMPLE_CAPACITY: usize = 20;

pub type IndicatedAirspeedHistory = SampleHistory<GUST_SAMPLE_CAPACITY>;

/// A fixed-capacity ring of airspeed samples. Once full, every append
/// overwrites the oldest sample. The capacity is a hard ceiling; the
/// buffer never grows.
#[derive(Debug, Clone)]
pub struct SampleHistory<const CAPACITY: usize> {
    samples: [Velocity; CAPACITY],
    cursor: usize,
    count: usize,
}
impl<const CAPACITY: usize> SampleHistory<CAPACITY> {
    pub fn new() -> SampleHistory<CAPACITY> {
        SampleHistory {
            samples: [Velocity::new::<knot>(0.); CAPACITY],
            cursor: 0,
            count: 0,
        }
    }

    pub fn append(&mut self, sample: Velocity) {
        if CAPACITY == 0 {
            return;
        }

        self.samples[self.cursor] = sample;
        self.cursor = (self.cursor + 1) % CAPACITY;
        if self.count < CAPACITY {
            self.count += 1;
        }
    }

    pub fn clear(&mut self) {
        self.cursor = 0;
        self.count = 0;
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == CAPACITY
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Copies the retained samples, oldest first, into a value which
    /// no longer refers to this history.
    pub fn snapshot(&self) -> HistorySnapshot<CAPACITY> {
        let mut samples = [Velocity::new::<knot>(0.); CAPACITY];
        let oldest = if self.is_full() { self.cursor } else { 0 };
        for (i, sample) in samples.iter_mut().take(self.count).enumerate() {
            *sample = self.samples[(oldest + i) % CAPACITY];
        }

        HistorySnapshot {
            samples,
            count: self.count,
        }
    }
}
impl<const CAPACITY: usize> Default for SampleHistory<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable copy of a [`SampleHistory`], in insertion order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySnapshot<const CAPACITY: usize> {
    samples: [Velocity; CAPACITY],
    count: usize,
}
impl<const CAPACITY: usize> HistorySnapshot<CAPACITY> {
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn samples(&self) -> &[Velocity] {
        &self.samples[..self.count]
    }

    pub fn iter(&self) -> impl Iterator<Item = Velocity> + '_ {
        self.samples().iter().copied()
    }

    pub fn statistics(&self) -> Option<SampleStatistics> {
        SampleStatistics::of(self.samples())
    }
}

#[cfg(test)]
mod sample_history_tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn velocities(values: &[f64]) -> Vec<Velocity> {
        values.iter().map(|v| Velocity::new::<knot>(*v)).collect()
    }

    fn appended(values: &[f64]) -> IndicatedAirspeedHistory {
        let mut history = IndicatedAirspeedHistory::new();
        values
            .iter()
            .for_each(|v| history.append(Velocity::new::<knot>(*v)));

        history
    }

    #[test]
    fn new_history_is_empty() {
        let history = IndicatedAirspeedHistory::new();

        assert!(history.is_empty());
        assert_eq!(history.snapshot().len(), 0);
    }

    #[test]
    fn capacity_is_twenty_samples() {
        assert_eq!(IndicatedAirspeedHistory::new().capacity(), 20);
    }

    #[test]
    fn partially_filled_history_keeps_insertion_order() {
        let history = appended(&[100., 110., 120.]);

        assert_eq!(history.len(), 3);
        assert!(!history.is_full());
        assert_eq!(history.snapshot().samples(), velocities(&[100., 110., 120.]));
    }

    #[test]
    fn full_history_overwrites_oldest_sample() {
        let values: Vec<f64> = (0..21).map(|i| i as f64).collect();
        let history = appended(&values);

        assert!(history.is_full());
        assert_eq!(history.snapshot().samples(), velocities(&values[1..]));
    }

    #[test]
    fn overflowing_sequences_retain_exactly_the_last_capacity_samples() {
        let mut rng = StdRng::seed_from_u64(4711);

        for _ in 0..50 {
            let length = rng.gen_range(GUST_SAMPLE_CAPACITY + 1..GUST_SAMPLE_CAPACITY * 5);
            let values: Vec<f64> = (0..length).map(|_| rng.gen_range(40.0..350.0)).collect();

            let snapshot = appended(&values).snapshot();

            assert_eq!(snapshot.len(), GUST_SAMPLE_CAPACITY);
            assert_eq!(
                snapshot.iter().collect::<Vec<_>>(),
                velocities(&values[length - GUST_SAMPLE_CAPACITY..])
            );
        }
    }

    #[test]
    fn identical_append_sequences_produce_identical_snapshots() {
        let values = [150., 152., 149., 151.];

        assert_eq!(appended(&values).snapshot(), appended(&values).snapshot());
    }

    #[test]
    fn snapshot_is_not_affected_by_later_appends() {
        let mut history = appended(&[100., 110.]);
        let snapshot = history.snapshot();

        history.append(Velocity::new::<knot>(120.));

        assert_eq!(snapshot.samples(), velocities(&[100., 110.]));
    }

    #[test]
    fn clear_empties_the_history() {
        let mut history = appended(&[100., 110.]);

        history.clear();
        history.append(Velocity::new::<knot>(130.));

        assert_eq!(history.snapshot().samples(), velocities(&[130.]));
    }

    #[test]
    fn zero_capacity_history_ignores_appends() {
        let mut history = SampleHistory::<0>::new();

        history.append(Velocity::new::<knot>(130.));

        assert!(history.is_empty());
    }
}
