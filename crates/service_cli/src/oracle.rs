//! Timing oracle.
//!
//! Runs a case in batches, growing the batch until one batch takes at least
//! the minimum time, then reports that batch. Growth follows the usual
//! prediction: scale by `min_time / elapsed` with 40% headroom, at most 10x
//! while the batch is still far below the target.

use std::hint::black_box;
use std::time::{Duration, Instant};

use layout_core::Layout;
use layout_patterns::{BenchCase, Pattern, Strategy};
use serde::Serialize;
use tracing::debug;

/// One timed case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Pattern that was timed
    pub pattern: Pattern,
    /// Layout that was timed
    pub layout: Layout,
    /// Iteration style that was timed
    pub strategy: Strategy,
    /// Fixture size
    pub size: usize,
    /// Calls in the reported batch
    pub iterations: u64,
    /// Wall time of the reported batch, in nanoseconds
    pub total_ns: u64,
    /// Mean wall time per call
    pub ns_per_iter: f64,
    /// Records processed per second
    pub items_per_sec: f64,
}

impl Measurement {
    fn new(case: &BenchCase, iterations: u64, elapsed: Duration) -> Self {
        let total_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        let ns_per_iter = total_ns as f64 / iterations as f64;
        let items_per_sec = if total_ns == 0 {
            0.0
        } else {
            (case.items_per_call() as f64 * iterations as f64) / elapsed.as_secs_f64()
        };

        Self {
            pattern: case.pattern(),
            layout: case.layout(),
            strategy: case.strategy(),
            size: case.size(),
            iterations,
            total_ns,
            ns_per_iter,
            items_per_sec,
        }
    }
}

/// Decides how many calls to time for each case.
#[derive(Debug, Clone, Copy)]
pub struct TimingOracle {
    min_time: Duration,
    max_iterations: u64,
}

impl TimingOracle {
    /// Creates an oracle targeting `min_time` per batch.
    pub fn new(min_time: Duration, max_iterations: u64) -> Self {
        Self {
            min_time,
            max_iterations: max_iterations.max(1),
        }
    }

    /// Times `case` until a batch reaches the minimum time or the iteration cap.
    pub fn measure(&self, case: &mut BenchCase) -> Measurement {
        // Warm-up call, untimed.
        black_box(case.run());

        let mut iterations = 1u64;
        loop {
            let start = Instant::now();
            for _ in 0..iterations {
                black_box(case.run());
            }
            let elapsed = start.elapsed();

            debug!(
                "{} {} n={}: {} iterations in {:?}",
                case.pattern(),
                case.label(),
                case.size(),
                iterations,
                elapsed
            );

            if elapsed >= self.min_time || iterations >= self.max_iterations {
                return Measurement::new(case, iterations, elapsed);
            }
            iterations = self.next_iterations(iterations, elapsed);
        }
    }

    /// Predicts the batch size needed to reach the minimum time.
    fn next_iterations(&self, iterations: u64, elapsed: Duration) -> u64 {
        let elapsed = elapsed.as_secs_f64().max(1e-9);
        let target = self.min_time.as_secs_f64();

        let mut multiplier = target * 1.4 / elapsed;
        if elapsed / target <= 0.1 {
            multiplier = multiplier.min(10.0);
        }
        if multiplier <= 1.0 {
            multiplier = 2.0;
        }

        let predicted = (iterations as f64 * multiplier).round();
        let predicted = if predicted >= self.max_iterations as f64 {
            self.max_iterations
        } else {
            predicted as u64
        };
        predicted.max(iterations + 1).min(self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_iterations_caps_growth_at_ten() {
        let oracle = TimingOracle::new(Duration::from_millis(100), 1_000_000);
        assert_eq!(oracle.next_iterations(10, Duration::from_nanos(10)), 100);
    }

    #[test]
    fn test_next_iterations_uses_prediction_near_target() {
        let oracle = TimingOracle::new(Duration::from_millis(100), 1_000_000);
        // 50ms of 100ms: predicted 100 * 1.4 * 2 = 280.
        assert_eq!(oracle.next_iterations(100, Duration::from_millis(50)), 280);
    }

    #[test]
    fn test_next_iterations_respects_cap() {
        let oracle = TimingOracle::new(Duration::from_secs(1), 50);
        assert_eq!(oracle.next_iterations(40, Duration::from_nanos(1)), 50);
    }

    #[test]
    fn test_measure_stops_at_iteration_cap() {
        let oracle = TimingOracle::new(Duration::from_secs(3600), 4);
        let mut case = BenchCase::new(Pattern::Read, Layout::Soa, Strategy::Iter, 16).unwrap();
        let m = oracle.measure(&mut case);

        assert_eq!(m.iterations, 4);
        assert_eq!(m.pattern, Pattern::Read);
        assert_eq!(m.layout, Layout::Soa);
        assert_eq!(m.size, 16);
        assert!(m.ns_per_iter >= 0.0);
    }

    #[test]
    fn test_measure_reaches_min_time() {
        let oracle = TimingOracle::new(Duration::from_micros(200), u64::MAX);
        let mut case = BenchCase::new(Pattern::Merge, Layout::Aos, Strategy::Raw, 64).unwrap();
        let m = oracle.measure(&mut case);

        assert!(m.total_ns >= 200_000);
        assert!(m.items_per_sec > 0.0);
    }
}
