//! Stochastic per-visit casualty detection.

use sar_core::SarRng;

/// Default odds denominator: detection fails 1 time in 10 per visit.
pub const DEFAULT_FAILURE_ONE_IN: u32 = 10;

/// Per-visit detection outcome model.
///
/// A visit to a casualty cell succeeds with probability
/// `(failure_one_in − 1) / failure_one_in` via a single discrete draw:
/// 9 visits in 10 by default, configurable so tests can pin the odds.
/// A revisit after a failed detection gets a fresh independent draw.
#[derive(Copy, Clone, Debug)]
pub struct DetectionModel {
    failure_one_in: u32,
}

impl DetectionModel {
    /// Detection fails 1 time in `failure_one_in` visits.
    ///
    /// Values below 1 are clamped to 1 (every visit fails — useful for
    /// false-negative tests).
    pub fn new(failure_one_in: u32) -> Self {
        Self { failure_one_in: failure_one_in.max(1) }
    }

    /// Probability that a single visit detects a present casualty.
    pub fn success_probability(&self) -> f64 {
        1.0 - 1.0 / self.failure_one_in as f64
    }

    /// One independent detection draw: `true` = detected.
    pub fn draw(&self, rng: &mut SarRng) -> bool {
        rng.gen_range(1..=self.failure_one_in) != 1
    }
}

impl Default for DetectionModel {
    fn default() -> Self {
        Self::new(DEFAULT_FAILURE_ONE_IN)
    }
}
