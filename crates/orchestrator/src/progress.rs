//! Endpoint sweep counters

use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub total: usize,
    pub informative: usize,
    pub discarded: usize,
    pub failed: usize,
}

impl SweepStats {
    pub fn probed(&self) -> usize {
        self.informative + self.discarded + self.failed
    }
}

#[derive(Default)]
pub struct ProgressTracker {
    total: AtomicUsize,
    informative: AtomicUsize,
    discarded: AtomicUsize,
    failed: AtomicUsize,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new sweep of `total` paths; counters from earlier sweeps are cleared.
    pub fn reset(&self, total: usize) {
        self.total.store(total, Ordering::Relaxed);
        self.informative.store(0, Ordering::Relaxed);
        self.discarded.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
    }

    /// Probe answered with a reportable status.
    pub fn record_informative(&self) {
        self.informative.fetch_add(1, Ordering::Relaxed);
    }

    /// Probe answered, status not worth reporting.
    pub fn record_discarded(&self) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
    }

    /// Probe never got an answer.
    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> SweepStats {
        SweepStats {
            total: self.total.load(Ordering::Relaxed),
            informative: self.informative.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }

    pub fn log_summary(&self) {
        let stats = self.snapshot();
        info!("Endpoint sweep summary:");
        info!("  Paths: {}", stats.total);
        info!("  Probed: {}", stats.probed());
        info!("  Informative: {}", stats.informative);
        info!("  Discarded: {}", stats.discarded);
        info!("  Failed: {}", stats.failed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let progress = ProgressTracker::new();
        progress.reset(4);
        progress.record_informative();
        progress.record_discarded();
        progress.record_failed();
        progress.record_failed();

        let stats = progress.snapshot();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.probed(), 4);
        assert_eq!(stats.failed, 2);
    }

    #[test]
    fn reset_clears_previous_sweep() {
        let progress = ProgressTracker::new();
        progress.reset(2);
        progress.record_failed();
        progress.record_informative();

        progress.reset(3);
        assert_eq!(
            progress.snapshot(),
            SweepStats {
                total: 3,
                ..SweepStats::default()
            }
        );
    }
}
