//! Operation timing monitor.
//!
//! Records named-operation durations in an append-only per-operation list
//! and reports averages. Peripheral to correctness — nothing consults the
//! samples on a request path.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// A single recorded duration above this threshold logs a warning.
const SLOW_OPERATION_THRESHOLD: Duration = Duration::from_millis(100);

/// Thread-safe duration recorder.
#[derive(Default)]
pub struct PerformanceMonitor {
    samples: Mutex<HashMap<String, Vec<Duration>>>,
}

impl PerformanceMonitor {
    /// Create an empty monitor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample for a named operation.
    pub fn record(&self, operation: &str, duration: Duration) {
        self.samples
            .lock()
            .entry(operation.to_owned())
            .or_default()
            .push(duration);

        if duration > SLOW_OPERATION_THRESHOLD {
            tracing::warn!(
                operation,
                duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
                "slow operation"
            );
        }
    }

    /// Average duration for one operation, if any samples exist.
    #[must_use]
    pub fn average(&self, operation: &str) -> Option<Duration> {
        let samples = self.samples.lock();
        let durations = samples.get(operation)?;
        let total: Duration = durations.iter().sum();
        Some(total / durations.len() as u32)
    }

    /// Average duration per operation name.
    #[must_use]
    pub fn averages(&self) -> HashMap<String, Duration> {
        let samples = self.samples.lock();
        samples
            .iter()
            .filter(|(_, durations)| !durations.is_empty())
            .map(|(operation, durations)| {
                let total: Duration = durations.iter().sum();
                (operation.clone(), total / durations.len() as u32)
            })
            .collect()
    }

    /// Time a closure and record the elapsed duration under `operation`.
    pub fn time<T>(&self, operation: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = f();
        self.record(operation, start.elapsed());
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        let monitor = PerformanceMonitor::new();
        monitor.record("list_events", Duration::from_millis(10));
        monitor.record("list_events", Duration::from_millis(30));

        assert_eq!(
            monitor.average("list_events"),
            Some(Duration::from_millis(20))
        );
        assert!(monitor.average("unknown").is_none());
    }

    #[test]
    fn test_averages_per_operation() {
        let monitor = PerformanceMonitor::new();
        monitor.record("a", Duration::from_millis(4));
        monitor.record("b", Duration::from_millis(6));
        monitor.record("b", Duration::from_millis(8));

        let averages = monitor.averages();
        assert_eq!(averages.get("a"), Some(&Duration::from_millis(4)));
        assert_eq!(averages.get("b"), Some(&Duration::from_millis(7)));
    }

    #[test]
    fn test_time_returns_closure_result() {
        let monitor = PerformanceMonitor::new();
        let value = monitor.time("compute", || 41 + 1);
        assert_eq!(value, 42);
        assert!(monitor.average("compute").is_some());
    }
}
