//! In-process `metrics` recorder for assertions.
//!
//! [`MetricsRecorder`] is installed thread-locally for the duration of a
//! closure, so parallel tests never observe each other's values.

use metrics::{
    Counter, Gauge, Histogram, HistogramFn, Key, KeyName, Metadata, Recorder, SharedString, Unit,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of samples a histogram has received
#[derive(Debug, Default)]
struct SampleCount(AtomicU64);

impl HistogramFn for SampleCount {
    fn record(&self, _value: f64) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

/// Counts counter increments and histogram samples by metric name
///
/// # Example
///
/// ```
/// use tasklist_testing::{Harness, MetricsRecorder};
///
/// let recorder = MetricsRecorder::new();
/// recorder.record(|| {
///     let page = Harness::mounted();
///     page.type_and_submit("Buy milk");
/// });
///
/// assert_eq!(recorder.counter("tasklist_controller_renders_total"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    counters: RefCell<HashMap<String, Arc<AtomicU64>>>,
    histograms: RefCell<HashMap<String, Arc<SampleCount>>>,
    described: RefCell<HashSet<String>>,
}

impl MetricsRecorder {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with this recorder installed on the current thread
    pub fn record<T>(&self, f: impl FnOnce() -> T) -> T {
        metrics::with_local_recorder(self, f)
    }

    /// Current value of counter `name`; zero if it was never registered
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        self.counters
            .borrow()
            .get(name)
            .map_or(0, |value| value.load(Ordering::Relaxed))
    }

    /// Samples recorded into histogram `name`
    #[must_use]
    pub fn histogram_samples(&self, name: &str) -> u64 {
        self.histograms
            .borrow()
            .get(name)
            .map_or(0, |samples| samples.0.load(Ordering::Relaxed))
    }

    /// Whether a description was registered for `name`
    #[must_use]
    pub fn is_described(&self, name: &str) -> bool {
        self.described.borrow().contains(name)
    }

    fn describe(&self, key: &KeyName) {
        self.described.borrow_mut().insert(key.as_str().to_owned());
    }
}

impl Recorder for MetricsRecorder {
    fn describe_counter(&self, key: KeyName, _unit: Option<Unit>, _description: SharedString) {
        self.describe(&key);
    }

    fn describe_gauge(&self, key: KeyName, _unit: Option<Unit>, _description: SharedString) {
        self.describe(&key);
    }

    fn describe_histogram(&self, key: KeyName, _unit: Option<Unit>, _description: SharedString) {
        self.describe(&key);
    }

    fn register_counter(&self, key: &Key, _metadata: &Metadata<'_>) -> Counter {
        let value = Arc::clone(
            self.counters
                .borrow_mut()
                .entry(key.name().to_owned())
                .or_default(),
        );
        Counter::from_arc(value)
    }

    fn register_gauge(&self, _key: &Key, _metadata: &Metadata<'_>) -> Gauge {
        Gauge::noop()
    }

    fn register_histogram(&self, key: &Key, _metadata: &Metadata<'_>) -> Histogram {
        let samples = Arc::clone(
            self.histograms
                .borrow_mut()
                .entry(key.name().to_owned())
                .or_default(),
        );
        Histogram::from_arc(samples)
    }
}
