//! Metrics for the vendor import pipeline
//!
//! Recording goes through the `metrics` facade. Nothing is exported unless
//! the host process installs a recorder.

use std::fmt;
use std::time::Instant;

/// All metric names used by the importer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Loader
    LoaderRowsLoaded,
    LoaderRowsDropped,
    LoaderErrors,
    LoaderDuration,

    // Sinks
    SinkRecordsDelivered,
    ExportRecordsWritten,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::LoaderRowsLoaded => "vendor_import_rows_loaded_total",
            MetricName::LoaderRowsDropped => "vendor_import_rows_dropped_total",
            MetricName::LoaderErrors => "vendor_import_load_errors_total",
            MetricName::LoaderDuration => "vendor_import_load_duration_seconds",
            MetricName::SinkRecordsDelivered => "vendor_import_records_delivered_total",
            MetricName::ExportRecordsWritten => "vendor_import_records_exported_total",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records the elapsed time into a histogram when dropped
pub struct TimingGuard {
    start: Instant,
    histogram: MetricName,
}

impl TimingGuard {
    pub fn new(histogram: MetricName) -> Self {
        Self {
            start: Instant::now(),
            histogram,
        }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        let secs = self.start.elapsed().as_secs_f64();
        ::metrics::histogram!(self.histogram.as_str()).record(secs);
    }
}

pub fn time_operation(histogram: MetricName) -> TimingGuard {
    TimingGuard::new(histogram)
}

// ============================================================================
// Loader Metrics
// ============================================================================

pub mod loader {
    use super::MetricName;

    pub fn rows_loaded(count: usize) {
        ::metrics::counter!(MetricName::LoaderRowsLoaded.as_str()).increment(count as u64);
    }

    pub fn rows_dropped(count: usize) {
        ::metrics::counter!(MetricName::LoaderRowsDropped.as_str()).increment(count as u64);
    }

    pub fn load_error(error_type: &'static str) {
        ::metrics::counter!(MetricName::LoaderErrors.as_str(), "error_type" => error_type).increment(1);
    }
}

// ============================================================================
// Sink Metrics
// ============================================================================

pub mod sink {
    use super::MetricName;

    pub fn record_delivered(sink: &'static str) {
        ::metrics::counter!(MetricName::SinkRecordsDelivered.as_str(),
            "sink" => sink,
            "outcome" => "success"
        ).increment(1);
    }

    pub fn record_failed(sink: &'static str) {
        ::metrics::counter!(MetricName::SinkRecordsDelivered.as_str(),
            "sink" => sink,
            "outcome" => "failure"
        ).increment(1);
    }

    pub fn records_exported(count: usize) {
        ::metrics::counter!(MetricName::ExportRecordsWritten.as_str()).increment(count as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_metric_names_are_namespaced() {
        for name in [
            MetricName::LoaderRowsLoaded,
            MetricName::LoaderRowsDropped,
            MetricName::LoaderErrors,
            MetricName::LoaderDuration,
            MetricName::SinkRecordsDelivered,
            MetricName::ExportRecordsWritten,
        ] {
            assert!(name.as_str().starts_with("vendor_import_"));
            assert_eq!(name.to_string(), name.as_str());
        }
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        loader::rows_loaded(3);
        loader::rows_dropped(1);
        loader::load_error("not_found");
        sink::record_delivered("dry_run");
        sink::record_failed("http");
        sink::records_exported(2);

        let guard = time_operation(MetricName::LoaderDuration);
        thread::sleep(Duration::from_millis(1));
        drop(guard);
    }
}
