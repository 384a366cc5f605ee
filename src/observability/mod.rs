// Observability: metrics recording

pub mod metrics;

pub use metrics::{time_operation, MetricName};
