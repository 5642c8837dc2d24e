//! Common types for metrics definitions.
//!
//! Each crate declares its metrics as `MetricDef` consts in its own
//! `metrics_defs` module and registers them once at startup through
//! [`describe_all`]. Emission goes through the `counter!` family of macros
//! so call sites reference the definition instead of a bare name string.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Counter,
    Gauge,
    Histogram,
}

impl MetricType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MetricType::Counter => "Counter",
            MetricType::Gauge => "Gauge",
            MetricType::Histogram => "Histogram",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub description: &'static str,
}

impl MetricDef {
    /// Registers this definition's description with the installed recorder.
    pub fn describe(&self) {
        match self.metric_type {
            MetricType::Counter => metrics::describe_counter!(self.name, self.description),
            MetricType::Gauge => metrics::describe_gauge!(self.name, self.description),
            MetricType::Histogram => metrics::describe_histogram!(self.name, self.description),
        }
    }
}

/// Registers a crate's metric definitions. A no-op when no recorder is
/// installed, so library tests can call through it freely.
pub fn describe_all(defs: &[MetricDef]) {
    for def in defs {
        tracing::debug!(
            name = def.name,
            metric_type = def.metric_type.as_str(),
            "registering metric"
        );
        def.describe();
    }
}

#[macro_export]
macro_rules! counter {
    ($def:expr) => {
        metrics::counter!($def.name)
    };
}

#[macro_export]
macro_rules! gauge {
    ($def:expr) => {
        metrics::gauge!($def.name)
    };
}

#[macro_export]
macro_rules! histogram {
    ($def:expr) => {
        metrics::histogram!($def.name)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_METRIC: MetricDef = MetricDef {
        name: "test.metric",
        metric_type: MetricType::Counter,
        description: "A test metric",
    };

    #[test]
    fn test_describe_without_recorder() {
        // No recorder installed in tests. Registration must be a no-op.
        describe_all(&[TEST_METRIC]);
    }

    #[test]
    fn test_metric_type_names() {
        assert_eq!(MetricType::Counter.as_str(), "Counter");
        assert_eq!(MetricType::Gauge.as_str(), "Gauge");
        assert_eq!(MetricType::Histogram.as_str(), "Histogram");
    }
}
