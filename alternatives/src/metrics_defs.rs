//! Metrics definitions for the alternatives selector.

use shared::metrics_defs::{MetricDef, MetricType};

pub const CONFIG_LOAD_OK: MetricDef = MetricDef {
    name: "alternatives.config_load.ok",
    metric_type: MetricType::Counter,
    description: "Number of alternatives configuration loads that parsed successfully",
};

pub const CONFIG_LOAD_FAILED: MetricDef = MetricDef {
    name: "alternatives.config_load.failed",
    metric_type: MetricType::Counter,
    description: "Number of alternatives configuration loads rejected as empty or malformed",
};

pub const ALL_METRICS: &[MetricDef] = &[CONFIG_LOAD_OK, CONFIG_LOAD_FAILED];

/// Registers metric descriptions with the installed recorder. Call once at
/// startup from the embedding application.
pub fn describe_metrics() {
    shared::metrics_defs::describe_all(ALL_METRICS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_metrics() {
        // Must not panic when no recorder is installed.
        describe_metrics();
    }
}
