//! Operator-visible event notifications.

use crate::config_store::ConfigObject;

/// Reason code attached to events about an invalid alternatives mapping.
pub const REASON_INVALID_CONFIG: &str = "AlternativesConfigInvalid";

/// Sink for operator-visible warning events. Fire-and-forget; the selector
/// never consumes a return value.
pub trait EventSink: Send + Sync {
    fn warning(&self, object: &ConfigObject, reason: &str, message: &str);
}

/// Discards every event. For embeddings without an event pipeline.
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn warning(&self, _object: &ConfigObject, _reason: &str, _message: &str) {}
}
