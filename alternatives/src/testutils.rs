use crate::config_store::{ConfigObject, InMemoryConfigStore};
use crate::events::EventSink;
use crate::selector::{ALTERNATIVES_CONFIG_KEY, ALTERNATIVES_CONFIG_NAME};
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedEvent {
    pub object: String,
    pub reason: String,
    pub message: String,
}

/// Event sink that records everything it receives, for assertions.
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        RecordingEventSink::default()
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().clone()
    }
}

impl EventSink for RecordingEventSink {
    fn warning(&self, object: &ConfigObject, reason: &str, message: &str) {
        self.events.lock().push(RecordedEvent {
            object: object.name.clone(),
            reason: reason.to_string(),
            message: message.to_string(),
        });
    }
}

/// Config object carrying `raw` under the well-known alternatives key.
pub fn alternatives_object(raw: &str) -> ConfigObject {
    ConfigObject {
        name: ALTERNATIVES_CONFIG_NAME.to_string(),
        data: HashMap::from([(ALTERNATIVES_CONFIG_KEY.to_string(), raw.to_string())]),
    }
}

/// In-memory store preloaded with an alternatives config object.
pub fn store_with_alternatives(raw: &str) -> InMemoryConfigStore {
    let store = InMemoryConfigStore::new();
    store.insert(alternatives_object(raw));
    store
}
