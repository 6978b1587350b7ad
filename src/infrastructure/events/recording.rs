//! Recording Event Sink
//!
//! Keeps every notification in memory. Clones share one log, so a test can
//! hand one clone to the widget and inspect the other.

use std::sync::{Arc, Mutex};

use crate::domain::ports::{DropdownEvent, DropdownEventSink};
use crate::domain::value_objects::InstanceId;

#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    log: Arc<Mutex<Vec<(InstanceId, DropdownEvent)>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification so far, oldest first
    pub fn events(&self) -> Vec<DropdownEvent> {
        self.entries().into_iter().map(|(_, event)| event).collect()
    }

    pub fn entries(&self) -> Vec<(InstanceId, DropdownEvent)> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Notification names, oldest first
    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(DropdownEvent::name).collect()
    }

    /// How many notifications named `name` were seen
    pub fn count(&self, name: &str) -> usize {
        self.names().into_iter().filter(|n| *n == name).count()
    }

    pub fn clear(&self) {
        if let Ok(mut log) = self.log.lock() {
            log.clear();
        }
    }
}

impl DropdownEventSink for RecordingEventSink {
    fn on_event(&self, instance: &InstanceId, event: &DropdownEvent) {
        if let Ok(mut log) = self.log.lock() {
            log.push((instance.clone(), event.clone()));
        }
    }
}
