//! JSON Event Sink
//!
//! Streams dropdown notifications as NDJSON so a host process can follow
//! the widget without linking against it.

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::Value;

use crate::domain::ports::{DropdownEvent, DropdownEventSink};
use crate::domain::value_objects::InstanceId;

/// Event sink that writes one JSON object per notification
pub struct JsonEventSink {
    /// Mutex to ensure whole-line writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl std::fmt::Debug for JsonEventSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonEventSink").finish_non_exhaustive()
    }
}

impl DropdownEventSink for JsonEventSink {
    fn on_event(&self, instance: &InstanceId, event: &DropdownEvent) {
        let mut json = match serde_json::to_value(event) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(event = event.name(), error = %e, "failed to encode notification");
                return;
            }
        };
        if let Value::Object(fields) = &mut json {
            fields.insert("instance".to_string(), Value::String(instance.to_string()));
        }
        self.write_event(json);
    }
}
