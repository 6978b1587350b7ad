//! Event Sink Implementations
//!
//! Provides concrete implementations of DropdownEventSink:
//! - JsonEventSink: NDJSON output for host processes
//! - RecordingEventSink: in-memory log

mod json;
mod recording;

pub use json::JsonEventSink;
pub use recording::RecordingEventSink;
