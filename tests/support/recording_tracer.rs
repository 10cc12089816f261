use activity_feed::tracer::ActivityTracer;
use std::sync::Mutex;

/// Calls observed by [`RecordingTracer`], in order.
#[derive(Debug, Clone, PartialEq)]
pub enum TracerCall {
    Start(String),
    Metadata {
        key: String,
        value: serde_json::Value,
        namespace: String,
    },
    End,
}

/// In-memory tracer that records every call
#[derive(Default)]
pub struct RecordingTracer {
    calls: Mutex<Vec<TracerCall>>,
}

impl RecordingTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<TracerCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ActivityTracer for RecordingTracer {
    fn start_span(&self, name: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(TracerCall::Start(name.to_string()));
    }

    fn attach_metadata(&self, key: &str, value: &serde_json::Value, namespace: &str) {
        self.calls.lock().unwrap().push(TracerCall::Metadata {
            key: key.to_string(),
            value: value.clone(),
            namespace: namespace.to_string(),
        });
    }

    fn end_span(&self) {
        self.calls.lock().unwrap().push(TracerCall::End);
    }
}
