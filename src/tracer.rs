use std::sync::{Mutex, PoisonError};
use tracing::{debug, info_span, trace, Span};

/// Scoped span reporting used by the lookup service.
///
/// Spans nest: `end_span` closes the most recently started span that is still
/// open.
pub trait ActivityTracer {
    fn start_span(&self, name: &str);

    /// Attaches a JSON payload under `key` to the innermost open span.
    fn attach_metadata(&self, key: &str, value: &serde_json::Value, namespace: &str);

    fn end_span(&self);
}

/// [`ActivityTracer`] backed by the `tracing` crate.
///
/// Each started span becomes a `subsegment` span parented to the previously
/// open one, or to the current contextual span. Metadata is emitted as a debug
/// event inside it, so it reaches whatever subscriber (fmt, OpenTelemetry) is
/// installed.
#[derive(Debug, Default)]
pub struct TracingRecorder {
    open: Mutex<Vec<Span>>,
}

impl TracingRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.open
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl ActivityTracer for TracingRecorder {
    fn start_span(&self, name: &str) {
        let mut open = self.open.lock().unwrap_or_else(PoisonError::into_inner);
        let span = match open.last() {
            Some(parent) => info_span!(parent: parent, "subsegment", label = %name),
            None => info_span!("subsegment", label = %name),
        };
        trace!(parent: &span, "Subsegment started");
        open.push(span);
    }

    fn attach_metadata(&self, key: &str, value: &serde_json::Value, namespace: &str) {
        let open = self.open.lock().unwrap_or_else(PoisonError::into_inner);
        match open.last() {
            Some(span) => {
                debug!(parent: span, key, namespace, metadata = %value, "Metadata attached")
            }
            None => debug!(key, namespace, metadata = %value, "Metadata without subsegment"),
        }
    }

    fn end_span(&self) {
        let mut open = self.open.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(span) = open.pop() {
            trace!(parent: &span, "Subsegment ended");
        }
    }
}
