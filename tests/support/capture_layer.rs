use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

#[derive(Debug, Clone)]
pub struct CapturedSpan {
    pub id: Id,
    pub name: &'static str,
    pub parent: Option<Id>,
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub parent: Option<Id>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn message(&self) -> Option<&str> {
        self.fields.get("message").map(String::as_str)
    }
}

#[derive(Debug, Default)]
pub struct Captured {
    pub spans: Vec<CapturedSpan>,
    pub events: Vec<CapturedEvent>,
}

impl Captured {
    pub fn spans_named(&self, name: &str) -> Vec<&CapturedSpan> {
        self.spans.iter().filter(|s| s.name == name).collect()
    }

    pub fn event_with_message(&self, message: &str) -> Option<&CapturedEvent> {
        self.events.iter().find(|e| e.message() == Some(message))
    }
}

/// Layer that keeps every span creation and event, with resolved parents.
#[derive(Clone, Default)]
pub struct CaptureLayer {
    captured: Arc<Mutex<Captured>>,
}

impl CaptureLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captured(&self) -> std::sync::MutexGuard<'_, Captured> {
        self.captured.lock().unwrap()
    }
}

#[derive(Default)]
struct FieldVisitor(HashMap<String, String>);

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let parent = match attrs.parent() {
            Some(parent) => Some(parent.clone()),
            None if attrs.is_contextual() => ctx.current_span().id().cloned(),
            None => None,
        };
        let mut visitor = FieldVisitor::default();
        attrs.record(&mut visitor);

        self.captured.lock().unwrap().spans.push(CapturedSpan {
            id: id.clone(),
            name: attrs.metadata().name(),
            parent,
            fields: visitor.0,
        });
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let parent = match event.parent() {
            Some(parent) => Some(parent.clone()),
            None if event.is_contextual() => ctx.current_span().id().cloned(),
            None => None,
        };
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        self.captured.lock().unwrap().events.push(CapturedEvent {
            parent,
            fields: visitor.0,
        });
    }
}
