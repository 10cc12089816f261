use crate::clock::{Clock, SystemClock};
use crate::model::{to_iso8601, ActivityError, ActivityResult, ResultModel};
use crate::tracer::ActivityTracer;
use chrono::{DateTime, Duration, Local};
use tracing::{debug, instrument};
use uuid::{uuid, Uuid};

const MOCK_UUID: Uuid = uuid!("248959df-3079-4947-b847-9e0892d1bab4");
const MOCK_HANDLE: &str = "Andrew Brown";
const MOCK_MESSAGE: &str = "Cloud is fun!";

const SUBSEGMENT: &str = "user_activities";
const METADATA_KEY: &str = "handle";
const METADATA_NAMESPACE: &str = "namespace";

/// Activity lookup for a single user.
///
/// Returns mock data until a storage backend exists: any non-blank handle
/// yields the same single activity.
pub struct UserActivities<'a> {
    clock: &'a dyn Clock,
    tracer: Option<&'a dyn ActivityTracer>,
}

impl UserActivities<'static> {
    /// Lookup on the system clock without a tracer.
    pub fn run(user_handle: Option<&str>) -> ResultModel {
        UserActivities::new().lookup(user_handle)
    }

    pub fn new() -> Self {
        Self {
            clock: &SystemClock,
            tracer: None,
        }
    }
}

impl Default for UserActivities<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> UserActivities<'a> {
    pub fn with_clock(mut self, clock: &'a dyn Clock) -> UserActivities<'a> {
        self.clock = clock;
        self
    }

    pub fn with_tracer(mut self, tracer: &'a dyn ActivityTracer) -> UserActivities<'a> {
        self.tracer = Some(tracer);
        self
    }

    #[instrument(skip(self))]
    pub fn lookup(&self, user_handle: Option<&str>) -> ResultModel {
        let now = self.clock.now();

        let model = match user_handle {
            Some(handle) if !handle.is_empty() => ResultModel::success(vec![mock_activity(now)]),
            _ => {
                debug!("Rejecting blank user handle");
                ResultModel::failure(ActivityError::BlankUserHandle)
            }
        };

        if let Some(tracer) = self.tracer {
            report(tracer, user_handle, now, &model);
        }

        model
    }
}

fn mock_activity(now: DateTime<Local>) -> ActivityResult {
    ActivityResult::new(
        MOCK_UUID,
        MOCK_HANDLE.to_string(),
        MOCK_MESSAGE.to_string(),
        now - Duration::days(1),
        now + Duration::days(31),
    )
}

fn report(
    tracer: &dyn ActivityTracer,
    user_handle: Option<&str>,
    now: DateTime<Local>,
    model: &ResultModel,
) {
    tracer.start_span(SUBSEGMENT);
    let metadata = serde_json::json!({
        "user": user_handle,
        "now": to_iso8601(&now),
        "results": model.data(),
    });
    tracer.attach_metadata(METADATA_KEY, &metadata, METADATA_NAMESPACE);
    tracer.end_span();
}
