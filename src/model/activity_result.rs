use chrono::{DateTime, Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entry of a user's activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityResult {
    pub uuid: Uuid,

    /// Display name of the author
    pub handle: String,

    pub message: String,

    /// Local ISO-8601 timestamp
    pub created_at: String,

    /// Local ISO-8601 timestamp
    pub expires_at: String,
}

impl ActivityResult {
    pub fn new(
        uuid: Uuid,
        handle: String,
        message: String,
        created_at: DateTime<Local>,
        expires_at: DateTime<Local>,
    ) -> Self {
        Self {
            uuid,
            handle,
            message,
            created_at: to_iso8601(&created_at),
            expires_at: to_iso8601(&expires_at),
        }
    }
}

/// Renders a local timestamp with microsecond precision and its UTC offset.
pub fn to_iso8601(timestamp: &DateTime<Local>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)
}
