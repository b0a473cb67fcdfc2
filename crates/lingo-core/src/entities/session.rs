use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A study session as returned by the session listings.
///
/// `start_time` is the session's `created_at`; `end_time` is the `created_at`
/// of the linked study activity, when one exists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudySession {
    pub id: i64,
    pub group_id: i64,
    pub group_name: String,
    pub activity_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub review_items_count: i64,
}

/// Side record marking that an activity was launched for a session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyActivity {
    pub id: i64,
    pub study_session_id: i64,
    pub group_id: i64,
    pub created_at: DateTime<Utc>,
}
