use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One recorded review attempt.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WordReview {
    pub study_session_id: i64,
    pub word_id: i64,
    pub correct: bool,
    pub created_at: DateTime<Utc>,
}

/// Review outcome totals for a single word across all sessions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WordStats {
    pub word_id: i64,
    pub correct_count: i64,
    pub wrong_count: i64,
}
