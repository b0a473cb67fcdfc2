//! Derived statistics returned by the dashboard queries.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Summary of the most recent study session.
///
/// `word_count` is the number of distinct words reviewed and `correct_count` the
/// number of those words answered correctly at least once, so `accuracy` is
/// always within `0.0..=100.0`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LastStudySession {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub group_id: i64,
    pub group_name: String,
    pub activity_name: String,
    pub word_count: i64,
    pub correct_count: i64,
    pub accuracy: f64,
}

impl LastStudySession {
    /// Percentage of reviewed words answered correctly; `0.0` when nothing was
    /// reviewed.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute_accuracy(correct_count: i64, word_count: i64) -> f64 {
        if word_count > 0 {
            correct_count as f64 / word_count as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Catalog coverage: words ever reviewed versus words available.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyProgress {
    pub total_words_studied: i64,
    pub total_available_words: i64,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QuickStats {
    pub success_rate: f64,
    pub total_study_sessions: i64,
    pub total_active_groups: i64,
    pub study_streak_days: u32,
}

/// Per-table row counts removed by a reset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResetSummary {
    pub word_review_items: u64,
    pub study_sessions: u64,
    pub word_groups: u64,
    pub words: u64,
    pub groups: u64,
}
