//! Dashboard aggregates: last session summary, catalog progress, quick stats.

use lingo_core::dashboard::{LastStudySession, QuickStats, StudyProgress};

use crate::error::DatabaseError;
use crate::helpers::{parse_date, parse_datetime};
use crate::service::LingoService;
use crate::streak::consecutive_days;

impl LingoService {
    /// Summary of the most recently created session.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no session has been recorded, or
    /// `DatabaseError` if a query fails.
    pub async fn last_study_session(&self) -> Result<LastStudySession, DatabaseError> {
        let conn = self.db().acquire().await;
        let mut rows = conn
            .query(
                "SELECT
                    ss.id,
                    ss.created_at,
                    ss.group_id,
                    g.name,
                    ss.activity_label,
                    (SELECT COUNT(DISTINCT wri.word_id)
                       FROM word_review_items wri
                      WHERE wri.study_session_id = ss.id),
                    (SELECT COUNT(DISTINCT wri.word_id)
                       FROM word_review_items wri
                      WHERE wri.study_session_id = ss.id AND wri.correct = 1)
                 FROM study_sessions ss
                 JOIN groups g ON g.id = ss.group_id
                 ORDER BY ss.created_at DESC, ss.id DESC
                 LIMIT 1",
                (),
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::none_recorded("study session"))?;

        let word_count: i64 = row.get(5)?;
        let correct_count: i64 = row.get(6)?;
        Ok(LastStudySession {
            id: row.get(0)?,
            created_at: parse_datetime(&row.get::<String>(1)?)?,
            group_id: row.get(2)?,
            group_name: row.get(3)?,
            activity_name: row.get(4)?,
            word_count,
            correct_count,
            accuracy: LastStudySession::compute_accuracy(correct_count, word_count),
        })
    }

    /// Distinct words ever reviewed against the size of the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn study_progress(&self) -> Result<StudyProgress, DatabaseError> {
        let conn = self.db().acquire().await;
        let mut rows = conn
            .query(
                "SELECT
                    (SELECT COUNT(DISTINCT word_id) FROM word_review_items),
                    (SELECT COUNT(*) FROM words)",
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(StudyProgress {
            total_words_studied: row.get(0)?,
            total_available_words: row.get(1)?,
        })
    }

    /// Success rate, session and active-group totals, and the day streak.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails or a stored date is malformed.
    pub async fn quick_stats(&self) -> Result<QuickStats, DatabaseError> {
        let conn = self.db().acquire().await;
        let mut rows = conn
            .query(
                "SELECT
                    (SELECT COALESCE(AVG(CASE WHEN correct = 1 THEN 100.0 ELSE 0.0 END), 0.0)
                       FROM word_review_items),
                    (SELECT COUNT(*) FROM study_sessions),
                    (SELECT COUNT(DISTINCT group_id) FROM study_sessions)",
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let success_rate: f64 = row.get(0)?;
        let total_study_sessions: i64 = row.get(1)?;
        let total_active_groups: i64 = row.get(2)?;
        drop(rows);

        let mut rows = conn
            .query(
                "SELECT DISTINCT date(created_at) FROM study_sessions
                 WHERE date(created_at) IS NOT NULL",
                (),
            )
            .await?;
        let mut dates = Vec::new();
        while let Some(row) = rows.next().await? {
            dates.push(parse_date(&row.get::<String>(0)?)?);
        }

        let stats = QuickStats {
            success_rate,
            total_study_sessions,
            total_active_groups,
            study_streak_days: consecutive_days(&dates),
        };
        tracing::debug!(?stats, "quick_stats");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{insert_session_at, seed_test_group, test_service};

    #[tokio::test]
    async fn last_study_session_on_empty_store_is_not_found() {
        let svc = test_service().await;
        let err = svc.last_study_session().await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::NotFound {
                entity: "study session",
                id: None
            }
        ));
        assert_eq!(err.to_string(), "no study session recorded yet");
    }

    #[tokio::test]
    async fn last_study_session_reports_accuracy() {
        let svc = test_service().await;
        let food = seed_test_group(
            &svc,
            "Food",
            &[("pan", "bread"), ("agua", "water"), ("queso", "cheese"), ("leche", "milk")],
        )
        .await;
        let session_id = svc
            .create_study_activity(food.group_id, "flashcards")
            .await
            .unwrap();
        for (word, correct) in [(0, true), (1, false), (2, false), (3, false)] {
            svc.review_word(session_id, food.word_ids[word], correct)
                .await
                .unwrap();
        }

        let last = svc.last_study_session().await.unwrap();
        assert_eq!(last.id, session_id);
        assert_eq!(last.group_name, "Food");
        assert_eq!(last.activity_name, "flashcards");
        assert_eq!(last.word_count, 4);
        assert_eq!(last.correct_count, 1);
        assert!((last.accuracy - 25.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn repeated_reviews_keep_accuracy_bounded() {
        let svc = test_service().await;
        let food = seed_test_group(&svc, "Food", &[("pan", "bread")]).await;
        let session_id = svc
            .create_study_activity(food.group_id, "flashcards")
            .await
            .unwrap();
        for _ in 0..3 {
            svc.review_word(session_id, food.word_ids[0], true)
                .await
                .unwrap();
        }

        let last = svc.last_study_session().await.unwrap();
        assert_eq!(last.word_count, 1);
        assert_eq!(last.correct_count, 1);
        assert!((last.accuracy - 100.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn last_study_session_without_reviews_has_zero_accuracy() {
        let svc = test_service().await;
        let food = seed_test_group(&svc, "Food", &[("pan", "bread")]).await;
        svc.create_study_activity(food.group_id, "typing")
            .await
            .unwrap();

        let last = svc.last_study_session().await.unwrap();
        assert_eq!(last.word_count, 0);
        assert!(last.accuracy.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn study_progress_counts_distinct_reviewed_words() {
        let svc = test_service().await;
        let food = seed_test_group(
            &svc,
            "Food",
            &[("pan", "bread"), ("agua", "water"), ("queso", "cheese")],
        )
        .await;
        let session_id = svc
            .create_study_activity(food.group_id, "flashcards")
            .await
            .unwrap();
        svc.review_word(session_id, food.word_ids[0], true)
            .await
            .unwrap();
        svc.review_word(session_id, food.word_ids[0], false)
            .await
            .unwrap();

        assert_eq!(
            svc.study_progress().await.unwrap(),
            StudyProgress {
                total_words_studied: 1,
                total_available_words: 3,
            }
        );
    }

    #[tokio::test]
    async fn quick_stats_on_empty_store_are_zero() {
        let svc = test_service().await;
        let stats = svc.quick_stats().await.unwrap();
        assert!(stats.success_rate.abs() < f64::EPSILON);
        assert_eq!(stats.total_study_sessions, 0);
        assert_eq!(stats.total_active_groups, 0);
        assert_eq!(stats.study_streak_days, 0);
    }

    #[tokio::test]
    async fn quick_stats_aggregate_sessions_and_reviews() {
        let svc = test_service().await;
        let food = seed_test_group(&svc, "Food", &[("pan", "bread")]).await;
        let verbs = seed_test_group(&svc, "Verbs", &[("ser", "to be")]).await;

        let first = svc
            .create_study_activity(food.group_id, "flashcards")
            .await
            .unwrap();
        svc.create_study_activity(food.group_id, "typing")
            .await
            .unwrap();
        let third = svc
            .create_study_activity(verbs.group_id, "quiz")
            .await
            .unwrap();
        svc.review_word(first, food.word_ids[0], true).await.unwrap();
        svc.review_word(first, food.word_ids[0], true).await.unwrap();
        svc.review_word(third, verbs.word_ids[0], true).await.unwrap();
        svc.review_word(third, verbs.word_ids[0], false).await.unwrap();

        let stats = svc.quick_stats().await.unwrap();
        assert!((stats.success_rate - 75.0).abs() < f64::EPSILON);
        assert_eq!(stats.total_study_sessions, 3);
        assert_eq!(stats.total_active_groups, 2);
        assert_eq!(stats.study_streak_days, 1);
    }

    #[tokio::test]
    async fn streak_is_anchored_at_latest_session_date() {
        let svc = test_service().await;
        let food = seed_test_group(&svc, "Food", &[("pan", "bread")]).await;
        let latest = Utc.with_ymd_and_hms(2025, 6, 20, 23, 30, 0).unwrap();

        for days_back in [0, 1, 2, 4] {
            insert_session_at(&svc, food.group_id, "flashcards", latest - Duration::days(days_back))
                .await;
        }
        // Second session on the latest day must not extend the streak.
        insert_session_at(&svc, food.group_id, "typing", latest - Duration::hours(20)).await;

        assert_eq!(svc.quick_stats().await.unwrap().study_streak_days, 3);
    }
}
