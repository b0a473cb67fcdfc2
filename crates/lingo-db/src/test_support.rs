//! Shared test utilities for lingo-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::{DateTime, Utc};
    use lingo_core::seed::{SeedData, SeedGroup, SeedOutcome, SeedWord};

    use crate::helpers::format_timestamp;
    use crate::service::LingoService;

    /// Create an in-memory LingoService.
    pub async fn test_service() -> LingoService {
        LingoService::new_local(":memory:").await.unwrap()
    }

    /// Seed one group whose words are `(headword, translation)` pairs.
    pub async fn seed_test_group(
        svc: &LingoService,
        name: &str,
        words: &[(&str, &str)],
    ) -> SeedOutcome {
        let seed = SeedData {
            group: SeedGroup {
                name: name.to_string(),
            },
            words: words
                .iter()
                .map(|(headword, translation)| SeedWord {
                    headword: (*headword).to_string(),
                    transliteration: String::new(),
                    translation: (*translation).to_string(),
                })
                .collect(),
        };
        svc.seed_group(&seed).await.unwrap()
    }

    /// Insert a session with an explicit creation time (bypasses the tracker).
    pub async fn insert_session_at(
        svc: &LingoService,
        group_id: i64,
        label: &str,
        created_at: DateTime<Utc>,
    ) -> i64 {
        let mut rows = svc
            .db()
            .conn()
            .query(
                "INSERT INTO study_sessions (group_id, activity_label, created_at)
                 VALUES (?1, ?2, ?3) RETURNING id",
                libsql::params![group_id, label, format_timestamp(&created_at)],
            )
            .await
            .unwrap();
        rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
    }
}
