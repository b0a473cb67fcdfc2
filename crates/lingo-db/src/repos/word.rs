//! Word repository: paginated catalog reads, per-word review stats, and
//! group membership.

use lingo_core::entities::{Group, Word, WordStats};
use lingo_core::pagination::Page;

use crate::error::DatabaseError;
use crate::helpers::page_request;
use crate::repos::group::{GROUP_COLS, row_to_group};
use crate::service::LingoService;

pub(crate) const WORD_COLS: &str = "w.id, w.headword, w.transliteration, w.translation";

pub(crate) fn row_to_word(row: &libsql::Row) -> Result<Word, DatabaseError> {
    Ok(Word {
        id: row.get(0)?,
        headword: row.get(1)?,
        transliteration: row.get(2)?,
        translation: row.get(3)?,
    })
}

impl LingoService {
    /// List words ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` for a zero `page_size`, or
    /// `DatabaseError` if a query fails.
    pub async fn list_words(&self, page: u32, page_size: u32) -> Result<Page<Word>, DatabaseError> {
        let request = page_request(page, page_size)?;
        tracing::debug!(page, page_size, "list_words");
        self.fetch_page(
            request,
            "SELECT COUNT(*) FROM words",
            &format!("SELECT {WORD_COLS} FROM words w ORDER BY w.id LIMIT ?1 OFFSET ?2"),
            Vec::new(),
            row_to_word,
        )
        .await
    }

    /// Get a word by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the word does not exist.
    pub async fn get_word(&self, id: i64) -> Result<Word, DatabaseError> {
        let conn = self.db().acquire().await;
        let mut rows = conn
            .query(&format!("SELECT {WORD_COLS} FROM words w WHERE w.id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::not_found("word", id))?;
        row_to_word(&row)
    }

    /// Count correct and wrong reviews of a word across all sessions.
    ///
    /// A word that was never reviewed (or does not exist) reports zeros.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_word_stats(&self, word_id: i64) -> Result<WordStats, DatabaseError> {
        let conn = self.db().acquire().await;
        let mut rows = conn
            .query(
                "SELECT
                    COALESCE(SUM(CASE WHEN correct = 1 THEN 1 ELSE 0 END), 0),
                    COALESCE(SUM(CASE WHEN correct = 0 THEN 1 ELSE 0 END), 0)
                 FROM word_review_items
                 WHERE word_id = ?1",
                [word_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(WordStats {
            word_id,
            correct_count: row.get(0)?,
            wrong_count: row.get(1)?,
        })
    }

    /// Groups the word belongs to, ordered by group id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_word_groups(&self, word_id: i64) -> Result<Vec<Group>, DatabaseError> {
        let sql = format!(
            "SELECT {GROUP_COLS}
             FROM groups g
             LEFT JOIN word_groups wg ON wg.group_id = g.id
             WHERE g.id IN (SELECT group_id FROM word_groups WHERE word_id = ?1)
             GROUP BY g.id
             ORDER BY g.id"
        );
        let conn = self.db().acquire().await;
        let mut rows = conn.query(&sql, [word_id]).await?;
        let mut groups = Vec::new();
        while let Some(row) = rows.next().await? {
            groups.push(row_to_group(&row)?);
        }
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{seed_test_group, test_service};

    #[tokio::test]
    async fn list_words_paginates() {
        let svc = test_service().await;
        seed_test_group(
            &svc,
            "Basics",
            &[("uno", "one"), ("dos", "two"), ("tres", "three")],
        )
        .await;

        let first = svc.list_words(1, 2).await.unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.items[0].headword, "uno");
        assert_eq!(first.pagination.total_items, 3);
        assert_eq!(first.pagination.total_pages, 2);
        assert_eq!(first.pagination.current_page, 1);
        assert_eq!(first.pagination.items_per_page, 2);

        let second = svc.list_words(2, 2).await.unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].headword, "tres");
    }

    #[tokio::test]
    async fn page_past_end_is_empty() {
        let svc = test_service().await;
        seed_test_group(&svc, "Basics", &[("uno", "one")]).await;

        let page = svc.list_words(5, 100).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.pagination.total_items, 1);
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.current_page, 5);
    }

    #[tokio::test]
    async fn empty_catalog_has_zero_pages() {
        let svc = test_service().await;
        let page = svc.list_words(1, 100).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.pagination.total_items, 0);
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[tokio::test]
    async fn page_zero_is_passed_through() {
        let svc = test_service().await;
        seed_test_group(&svc, "Basics", &[("uno", "one"), ("dos", "two")]).await;

        let page = svc.list_words(0, 1).await.unwrap();
        assert_eq!(page.pagination.current_page, 0);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn zero_page_size_is_rejected() {
        let svc = test_service().await;
        let err = svc.list_words(1, 0).await.unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn get_word_roundtrip_and_not_found() {
        let svc = test_service().await;
        let seeded = seed_test_group(&svc, "Basics", &[("hola", "hello")]).await;
        let id = seeded.word_ids[0];

        let word = svc.get_word(id).await.unwrap();
        assert_eq!(word.headword, "hola");
        assert_eq!(word.translation, "hello");

        let err = svc.get_word(id + 100).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn word_stats_count_outcomes() {
        let svc = test_service().await;
        let seeded = seed_test_group(&svc, "Basics", &[("hola", "hello")]).await;
        let word_id = seeded.word_ids[0];
        let session_id = svc
            .create_study_activity(seeded.group_id, "flashcards")
            .await
            .unwrap();

        for correct in [true, true, false] {
            svc.review_word(session_id, word_id, correct).await.unwrap();
        }

        let stats = svc.get_word_stats(word_id).await.unwrap();
        assert_eq!(
            stats,
            WordStats {
                word_id,
                correct_count: 2,
                wrong_count: 1,
            }
        );
    }

    #[tokio::test]
    async fn unreviewed_word_has_zero_stats() {
        let svc = test_service().await;
        let stats = svc.get_word_stats(999).await.unwrap();
        assert_eq!(stats.correct_count, 0);
        assert_eq!(stats.wrong_count, 0);
    }

    #[tokio::test]
    async fn word_groups_lists_memberships() {
        let svc = test_service().await;
        let food = seed_test_group(&svc, "Food", &[("pan", "bread"), ("agua", "water")]).await;
        let other = seed_test_group(&svc, "Other", &[("sol", "sun")]).await;

        // Link "pan" into the second group as well.
        svc.db()
            .conn()
            .execute(
                "INSERT INTO word_groups (word_id, group_id) VALUES (?1, ?2)",
                [food.word_ids[0], other.group_id],
            )
            .await
            .unwrap();

        let groups = svc.get_word_groups(food.word_ids[0]).await.unwrap();
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Other"]);
        assert_eq!(groups[0].word_count, 2);
        assert_eq!(groups[1].word_count, 2);

        let lonely = svc.get_word_groups(food.word_ids[1]).await.unwrap();
        assert_eq!(lonely.len(), 1);
    }
}
