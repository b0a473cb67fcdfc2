//! Group repository: paginated groups with derived word counts and
//! paginated group membership.

use lingo_core::entities::{Group, Word};
use lingo_core::pagination::Page;

use crate::error::DatabaseError;
use crate::helpers::page_request;
use crate::repos::word::{WORD_COLS, row_to_word};
use crate::service::LingoService;

/// Columns for a group with its word count; requires
/// `LEFT JOIN word_groups wg ON wg.group_id = g.id ... GROUP BY g.id`.
pub(crate) const GROUP_COLS: &str = "g.id, g.name, COUNT(wg.word_id)";

pub(crate) fn row_to_group(row: &libsql::Row) -> Result<Group, DatabaseError> {
    Ok(Group {
        id: row.get(0)?,
        name: row.get(1)?,
        word_count: row.get(2)?,
    })
}

impl LingoService {
    /// List groups ordered by id, each with its word count.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` for a zero `page_size`, or
    /// `DatabaseError` if a query fails.
    pub async fn list_groups(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Group>, DatabaseError> {
        let request = page_request(page, page_size)?;
        tracing::debug!(page, page_size, "list_groups");
        self.fetch_page(
            request,
            "SELECT COUNT(*) FROM groups",
            &format!(
                "SELECT {GROUP_COLS}
                 FROM groups g
                 LEFT JOIN word_groups wg ON wg.group_id = g.id
                 GROUP BY g.id
                 ORDER BY g.id
                 LIMIT ?1 OFFSET ?2"
            ),
            Vec::new(),
            row_to_group,
        )
        .await
    }

    /// Get a group by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the group does not exist.
    pub async fn get_group(&self, id: i64) -> Result<Group, DatabaseError> {
        let sql = format!(
            "SELECT {GROUP_COLS}
             FROM groups g
             LEFT JOIN word_groups wg ON wg.group_id = g.id
             WHERE g.id = ?1
             GROUP BY g.id"
        );
        let conn = self.db().acquire().await;
        let mut rows = conn.query(&sql, [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::not_found("group", id))?;
        row_to_group(&row)
    }

    /// List the words of a group ordered by word id.
    ///
    /// An unknown group yields an empty page.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` for a zero `page_size`, or
    /// `DatabaseError` if a query fails.
    pub async fn list_group_words(
        &self,
        group_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Word>, DatabaseError> {
        let request = page_request(page, page_size)?;
        tracing::debug!(group_id, page, page_size, "list_group_words");
        self.fetch_page(
            request,
            "SELECT COUNT(*)
             FROM words w
             JOIN word_groups wg ON wg.word_id = w.id
             WHERE wg.group_id = ?1",
            &format!(
                "SELECT {WORD_COLS}
                 FROM words w
                 JOIN word_groups wg ON wg.word_id = w.id
                 WHERE wg.group_id = ?1
                 ORDER BY w.id
                 LIMIT ?2 OFFSET ?3"
            ),
            vec![group_id.into()],
            row_to_word,
        )
        .await
    }
}
