//! Study repository: session + activity creation, review recording, and
//! session listings with derived review counts.
//!
//! Every session listing is ordered most recent first (`created_at DESC`,
//! then `id DESC`); dashboard queries depend on that order.

use chrono::{DateTime, Utc};
use lingo_core::entities::{StudyActivity, StudySession, Word, WordReview};
use lingo_core::pagination::Page;

use crate::LingoDb;
use crate::error::DatabaseError;
use crate::helpers::{
    format_timestamp, now, page_request, parse_datetime, parse_optional_datetime, query_exists,
};
use crate::repos::word::{WORD_COLS, row_to_word};
use crate::service::LingoService;

/// Session columns with the activity time and review count as correlated
/// subqueries, so several activities for one session never inflate the count.
const SESSION_SELECT: &str = "SELECT
        ss.id,
        ss.group_id,
        g.name,
        ss.activity_label,
        ss.created_at,
        (SELECT MIN(sa.created_at) FROM study_activities sa WHERE sa.study_session_id = ss.id),
        (SELECT COUNT(*) FROM word_review_items wri WHERE wri.study_session_id = ss.id)
    FROM study_sessions ss
    JOIN groups g ON g.id = ss.group_id";

const SESSION_ORDER: &str = "ORDER BY ss.created_at DESC, ss.id DESC";

fn row_to_session(row: &libsql::Row) -> Result<StudySession, DatabaseError> {
    Ok(StudySession {
        id: row.get(0)?,
        group_id: row.get(1)?,
        group_name: row.get(2)?,
        activity_name: row.get(3)?,
        start_time: parse_datetime(&row.get::<String>(4)?)?,
        end_time: parse_optional_datetime(row.get::<Option<String>>(5)?.as_deref())?,
        review_items_count: row.get(6)?,
    })
}

fn row_to_activity(row: &libsql::Row) -> Result<StudyActivity, DatabaseError> {
    Ok(StudyActivity {
        id: row.get(0)?,
        study_session_id: row.get(1)?,
        group_id: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

/// Insert the session and its activity on the transaction's connection.
async fn insert_session_with_activity(
    conn: &libsql::Connection,
    group_id: i64,
    activity_label: &str,
    created_at: &DateTime<Utc>,
) -> Result<i64, DatabaseError> {
    let ts = format_timestamp(created_at);
    let mut rows = conn
        .query(
            "INSERT INTO study_sessions (group_id, activity_label, created_at)
             VALUES (?1, ?2, ?3)
             RETURNING id",
            libsql::params![group_id, activity_label, ts.as_str()],
        )
        .await?;
    let session_id: i64 = rows.next().await?.ok_or(DatabaseError::NoResult)?.get(0)?;
    drop(rows);

    conn.execute(
        "INSERT INTO study_activities (study_session_id, group_id, created_at)
         VALUES (?1, ?2, ?3)",
        libsql::params![session_id, group_id, ts.as_str()],
    )
    .await?;

    Ok(session_id)
}

/// Check both references and append the review on the transaction's
/// connection, so a concurrent reset cannot slip between check and insert.
async fn insert_review(
    conn: &libsql::Connection,
    session_id: i64,
    word_id: i64,
    correct: bool,
    created_at: &DateTime<Utc>,
) -> Result<(), DatabaseError> {
    if !query_exists(
        conn,
        "SELECT EXISTS(SELECT 1 FROM study_sessions WHERE id = ?1)",
        [session_id],
    )
    .await?
    {
        return Err(DatabaseError::not_found("study session", session_id));
    }
    if !query_exists(
        conn,
        "SELECT EXISTS(SELECT 1 FROM words WHERE id = ?1)",
        [word_id],
    )
    .await?
    {
        return Err(DatabaseError::not_found("word", word_id));
    }

    conn.execute(
        "INSERT INTO word_review_items (study_session_id, word_id, correct, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        libsql::params![
            session_id,
            word_id,
            i64::from(correct),
            format_timestamp(created_at)
        ],
    )
    .await?;
    Ok(())
}

impl LingoService {
    /// Create a study session and its activity record atomically.
    ///
    /// Returns the new session id. If either insert fails, neither row is
    /// committed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the transaction cannot be opened, an insert
    /// fails (e.g. unknown group), or the commit fails.
    pub async fn create_study_activity(
        &self,
        group_id: i64,
        activity_label: &str,
    ) -> Result<i64, DatabaseError> {
        let created_at = now();
        let tx = self.db().begin().await?;
        let result = insert_session_with_activity(&tx, group_id, activity_label, &created_at).await;
        let session_id = LingoDb::finish(tx, result).await?;

        tracing::info!(session_id, group_id, activity_label, "created study session");
        Ok(session_id)
    }

    /// Record one review attempt of a word within a session.
    ///
    /// The existence checks and the insert run in one immediate transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the session or the word does not
    /// exist, or `DatabaseError` if the insert or the commit fails.
    pub async fn review_word(
        &self,
        session_id: i64,
        word_id: i64,
        correct: bool,
    ) -> Result<WordReview, DatabaseError> {
        let created_at = now();
        let tx = self.db().begin().await?;
        let result = insert_review(&tx, session_id, word_id, correct, &created_at).await;
        LingoDb::finish(tx, result).await?;

        tracing::debug!(session_id, word_id, correct, "recorded review");
        Ok(WordReview {
            study_session_id: session_id,
            word_id,
            correct,
            created_at,
        })
    }

    /// List all sessions, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` for a zero `page_size`, or
    /// `DatabaseError` if a query fails.
    pub async fn list_study_sessions(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Page<StudySession>, DatabaseError> {
        let request = page_request(page, page_size)?;
        tracing::debug!(page, page_size, "list_study_sessions");
        self.fetch_page(
            request,
            "SELECT COUNT(*) FROM study_sessions",
            &format!("{SESSION_SELECT} {SESSION_ORDER} LIMIT ?1 OFFSET ?2"),
            Vec::new(),
            row_to_session,
        )
        .await
    }

    /// List the sessions of one group, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` for a zero `page_size`, or
    /// `DatabaseError` if a query fails.
    pub async fn list_group_study_sessions(
        &self,
        group_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<Page<StudySession>, DatabaseError> {
        let request = page_request(page, page_size)?;
        tracing::debug!(group_id, page, page_size, "list_group_study_sessions");
        self.fetch_page(
            request,
            "SELECT COUNT(*) FROM study_sessions WHERE group_id = ?1",
            &format!(
                "{SESSION_SELECT} WHERE ss.group_id = ?1 {SESSION_ORDER} LIMIT ?2 OFFSET ?3"
            ),
            vec![group_id.into()],
            row_to_session,
        )
        .await
    }

    /// List the sessions launched by one study activity, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` for a zero `page_size`, or
    /// `DatabaseError` if a query fails.
    pub async fn list_activity_study_sessions(
        &self,
        activity_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<Page<StudySession>, DatabaseError> {
        let request = page_request(page, page_size)?;
        tracing::debug!(activity_id, page, page_size, "list_activity_study_sessions");
        let filter = "ss.id IN (SELECT study_session_id FROM study_activities WHERE id = ?1)";
        self.fetch_page(
            request,
            &format!("SELECT COUNT(*) FROM study_sessions ss WHERE {filter}"),
            &format!("{SESSION_SELECT} WHERE {filter} {SESSION_ORDER} LIMIT ?2 OFFSET ?3"),
            vec![activity_id.into()],
            row_to_session,
        )
        .await
    }

    /// Get a session by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the session does not exist.
    pub async fn get_study_session(&self, id: i64) -> Result<StudySession, DatabaseError> {
        let conn = self.db().acquire().await;
        let mut rows = conn
            .query(&format!("{SESSION_SELECT} WHERE ss.id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::not_found("study session", id))?;
        row_to_session(&row)
    }

    /// Get a study activity by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the activity does not exist.
    pub async fn get_study_activity(&self, id: i64) -> Result<StudyActivity, DatabaseError> {
        let conn = self.db().acquire().await;
        let mut rows = conn
            .query(
                "SELECT id, study_session_id, group_id, created_at
                 FROM study_activities WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::not_found("study activity", id))?;
        row_to_activity(&row)
    }

    /// Distinct words reviewed in a session, ordered by word id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` for a zero `page_size`, or
    /// `DatabaseError` if a query fails.
    pub async fn list_study_session_words(
        &self,
        session_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Word>, DatabaseError> {
        let request = page_request(page, page_size)?;
        tracing::debug!(session_id, page, page_size, "list_study_session_words");
        let filter = "w.id IN (SELECT word_id FROM word_review_items WHERE study_session_id = ?1)";
        self.fetch_page(
            request,
            &format!("SELECT COUNT(*) FROM words w WHERE {filter}"),
            &format!("SELECT {WORD_COLS} FROM words w WHERE {filter} ORDER BY w.id LIMIT ?2 OFFSET ?3"),
            vec![session_id.into()],
            row_to_word,
        )
        .await
    }
}
