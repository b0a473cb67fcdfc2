//! Reset controller: history and full deletes in referential order.
//!
//! `study_activities` rows are left in place by both resets.

use lingo_core::dashboard::ResetSummary;

use crate::LingoDb;
use crate::error::DatabaseError;
use crate::service::LingoService;

async fn delete_all(conn: &libsql::Connection, table: &'static str) -> Result<u64, DatabaseError> {
    Ok(conn.execute(&format!("DELETE FROM {table}"), ()).await?)
}

async fn delete_history(conn: &libsql::Connection) -> Result<ResetSummary, DatabaseError> {
    Ok(ResetSummary {
        word_review_items: delete_all(conn, "word_review_items").await?,
        study_sessions: delete_all(conn, "study_sessions").await?,
        ..ResetSummary::default()
    })
}

async fn delete_everything(conn: &libsql::Connection) -> Result<ResetSummary, DatabaseError> {
    let history = delete_history(conn).await?;
    Ok(ResetSummary {
        word_groups: delete_all(conn, "word_groups").await?,
        words: delete_all(conn, "words").await?,
        groups: delete_all(conn, "groups").await?,
        ..history
    })
}

impl LingoService {
    /// Delete every review item, then every study session.
    ///
    /// The catalog is untouched. Runs in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a delete or the commit fails; nothing is
    /// removed in that case.
    pub async fn reset_history(&self) -> Result<ResetSummary, DatabaseError> {
        let tx = self.db().begin().await?;
        let result = delete_history(&tx).await;
        let summary = LingoDb::finish(tx, result).await?;

        tracing::info!(
            word_review_items = summary.word_review_items,
            study_sessions = summary.study_sessions,
            "study history reset"
        );
        Ok(summary)
    }

    /// Delete study history, then word memberships, words, and groups.
    ///
    /// Runs in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a delete or the commit fails; nothing is
    /// removed in that case.
    pub async fn full_reset(&self) -> Result<ResetSummary, DatabaseError> {
        let tx = self.db().begin().await?;
        let result = delete_everything(&tx).await;
        let summary = LingoDb::finish(tx, result).await?;

        tracing::info!(?summary, "full reset");
        Ok(summary)
    }
}
