//! Catalog seeder: inserts a group with its words and memberships.

use lingo_core::seed::{SeedData, SeedOutcome};

use crate::LingoDb;
use crate::error::DatabaseError;
use crate::service::LingoService;

async fn insert_returning_id(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<i64, DatabaseError> {
    let mut rows = conn.query(sql, params).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get(0)?)
}

async fn insert_seed(conn: &libsql::Connection, seed: &SeedData) -> Result<SeedOutcome, DatabaseError> {
    let group_id = insert_returning_id(
        conn,
        "INSERT INTO groups (name) VALUES (?1) RETURNING id",
        [seed.group.name.as_str()],
    )
    .await?;

    let mut word_ids = Vec::with_capacity(seed.words.len());
    for word in &seed.words {
        let word_id = insert_returning_id(
            conn,
            "INSERT INTO words (headword, transliteration, translation)
             VALUES (?1, ?2, ?3)
             RETURNING id",
            libsql::params![
                word.headword.as_str(),
                word.transliteration.as_str(),
                word.translation.as_str()
            ],
        )
        .await?;
        conn.execute(
            "INSERT INTO word_groups (word_id, group_id) VALUES (?1, ?2)",
            libsql::params![word_id, group_id],
        )
        .await?;
        word_ids.push(word_id);
    }

    Ok(SeedOutcome { group_id, word_ids })
}

impl LingoService {
    /// Insert a group and all of its words in one transaction.
    ///
    /// Every seeded word becomes a member of the new group. Words are always
    /// inserted as new rows, even when the same headword already exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` for an empty group name or an
    /// empty headword, or `DatabaseError` if an insert fails (in which case
    /// nothing is committed).
    pub async fn seed_group(&self, seed: &SeedData) -> Result<SeedOutcome, DatabaseError> {
        if seed.group.name.trim().is_empty() {
            return Err(DatabaseError::InvalidArgument(String::from(
                "group name must not be empty",
            )));
        }
        if let Some(index) = seed.words.iter().position(|w| w.headword.trim().is_empty()) {
            return Err(DatabaseError::InvalidArgument(format!(
                "word {index} of group '{}' has an empty headword",
                seed.group.name
            )));
        }

        let tx = self.db().begin().await?;
        let result = insert_seed(&tx, seed).await;
        let outcome = LingoDb::finish(tx, result).await?;

        tracing::info!(
            group = %seed.group.name,
            group_id = outcome.group_id,
            words = outcome.word_ids.len(),
            "seeded group"
        );
        Ok(outcome)
    }
}
