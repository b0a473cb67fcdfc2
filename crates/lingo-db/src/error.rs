//! Database error types for lingo-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A lookup matched no row. `id` is `None` when the lookup was for the
    /// most recent row rather than a specific id.
    #[error("{}", missing_message(.entity, .id.as_ref()))]
    NotFound {
        entity: &'static str,
        id: Option<i64>,
    },

    /// The caller supplied an argument the core cannot act on.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A row could not be decoded into its entity.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    pub(crate) const fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound {
            entity,
            id: Some(id),
        }
    }

    /// Nothing of this kind has been recorded yet.
    pub(crate) const fn none_recorded(entity: &'static str) -> Self {
        Self::NotFound { entity, id: None }
    }

    /// Whether this is a typed absence rather than a store failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn missing_message(entity: &str, id: Option<&i64>) -> String {
    match id {
        Some(id) => format!("{entity} {id} not found"),
        None => format!("no {entity} recorded yet"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::DatabaseError;

    #[test]
    fn not_found_names_the_id() {
        assert_eq!(
            DatabaseError::not_found("word", 7).to_string(),
            "word 7 not found"
        );
    }

    #[test]
    fn empty_lookup_does_not_invent_an_id() {
        let err = DatabaseError::none_recorded("study session");
        assert_eq!(err.to_string(), "no study session recorded yet");
        assert!(err.is_not_found());
    }
}
