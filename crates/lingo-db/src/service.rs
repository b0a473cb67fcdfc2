//! Service layer exposing every lingo operation.
//!
//! `LingoService` wraps a `LingoDb` handed to it at construction. All repo
//! methods are implemented as `impl LingoService` blocks in `crate::repos`.

use lingo_config::DatabaseConfig;
use lingo_core::pagination::{Page, PageRequest};

use crate::LingoDb;
use crate::error::DatabaseError;

/// Entry point for catalog reads, session tracking, dashboard aggregates,
/// resets, and seeding.
///
/// The service is `Send + Sync`; share it across tasks behind an `Arc`.
pub struct LingoService {
    db: LingoDb,
}

impl LingoService {
    /// Create a service over a local database path (or `":memory:"` for tests).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(LingoDb::open_local(db_path).await?))
    }

    /// Create a service from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(LingoDb::open(config).await?))
    }

    /// Create from an existing `LingoDb`.
    #[must_use]
    pub const fn from_db(db: LingoDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LingoDb {
        &self.db
    }

    /// Run a count query and a page query for the same filter.
    ///
    /// `filter` binds to `?1..?n` in both statements; `select_sql` must end in
    /// `LIMIT ?{n+1} OFFSET ?{n+2}`.
    pub(crate) async fn fetch_page<T>(
        &self,
        request: PageRequest,
        count_sql: &str,
        select_sql: &str,
        filter: Vec<libsql::Value>,
        map_row: fn(&libsql::Row) -> Result<T, DatabaseError>,
    ) -> Result<Page<T>, DatabaseError> {
        let conn = self.db.acquire().await;
        let total_items = crate::helpers::query_count(
            &conn,
            count_sql,
            libsql::params_from_iter(filter.clone()),
        )
        .await?;

        let mut params = filter;
        params.push(request.limit().into());
        params.push(request.offset().into());

        let mut rows = conn
            .query(select_sql, libsql::params_from_iter(params))
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(map_row(&row)?);
        }

        Ok(Page {
            items,
            pagination: request.paginate(total_items),
        })
    }
}
