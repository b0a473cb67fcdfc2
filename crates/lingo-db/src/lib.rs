//! # lingo-db
//!
//! libSQL persistence and aggregation for lingo.
//!
//! Owns the relational schema (words, groups, study sessions, review items),
//! the transaction discipline for multi-statement writes, and every read,
//! aggregate, and reset operation. Operations are implemented as methods on
//! [`service::LingoService`], one repo module per concern.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod streak;

mod test_support;

use std::ops::Deref;
use std::time::Duration;

use error::DatabaseError;
use libsql::{Builder, TransactionBehavior};
use lingo_config::DatabaseConfig;
use tokio::sync::{Mutex, MutexGuard};

const IN_MEMORY: &str = ":memory:";

/// Storage handle shared by every lingo operation.
///
/// Wraps a libSQL database and a shared connection. Transactions for
/// file-backed stores run on a fresh connection each so that concurrent
/// writers never nest inside one another. An in-memory store has only the
/// shared connection, so every operation on it (reads, writes, and whole
/// transactions) holds `memory_lock` until it is done.
pub struct LingoDb {
    db: libsql::Database,
    conn: libsql::Connection,
    in_memory: bool,
    busy_timeout: Duration,
    memory_lock: Mutex<()>,
}

/// The shared connection, checked out for one operation.
pub struct ConnGuard<'a> {
    conn: &'a libsql::Connection,
    _lock: Option<MutexGuard<'a, ()>>,
}

impl Deref for ConnGuard<'_> {
    type Target = libsql::Connection;

    fn deref(&self) -> &libsql::Connection {
        self.conn
    }
}

/// An open transaction from [`LingoDb::begin`]; close it with
/// [`LingoDb::finish`].
pub struct Tx<'a> {
    tx: libsql::Transaction,
    _lock: Option<MutexGuard<'a, ()>>,
}

impl Deref for Tx<'_> {
    type Target = libsql::Connection;

    fn deref(&self) -> &libsql::Connection {
        &self.tx
    }
}

impl LingoDb {
    /// Open a local database at the given path with default settings.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open(&DatabaseConfig {
            path: path.to_string(),
            ..DatabaseConfig::default()
        })
        .await
    }

    /// Open the database described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened, the
    /// connection cannot be configured, or migrations fail.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(&config.path).build().await?;
        let conn = db.connect()?;
        let lingo_db = Self {
            db,
            conn,
            in_memory: config.path == IN_MEMORY,
            busy_timeout: config.busy_timeout(),
            memory_lock: Mutex::new(()),
        };

        lingo_db.configure(&lingo_db.conn).await?;
        if !lingo_db.in_memory {
            pragma(&lingo_db.conn, "PRAGMA journal_mode = WAL").await?;
        }
        lingo_db.run_migrations().await?;

        tracing::debug!(path = %config.path, "opened lingo database");
        Ok(lingo_db)
    }

    /// Raw access to the shared connection, without taking the in-memory
    /// lock. Operations go through [`LingoDb::acquire`] or [`LingoDb::begin`].
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Check out the shared connection for a read or a single statement.
    ///
    /// On an in-memory store this waits for any open transaction to finish.
    pub async fn acquire(&self) -> ConnGuard<'_> {
        let lock = if self.in_memory {
            Some(self.memory_lock.lock().await)
        } else {
            None
        };
        ConnGuard {
            conn: &self.conn,
            _lock: lock,
        }
    }

    #[must_use]
    pub const fn is_in_memory(&self) -> bool {
        self.in_memory
    }

    /// Begin an immediate transaction.
    ///
    /// Pair every call with [`LingoDb::finish`] so the transaction is
    /// committed or rolled back on every path.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a connection cannot be opened or `BEGIN` fails.
    pub async fn begin(&self) -> Result<Tx<'_>, DatabaseError> {
        if self.in_memory {
            let lock = self.memory_lock.lock().await;
            let tx = self
                .conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .await?;
            return Ok(Tx {
                tx,
                _lock: Some(lock),
            });
        }

        let conn = self.db.connect()?;
        self.configure(&conn).await?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .await?;
        Ok(Tx { tx, _lock: None })
    }

    /// Close out a transaction opened by [`LingoDb::begin`].
    ///
    /// Commits when `result` is `Ok`. Rolls back when `result` is `Err` and
    /// returns that error unchanged. A failed commit is rolled back too, so the
    /// connection never stays inside an open transaction.
    ///
    /// # Errors
    ///
    /// Returns the body's error, or `DatabaseError::LibSql` if the commit fails.
    pub async fn finish<T>(tx: Tx<'_>, result: Result<T, DatabaseError>) -> Result<T, DatabaseError> {
        // The in-memory lock is released only once the transaction is closed.
        let Tx { tx, _lock: lock } = tx;
        let outcome = Self::close(tx, result).await;
        drop(lock);
        outcome
    }

    async fn close<T>(
        tx: libsql::Transaction,
        result: Result<T, DatabaseError>,
    ) -> Result<T, DatabaseError> {
        match result {
            Ok(value) => {
                let conn = (*tx).clone();
                if let Err(error) = tx.commit().await {
                    if !conn.is_autocommit()
                        && let Err(rollback_error) = conn.execute("ROLLBACK", ()).await
                    {
                        tracing::warn!(%rollback_error, "rollback after failed commit failed");
                    }
                    return Err(error.into());
                }
                Ok(value)
            }
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(%rollback_error, %error, "transaction rollback failed");
                }
                Err(error)
            }
        }
    }

    /// Per-connection settings: foreign keys always, lock wait for files.
    async fn configure(&self, conn: &libsql::Connection) -> Result<(), DatabaseError> {
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;
        if !self.in_memory {
            let millis = self.busy_timeout.as_millis();
            pragma(conn, &format!("PRAGMA busy_timeout = {millis}")).await?;
        }
        Ok(())
    }
}

/// Run a PRAGMA that reports its result as a row; the row is stepped and dropped.
async fn pragma(conn: &libsql::Connection, sql: &str) -> Result<(), DatabaseError> {
    let mut rows = conn
        .query(sql, ())
        .await
        .map_err(|e| DatabaseError::Migration(format!("{sql}: {e}")))?;
    rows.next()
        .await
        .map_err(|e| DatabaseError::Migration(format!("{sql}: {e}")))?;
    Ok(())
}
