//! Session marker persistence over the key-value session store.
//!
//! # Responsibility
//! - Persist and load the logged-in marker as two `session_entries` rows.
//!
//! # Invariants
//! - `save_marker` replaces both rows in one transaction (wholesale).
//! - A marker only exists when both rows are present.
//! - Nothing in this module ever deletes the marker.

use crate::auth::verifier::Credentials;
use crate::repo::RepoResult;
use rusqlite::{params, Connection, TransactionBehavior};

const USERNAME_KEY: &str = "username";
const PASSWORD_KEY: &str = "password";

/// Storage interface for the persisted session marker.
pub trait SessionRepository {
    /// Persists the credential pair, overwriting any previous marker.
    fn save_marker(&mut self, credentials: &Credentials) -> RepoResult<()>;
    /// Loads the persisted pair; `Ok(None)` unless both entries exist.
    fn load_marker(&self) -> RepoResult<Option<Credentials>>;
}

/// SQLite-backed session marker store.
pub struct SqliteSessionRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteSessionRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl SessionRepository for SqliteSessionRepository<'_> {
    fn save_marker(&mut self, credentials: &Credentials) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        for (key, value) in [
            (USERNAME_KEY, credentials.username.as_str()),
            (PASSWORD_KEY, credentials.password.as_str()),
        ] {
            tx.execute(
                "INSERT INTO session_entries (key, value)
                 VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = (strftime('%s', 'now') * 1000);",
                params![key, value],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn load_marker(&self) -> RepoResult<Option<Credentials>> {
        let username = load_entry(self.conn, USERNAME_KEY)?;
        let password = load_entry(self.conn, PASSWORD_KEY)?;
        match (username, password) {
            (Some(username), Some(password)) => Ok(Some(Credentials { username, password })),
            _ => Ok(None),
        }
    }
}

fn load_entry(conn: &Connection, key: &str) -> RepoResult<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM session_entries WHERE key = ?1;")?;
    let mut rows = stmt.query([key])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(row.get(0)?));
    }
    Ok(None)
}
