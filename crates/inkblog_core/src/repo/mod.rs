//! Catalog and session persistence contracts.
//!
//! # Responsibility
//! - Define the repository traits the services are built against.
//! - Share the repository error type across implementations.
//!
//! # Invariants
//! - A catalog lookup miss is `Ok(None)`, never an error.
//! - Session marker writes go through a single transaction.

use crate::db::DbError;
use crate::model::article::{ArticleId, ArticleValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod article_repo;
pub mod session_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for catalog and session operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ArticleValidationError),
    Db(DbError),
    /// Two catalog records share one id.
    DuplicateArticleId(ArticleId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::DuplicateArticleId(id) => write!(f, "duplicate article id: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::DuplicateArticleId(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ArticleValidationError> for RepoError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
