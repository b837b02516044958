//! Article domain model.
//!
//! # Responsibility
//! - Define the catalog record shared by the list and detail views.
//! - Keep serialization aligned with the external document schema.
//!
//! # Invariants
//! - `id` is a positive integer, unique within one catalog.
//! - Catalog order is insertion order and is treated as display order.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for one article.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ArticleId = u32;

/// One catalog record backing the list and detail views.
///
/// `content` is the inline summary shown in the list; the full document is
/// the markdown file named by `src`, fetched and rendered by the UI
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Positive integer id, unique across the catalog.
    pub id: ArticleId,
    pub title: String,
    /// Inline summary text.
    pub content: String,
    /// Publish date in Unix epoch milliseconds. Serialized as `publishDate`
    /// to match external schema naming.
    #[serde(rename = "publishDate")]
    pub published_at: i64,
    /// Display tags in author order.
    pub tags: Vec<String>,
    /// File name of the source markdown document.
    pub src: String,
}

impl Article {
    /// Checks the record-level invariants.
    ///
    /// Uniqueness across a catalog is checked where records are collected,
    /// not here.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        if self.id == 0 {
            return Err(ArticleValidationError::NonPositiveId);
        }
        if self.title.trim().is_empty() {
            return Err(ArticleValidationError::EmptyTitle(self.id));
        }
        Ok(())
    }
}

/// Record-level validation failures for [`Article`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleValidationError {
    /// Article ids start at 1; zero is reserved as "no article".
    NonPositiveId,
    EmptyTitle(ArticleId),
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "article id must be a positive integer"),
            Self::EmptyTitle(id) => write!(f, "article {id} has an empty title"),
        }
    }
}

impl Error for ArticleValidationError {}
