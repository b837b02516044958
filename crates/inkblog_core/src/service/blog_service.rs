//! Catalog view-model service.
//!
//! # Responsibility
//! - Produce the list and detail read models for the catalog views.
//!
//! # Invariants
//! - List order is the catalog's insertion order.
//! - A detail miss renders as a defined empty view, never an error.

use crate::model::article::{Article, ArticleId};
use crate::repo::article_repo::ArticleRepository;
use crate::repo::RepoResult;
use log::debug;

/// Read model for the article list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListView {
    /// Articles in display order.
    pub items: Vec<Article>,
}

/// Read model for the article detail view.
///
/// `article` is `None` when the requested id is absent or was unparseable;
/// the view renders its empty state in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetailView {
    pub requested_id: Option<ArticleId>,
    pub article: Option<Article>,
}

/// Service facade over a catalog implementation.
pub struct BlogService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> BlogService<R> {
    /// Creates a service using the provided catalog implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List view over the full catalog.
    pub fn list_view(&self) -> RepoResult<ArticleListView> {
        Ok(ArticleListView {
            items: self.repo.list_articles()?,
        })
    }

    /// Detail view for one (possibly absent) article id.
    pub fn detail_view(&self, article_id: Option<ArticleId>) -> RepoResult<ArticleDetailView> {
        let article = match article_id {
            Some(id) => self.repo.get_article(id)?,
            None => None,
        };
        if article.is_none() {
            debug!("event=article_lookup module=blog status=miss id={article_id:?}");
        }
        Ok(ArticleDetailView {
            requested_id: article_id,
            article,
        })
    }
}
