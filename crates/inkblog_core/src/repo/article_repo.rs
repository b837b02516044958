//! Article catalog contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide the read-only catalog API behind a swappable trait.
//! - Seed the default article set in display order.
//!
//! # Invariants
//! - `list_articles` returns the same insertion order on every call.
//! - `get_article` reports a miss as `Ok(None)`, never as an error.
//! - Construction rejects invalid records and duplicate ids.

use crate::model::article::{Article, ArticleId};
use crate::repo::{RepoError, RepoResult};
use std::collections::BTreeSet;

/// Read-only catalog interface.
///
/// Every call yields exactly one value or one absence, so a later
/// network-backed catalog can replace the in-memory one without changing
/// consumers.
pub trait ArticleRepository {
    /// Full catalog in display (insertion) order.
    fn list_articles(&self) -> RepoResult<Vec<Article>>;
    /// One article by id; `Ok(None)` when no record matches.
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>>;
}

/// Catalog held fully in memory, read-only at runtime.
#[derive(Debug)]
pub struct InMemoryArticleRepository {
    articles: Vec<Article>,
}

impl InMemoryArticleRepository {
    /// Builds a catalog after validating every record and id uniqueness.
    pub fn new(articles: Vec<Article>) -> RepoResult<Self> {
        let mut seen = BTreeSet::new();
        for article in &articles {
            article.validate()?;
            if !seen.insert(article.id) {
                return Err(RepoError::DuplicateArticleId(article.id));
            }
        }
        Ok(Self { articles })
    }

    /// Catalog seeded with the default article set.
    pub fn with_default_articles() -> Self {
        Self::new(default_articles()).expect("default catalog is valid")
    }
}

impl ArticleRepository for InMemoryArticleRepository {
    fn list_articles(&self) -> RepoResult<Vec<Article>> {
        Ok(self.articles.clone())
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        // Linear scan; the catalog is small and static.
        Ok(self
            .articles
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }
}

/// Default article set, in display order.
pub fn default_articles() -> Vec<Article> {
    vec![
        article(
            1,
            "Markdown Basics for Everyday Notes",
            "Markdown keeps notes readable as plain text while still rendering \
             cleanly. This article walks through the handful of constructs worth \
             learning first: headings, emphasis, lists and fenced code blocks.",
            1_741_996_800_000,
            &["markdown", "basics"],
        ),
        article(
            2,
            "What Is Plain-Text Knowledge Management",
            "Plain-text knowledge management treats your notes as durable data \
             you own outright. No proprietary container, no lock-in; any editor, \
             any sync tool and any search index can work with the same files.",
            1_742_083_200_000,
            &["plain-text", "method"],
        ),
        article(
            3,
            "Linking Notes: From Folders to Graphs",
            "Folders force every note into exactly one place. Links let a note \
             live in as many contexts as it is useful in. This article compares \
             hierarchical and graph-shaped organization and when each wins.",
            1_742_083_200_000,
            &["linking", "method"],
        ),
        article(
            4,
            "Tagging Strategies That Scale",
            "A handful of tags stays manageable; a few hundred does not. Naming \
             conventions, normalization and periodic pruning keep a tag set \
             useful as a collection grows past the first thousand notes.",
            1_742_342_400_000,
            &["tags", "workflow"],
        ),
        article(
            5,
            "The Lifecycle of a Note",
            "Notes are captured, refined, linked and eventually archived. \
             Understanding the stages a note moves through helps you decide \
             what deserves polish and what can stay a quick capture forever.",
            1_742_601_600_000,
            &["workflow"],
        ),
        article(
            6,
            "Outlines, Checklists and Task Notes",
            "A note with checkboxes is halfway to a task list. This article \
             looks at outline-first writing, checklist syntax and where the \
             boundary between a note and a task tracker actually sits.",
            1_742_860_800_000,
            &["markdown", "tasks"],
        ),
        article(
            7,
            "Templates for Daily and Weekly Reviews",
            "Review templates remove the blank-page cost of recurring notes. \
             A good template asks a few pointed questions and leaves the rest \
             of the page free; this article collects patterns that hold up.",
            1_743_206_400_000,
            &["templates", "workflow"],
        ),
        article(
            8,
            "Syncing Notes Without Losing History",
            "Synchronization is easy until two devices edit the same note. \
             This article explains why append-only change logs and stable \
             identifiers make conflict resolution tractable.",
            1_743_465_600_000,
            &["sync"],
        ),
        article(
            9,
            "Soft Deletes and Tombstones Explained",
            "Deleting a record outright breaks sync and recovery. A tombstone \
             keeps the identity around while hiding the content, which is why \
             most sync-capable stores soft-delete first and purge much later.",
            1_743_465_600_000,
            &["sync", "storage"],
        ),
        article(
            10,
            "Search That Understands Your Notes",
            "Substring matching stops being enough surprisingly early. \
             Full-text indexes with sensible tokenization make a few thousand \
             notes feel instant, and they change how much you bother to file.",
            1_743_465_600_000,
            &["search"],
        ),
    ]
}

fn article(
    id: ArticleId,
    title: &str,
    content: &str,
    published_at: i64,
    tags: &[&str],
) -> Article {
    Article {
        id,
        title: title.to_string(),
        content: content.to_string(),
        published_at,
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        src: format!("{title}.md"),
    }
}
