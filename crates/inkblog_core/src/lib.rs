//! Core domain logic for the inkblog reader.
//! This crate is the single source of truth for gate, catalog, form and
//! routing behavior.

pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod nav;
pub mod repo;
pub mod service;

pub use auth::verifier::{CredentialVerifier, Credentials, FixedCredentialVerifier, VerifyOutcome};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId, ArticleValidationError};
pub use model::register_form::{
    must_match, FieldFailure, RegisterField, RegisterForm, SubmitOutcome,
};
pub use nav::router::{
    coerce_article_id, navigate, resolve, Resolution, View, ARTICLE_LIST_PATH, LOGIN_PATH,
    NOT_FOUND_PATH,
};
pub use repo::article_repo::{default_articles, ArticleRepository, InMemoryArticleRepository};
pub use repo::session_repo::{SessionRepository, SqliteSessionRepository};
pub use repo::{RepoError, RepoResult};
pub use service::blog_service::{ArticleDetailView, ArticleListView, BlogService};
pub use service::register_service::{provider_signup, SignupAck, SignupProvider};
pub use service::session_service::{
    LoginOutcome, SessionError, SessionGate, SessionState, LOGIN_REJECTED_MESSAGE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
