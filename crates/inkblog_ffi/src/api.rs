//! FFI use-case API for the UI shell.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions for the login, registration,
//!   list and detail views.
//! - Keep error semantics simple for UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Responses are plain-data envelopes with stable meaning.

use inkblog_core::db::open_session_db;
use inkblog_core::{
    coerce_article_id, core_version as core_version_inner, init_logging as init_logging_inner,
    navigate, ping as ping_inner, provider_signup, Article, BlogService, FixedCredentialVerifier,
    InMemoryArticleRepository, LoginOutcome, RegisterField, RegisterForm, SessionGate,
    SessionRepository, SignupProvider, SqliteSessionRepository, SubmitOutcome, View,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const SESSION_DB_FILE_NAME: &str = "inkblog_session.sqlite3";
static SESSION_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for bridge smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Login response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    /// Whether the credentials were accepted.
    pub ok: bool,
    /// Inline message for the login view; empty on success.
    pub error_message: String,
    /// Path the UI navigates to on success.
    pub redirect_to: Option<String>,
}

/// Attempts a login with the submitted pair.
///
/// # FFI contract
/// - Sync call, session-store-backed execution.
/// - Never panics.
/// - Rejected credentials are an `ok=false` envelope, not an error.
#[flutter_rust_bridge::frb(sync)]
pub fn login(username: String, password: String) -> LoginResponse {
    let db_path = resolve_session_db_path();
    let mut conn = match open_session_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => return login_failure(format!("login failed: {err}")),
    };

    let store = SqliteSessionRepository::new(&mut conn);
    let mut gate = match SessionGate::new(FixedCredentialVerifier::default(), store) {
        Ok(gate) => gate,
        Err(err) => return login_failure(format!("login failed: {err}")),
    };

    match gate.login(&username, &password) {
        Ok(LoginOutcome::Accepted { redirect_to }) => LoginResponse {
            ok: true,
            error_message: String::new(),
            redirect_to: Some(redirect_to.to_string()),
        },
        Ok(LoginOutcome::Rejected { message }) => LoginResponse {
            ok: false,
            error_message: message,
            redirect_to: None,
        },
        Err(err) => login_failure(format!("login failed: {err}")),
    }
}

/// Reports whether a persisted session marker exists.
///
/// # FFI contract
/// - Sync call, session-store-backed execution.
/// - Never panics; store failures read as "not active".
#[flutter_rust_bridge::frb(sync)]
pub fn session_active() -> bool {
    let db_path = resolve_session_db_path();
    let mut conn = match open_session_db(&db_path) {
        Ok(conn) => conn,
        Err(_) => return false,
    };
    let store = SqliteSessionRepository::new(&mut conn);
    matches!(store.load_marker(), Ok(Some(_)))
}

/// Article projection shared by the list and detail envelopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub id: u32,
    pub title: String,
    pub content: String,
    /// Publish date in Unix epoch milliseconds.
    pub publish_date_ms: i64,
    pub tags: Vec<String>,
    /// File name of the source markdown document the UI fetches and renders.
    pub src: String,
}

/// Article list response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogListResponse {
    /// Articles in display order (empty on failure).
    pub items: Vec<ArticleView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Lists the full catalog in display order.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn blog_list() -> BlogListResponse {
    let service = BlogService::new(InMemoryArticleRepository::with_default_articles());
    match service.list_view() {
        Ok(view) => {
            let items = view
                .items
                .into_iter()
                .map(to_article_view)
                .collect::<Vec<_>>();
            let message = format!("Found {} article(s).", items.len());
            BlogListResponse { items, message }
        }
        Err(err) => BlogListResponse {
            items: Vec::new(),
            message: format!("blog_list failed: {err}"),
        },
    }
}

/// Article detail response envelope.
///
/// `found=false` with no message is the defined empty state the detail view
/// renders for an absent or unparseable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDetailResponse {
    pub found: bool,
    pub article: Option<ArticleView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Looks up one article by the raw route parameter.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
/// - A miss is a `found=false` envelope, not an error.
#[flutter_rust_bridge::frb(sync)]
pub fn blog_detail(raw_id: String) -> BlogDetailResponse {
    let service = BlogService::new(InMemoryArticleRepository::with_default_articles());
    match service.detail_view(coerce_article_id(&raw_id)) {
        Ok(view) => match view.article {
            Some(article) => BlogDetailResponse {
                found: true,
                article: Some(to_article_view(article)),
                message: "Article found.".to_string(),
            },
            None => BlogDetailResponse {
                found: false,
                article: None,
                message: "No article matches this id.".to_string(),
            },
        },
        Err(err) => BlogDetailResponse {
            found: false,
            article: None,
            message: format!("blog_detail failed: {err}"),
        },
    }
}

/// Route resolution response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResponse {
    /// Terminal view kind: `login|register|article_list|article_detail|not_found`.
    pub kind: String,
    /// Coerced detail id; meaningful only when `kind == "article_detail"`.
    pub detail_article_id: Option<u32>,
}

/// Resolves a path through the route table, following redirects.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; every path resolves to a terminal view.
#[flutter_rust_bridge::frb(sync)]
pub fn resolve_route(path: String) -> RouteResponse {
    match navigate(&path) {
        View::Login => route_response("login", None),
        View::Register => route_response("register", None),
        View::ArticleList => route_response("article_list", None),
        View::ArticleDetail { article_id } => route_response("article_detail", article_id),
        View::NotFound => route_response("not_found", None),
    }
}

/// One field-level validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMessage {
    /// Stable field id (`username|email|password|confirm_password|invitation_code`).
    pub field: String,
    pub message: String,
}

/// Registration submit response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterSubmitResponse {
    /// Whether the form was valid and the registration acknowledged.
    pub ok: bool,
    /// Per-field messages when rejected; empty on success.
    pub field_messages: Vec<FieldMessage>,
}

/// Validates and submits the registration form.
///
/// # FFI contract
/// - Sync call, in-memory execution; nothing is persisted or sent.
/// - Never panics.
/// - A rejected form is an `ok=false` envelope carrying the visible
///   per-field messages.
#[flutter_rust_bridge::frb(sync)]
pub fn register_submit(
    username: String,
    email: String,
    password: String,
    confirm_password: String,
    invitation_code: String,
) -> RegisterSubmitResponse {
    let mut form = RegisterForm::new();
    form.set_value(RegisterField::Username, username);
    form.set_value(RegisterField::Email, email);
    form.set_value(RegisterField::Password, password);
    form.set_value(RegisterField::ConfirmPassword, confirm_password);
    form.set_value(RegisterField::InvitationCode, invitation_code);

    match form.submit() {
        SubmitOutcome::Accepted => RegisterSubmitResponse {
            ok: true,
            field_messages: Vec::new(),
        },
        SubmitOutcome::Rejected => RegisterSubmitResponse {
            ok: false,
            field_messages: collect_field_messages(&form),
        },
    }
}

/// Provider signup response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSignupResponse {
    pub provider: String,
    /// Always `false`; the provider buttons are inert placeholders.
    pub available: bool,
}

/// Handles the Twitter signup button.
///
/// # FFI contract
/// - Sync call; consumes the click and performs no logic.
#[flutter_rust_bridge::frb(sync)]
pub fn signup_with_twitter() -> ProviderSignupResponse {
    provider_ack(SignupProvider::Twitter)
}

/// Handles the Google signup button.
///
/// # FFI contract
/// - Sync call; consumes the click and performs no logic.
#[flutter_rust_bridge::frb(sync)]
pub fn signup_with_google() -> ProviderSignupResponse {
    provider_ack(SignupProvider::Google)
}

/// Handles the WeChat signup button.
///
/// # FFI contract
/// - Sync call; consumes the click and performs no logic.
#[flutter_rust_bridge::frb(sync)]
pub fn signup_with_wechat() -> ProviderSignupResponse {
    provider_ack(SignupProvider::WeChat)
}

fn provider_ack(provider: SignupProvider) -> ProviderSignupResponse {
    let ack = provider_signup(provider);
    ProviderSignupResponse {
        provider: ack.provider.as_str().to_string(),
        available: ack.available,
    }
}

fn login_failure(message: String) -> LoginResponse {
    LoginResponse {
        ok: false,
        error_message: message,
        redirect_to: None,
    }
}

fn route_response(kind: &str, detail_article_id: Option<u32>) -> RouteResponse {
    RouteResponse {
        kind: kind.to_string(),
        detail_article_id,
    }
}

fn to_article_view(article: Article) -> ArticleView {
    ArticleView {
        id: article.id,
        title: article.title,
        content: article.content,
        publish_date_ms: article.published_at,
        tags: article.tags,
        src: article.src,
    }
}

fn collect_field_messages(form: &RegisterForm) -> Vec<FieldMessage> {
    let mut messages = Vec::new();
    for field in RegisterField::ALL {
        for failure in form.visible_failures(field) {
            messages.push(FieldMessage {
                field: field.as_str().to_string(),
                message: failure.to_string(),
            });
        }
    }
    messages
}

fn resolve_session_db_path() -> PathBuf {
    SESSION_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("INKBLOG_SESSION_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(SESSION_DB_FILE_NAME)
        })
        .clone()
}
