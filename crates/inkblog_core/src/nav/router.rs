//! Route table for the application's navigation surface.
//!
//! # Responsibility
//! - Map paths to views, including the parameterized detail route.
//! - Apply the exact-match root redirect and the catch-all fallback.
//!
//! # Invariants
//! - Table order is part of the contract: exact root first, catch-all last.
//! - Resolution is total; every path ends at a renderable view.

use crate::model::article::ArticleId;
use log::warn;

/// Redirect target for the exact root path.
pub const LOGIN_PATH: &str = "/login";
/// Redirect target for unmatched paths.
pub const NOT_FOUND_PATH: &str = "/404";
/// Navigation target after a successful login.
pub const ARTICLE_LIST_PATH: &str = "/blog-list";

// Redirect targets are fixed in-table paths; the hop bound is a backstop.
const MAX_REDIRECT_HOPS: usize = 4;

/// Renderable views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    ArticleList,
    /// Detail view. `article_id` is `None` when the path parameter does not
    /// coerce to a number; the lookup then misses and the view renders its
    /// empty state.
    ArticleDetail { article_id: Option<ArticleId> },
    NotFound,
}

/// Outcome of one route-table pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(View),
    Redirect(&'static str),
}

/// Resolves one path against the route table.
pub fn resolve(path: &str) -> Resolution {
    let segments = path_segments(path);
    match segments.as_slice() {
        [] => Resolution::Redirect(LOGIN_PATH),
        ["login"] => Resolution::Render(View::Login),
        ["register"] => Resolution::Render(View::Register),
        ["blog-list"] => Resolution::Render(View::ArticleList),
        ["blog-list", raw_id] => Resolution::Render(View::ArticleDetail {
            article_id: coerce_article_id(raw_id),
        }),
        ["404"] => Resolution::Render(View::NotFound),
        _ => {
            warn!("event=route_fallback module=nav status=redirect path={path}");
            Resolution::Redirect(NOT_FOUND_PATH)
        }
    }
}

/// Follows redirects until a view renders.
pub fn navigate(path: &str) -> View {
    let mut current = path.to_string();
    for _ in 0..MAX_REDIRECT_HOPS {
        match resolve(&current) {
            Resolution::Render(view) => return view,
            Resolution::Redirect(target) => current = target.to_string(),
        }
    }
    View::NotFound
}

/// Coerces the `:id` path parameter to an article id.
///
/// Coercion failure is not an error; a non-numeric parameter becomes a
/// lookup miss downstream.
pub fn coerce_article_id(raw: &str) -> Option<ArticleId> {
    raw.trim().parse::<ArticleId>().ok()
}

fn path_segments(path: &str) -> Vec<&str> {
    path.trim()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{coerce_article_id, path_segments};

    #[test]
    fn coerce_accepts_plain_and_padded_numbers() {
        assert_eq!(coerce_article_id("7"), Some(7));
        assert_eq!(coerce_article_id(" 7 "), Some(7));
        assert_eq!(coerce_article_id("007"), Some(7));
    }

    #[test]
    fn coerce_rejects_non_numeric_parameters() {
        assert_eq!(coerce_article_id("abc"), None);
        assert_eq!(coerce_article_id("7x"), None);
        assert_eq!(coerce_article_id("-1"), None);
        assert_eq!(coerce_article_id(""), None);
    }

    #[test]
    fn segments_ignore_leading_trailing_and_doubled_slashes() {
        assert_eq!(path_segments("/blog-list/3/"), vec!["blog-list", "3"]);
        assert_eq!(path_segments("//login"), vec!["login"]);
        assert!(path_segments("/").is_empty());
        assert!(path_segments("").is_empty());
    }
}
