//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `inkblog_core` linkage.
//! - Resolve an optional path argument through the route table for quick
//!   local sanity checks.

use inkblog_core::{navigate, View};

fn main() {
    println!("inkblog_core ping={}", inkblog_core::ping());
    println!("inkblog_core version={}", inkblog_core::core_version());

    if let Some(path) = std::env::args().nth(1) {
        println!("route {path} -> {}", view_label(&navigate(&path)));
    }
}

fn view_label(view: &View) -> String {
    match view {
        View::Login => "login".to_string(),
        View::Register => "register".to_string(),
        View::ArticleList => "article-list".to_string(),
        View::ArticleDetail { article_id } => match article_id {
            Some(id) => format!("article-detail id={id}"),
            None => "article-detail id=?".to_string(),
        },
        View::NotFound => "not-found".to_string(),
    }
}
