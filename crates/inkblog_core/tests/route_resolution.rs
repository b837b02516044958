use inkblog_core::{
    navigate, resolve, BlogService, InMemoryArticleRepository, Resolution, View,
};

#[test]
fn exact_root_redirects_to_login() {
    assert_eq!(resolve("/"), Resolution::Redirect("/login"));
    assert_eq!(navigate("/"), View::Login);
}

#[test]
fn known_paths_render_their_views() {
    assert_eq!(resolve("/login"), Resolution::Render(View::Login));
    assert_eq!(resolve("/register"), Resolution::Render(View::Register));
    assert_eq!(resolve("/blog-list"), Resolution::Render(View::ArticleList));
    assert_eq!(resolve("/404"), Resolution::Render(View::NotFound));
}

#[test]
fn detail_route_coerces_its_parameter() {
    assert_eq!(
        resolve("/blog-list/7"),
        Resolution::Render(View::ArticleDetail {
            article_id: Some(7)
        })
    );
    assert_eq!(
        resolve("/blog-list/abc"),
        Resolution::Render(View::ArticleDetail { article_id: None })
    );
}

#[test]
fn unmatched_paths_redirect_to_the_not_found_view() {
    assert_eq!(resolve("/xyz"), Resolution::Redirect("/404"));
    assert_eq!(navigate("/xyz"), View::NotFound);
    assert_eq!(navigate("/blog-list/1/extra"), View::NotFound);
}

#[test]
fn absent_article_renders_a_defined_empty_detail_view() {
    let service = BlogService::new(InMemoryArticleRepository::with_default_articles());

    let View::ArticleDetail { article_id } = navigate("/blog-list/999") else {
        panic!("detail route must render the detail view");
    };
    let view = service.detail_view(article_id).unwrap();
    assert_eq!(view.requested_id, Some(999));
    assert_eq!(view.article, None);
}

#[test]
fn unparseable_detail_parameter_also_renders_the_empty_state() {
    let service = BlogService::new(InMemoryArticleRepository::with_default_articles());

    let View::ArticleDetail { article_id } = navigate("/blog-list/abc") else {
        panic!("detail route must render the detail view");
    };
    let view = service.detail_view(article_id).unwrap();
    assert_eq!(view.requested_id, None);
    assert_eq!(view.article, None);
}

#[test]
fn present_article_flows_from_route_to_detail_view() {
    let service = BlogService::new(InMemoryArticleRepository::with_default_articles());

    let View::ArticleDetail { article_id } = navigate("/blog-list/1") else {
        panic!("detail route must render the detail view");
    };
    let view = service.detail_view(article_id).unwrap();
    let article = view.article.expect("seeded article 1 exists");
    assert_eq!(article.id, 1);
    assert!(!article.title.is_empty());
}

#[test]
fn list_view_preserves_catalog_order() {
    let service = BlogService::new(InMemoryArticleRepository::with_default_articles());
    let view = service.list_view().unwrap();
    let ids: Vec<u32> = view.items.iter().map(|article| article.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
}
