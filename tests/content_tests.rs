//! Integration tests for the content browsing routes
//!
//! Each test builds a small markdown tree in a temporary directory.

mod fixtures;

use axum::http::StatusCode;
use fixtures::test_server;
use infosite::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn content_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        "labor/contract-basics.md",
        concat!(
            "---\ntitle: 劳动合同基础\nsummary: 签订前要知道的事\n",
            "updated: 2025-03-01\ncategory: 劳动用工\n---\n",
            "# 劳动合同\n\n**必备条款**\n",
        ),
    );
    write(
        root,
        "labor/probation.md",
        "---\ntitle: 试用期\nupdated: 2025-05-10\ncategory: 劳动用工\n---\n试用期最长六个月。\n",
    );
    write(
        root,
        "tax/annual.md",
        "---\ntitle: 年度汇算\nupdated: 2025-04-15\ncategory: 个税\n---\n正文\n",
    );
    write(root, "tax/no-front-matter.md", "plain body\n");
    write(root, "README.md", "# not a post\n");
    write(root, "tax/notes.txt", "ignored\n");
    dir
}

fn server_for(root: &Path) -> axum_test::TestServer {
    let app = ServerBuilder::new()
        .with_template_store(InMemoryTemplateStore::new())
        .with_content_root(root)
        .build()
        .unwrap();
    test_server(app)
}

#[tokio::test]
async fn test_list_posts_newest_first() {
    let tree = content_tree();
    let server = server_for(tree.path());

    let response = server.get("/api/posts").await;
    response.assert_status_ok();

    let posts: Value = response.json();
    let slugs: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["probation", "annual", "contract-basics", "no-front-matter"]);
    assert_eq!(posts[0]["categorySlug"], "labor");
    assert_eq!(posts[0]["category"], "劳动用工");
}

#[tokio::test]
async fn test_categories_in_first_seen_order() {
    let tree = content_tree();
    let server = server_for(tree.path());

    let response = server.get("/api/categories").await;
    response.assert_status_ok();

    let categories: Value = response.json();
    assert_eq!(
        categories,
        serde_json::json!([
            { "categorySlug": "labor", "name": "劳动用工" },
            { "categorySlug": "tax", "name": "个税" },
        ])
    );
}

#[tokio::test]
async fn test_posts_of_one_category() {
    let tree = content_tree();
    let server = server_for(tree.path());

    let response = server.get("/api/categories/tax").await;
    response.assert_status_ok();

    let posts: Value = response.json();
    let posts = posts.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p["categorySlug"] == "tax"));

    let missing: Value = server.get("/api/categories/none").await.json();
    assert_eq!(missing, serde_json::json!([]));
}

#[tokio::test]
async fn test_post_renders_markdown() {
    let tree = content_tree();
    let server = server_for(tree.path());

    let response = server.get("/api/posts/labor/contract-basics").await;
    response.assert_status_ok();

    let post: Value = response.json();
    assert_eq!(post["meta"]["title"], "劳动合同基础");
    assert_eq!(post["meta"]["summary"], "签订前要知道的事");
    let html = post["contentHtml"].as_str().unwrap();
    assert!(html.contains("<h1>劳动合同</h1>"), "{html}");
    assert!(html.contains("<strong>必备条款</strong>"));
}

#[tokio::test]
async fn test_post_without_front_matter_uses_defaults() {
    let tree = content_tree();
    let server = server_for(tree.path());

    let post: Value = server.get("/api/posts/tax/no-front-matter").await.json();
    assert_eq!(post["meta"]["title"], "no-front-matter");
    assert_eq!(post["meta"]["category"], "tax");
    assert_eq!(post["meta"]["updated"], "");
}

#[tokio::test]
async fn test_unknown_post_is_404() {
    let tree = content_tree();
    let server = server_for(tree.path());

    let response = server.get("/api/posts/labor/missing").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["code"], "CONTENT_NOT_FOUND");
}

#[tokio::test]
async fn test_missing_root_is_empty() {
    let dir = TempDir::new().unwrap();
    let server = server_for(&dir.path().join("absent"));

    let posts: Value = server.get("/api/posts").await.json();
    assert_eq!(posts, serde_json::json!([]));
    let categories: Value = server.get("/api/categories").await.json();
    assert_eq!(categories, serde_json::json!([]));
}

#[tokio::test]
async fn test_broken_front_matter_is_server_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "labor/bad.md", "---\ntitle: [unclosed\n---\nbody\n");
    let server = server_for(dir.path());

    let response = server.get("/api/posts/labor/bad").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["error"], "内容加载失败");
    assert!(body["detail"].is_string());
}
