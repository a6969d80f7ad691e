//! HTTP handlers for the content API
//!
//! The repository walks the filesystem synchronously, so every lookup runs
//! on the blocking pool.

use super::repository::{Category, ContentRepository, Post, PostMeta};
use crate::core::error::{ContentError, SiteError};
use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

/// Application state shared across content handlers
#[derive(Clone)]
pub struct ContentState {
    pub repository: Arc<ContentRepository>,
}

async fn run_blocking<T, F>(state: &ContentState, f: F) -> Result<T, SiteError>
where
    T: Send + 'static,
    F: FnOnce(&ContentRepository) -> Result<T, ContentError> + Send + 'static,
{
    let repository = state.repository.clone();
    tokio::task::spawn_blocking(move || f(&repository))
        .await
        .map_err(|e| SiteError::Internal(format!("content task failed: {}", e)))?
        .map_err(SiteError::from)
}

/// List every item, newest first
pub async fn list_posts(
    State(state): State<ContentState>,
) -> Result<Json<Vec<PostMeta>>, SiteError> {
    run_blocking(&state, |repo| repo.all_posts()).await.map(Json)
}

/// List categories in order of first appearance
pub async fn list_categories(
    State(state): State<ContentState>,
) -> Result<Json<Vec<Category>>, SiteError> {
    run_blocking(&state, |repo| repo.categories()).await.map(Json)
}

/// List items of one category
pub async fn list_category_posts(
    State(state): State<ContentState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<PostMeta>>, SiteError> {
    run_blocking(&state, move |repo| repo.posts_by_category(&category))
        .await
        .map(Json)
}

/// Fetch one item with rendered HTML
pub async fn get_post(
    State(state): State<ContentState>,
    Path((category, slug)): Path<(String, String)>,
) -> Result<Json<Post>, SiteError> {
    run_blocking(&state, move |repo| repo.post(&category, &slug))
        .await
        .map(Json)
}
