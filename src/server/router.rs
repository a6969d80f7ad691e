//! Router builder utilities

use crate::content::ContentState;
use crate::content::handlers::{get_post, list_categories, list_category_posts, list_posts};
use crate::contract::ContractState;
use crate::contract::handlers::generate_labor_contract;
use axum::{
    Router,
    routing::{get, post},
};

/// Path of the contract generation endpoint
pub const GENERATE_LABOR_CONTRACT_PATH: &str = "/api/generate-labor-contract";

/// Build the contract generation route
///
/// - POST /api/generate-labor-contract - Validate a form and download the DOCX
pub fn build_contract_routes(state: ContractState) -> Router {
    Router::new()
        .route(GENERATE_LABOR_CONTRACT_PATH, post(generate_labor_contract))
        .with_state(state)
}

/// Build the content browsing routes
///
/// - GET /api/posts - All items, newest first
/// - GET /api/posts/{category}/{slug} - One item with rendered HTML
/// - GET /api/categories - Categories in first-seen order
/// - GET /api/categories/{category} - Items of one category
pub fn build_content_routes(state: ContentState) -> Router {
    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{category}/{slug}", get(get_post))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/{category}", get(list_category_posts))
        .with_state(state)
}
