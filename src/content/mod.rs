//! Markdown content browsing: categories, item listings and rendered items

pub mod handlers;
pub mod repository;

pub use handlers::ContentState;
pub use repository::{Category, ContentRepository, Post, PostMeta};
