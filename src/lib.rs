//! # Infosite
//!
//! HTTP backend for a small information site: it turns a labor-contract form
//! into a downloadable Word document and serves a tree of markdown articles.
//!
//! ## Features
//!
//! - **Form Normalization**: every field is trimmed and length-capped before use
//! - **Complete Validation**: all rule violations are reported at once, in a stable order
//! - **DOCX Merge**: placeholders split across Word runs are rejoined before substitution
//! - **Pluggable Templates**: templates come from any `TemplateStore`
//! - **Content Browsing**: categories and articles read from markdown with front matter
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use infosite::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ServerConfig::from_yaml_file("config/infosite.yaml")?.with_env_overrides()?;
//!     let bind = config.server.bind.clone();
//!
//!     ServerBuilder::new()
//!         .with_config(config)
//!         .serve(&bind)
//!         .await
//! }
//! ```

pub mod config;
pub mod content;
pub mod contract;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ErrorResponse, SiteError, SiteResult},
        field::{FieldFormat, FieldKind},
        service::TemplateStore,
        validation::ContractPayload,
    };

    // === Contract ===
    pub use crate::contract::{
        ContractData, ContractForm, ContractState, DocumentGenerator, GeneratedDocument,
        TermType, ValidationOutcome, WageType, WorktimeType, validate,
    };

    // === Content ===
    pub use crate::content::{ContentRepository, ContentState};

    // === Storage ===
    pub use crate::storage::{FsTemplateStore, InMemoryTemplateStore};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        routing::{get, post},
    };
}
