//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - Health and readiness probes
//! - The labor-contract generation endpoint
//! - Read-only content browsing routes

pub mod builder;
pub mod exposure;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
pub use router::{GENERATE_LABOR_CONTRACT_PATH, build_content_routes, build_contract_routes};
