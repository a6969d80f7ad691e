//! REST API exposure
//!
//! The REST exposure consumes a `ServerHost` and produces an Axum `Router`
//! with health, contract and content routes plus any custom routes.

use super::super::host::ServerHost;
use crate::content::ContentState;
use crate::contract::ContractState;
use crate::core::error::{RequestError, SiteError};
use crate::server::router::{build_content_routes, build_contract_routes};
use anyhow::Result;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// # Arguments
    ///
    /// * `host` - The server host containing all shared state
    /// * `custom_routes` - Additional custom routes to merge
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let contract_state = ContractState {
            templates: host.templates.clone(),
            generator: host.generator.clone(),
            template_name: Arc::from(host.labor_contract_template()),
        };
        let content_state = ContentState {
            repository: host.content.clone(),
        };

        let mut app = Self::health_routes(host.clone())
            .merge(build_contract_routes(contract_state))
            .merge(build_content_routes(content_state));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app = app
            .fallback(Self::route_not_found)
            .method_not_allowed_fallback(Self::method_not_allowed);

        if host.config.server.permissive_cors {
            app = app.layer(CorsLayer::permissive());
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Build health check routes
    fn health_routes(host: Arc<ServerHost>) -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
            .route("/readyz", get(Self::readiness_check))
            .with_state(host)
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "infosite"
        }))
    }

    /// Readiness: the contract template must be fetchable
    async fn readiness_check(State(host): State<Arc<ServerHost>>) -> (StatusCode, Json<Value>) {
        if host.is_ready().await {
            (StatusCode::OK, Json(json!({ "status": "ready" })))
        } else {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unavailable",
                    "template": host.labor_contract_template()
                })),
            )
        }
    }

    async fn route_not_found(uri: Uri) -> SiteError {
        RequestError::RouteNotFound {
            path: uri.path().to_string(),
        }
        .into()
    }

    async fn method_not_allowed(method: Method, uri: Uri) -> SiteError {
        RequestError::MethodNotAllowed {
            method: method.to_string(),
            path: uri.path().to_string(),
        }
        .into()
    }
}
