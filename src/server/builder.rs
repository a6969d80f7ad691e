//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::ServerConfig;
use crate::core::service::TemplateStore;
use crate::storage::FsTemplateStore;
use anyhow::Result;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(ServerConfig::from_yaml_file("config/infosite.yaml")?)
///     .with_template_store(InMemoryTemplateStore::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: Option<ServerConfig>,
    template_store: Option<Arc<dyn TemplateStore>>,
    content_root: Option<PathBuf>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            config: None,
            template_store: None,
            content_root: None,
            custom_routes: Vec::new(),
        }
    }

    /// Use the given configuration instead of the defaults
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the template store
    ///
    /// Without one, templates are read from `templates.dir` on disk.
    pub fn with_template_store(mut self, store: impl TemplateStore + 'static) -> Self {
        self.template_store = Some(Arc::new(store));
        self
    }

    /// Override the markdown content directory
    pub fn with_content_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.content_root = Some(root.into());
        self
    }

    /// Add custom routes to the server
    ///
    /// # Example
    ///
    /// ```ignore
    /// let extra = Router::new().route("/api/version", get(version_handler));
    ///
    /// ServerBuilder::new()
    ///     .with_custom_routes(extra)
    ///     .build()?;
    /// ```
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    ///
    /// The configuration is checked before anything is wired.
    pub fn build_host(mut self) -> Result<ServerHost> {
        let mut config = self.config.take().unwrap_or_default().checked()?;

        if let Some(root) = self.content_root.take() {
            config.content.dir = root;
        }

        let templates = match self.template_store.take() {
            Some(store) => store,
            None => Arc::new(FsTemplateStore::new(config.templates.dir.clone())),
        };

        ServerHost::from_builder_components(config, templates)
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .serve("127.0.0.1:8080").await?;
    /// ```
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryTemplateStore;
    use axum::routing::get;

    #[test]
    fn test_new_builder_is_empty() {
        let builder = ServerBuilder::new();
        assert!(builder.config.is_none());
        assert!(builder.template_store.is_none());
        assert!(builder.content_root.is_none());
        assert!(builder.custom_routes.is_empty());
    }

    #[test]
    fn test_default_matches_new() {
        let builder = ServerBuilder::default();
        assert!(builder.config.is_none());
        assert!(builder.custom_routes.is_empty());
    }

    #[test]
    fn test_build_host_defaults_to_filesystem_store() {
        let host = ServerBuilder::new().build_host().expect("should build host");
        assert_eq!(host.labor_contract_template(), "labor-contract-template-fillable.docx");
    }

    #[test]
    fn test_content_root_override() {
        let host = ServerBuilder::new()
            .with_content_root("/srv/site/content")
            .build_host()
            .expect("should build host");
        assert_eq!(host.content.root(), std::path::Path::new("/srv/site/content"));
        assert_eq!(
            host.config.content.dir,
            std::path::PathBuf::from("/srv/site/content")
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = ServerConfig::default();
        config.templates.labor_contract = String::new();

        let result = ServerBuilder::new().with_config(config).build_host();
        assert!(result.is_err(), "empty template name should fail the check");
    }

    #[test]
    fn test_with_custom_routes_accumulates() {
        let builder = ServerBuilder::new()
            .with_custom_routes(Router::new().route("/a", get(|| async { "a" })))
            .with_custom_routes(Router::new().route("/b", get(|| async { "b" })));
        assert_eq!(builder.custom_routes.len(), 2);
    }

    #[test]
    fn test_build_full_pipeline() {
        let result = ServerBuilder::new()
            .with_config(ServerConfig::default())
            .with_template_store(InMemoryTemplateStore::new())
            .with_custom_routes(Router::new())
            .build();
        assert!(result.is_ok(), "full fluent pipeline should succeed");
    }
}
