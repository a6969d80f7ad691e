//! Server host for transport-agnostic API exposure
//!
//! The host holds every shared collaborator a request may need. All of it is
//! immutable after construction, so handlers share it through `Arc`s without
//! locking.

use crate::config::ServerConfig;
use crate::content::ContentRepository;
use crate::contract::DocumentGenerator;
use crate::core::service::TemplateStore;
use anyhow::Result;
use std::sync::Arc;

/// Host context containing all server state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerHost::from_builder_components(config, Arc::new(store))?;
/// let app = RestExposure::build_router(Arc::new(host), vec![])?;
/// ```
pub struct ServerHost {
    /// Effective configuration
    pub config: Arc<ServerConfig>,

    /// Template resource provider
    pub templates: Arc<dyn TemplateStore>,

    /// Document generator configured from `config.document`
    pub generator: Arc<DocumentGenerator>,

    /// Markdown content tree
    pub content: Arc<ContentRepository>,
}

impl ServerHost {
    /// Build the host from builder components
    pub fn from_builder_components(
        config: ServerConfig,
        templates: Arc<dyn TemplateStore>,
    ) -> Result<Self> {
        let generator = Arc::new(DocumentGenerator::from_config(&config.document));
        let content = Arc::new(ContentRepository::new(config.content.dir.clone()));

        Ok(Self {
            config: Arc::new(config),
            templates,
            generator,
            content,
        })
    }

    /// Name of the labor-contract template
    pub fn labor_contract_template(&self) -> &str {
        &self.config.templates.labor_contract
    }

    /// Check that the configured template can be fetched
    pub async fn is_ready(&self) -> bool {
        self.templates.exists(self.labor_contract_template()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryTemplateStore;

    fn make_host(store: InMemoryTemplateStore) -> ServerHost {
        ServerHost::from_builder_components(ServerConfig::default(), Arc::new(store))
            .expect("should build host")
    }

    #[tokio::test]
    async fn test_not_ready_without_template() {
        let host = make_host(InMemoryTemplateStore::new());
        assert!(!host.is_ready().await);
    }

    #[tokio::test]
    async fn test_ready_with_template() {
        let store = InMemoryTemplateStore::new()
            .with_template("labor-contract-template-fillable.docx", vec![0u8])
            .unwrap();
        let host = make_host(store);
        assert!(host.is_ready().await);
    }

    #[test]
    fn test_content_root_from_config() {
        let host = make_host(InMemoryTemplateStore::new());
        assert_eq!(host.content.root(), std::path::Path::new("content"));
    }
}
