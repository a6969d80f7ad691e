//! Service traits for collaborator resources

use crate::core::error::StorageError;
use async_trait::async_trait;
use std::sync::Arc;

/// Provider of immutable document templates
///
/// Templates are looked up by name and returned as shared bytes. They are
/// read-only, so the same bytes may serve any number of concurrent requests.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Fetch a template by name
    async fn fetch(&self, name: &str) -> Result<Arc<[u8]>, StorageError>;

    /// Check whether a template exists
    async fn exists(&self, name: &str) -> bool {
        self.fetch(name).await.is_ok()
    }
}

/// Reject names that could escape a template root
pub fn check_template_name(name: &str) -> Result<(), StorageError> {
    let bad = name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name == "."
        || name == "..";
    if bad {
        Err(StorageError::InvalidName {
            name: name.to_string(),
        })
    } else {
        Ok(())
    }
}
