//! In-memory implementation of TemplateStore for testing and embedding

use crate::core::error::StorageError;
use crate::core::service::{TemplateStore, check_template_name};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory template store
///
/// Useful for tests and for binaries that embed their templates. Uses
/// RwLock for thread-safe access; the stored bytes themselves are immutable.
#[derive(Clone, Default)]
pub struct InMemoryTemplateStore {
    templates: Arc<RwLock<HashMap<String, Arc<[u8]>>>>,
}

impl InMemoryTemplateStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register template bytes under `name`, replacing any previous entry
    pub fn insert(
        &self,
        name: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Result<(), StorageError> {
        let name = name.into();
        check_template_name(&name)?;
        let mut templates = self.templates.write().map_err(|e| StorageError::Io {
            name: name.clone(),
            message: format!("Failed to acquire write lock: {}", e),
        })?;
        templates.insert(name, bytes.into());
        Ok(())
    }

    /// Builder-style registration
    pub fn with_template(
        self,
        name: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Result<Self, StorageError> {
        self.insert(name, bytes)?;
        Ok(self)
    }
}

#[async_trait]
impl TemplateStore for InMemoryTemplateStore {
    async fn fetch(&self, name: &str) -> Result<Arc<[u8]>, StorageError> {
        let templates = self.templates.read().map_err(|e| StorageError::Io {
            name: name.to_string(),
            message: format!("Failed to acquire read lock: {}", e),
        })?;

        templates
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                name: name.to_string(),
            })
    }
}
