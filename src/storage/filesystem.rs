//! Filesystem-backed TemplateStore
//!
//! Templates are read fresh on every fetch, so replacing a file on disk takes
//! effect on the next request without a restart.

use crate::core::error::StorageError;
use crate::core::service::{TemplateStore, check_template_name};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Template store rooted at a directory
#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    root: PathBuf,
}

impl FsTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl TemplateStore for FsTemplateStore {
    async fn fetch(&self, name: &str) -> Result<Arc<[u8]>, StorageError> {
        check_template_name(name)?;
        let path = self.root.join(name);

        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                tracing::debug!(path = %path.display(), size = bytes.len(), "template loaded");
                Ok(bytes.into())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(StorageError::Io {
                name: name.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
