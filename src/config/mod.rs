//! Configuration loading and management
//!
//! Every setting has a default, so an empty YAML document is a valid
//! configuration. Environment variables override the file:
//!
//! - `INFOSITE_BIND` → `server.bind`
//! - `INFOSITE_TEMPLATE_DIR` → `templates.dir`
//! - `INFOSITE_CONTENT_DIR` → `content.dir`

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

pub const ENV_BIND: &str = "INFOSITE_BIND";
pub const ENV_TEMPLATE_DIR: &str = "INFOSITE_TEMPLATE_DIR";
pub const ENV_CONTENT_DIR: &str = "INFOSITE_CONTENT_DIR";

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HttpConfig {
    /// Socket address to bind (e.g., "127.0.0.1:3000")
    #[validate(length(min = 1))]
    pub bind: String,

    /// Allow cross-origin requests from any origin
    pub permissive_cors: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            permissive_cors: false,
        }
    }
}

/// Where contract templates come from
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory holding template files
    pub dir: PathBuf,

    /// File name of the labor-contract template inside `dir`
    #[validate(length(min = 1))]
    pub labor_contract: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public/templates"),
            labor_contract: "labor-contract-template-fillable.docx".to_string(),
        }
    }
}

/// Naming of generated documents
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DocumentConfig {
    /// Prepended to the sanitized employee name
    pub file_name_prefix: String,

    /// Used when the employee name is empty
    #[validate(length(min = 1))]
    pub fallback_name: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            file_name_prefix: "劳动合同_".to_string(),
            fallback_name: "模板".to_string(),
        }
    }
}

/// Markdown content tree
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContentConfig {
    /// Root directory, one sub-directory per category
    pub dir: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content"),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    #[validate(nested)]
    pub server: HttpConfig,

    #[validate(nested)]
    pub templates: TemplateConfig,

    #[validate(nested)]
    pub document: DocumentConfig,

    #[validate(nested)]
    pub content: ContentConfig,
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.checked()
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.checked()
    }

    /// Apply environment overrides on top of the current values
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(bind) = lookup(ENV_BIND) {
            self.server.bind = bind;
        }
        if let Some(dir) = lookup(ENV_TEMPLATE_DIR) {
            self.templates.dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(ENV_CONTENT_DIR) {
            self.content.dir = PathBuf::from(dir);
        }
        self.checked()
    }

    /// Run field validation
    pub fn checked(self) -> Result<Self, ConfigError> {
        self.validate().map_err(|e| ConfigError::Invalid {
            message: e.to_string(),
        })?;
        Ok(self)
    }
}
