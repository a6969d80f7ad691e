//! Typed error handling for the infosite server
//!
//! Every fallible operation in the crate returns one of the category errors
//! below, wrapped in [`SiteError`] at the HTTP boundary. Each category knows
//! its HTTP status and a stable error code so handlers never hand-build error
//! responses.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: user-correctable input problems (HTTP 400)
//! - [`TemplateError`]: document template could not be merged (HTTP 500)
//! - [`StorageError`]: template resource could not be fetched (HTTP 500)
//! - [`ContentError`]: markdown content lookups (HTTP 404 / 500)
//! - [`ConfigError`]: configuration parsing and validation
//! - [`RequestError`]: routing misses and unreadable bodies (HTTP 404 / 405 /
//!   413 / 500)
//!
//! # Response shapes
//!
//! Validation failures answer `{ "error": <first>, "errors": [<all>] }`.
//! Server faults, including a contract body that is not readable JSON, answer
//! `{ "error": <generic>, "detail": <diagnostic> }` so the user-facing
//! message never leaks internals while the diagnostic survives.
//!
//! ```rust,ignore
//! use infosite::prelude::*;
//!
//! match validate(&payload).into_result() {
//!     Ok(data) => generate(data),
//!     Err(SiteError::Validation(ValidationError::Rejected { errors })) => {
//!         eprintln!("first problem: {}", errors[0]);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// User-facing message for every generation fault
pub const GENERATION_FAILED: &str = "生成失败，请检查输入并重试";

/// User-facing message for content loading faults
pub const CONTENT_FAILED: &str = "内容加载失败";

/// The main error type for the infosite server
#[derive(Debug, Error)]
pub enum SiteError {
    /// Input validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Template merge errors
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Template resource errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Markdown content errors
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP/Request errors
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Message shown to the user
    pub error: String,
    /// Complete ordered list of validation messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    /// Diagnostic for server faults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Error code for programmatic handling (non-contract routes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl SiteError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SiteError::Validation(_) => StatusCode::BAD_REQUEST,
            SiteError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SiteError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SiteError::Content(e) => e.status_code(),
            SiteError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SiteError::Request(e) => e.status_code(),
            SiteError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SiteError::Validation(e) => e.error_code(),
            SiteError::Template(e) => e.error_code(),
            SiteError::Storage(e) => e.error_code(),
            SiteError::Content(e) => e.error_code(),
            SiteError::Config(_) => "CONFIG_ERROR",
            SiteError::Request(e) => e.error_code(),
            SiteError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error is a server fault rather than a client mistake
    pub fn is_server_fault(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            SiteError::Validation(e) => {
                let errors = e.messages();
                ErrorResponse {
                    error: errors.first().cloned().unwrap_or_default(),
                    errors: Some(errors),
                    detail: None,
                    code: None,
                }
            }
            SiteError::Template(_)
            | SiteError::Storage(_)
            | SiteError::Request(RequestError::MalformedBody { .. })
            | SiteError::Internal(_) => {
                ErrorResponse {
                    error: GENERATION_FAILED.to_string(),
                    errors: None,
                    detail: Some(self.to_string()),
                    code: None,
                }
            }
            SiteError::Content(e) if e.status_code().is_server_error() => ErrorResponse {
                error: CONTENT_FAILED.to_string(),
                errors: None,
                detail: Some(self.to_string()),
                code: Some(self.error_code().to_string()),
            },
            _ => ErrorResponse {
                error: self.to_string(),
                errors: None,
                detail: None,
                code: Some(self.error_code().to_string()),
            },
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_server_fault() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more contract rules failed, in evaluation order
    #[error("Validation failed: {}", .errors.join("; "))]
    Rejected { errors: Vec<String> },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::Rejected { .. } => "VALIDATION_ERROR",
        }
    }

    /// User-facing messages, first one is shown in short displays
    pub fn messages(&self) -> Vec<String> {
        match self {
            ValidationError::Rejected { errors } => errors.clone(),
        }
    }
}

// =============================================================================
// Template Errors
// =============================================================================

/// Errors raised while merging data into a document template
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template bytes are not a readable document container
    #[error("Template archive is unreadable: {message}")]
    InvalidArchive { message: String },

    /// Required document part is absent from the template
    #[error("Template part '{part}' is missing")]
    MissingPart { part: String },

    /// A part is not valid UTF-8 text
    #[error("Template part '{part}' is not UTF-8: {message}")]
    Encoding { part: String, message: String },

    /// Placeholder substitution failed
    #[error("Failed to render template part '{part}': {message}")]
    Render { part: String, message: String },

    /// Output archive could not be written
    #[error("Failed to write document: {message}")]
    Write { message: String },
}

impl TemplateError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TemplateError::InvalidArchive { .. } => "TEMPLATE_INVALID_ARCHIVE",
            TemplateError::MissingPart { .. } => "TEMPLATE_MISSING_PART",
            TemplateError::Encoding { .. } => "TEMPLATE_ENCODING_ERROR",
            TemplateError::Render { .. } => "TEMPLATE_RENDER_ERROR",
            TemplateError::Write { .. } => "TEMPLATE_WRITE_ERROR",
        }
    }
}

impl From<zip::result::ZipError> for TemplateError {
    fn from(err: zip::result::ZipError) -> Self {
        TemplateError::InvalidArchive {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to template resource providers
#[derive(Debug, Error)]
pub enum StorageError {
    /// No resource registered or present under that name
    #[error("Template '{name}' not found")]
    NotFound { name: String },

    /// Name would escape the template root
    #[error("Invalid template name '{name}'")]
    InvalidName { name: String },

    /// Reading the resource failed
    #[error("Failed to read template '{name}': {message}")]
    Io { name: String, message: String },
}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::NotFound { .. } => "TEMPLATE_NOT_FOUND",
            StorageError::InvalidName { .. } => "TEMPLATE_INVALID_NAME",
            StorageError::Io { .. } => "TEMPLATE_IO_ERROR",
        }
    }
}

// =============================================================================
// Content Errors
// =============================================================================

/// Errors related to markdown content lookups
#[derive(Debug, Error)]
pub enum ContentError {
    /// Category or slug empty after sanitizing
    #[error("Missing content params: category='{category}', slug='{slug}'")]
    MissingParams { category: String, slug: String },

    /// No markdown file for the requested item
    #[error("Content '{category}/{slug}' not found")]
    NotFound { category: String, slug: String },

    /// Front matter is not valid YAML
    #[error("Invalid front matter in '{path}': {message}")]
    FrontMatter { path: String, message: String },

    /// Reading the file tree failed
    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },
}

impl ContentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContentError::MissingParams { .. } => StatusCode::BAD_REQUEST,
            ContentError::NotFound { .. } => StatusCode::NOT_FOUND,
            ContentError::FrontMatter { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ContentError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::MissingParams { .. } => "CONTENT_MISSING_PARAMS",
            ContentError::NotFound { .. } => "CONTENT_NOT_FOUND",
            ContentError::FrontMatter { .. } => "CONTENT_FRONT_MATTER_ERROR",
            ContentError::Io { .. } => "CONTENT_IO_ERROR",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration values are out of bounds
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    /// IO error reading configuration
    #[error("IO error reading config: {message}")]
    IoError { message: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_deref()
        .map(|f| format!(" '{}'", f))
        .unwrap_or_default()
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug, Error)]
pub enum RequestError {
    /// No route matches the path
    #[error("No route for {path}")]
    RouteNotFound { path: String },

    /// Method not allowed
    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Body could not be read (too large, aborted, ...)
    #[error("Request body rejected: {message}")]
    BodyRejected { status: StatusCode, message: String },

    /// Body is not a JSON document the handler can read fields from
    #[error("Malformed request body: {message}")]
    MalformedBody { message: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            RequestError::BodyRejected { status, .. } => *status,
            RequestError::MalformedBody { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            RequestError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            RequestError::BodyRejected { .. } => "BODY_REJECTED",
            RequestError::MalformedBody { .. } => "MALFORMED_BODY",
        }
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Request(RequestError::MalformedBody {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for SiteError {
    fn from(err: serde_yaml::Error) -> Self {
        SiteError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

/// Convert from anyhow::Error at the builder boundary
impl From<anyhow::Error> for SiteError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<SiteError>() {
            Ok(site_err) => site_err,
            Err(err) => SiteError::Internal(err.to_string()),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for infosite operations
pub type SiteResult<T> = Result<T, SiteError>;
