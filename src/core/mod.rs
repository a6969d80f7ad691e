//! Core module containing fundamental types shared by every domain module

pub mod error;
pub mod field;
pub mod service;
pub mod validation;

pub use error::{
    ConfigError, ContentError, ErrorResponse, SiteError, SiteResult, StorageError, TemplateError,
    ValidationError,
};
pub use field::{FieldFormat, FieldKind, MAX_FIELD_LENGTH, MAX_LONG_FIELD_LENGTH};
pub use service::TemplateStore;
pub use validation::ContractPayload;
