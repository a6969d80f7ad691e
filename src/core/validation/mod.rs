//! Validation and filtering system
//!
//! Filters bound and trim raw values, validators check the normalized text,
//! and the extractor runs the contract rule set before handlers execute.

pub mod extractor;
pub mod filters;
pub mod validators;

pub use extractor::ContractPayload;
pub use filters::normalize;
