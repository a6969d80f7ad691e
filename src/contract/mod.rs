//! Labor-contract generation
//!
//! A submitted form goes through four steps:
//!
//! 1. [`form`]: every recognized field is trimmed and length-capped
//! 2. [`validator`]: the complete rule set runs and collects all messages
//! 3. [`generator`]: accepted data is merged into the DOCX template
//! 4. [`response`]: the document is streamed back as a download

pub mod form;
pub mod generator;
pub mod handlers;
pub mod labels;
pub mod response;
pub mod validator;

pub use form::ContractForm;
pub use generator::{DocumentGenerator, GeneratedDocument};
pub use handlers::ContractState;
pub use labels::{TermType, WageType, WorktimeType};
pub use validator::{ContractData, ValidationOutcome, validate};
