//! Template resource providers

pub mod filesystem;
pub mod in_memory;

pub use filesystem::FsTemplateStore;
pub use in_memory::InMemoryTemplateStore;
