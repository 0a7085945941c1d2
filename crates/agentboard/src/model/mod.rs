//! Agent domain types: prompt kinds, model descriptors, parsed documents.

pub mod prompt;
pub mod types;

pub use prompt::*;
pub use types::*;
