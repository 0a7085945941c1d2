//! Tournament agent configuration: parse per-player config documents, resolve
//! players to files, and build display views of their agents.

pub mod config;
pub mod loader;
pub mod model;
pub mod parser;
pub mod registry;
pub mod view;

pub use model::{AgentDocument, AgentRecord, ModelDescriptor, PromptKind};
pub use parser::parse_agents;
