//! Parsers for tournament agent configuration documents.
//!
//! A parser declares a `supports` predicate over file paths and a `parse`
//! function that turns raw document text into agent records. Parsing never
//! fails: unrecognized or malformed constructs are skipped so callers can
//! always render whatever structure was found.

use std::path::Path;

use crate::model::AgentRecord;

/// Parser trait implemented by document formats.
pub trait AgentParser {
    fn supports(path: &Path) -> bool;
    fn parse(content: &str) -> Vec<AgentRecord>;
}

pub mod agent_yaml;

pub use agent_yaml::{AgentYamlParser, parse_agents};
