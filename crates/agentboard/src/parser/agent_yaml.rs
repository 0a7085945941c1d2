//! Parser for the restricted YAML subset used by agent `config.yml` files.
//!
//! The accepted shape is:
//!
//! ```yaml
//! agent:
//!   model:
//!     provider: "openai"
//!     name: gpt-4
//!   prompts:
//!     system_prompt: |
//!       You are a helpful agent.
//!     step_wise_prompt: |
//!       Step 1: think.
//! ```
//!
//! Block-literal prompts have no terminator. A block ends at an agent,
//! section, or prompt marker line at any indentation, or at the first
//! non-blank line indented less than its content threshold. Either way the
//! line is then dispatched again as structure.
//! Indentation is the raw count of leading whitespace characters; a tab counts
//! as one.
//!
//! Anything not recognized is skipped. Callers rely on getting whatever
//! structure was found rather than an error.

use std::path::Path;

use super::AgentParser;
use crate::model::{AgentRecord, PromptKind};

const AGENT_MARKER: &str = "agent";
const MODEL_MARKER: &str = "model:";
const PROMPTS_MARKER: &str = "prompts:";
const COMMENT_MARKER: char = '#';
/// Extra indentation block content must carry beyond its opener line.
const BLOCK_INDENT_STEP: usize = 2;

/// Parser for agent `.yml` / `.yaml` configuration documents.
pub struct AgentYamlParser;

impl AgentParser for AgentYamlParser {
    fn supports(path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
            .unwrap_or(false)
    }

    fn parse(content: &str) -> Vec<AgentRecord> {
        parse_agents(content)
    }
}

/// Parse a configuration document into agent records in document order.
pub fn parse_agents(content: &str) -> Vec<AgentRecord> {
    let mut state = ParseState::default();
    for (idx, line) in content.lines().enumerate() {
        while let Step::Redispatch = state.step(line) {
            tracing::trace!("line {} closed a prompt block; re-dispatching", idx + 1);
        }
    }
    let agents = state.finish();
    tracing::debug!("parsed {} agent(s)", agents.len());
    agents
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Section {
    #[default]
    None,
    Model,
    Prompts,
}

/// A block-literal prompt being collected.
#[derive(Debug)]
struct Block {
    kind: PromptKind,
    /// Minimum indentation of a content line.
    base_indent: usize,
    lines: Vec<String>,
}

impl Block {
    fn new(kind: PromptKind, base_indent: usize) -> Self {
        Self {
            kind,
            base_indent,
            lines: Vec::new(),
        }
    }

    fn into_text(self) -> String {
        self.lines.join("\n").trim_end().to_string()
    }
}

/// Outcome of feeding one line to the state machine.
enum Step {
    Consumed,
    /// The line closed a block and must be fed again.
    Redispatch,
}

#[derive(Debug, Default)]
struct ParseState {
    /// The last entry is the agent currently being filled.
    agents: Vec<AgentRecord>,
    section: Section,
    block: Option<Block>,
}

impl ParseState {
    fn step(&mut self, line: &str) -> Step {
        let trimmed = line.trim();
        let indent = indent_of(line);

        // Markers end an open block wherever they are indented.
        if self.block.is_some() && is_marker(trimmed) {
            self.close_block();
            return Step::Redispatch;
        }
        if let Some(block) = self.block.as_mut() {
            if trimmed.is_empty() {
                block.lines.push(String::new());
                return Step::Consumed;
            }
            if indent >= block.base_indent {
                block
                    .lines
                    .push(strip_indent(line, block.base_indent).to_string());
                return Step::Consumed;
            }
            self.close_block();
            return Step::Redispatch;
        }

        self.dispatch(trimmed, indent);
        Step::Consumed
    }

    /// Structural rules for a line outside any block.
    fn dispatch(&mut self, trimmed: &str, indent: usize) {
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            return;
        }
        if trimmed.starts_with(AGENT_MARKER) {
            self.agents.push(AgentRecord::default());
            self.section = Section::None;
            return;
        }
        let Some(agent) = self.agents.last_mut() else {
            tracing::trace!("ignoring line outside any agent: {}", trimmed);
            return;
        };
        match trimmed {
            MODEL_MARKER => self.section = Section::Model,
            PROMPTS_MARKER => self.section = Section::Prompts,
            _ => match self.section {
                Section::Model => apply_model_property(agent, trimmed),
                Section::Prompts => match PromptKind::from_opener(trimmed) {
                    Some(kind) => {
                        self.block = Some(Block::new(kind, indent + BLOCK_INDENT_STEP));
                    }
                    None => tracing::trace!("ignoring unrecognized prompts line: {}", trimmed),
                },
                Section::None => tracing::trace!("ignoring line outside a section: {}", trimmed),
            },
        }
    }

    fn close_block(&mut self) {
        let Some(block) = self.block.take() else {
            return;
        };
        match self.agents.last_mut() {
            Some(agent) => {
                let kind = block.kind;
                agent.prompts.insert(kind, block.into_text());
            }
            None => tracing::trace!("discarding {} block with no agent", block.kind.key()),
        }
    }

    fn finish(mut self) -> Vec<AgentRecord> {
        self.close_block();
        self.agents
    }
}

/// Lines that start an agent, a section, or a prompt block.
fn is_marker(trimmed: &str) -> bool {
    trimmed.starts_with(AGENT_MARKER)
        || trimmed == MODEL_MARKER
        || trimmed == PROMPTS_MARKER
        || PromptKind::from_opener(trimmed).is_some()
}

fn apply_model_property(agent: &mut AgentRecord, trimmed: &str) {
    let Some((key, value)) = trimmed.split_once(':') else {
        tracing::trace!("ignoring model line without a key: {}", trimmed);
        return;
    };
    let value = unquote(value.trim());
    match key.trim() {
        "provider" => agent.model.provider = Some(value.to_string()),
        "name" => agent.model.name = Some(value.to_string()),
        other => tracing::trace!("ignoring unrecognized model key '{}'", other),
    }
}

fn unquote(value: &str) -> &str {
    value.trim_matches(|c| c == '"' || c == '\'')
}

fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Drop the first `n` characters; callers guarantee they are whitespace.
fn strip_indent(line: &str, n: usize) -> &str {
    line.char_indices().nth(n).map_or("", |(i, _)| &line[i..])
}
