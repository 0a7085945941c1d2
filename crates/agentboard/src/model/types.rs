use std::collections::BTreeMap;

use serde::Serialize;

use super::prompt::PromptKind;

/// Model settings declared under an agent's `model:` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ModelDescriptor {
    pub fn is_empty(&self) -> bool {
        self.provider.is_none() && self.name.is_none()
    }
}

/// One agent entry, in the order its marker appeared in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgentRecord {
    pub model: ModelDescriptor,
    /// Verbatim block text per kind (de-indented, trailing whitespace trimmed).
    pub prompts: BTreeMap<PromptKind, String>,
}

impl AgentRecord {
    pub fn prompt(&self, kind: PromptKind) -> Option<&str> {
        self.prompts.get(&kind).map(String::as_str)
    }
}

/// All agents parsed from one configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgentDocument {
    pub agents: Vec<AgentRecord>,
}

impl AgentDocument {
    pub fn new(agents: Vec<AgentRecord>) -> Self {
        Self { agents }
    }

    pub fn first(&self) -> Option<&AgentRecord> {
        self.agents.first()
    }

    pub fn agent(&self, index: usize) -> Option<&AgentRecord> {
        self.agents.get(index)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
