//! Prompt kinds recognized inside an agent's `prompts:` section.

use serde::Serialize;

/// Block-literal prompt kinds. Ordering follows display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PromptKind {
    #[serde(rename = "system_prompt")]
    System,
    #[serde(rename = "step_wise_prompt")]
    StepWise,
}

impl PromptKind {
    pub const ALL: [PromptKind; 2] = [PromptKind::System, PromptKind::StepWise];

    /// Key used for this kind in configuration documents.
    pub fn key(self) -> &'static str {
        match self {
            PromptKind::System => "system_prompt",
            PromptKind::StepWise => "step_wise_prompt",
        }
    }

    /// Human-readable heading for rendered views.
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::System => "System Prompt",
            PromptKind::StepWise => "Step-wise Prompt",
        }
    }

    /// Match a trimmed line against the block-literal opener `<key>: |`.
    pub fn from_opener(trimmed: &str) -> Option<PromptKind> {
        Self::ALL.into_iter().find(|kind| {
            trimmed
                .strip_prefix(kind.key())
                .is_some_and(|rest| rest == ": |")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_requires_exact_block_indicator() {
        assert_eq!(
            PromptKind::from_opener("system_prompt: |"),
            Some(PromptKind::System)
        );
        assert_eq!(
            PromptKind::from_opener("step_wise_prompt: |"),
            Some(PromptKind::StepWise)
        );
        assert_eq!(PromptKind::from_opener("system_prompt: |-"), None);
        assert_eq!(PromptKind::from_opener("system_prompt: inline"), None);
        assert_eq!(PromptKind::from_opener("user_prompt: |"), None);
    }

    #[test]
    fn serializes_as_document_key() {
        let s = serde_json::to_string(&PromptKind::StepWise).expect("serialize");
        assert_eq!(s, "\"step_wise_prompt\"");
    }
}
