//! Display view of one agent from a player's configuration.
//!
//! The parser reports only what the document contains. Placeholders for
//! missing data ("Unknown", "Configuration not available") are applied here.

use std::fmt;

use serde::Serialize;

use crate::model::{AgentDocument, AgentRecord, PromptKind};

pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "Configuration not available";
pub const NO_PROMPTS: &str = "No prompts found in configuration";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelView {
    pub provider: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptEntry {
    pub kind: PromptKind,
    pub label: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptsView {
    pub entries: Vec<PromptEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// `None` sections mean the configuration (or the selected agent) is not
/// available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigView {
    pub title: String,
    pub agent_index: usize,
    pub model: Option<ModelView>,
    pub prompts: Option<PromptsView>,
}

impl ConfigView {
    pub fn build(title: &str, doc: Option<&AgentDocument>, agent_index: usize) -> Self {
        let agent = doc.and_then(|d| d.agent(agent_index));
        if agent.is_none() {
            tracing::debug!(
                "no agent #{} for '{}' (agents={})",
                agent_index,
                title,
                doc.map(AgentDocument::len).unwrap_or(0)
            );
        }
        Self {
            title: title.to_string(),
            agent_index,
            model: agent.map(model_view),
            prompts: agent.map(prompts_view),
        }
    }
}

fn model_view(agent: &AgentRecord) -> ModelView {
    let or_unknown = |v: &Option<String>| match v.as_deref() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => UNKNOWN.to_string(),
    };
    ModelView {
        provider: or_unknown(&agent.model.provider),
        name: or_unknown(&agent.model.name),
    }
}

fn prompts_view(agent: &AgentRecord) -> PromptsView {
    let entries: Vec<PromptEntry> = PromptKind::ALL
        .into_iter()
        .filter_map(|kind| {
            agent
                .prompt(kind)
                .filter(|text| !text.is_empty())
                .map(|text| PromptEntry {
                    kind,
                    label: kind.label(),
                    text: text.to_string(),
                })
        })
        .collect();
    let note = if entries.is_empty() {
        Some(NO_PROMPTS)
    } else {
        None
    };
    PromptsView { entries, note }
}

/// Escape text for HTML element content or quoted attribute values.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

/// Plain-text rendering.
impl fmt::Display for ConfigView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        writeln!(f, "Model Information")?;
        match &self.model {
            Some(m) => {
                writeln!(f, "  Provider: {}", m.provider)?;
                writeln!(f, "  Model: {}", m.name)?;
            }
            None => writeln!(f, "  {}", NOT_AVAILABLE)?,
        }
        writeln!(f, "Prompts")?;
        match &self.prompts {
            Some(p) => {
                for entry in &p.entries {
                    writeln!(f, "  {}:", entry.label)?;
                    for line in entry.text.lines() {
                        if line.is_empty() {
                            writeln!(f)?;
                        } else {
                            writeln!(f, "    {}", line)?;
                        }
                    }
                }
                if let Some(note) = p.note {
                    writeln!(f, "  {}", note)?;
                }
            }
            None => writeln!(f, "  {}", NOT_AVAILABLE)?,
        }
        Ok(())
    }
}

/// HTML rendering of a view, escaping every document-supplied string.
pub struct HtmlView<'a>(pub &'a ConfigView);

impl fmt::Display for HtmlView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "<h2>{} - AI Configuration</h2>", escape_html(&view.title))?;

        write!(f, "<div class=\"config-section\"><h3>Model Information</h3>")?;
        match &view.model {
            Some(m) => write!(
                f,
                "<div class=\"model-info\">\
                 <div class=\"model-item\"><strong>Provider:</strong> {}</div>\
                 <div class=\"model-item\"><strong>Model:</strong> {}</div>\
                 </div>",
                escape_html(&m.provider),
                escape_html(&m.name)
            )?,
            None => write!(f, "<p>{}</p>", NOT_AVAILABLE)?,
        }
        writeln!(f, "</div>")?;

        write!(f, "<div class=\"config-section\"><h3>AI Prompts</h3>")?;
        match &view.prompts {
            Some(p) => {
                for entry in &p.entries {
                    write!(
                        f,
                        "<div class=\"prompt-section\"><h4>{}:</h4><div class=\"prompt-content\">{}</div></div>",
                        entry.label,
                        escape_html(&entry.text)
                    )?;
                }
                if let Some(note) = p.note {
                    write!(f, "<p>{}</p>", note)?;
                }
            }
            None => write!(f, "<p>{}</p>", NOT_AVAILABLE)?,
        }
        writeln!(f, "</div>")
    }
}

pub fn render_text(view: &ConfigView) -> String {
    view.to_string()
}

pub fn render_html(view: &ConfigView) -> String {
    HtmlView(view).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_agents;

    fn doc(text: &str) -> AgentDocument {
        AgentDocument::new(parse_agents(text))
    }

    #[test]
    fn missing_model_fields_render_unknown() {
        let d = doc("agent:\n  model:\n    provider: ''\n");
        let view = ConfigView::build("p", Some(&d), 0);
        let model = view.model.expect("model");
        assert_eq!(model.provider, UNKNOWN);
        assert_eq!(model.name, UNKNOWN);
        let prompts = view.prompts.expect("prompts");
        assert!(prompts.entries.is_empty());
        assert_eq!(prompts.note, Some(NO_PROMPTS));
    }

    #[test]
    fn missing_document_or_agent_is_not_available() {
        let none = ConfigView::build("p", None, 0);
        assert!(none.model.is_none() && none.prompts.is_none());

        let d = doc("agent:\n");
        let out_of_range = ConfigView::build("p", Some(&d), 1);
        assert!(out_of_range.model.is_none());
        assert!(render_text(&out_of_range).contains(NOT_AVAILABLE));
    }

    #[test]
    fn selects_agent_by_position_and_skips_empty_prompts() {
        let d = doc(
            "agent:\n  model:\n    name: first\nagent:\n  model:\n    name: second\n  prompts:\n    system_prompt: |\n    step_wise_prompt: |\n      go\n",
        );
        let view = ConfigView::build("p", Some(&d), 1);
        assert_eq!(view.model.as_ref().map(|m| m.name.as_str()), Some("second"));
        let prompts = view.prompts.expect("prompts");
        assert_eq!(prompts.entries.len(), 1);
        assert_eq!(prompts.entries[0].kind, PromptKind::StepWise);
        assert_eq!(prompts.entries[0].label, "Step-wise Prompt");
        assert_eq!(prompts.note, None);
    }

    #[test]
    fn html_output_escapes_prompt_text() {
        let d = doc("agent:\n  prompts:\n    system_prompt: |\n      Use <b> & \"quotes\"\n");
        let html = render_html(&ConfigView::build("a<b", Some(&d), 0));
        assert!(html.contains("Use &lt;b&gt; &amp; &quot;quotes&quot;"));
        assert!(html.contains("<h2>a&lt;b - AI Configuration</h2>"));
        let escaped = escape_html("it's <ok>");
        assert!(!escaped.contains('\''));
        assert!(escaped.starts_with("it&"));
        assert!(escaped.ends_with("&lt;ok&gt;"));
    }

    #[test]
    fn html_output_escapes_model_fields() {
        let d = doc("agent:\n  model:\n    provider: <script>\n    name: a&b\n");
        let html = render_html(&ConfigView::build("p", Some(&d), 0));
        assert!(html.contains("<strong>Provider:</strong> &lt;script&gt;</div>"));
        assert!(html.contains("<strong>Model:</strong> a&amp;b</div>"));
        assert!(html.contains("<p>No prompts found in configuration</p>"));
    }

    #[test]
    fn unavailable_html_has_placeholders_in_both_sections() {
        let html = render_html(&ConfigView::build("p", None, 0));
        assert_eq!(html.matches("<p>Configuration not available</p>").count(), 2);
    }

    #[test]
    fn text_output_indents_prompt_lines() {
        let d = doc("agent:\n  model:\n    provider: openai\n    name: gpt-4\n  prompts:\n    system_prompt: |\n      one\n\n      two\n");
        let text = render_text(&ConfigView::build("alice", Some(&d), 0));
        assert_eq!(
            text,
            "== alice ==\nModel Information\n  Provider: openai\n  Model: gpt-4\nPrompts\n  System Prompt:\n    one\n\n    two\n"
        );
    }

    #[test]
    fn json_output_uses_document_keys() {
        let d = doc("agent:\n  prompts:\n    system_prompt: |\n      hi\n");
        let json = serde_json::to_value(ConfigView::build("p", Some(&d), 0)).expect("json");
        assert_eq!(json["prompts"]["entries"][0]["kind"], "system_prompt");
        assert_eq!(json["model"]["provider"], UNKNOWN);
    }
}
