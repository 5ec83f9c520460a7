use super::defaults::{DEFAULT_EDITOR_PROMPT, DEFAULT_WRITER_PROMPT, INPUT_PLACEHOLDER};
use serde::Deserialize;

/// Prompt templates used by the writer and editor endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplates {
    pub writer: String,
    pub editor: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            writer: DEFAULT_WRITER_PROMPT.to_string(),
            editor: DEFAULT_EDITOR_PROMPT.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_writer(&self, input: &str) -> String {
        render(&self.writer, input)
    }

    pub fn render_editor(&self, text: &str) -> String {
        render(&self.editor, text)
    }
}

/// Embeds `input` verbatim. Templates without the placeholder get the input appended.
fn render(template: &str, input: &str) -> String {
    if template.contains(INPUT_PLACEHOLDER) {
        template.replace(INPUT_PLACEHOLDER, input)
    } else {
        format!("{}\n\n{input}", template.trim_end())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawPrompts {
    pub(crate) writer: Option<String>,
    pub(crate) editor: Option<String>,
}

impl From<RawPrompts> for PromptTemplates {
    fn from(raw: RawPrompts) -> Self {
        let defaults = Self::default();
        Self {
            writer: raw.writer.unwrap_or(defaults.writer),
            editor: raw.editor.unwrap_or(defaults.editor),
        }
    }
}
