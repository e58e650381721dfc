//! Markdown rendering of executed cell outputs.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;

static HTML_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<table[\s>]").expect("table regex is valid"));

/// How an output value should be placed in a non-HTML document.
///
/// Unknown kinds from the extraction script read as `Html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Html,
    /// `value` is an image path.
    Figure,
    /// `value` is plain text.
    Para,
    Blockquote,
}

impl<'de> Deserialize<'de> for OutputKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kind = Option::<String>::deserialize(deserializer)?;
        Ok(match kind.as_deref() {
            Some("figure") => Self::Figure,
            Some("para") => Self::Para,
            Some("blockquote") => Self::Blockquote,
            Some("html") | None => Self::Html,
            Some(other) => {
                tracing::debug!(kind = other, "unknown output kind, rendering as html");
                Self::Html
            }
        })
    }
}

/// One executed cell as reported by the extraction script.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarimoOutput {
    #[serde(rename = "type")]
    pub kind: OutputKind,
    pub value: String,
    pub display_code: bool,
    #[serde(default)]
    pub reactive: bool,
    #[serde(default)]
    pub code: String,
}

/// Render one output as markdown.
///
/// For HTML targets the value goes into a raw HTML block. For PDF/LaTeX
/// (`mime_sensitive`) the kind decides: figures become images, paragraphs
/// and quotes become text, and HTML is handed to `html_to_markdown` unless it
/// contains a table, which pandoc would mangle.
pub fn render_output<F>(output: &MarimoOutput, mime_sensitive: bool, mut html_to_markdown: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut result = String::new();

    if output.display_code && !output.code.is_empty() {
        result.push_str("```python\n");
        result.push_str(&output.code);
        result.push_str("\n```\n\n");
    }

    if output.value.is_empty() {
        return result;
    }

    if !mime_sensitive {
        push_raw_html(&mut result, &output.value);
        return result;
    }

    match output.kind {
        OutputKind::Figure => {
            result.push_str(&format!("![Generated Figure]({})\n\n", output.value));
        }
        OutputKind::Para => {
            result.push_str(&output.value);
            result.push_str("\n\n");
        }
        OutputKind::Blockquote => {
            result.push_str("> ");
            result.push_str(&output.value);
            result.push_str("\n\n");
        }
        OutputKind::Html => {
            if HTML_TABLE.is_match(&output.value) {
                push_raw_html(&mut result, &output.value);
            } else {
                result.push_str(&html_to_markdown(&output.value));
                result.push_str("\n\n");
            }
        }
    }

    result
}

fn push_raw_html(result: &mut String, html: &str) {
    result.push_str("```{=html}\n");
    result.push_str(html);
    result.push_str("\n```\n\n");
}
