//! Document-level options from YAML front matter.

use crate::error::{EngineError, Result};
use crate::render::RenderOptions;
use serde::Deserialize;

/// Front matter keys the engine reads. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DocumentOptions {
    /// Run the extraction script with the ambient `python` instead of a uv
    /// managed environment.
    pub external_env: bool,

    /// Dependency header (script metadata or pyproject fragment).
    pub pyproject: Option<String>,

    /// Document-wide `eval`/`echo`/`include` defaults.
    pub execute: RenderOptions,
}

impl DocumentOptions {
    /// Parse options from a YAML string. Blank input gives the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| EngineError::Parse(format!("failed to parse front matter YAML: {}", e)))
    }

    /// Parse options from a whole document's front matter, if it has any.
    pub fn from_document(markdown: &str) -> Result<Self> {
        match front_matter(markdown) {
            Some(yaml) => Self::from_yaml(yaml),
            None => Ok(Self::default()),
        }
    }
}

/// The YAML between a leading `---` line and the next `---` line.
///
/// Returns `None` if the document does not open with front matter or the
/// block is never closed.
pub fn front_matter(markdown: &str) -> Option<&str> {
    let rest = markdown.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }

    None
}

/// The pandoc output format a document is rendered to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFormat(String);

impl OutputFormat {
    pub fn new(to: impl Into<String>) -> Self {
        Self(to.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// PDF and LaTeX cannot carry raw HTML, so outputs are converted to markdown.
    pub fn is_mime_sensitive(&self) -> bool {
        matches!(self.0.as_str(), "pdf" | "latex")
    }

    pub fn is_html(&self) -> bool {
        self.0 == "html"
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new("html")
    }
}
