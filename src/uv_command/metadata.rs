//! Dependency descriptor parsing for script headers and pyproject fragments.

use serde::Deserialize;
use tracing::warn;

/// Opening line of an inline script metadata block.
pub const SCRIPT_MARKER: &str = "# /// script";

/// Closing line of an inline script metadata block.
const BLOCK_END: &str = "# ///";

/// The parts of a project descriptor that affect the execution environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptMetadata {
    /// PEP 508 requirement strings, in declaration order.
    pub dependencies: Vec<String>,
    /// Python version constraint, e.g. `>=3.11`.
    pub requires_python: Option<String>,
    /// `[tool.uv] index-url`.
    pub index_url: Option<String>,
    /// `[tool.uv] extra-index-url`.
    pub extra_index_urls: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct HeaderDocument {
    project: Option<ProjectTable>,
    dependencies: Vec<String>,
    requires_python: Option<String>,
    tool: ToolTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct ProjectTable {
    dependencies: Vec<String>,
    requires_python: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ToolTable {
    uv: UvTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct UvTable {
    index_url: Option<String>,
    extra_index_url: Vec<String>,
}

impl ScriptMetadata {
    /// Read a descriptor from a header string.
    ///
    /// Headers containing [`SCRIPT_MARKER`] are read as inline script
    /// metadata; anything else is read as a pyproject fragment, using its
    /// `[project]` table when present and top-level keys otherwise. Malformed
    /// input is logged and treated as an empty descriptor.
    pub fn from_header(header: &str) -> Self {
        if header.contains(SCRIPT_MARKER) {
            return match script_block(header) {
                Some(toml_source) => Self::from_toml(&toml_source),
                None => {
                    warn!("script metadata block is not terminated or not fully commented; ignoring it");
                    Self::default()
                }
            };
        }

        if header.trim().is_empty() {
            return Self::default();
        }

        Self::from_toml(header)
    }

    fn from_toml(source: &str) -> Self {
        let doc: HeaderDocument = match toml::from_str(source) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("failed to parse dependency header as TOML: {}", e);
                return Self::default();
            }
        };

        let (dependencies, requires_python) = match doc.project {
            Some(project) => (project.dependencies, project.requires_python),
            None => (doc.dependencies, doc.requires_python),
        };

        Self {
            dependencies,
            requires_python,
            index_url: doc.tool.uv.index_url,
            extra_index_urls: doc.tool.uv.extra_index_url,
        }
    }

    /// Whether a dependency with this distribution name is declared.
    pub fn has_dependency(&self, name: &str) -> bool {
        let wanted = requirement_name(name);
        self.dependencies
            .iter()
            .any(|dep| requirement_name(dep) == wanted)
    }

    /// Render the descriptor as an inline script metadata block.
    ///
    /// This is the self-describing form a pyproject fragment is wrapped into
    /// when a caller needs to stage it next to a script.
    pub fn to_script_header(&self) -> String {
        let mut lines = vec![SCRIPT_MARKER.to_string()];

        if let Some(python) = &self.requires_python {
            lines.push(format!("# requires-python = {}", toml_string(python)));
        }
        lines.push("# dependencies = [".to_string());
        for dependency in &self.dependencies {
            lines.push(format!("#     {},", toml_string(dependency)));
        }
        lines.push("# ]".to_string());

        if self.index_url.is_some() || !self.extra_index_urls.is_empty() {
            lines.push("#".to_string());
            lines.push("# [tool.uv]".to_string());
            if let Some(url) = &self.index_url {
                lines.push(format!("# index-url = {}", toml_string(url)));
            }
            if !self.extra_index_urls.is_empty() {
                let urls: Vec<String> = self.extra_index_urls.iter().map(|u| toml_string(u)).collect();
                lines.push(format!("# extra-index-url = [{}]", urls.join(", ")));
            }
        }

        lines.push(BLOCK_END.to_string());
        lines.join("\n")
    }
}

/// Normalized distribution name of a requirement string.
///
/// `Pandas[excel]>=2` and `pandas` both give `pandas`; `_` and `.` fold to `-`.
pub fn requirement_name(requirement: &str) -> String {
    requirement
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .map(|c| match c {
            '_' | '.' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Extract the TOML body of the `# /// script` block.
///
/// Every line up to the closing `# ///` must be a comment; the leading `# `
/// (or a lone `#`) is stripped.
fn script_block(header: &str) -> Option<String> {
    let mut lines = header.lines().skip_while(|line| line.trim_end() != SCRIPT_MARKER);
    lines.next()?;

    let mut body = Vec::new();
    for line in lines {
        let line = line.trim_end();
        if line == BLOCK_END {
            return Some(body.join("\n"));
        }
        if line == "#" {
            body.push("");
        } else if let Some(content) = line.strip_prefix("# ") {
            body.push(content);
        } else {
            return None;
        }
    }

    None
}

fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}
