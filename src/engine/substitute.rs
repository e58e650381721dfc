//! Splicing executed outputs back into the document.

use super::document::OutputFormat;
use crate::cells::{is_marimo_cell, split_cells};
use crate::error::{EngineError, Result};
use crate::render::{MarimoOutput, render_output};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What the extraction script reports after running a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// HTML to place in the page head (marimo's runtime assets).
    #[serde(default)]
    pub header: String,
    /// One entry per marimo cell, in document order.
    pub outputs: Vec<MarimoOutput>,
    /// Number of marimo cells the script saw.
    pub count: usize,
}

impl ExecutionResult {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| EngineError::Parse(format!("failed to parse execution result: {}", e)))
    }
}

/// A document with outputs substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub markdown: String,
    /// Content for the HTML head, when the target is HTML and the script
    /// produced any.
    pub include_in_header: Option<String>,
}

/// Replace each marimo cell with its rendered output.
///
/// The n-th marimo cell receives the n-th output. Cells beyond the last
/// output are kept verbatim. Mismatched counts are logged, not fatal.
pub fn substitute_outputs<F>(
    markdown: &str,
    result: &ExecutionResult,
    format: &OutputFormat,
    mut html_to_markdown: F,
) -> Rendered
where
    F: FnMut(&str) -> String,
{
    let mime_sensitive = format.is_mime_sensitive();
    let mut rendered = String::with_capacity(markdown.len());
    let mut marimo_index = 0;

    for cell in split_cells(markdown) {
        if !is_marimo_cell(&cell) {
            rendered.push_str(&cell.source);
            continue;
        }

        match result.outputs.get(marimo_index) {
            Some(output) => {
                rendered.push_str(&render_output(output, mime_sensitive, &mut html_to_markdown));
            }
            None => {
                warn!("marimo cell {} has no corresponding output", marimo_index);
                rendered.push_str(&cell.source);
            }
        }
        marimo_index += 1;
    }

    if marimo_index != result.count {
        warn!(
            "expected {} marimo cells, found {}",
            result.count, marimo_index
        );
    }
    debug!(cells = marimo_index, format = format.as_str(), "substituted marimo outputs");

    let include_in_header = (format.is_html() && !result.header.is_empty())
        .then(|| result.header.clone());

    Rendered {
        markdown: rendered,
        include_in_header,
    }
}
