//! Marimo cell detection in Quarto markdown.
//!
//! Three fence spellings mark a marimo cell:
//!
//! ```text
//! ```{python.marimo}      dot-joined language
//! ```{python .marimo}     class syntax (preferred)
//! ```python {.marimo}     legacy, language outside the braces
//! ```
//!
//! [`split_cells`] partitions a document into marimo code cells and the
//! markdown between them, so executed outputs can be substituted in order.

mod fence;
mod split;


pub use fence::{FenceMatch, is_marimo_cell, match_marimo_fence};
pub use split::split_cells;

/// What a [`Cell`] holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    /// Prose, front matter and non-marimo code blocks.
    Markdown,
    /// A fenced code cell; `language` is `python` or `python.marimo`.
    Code { language: String },
}

/// A contiguous slice of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    /// Verbatim source, including fences and line endings.
    pub source: String,
}

impl Cell {
    /// Lines between the opening and closing fences of a code cell.
    ///
    /// Markdown cells return their whole source. A cell missing its closing
    /// fence returns everything after the opening line.
    pub fn code(&self) -> &str {
        if self.kind == CellKind::Markdown {
            return &self.source;
        }

        let Some(first_break) = self.source.find('\n') else {
            return "";
        };
        let inner = &self.source[first_break + 1..];

        let content_end = inner.trim_end_matches(['\n', '\r']);
        let last_start = content_end.rfind('\n').map_or(0, |i| i + 1);
        if !is_closing_line(&content_end[last_start..]) {
            return inner;
        }

        let code = &inner[..last_start];
        let code = code.strip_suffix('\n').unwrap_or(code);
        code.strip_suffix('\r').unwrap_or(code)
    }
}

fn is_closing_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c == '`')
}
