//! Fence line matching.

use super::{Cell, CellKind};
use regex::Regex;
use std::sync::LazyLock;

/// Backticks in group 1, language in group 2. The `.marimo` requirement is
/// checked separately since the regex crate has no lookahead.
static MARIMO_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(`{3,})\s*\{?(python(?:\.marimo)?)[^}]*\}\s*$")
        .expect("marimo fence regex is valid")
});

/// A matched opening fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceMatch<'a> {
    /// The run of backticks (three or more).
    pub backticks: &'a str,
    /// `python` or `python.marimo`.
    pub language: &'a str,
}

/// Match a line against the marimo opening fence syntaxes.
///
/// Some invalid spellings (e.g. ```` ```python.marimo} ````) are accepted
/// here and left for Quarto to reject.
pub fn match_marimo_fence(line: &str) -> Option<FenceMatch<'_>> {
    let caps = MARIMO_FENCE.captures(line)?;
    let backticks = caps.get(1)?;
    let language = caps.get(2)?;

    if !line[backticks.end()..].contains(".marimo") {
        return None;
    }

    Some(FenceMatch {
        backticks: backticks.as_str(),
        language: language.as_str(),
    })
}

/// Whether a cell is a marimo code block.
pub fn is_marimo_cell(cell: &Cell) -> bool {
    match &cell.kind {
        CellKind::Code { language } if language == "python.marimo" => true,
        CellKind::Code { language } if language == "python" => cell
            .source
            .split('\n')
            .next()
            .is_some_and(|first| first.contains(".marimo")),
        _ => false,
    }
}
