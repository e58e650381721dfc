//! Document partitioning into marimo cells and markdown.

use super::fence::match_marimo_fence;
use super::{Cell, CellKind};
use tracing::warn;

enum State {
    Markdown,
    /// Inside a non-marimo fence; marimo-looking lines are content.
    PlainFence(usize),
    Marimo { fence: usize, language: String },
}

/// Split a document into cells.
///
/// Concatenating the `source` of every returned cell reproduces `markdown`
/// exactly. Empty markdown runs are not emitted.
pub fn split_cells(markdown: &str) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut state = State::Markdown;

    for line in markdown.split_inclusive('\n') {
        let bare = line.trim_end_matches(['\n', '\r']);

        state = match state {
            State::Markdown => {
                if let Some(fence) = match_marimo_fence(bare) {
                    flush(&mut cells, &mut current, CellKind::Markdown);
                    current.push_str(line);
                    State::Marimo {
                        fence: fence.backticks.len(),
                        language: fence.language.to_string(),
                    }
                } else {
                    current.push_str(line);
                    match opening_backticks(bare) {
                        Some(n) => State::PlainFence(n),
                        None => State::Markdown,
                    }
                }
            }
            State::PlainFence(n) => {
                current.push_str(line);
                if closes_fence(bare, n) {
                    State::Markdown
                } else {
                    State::PlainFence(n)
                }
            }
            State::Marimo { fence, language } => {
                current.push_str(line);
                if closes_fence(bare, fence) {
                    flush(&mut cells, &mut current, CellKind::Code { language });
                    State::Markdown
                } else {
                    State::Marimo { fence, language }
                }
            }
        };
    }

    match state {
        State::Marimo { language, .. } => {
            warn!("marimo cell is missing its closing fence");
            flush(&mut cells, &mut current, CellKind::Code { language });
        }
        State::Markdown | State::PlainFence(_) => {
            flush(&mut cells, &mut current, CellKind::Markdown);
        }
    }

    cells
}

fn flush(cells: &mut Vec<Cell>, current: &mut String, kind: CellKind) {
    if current.is_empty() {
        return;
    }
    cells.push(Cell {
        kind,
        source: std::mem::take(current),
    });
}

/// Backtick count of a plain opening fence. Info strings may not contain
/// backticks, so ```` ```x``` ```` is inline code, not a fence.
fn opening_backticks(line: &str) -> Option<usize> {
    let trimmed = line.trim_start();
    let n = trimmed.chars().take_while(|&c| c == '`').count();
    (n >= 3 && !trimmed[n..].contains('`')).then_some(n)
}

fn closes_fence(line: &str, fence: usize) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= fence && trimmed.chars().all(|c| c == '`')
}
