//! Decision table for rendering a previously executed cell.

use super::markdown::OutputKind;
use super::options::RenderOptions;
use crate::cell_config::CellConfig;
use serde::Serialize;
use tracing::trace;

/// A cell that has already been executed by the notebook runtime.
pub trait CellStub {
    /// Source code of the cell.
    fn code(&self) -> &str;

    /// Raw output of the cell, if it produced any.
    fn output(&self) -> Option<&str> {
        None
    }

    /// Render the cell to HTML, optionally including its code.
    fn render(&self, display_code: bool) -> String;
}

/// The render decision for one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MimeRender {
    #[serde(rename = "type")]
    pub kind: OutputKind,
    pub value: String,
    pub display_code: bool,
}

impl MimeRender {
    /// Empty HTML: the cell contributes nothing to the document.
    pub fn empty() -> Self {
        Self {
            kind: OutputKind::Html,
            value: String::new(),
            display_code: false,
        }
    }
}

/// Decide how an executed cell is rendered.
///
/// Cell overrides win over `global`. Returns [`MimeRender::empty`] when the
/// cell is excluded, there is no stub, or it neither evaluates nor echoes;
/// otherwise calls `stub.render(echo)`.
pub fn get_mime_render(
    global: &RenderOptions,
    stub: Option<&dyn CellStub>,
    overrides: &CellConfig,
) -> MimeRender {
    let options = global.with_overrides(overrides);

    if !options.include {
        trace!("cell excluded by include: false");
        return MimeRender::empty();
    }

    let Some(stub) = stub else {
        trace!("no executed cell to render");
        return MimeRender::empty();
    };

    if !options.eval && !options.echo {
        return MimeRender::empty();
    }

    MimeRender {
        kind: OutputKind::Html,
        value: stub.render(options.echo),
        display_code: options.echo,
    }
}
