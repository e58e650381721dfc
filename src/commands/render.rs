//! `render` command.

use super::read_input;
use crate::cli::RenderArgs;
use quarto_marimo::engine::{
    ExecutionResult, OutputFormat, pandoc_html_to_markdown, substitute_outputs,
};
use quarto_marimo::error::{EngineError, Result};
use tracing::debug;

pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let result = ExecutionResult::from_json(&read_input(Some(args.result.as_path()))?)?;
    let markdown = read_input(args.document.as_deref())?;
    let format = OutputFormat::new(args.to);

    let rendered = if args.pandoc {
        substitute_outputs(&markdown, &result, &format, pandoc_html_to_markdown)
    } else {
        substitute_outputs(&markdown, &result, &format, |html: &str| html.to_string())
    };

    if let (Some(path), Some(header)) = (&args.header_out, &rendered.include_in_header) {
        std::fs::write(path, header).map_err(|e| {
            EngineError::User(format!("failed to write header to '{}': {}", path.display(), e))
        })?;
        debug!("wrote include-in-header content to {}", path.display());
    }

    print!("{}", rendered.markdown);
    Ok(())
}
