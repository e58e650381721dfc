//! `uv run` argument construction from a notebook dependency header.
//!
//! The header comes from the document's `pyproject` front matter key. It is
//! either an inline script metadata block (PEP 723, introduced by
//! `# /// script`) or a bare pyproject fragment such as:
//!
//! ```text
//! [project]
//! dependencies = ["marimo", "pandas"]
//! ```
//!
//! Both are reduced to a [`ScriptMetadata`] descriptor and rendered as the
//! arguments that follow `uv` on the command line. The caller appends the
//! script to run.

mod metadata;

#[cfg(test)]
mod tests;

pub use metadata::{SCRIPT_MARKER, ScriptMetadata, requirement_name};

use tracing::debug;

/// Package the extraction script needs in every environment.
const MARIMO: &str = "marimo";

/// Build the `uv` arguments for running a script with the header's dependencies.
///
/// Never fails: an unreadable header yields the arguments for a bare
/// environment with only marimo installed. The first element is always
/// `"run"`.
///
/// # Example
///
/// ```
/// use quarto_marimo::uv_command::extract_command;
///
/// let args = extract_command("");
/// assert_eq!(args, ["run", "--isolated", "--no-project", "--with", "marimo"]);
/// ```
pub fn extract_command(header: &str) -> Vec<String> {
    let metadata = ScriptMetadata::from_header(header);
    let args = run_args(&metadata);
    debug!(args = ?args, "built uv run arguments");
    args
}

/// Render a descriptor as `uv run` arguments.
pub fn run_args(metadata: &ScriptMetadata) -> Vec<String> {
    let mut args: Vec<String> = vec!["run".into(), "--isolated".into(), "--no-project".into()];

    if let Some(python) = &metadata.requires_python {
        args.push("--python".into());
        args.push(python.clone());
    }

    if !metadata.has_dependency(MARIMO) {
        args.push("--with".into());
        args.push(MARIMO.into());
    }
    for dependency in &metadata.dependencies {
        args.push("--with".into());
        args.push(dependency.clone());
    }

    if let Some(url) = &metadata.index_url {
        args.push("--index-url".into());
        args.push(url.clone());
    }
    for url in &metadata.extra_index_urls {
        args.push("--extra-index-url".into());
        args.push(url.clone());
    }

    args
}
