//! Static engine metadata and code block claiming.

use std::path::Path;

pub const NAME: &str = "marimo";

pub const DEFAULT_EXT: &str = ".qmd";

/// Outputs depend on a live Python environment, so results are never frozen.
pub const CAN_FREEZE: bool = false;

pub const GENERATES_FIGURES: bool = true;

/// File extensions a marimo document may use.
pub fn valid_extensions() -> &'static [&'static str] {
    &[".qmd", ".md"]
}

/// Front matter for a newly created document.
pub fn default_yaml() -> Vec<String> {
    vec!["format: html".to_string(), format!("engine: {}", NAME)]
}

/// Body for a newly created document.
pub fn default_content() -> Vec<String> {
    [
        "```{python .marimo}",
        "import marimo as mo",
        "slider = mo.ui.slider(1, 10, 1)",
        "slider",
        "```",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

/// Files are only handled when the document names the engine explicitly.
pub fn claims_file(_file: &Path, _ext: &str) -> bool {
    false
}

/// Priority with which the engine claims a code block, if at all.
///
/// `{python .marimo}` is claimed at 2 so it wins over the Jupyter fallback
/// for python; `{python.marimo}` has no competition and is claimed at 1.
pub fn claims_language(language: &str, first_class: Option<&str>) -> Option<u8> {
    match (language, first_class) {
        ("python", Some("marimo")) => Some(2),
        ("python.marimo", _) => Some(1),
        _ => None,
    }
}
