//! Command planning for the extraction script.

use super::document::DocumentOptions;
use crate::uv_command::extract_command;
use serde::Serialize;
use std::path::Path;

/// A program and its arguments, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionPlan {
    pub program: String,
    pub args: Vec<String>,
}

impl ExecutionPlan {
    /// Plan the command that executes a document's marimo cells.
    ///
    /// With `external-env` the script runs under the ambient `python`;
    /// otherwise under `uv run` with the document's dependency header. The
    /// input path and a `yes`/`no` MIME sensitivity flag follow the script.
    pub fn build(
        options: &DocumentOptions,
        extract_script: &Path,
        input: &Path,
        mime_sensitive: bool,
    ) -> Self {
        let script = extract_script.to_string_lossy().into_owned();

        let (program, mut args) = if options.external_env {
            ("python".to_string(), vec![script])
        } else {
            let header = options.pyproject.as_deref().unwrap_or("");
            let mut args = extract_command(header);
            args.push(script);
            ("uv".to_string(), args)
        };

        args.push(input.to_string_lossy().into_owned());
        args.push(if mime_sensitive { "yes" } else { "no" }.to_string());

        Self { program, args }
    }

    /// Shell-quoted command line, for logs and dry runs.
    pub fn display(&self) -> String {
        shell_words::join(std::iter::once(&self.program).chain(&self.args))
    }
}
