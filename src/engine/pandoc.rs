//! Pandoc runner for HTML to markdown conversion.

use crate::error::{EngineError, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Run pandoc with `input` on stdin and return its stdout.
///
/// # Returns
///
/// * `Ok(String)` - Standard output on exit code 0
/// * `Err(EngineError::Process)` - pandoc could not be started or failed
pub fn run_pandoc(args: &[&str], input: &str) -> Result<String> {
    debug!(args = ?args, "running pandoc");

    let mut child = Command::new("pandoc")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| EngineError::Process(format!("failed to execute pandoc: {}", e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input.as_bytes())
            .map_err(|e| EngineError::Process(format!("failed to write to pandoc: {}", e)))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| EngineError::Process(format!("failed to wait for pandoc: {}", e)))?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        return Err(EngineError::Process(format!(
            "pandoc exited with code {}: {}",
            output.status.code().unwrap_or(-1),
            stderr.trim()
        )));
    }
    if !stderr.trim().is_empty() {
        debug!("pandoc stderr: {}", stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Convert an HTML fragment to markdown, returning the HTML unchanged if
/// pandoc is unavailable or fails.
pub fn pandoc_html_to_markdown(html: &str) -> String {
    match run_pandoc(&["-f", "html", "-t", "markdown"], html) {
        Ok(markdown) => markdown,
        Err(e) => {
            warn!("pandoc conversion failed, keeping raw HTML: {}", e);
            html.to_string()
        }
    }
}
