//! Leading `#|` option line scanner.

use super::value::{CellConfig, ConfigValue};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// `#| key: value`, tolerating indentation and spacing around the colon.
static CONFIG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*#\|\s*([\w-]+)\s*:\s*(.*?)\s*$").expect("config line regex is valid")
});

/// Split a cell into its leading option lines and the remaining body.
///
/// Scanning stops permanently at the first line that is not an option line.
/// A single blank line directly after an option line is consumed, and the
/// scan then stops at whatever follows it. The body is every remaining line,
/// joined back with `\n` and otherwise untouched.
///
/// # Returns
///
/// * `(config, body)` - The parsed options and the rest of the block
/// * `(empty, block)` - If the block has no leading option lines
///
/// # Example
///
/// ```
/// use quarto_marimo::cell_config::{extract_and_strip_config, ConfigValue};
///
/// let (config, body) = extract_and_strip_config("#| echo: false\nprint('hi')");
/// assert_eq!(config.get("echo"), Some(&ConfigValue::Bool(false)));
/// assert_eq!(body, "print('hi')");
/// ```
pub fn extract_and_strip_config(block: &str) -> (CellConfig, String) {
    let mut config = CellConfig::new();
    if block.is_empty() {
        return (config, String::new());
    }

    let lines: Vec<&str> = block.split('\n').collect();
    let mut body_start = lines.len();
    let mut after_option = false;
    let mut blank_consumed = false;

    for (index, line) in lines.iter().enumerate() {
        if !blank_consumed {
            if let Some(caps) = CONFIG_LINE.captures(line) {
                trace!(key = &caps[1], value = &caps[2], "cell option");
                config.insert(&caps[1], ConfigValue::parse(&caps[2]));
                after_option = true;
                continue;
            }
            if after_option && line.trim().is_empty() {
                blank_consumed = true;
                continue;
            }
        }
        body_start = index;
        break;
    }

    if config.is_empty() {
        return (config, block.to_string());
    }

    (config, lines[body_start..].join("\n"))
}
