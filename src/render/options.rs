//! Document-wide execution options.

use crate::cell_config::CellConfig;
use serde::{Deserialize, Deserializer, Serialize};

/// Options that control whether cells run and what they show.
///
/// Missing keys take their defaults when deserialized, so a partial
/// `execute:` map in front matter is valid. Non-boolean values such as
/// `echo: fenced` also keep the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Run the cell and show its output.
    #[serde(default = "default_true", deserialize_with = "bool_or_true")]
    pub eval: bool,

    /// Show the cell's source code.
    #[serde(default, deserialize_with = "bool_or_false")]
    pub echo: bool,

    /// Include the cell in the document at all.
    #[serde(default = "default_true", deserialize_with = "bool_or_true")]
    pub include: bool,
}

fn default_true() -> bool {
    true
}

fn bool_or_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(lenient_bool(deserializer)?.unwrap_or(true))
}

fn bool_or_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(lenient_bool(deserializer)?.unwrap_or(false))
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let value = serde_yaml::Value::deserialize(deserializer)?;
    if value.as_bool().is_none() {
        tracing::debug!(?value, "ignoring non-boolean execute option");
    }
    Ok(value.as_bool())
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            eval: default_true(),
            echo: false,
            include: default_true(),
        }
    }
}

impl RenderOptions {
    /// Apply per-cell overrides. Keys the cell does not set as booleans keep
    /// the document value.
    pub fn with_overrides(&self, overrides: &CellConfig) -> Self {
        Self {
            eval: overrides.get_bool("eval").unwrap_or(self.eval),
            echo: overrides.get_bool("echo").unwrap_or(self.echo),
            include: overrides.get_bool("include").unwrap_or(self.include),
        }
    }
}
