//! Support library for the marimo Quarto engine.
//!
//! Quarto hands marimo cells to this engine, which runs them through an
//! extraction script and splices the outputs back into the document. This
//! crate covers the text side of that process:
//!
//! - [`cell_config`]: `#| key: value` options at the top of a cell
//! - [`app_config`]: notebook app settings from XML attributes
//! - [`uv_command`]: `uv run` arguments from a dependency header
//! - [`render`]: per-cell render decisions and markdown output
//! - [`cells`]: marimo fence detection and document splitting
//! - [`engine`]: engine metadata, document options, command planning and
//!   output substitution

pub mod app_config;
pub mod cell_config;
pub mod cells;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod render;
pub mod uv_command;
