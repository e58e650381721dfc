//! The marimo execution engine as seen by Quarto.
//!
//! This module holds the engine's discovery metadata, reads the document
//! options that steer execution, plans the command that runs the extraction
//! script, and splices the script's outputs back into the document. Running
//! the planned command is left to the caller.

mod discovery;
mod document;
mod pandoc;
mod plan;
mod substitute;

#[cfg(test)]
mod tests;

pub use discovery::{
    CAN_FREEZE, DEFAULT_EXT, GENERATES_FIGURES, NAME, claims_file, claims_language,
    default_content, default_yaml, valid_extensions,
};
pub use document::{DocumentOptions, OutputFormat, front_matter};
pub use pandoc::{pandoc_html_to_markdown, run_pandoc};
pub use plan::ExecutionPlan;
pub use substitute::{ExecutionResult, Rendered, substitute_outputs};
