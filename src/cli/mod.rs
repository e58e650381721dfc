//! CLI argument parsing for quarto-marimo.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Text processing for the marimo Quarto engine.
///
/// Every command reads its main input from a file argument, or from stdin
/// when the file is omitted or `-`, and writes results to stdout. Logs go
/// to stderr.
#[derive(Parser, Debug)]
#[command(name = "quarto-marimo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for quarto-marimo.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract `#|` options from a cell.
    ///
    /// Prints `{"config": {...}, "body": "..."}`.
    Config(InputArgs),

    /// Map the root XML element's attributes to marimo app config.
    AppConfig(InputArgs),

    /// Build `uv` arguments from a dependency header.
    ///
    /// Prints a JSON array whose first element is always "run".
    #[command(name = "command")]
    UvCommand(CommandArgs),

    /// List the marimo cells in a document with their effective options.
    Cells(InputArgs),

    /// Report the priority with which the engine claims a code block.
    ///
    /// Prints the priority, or `false` when the block is not claimed.
    Claims(ClaimsArgs),

    /// Print the command that executes a document's marimo cells.
    Plan(PlanArgs),

    /// Substitute executed outputs into a document.
    Render(RenderArgs),
}

/// A single input file argument.
#[derive(Parser, Debug)]
pub struct InputArgs {
    /// Input file. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,
}

/// Arguments for the `command` command.
#[derive(Parser, Debug)]
pub struct CommandArgs {
    /// Print the header wrapped as an inline script metadata block instead
    /// of the `uv` arguments.
    #[arg(long)]
    pub script_header: bool,

    /// Header file. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,
}

/// Arguments for the `claims` command.
#[derive(Parser, Debug)]
pub struct ClaimsArgs {
    /// Code block language (e.g. `python`, `python.marimo`).
    pub language: String,

    /// First class on the code block (e.g. `marimo`).
    pub first_class: Option<String>,
}

/// Arguments for the `plan` command.
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Path to the extraction script the command runs.
    #[arg(long)]
    pub script: PathBuf,

    /// Pandoc output format (html, pdf, latex, ...).
    #[arg(long, default_value = "html")]
    pub to: String,

    /// Print the plan as JSON instead of a shell command line.
    #[arg(long)]
    pub json: bool,

    /// The `.qmd` document to execute.
    pub document: PathBuf,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Pandoc output format (html, pdf, latex, ...).
    #[arg(long, default_value = "html")]
    pub to: String,

    /// Convert HTML outputs with pandoc for PDF/LaTeX targets.
    #[arg(long)]
    pub pandoc: bool,

    /// Write head content for HTML targets to this file.
    #[arg(long)]
    pub header_out: Option<PathBuf>,

    /// Execution result JSON from the extraction script.
    pub result: PathBuf,

    /// The document. Reads stdin when omitted or `-`.
    pub document: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
