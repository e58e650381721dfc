//! Error types for quarto-marimo.
//!
//! The extraction and mapping functions are total and never return these;
//! errors only come from the outer surface (reading inputs, parsing whole
//! documents, running pandoc).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for quarto-marimo operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Bad arguments or unreadable input.
    #[error("{0}")]
    User(String),

    /// An input document (XML, YAML front matter, result JSON) was malformed.
    #[error("Parse failed: {0}")]
    Parse(String),

    /// An external process could not be run or exited unsuccessfully.
    #[error("Process execution failed: {0}")]
    Process(String),
}

impl EngineError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            EngineError::User(_) => exit_codes::USER_ERROR,
            EngineError::Parse(_) => exit_codes::PARSE_FAILURE,
            EngineError::Process(_) => exit_codes::PROCESS_FAILURE,
        }
    }
}

/// Result type alias for quarto-marimo operations.
pub type Result<T> = std::result::Result<T, EngineError>;
