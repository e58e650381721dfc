//! Exit code constants for the quarto-marimo CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input)
//! - 2: Parse failure (malformed XML, YAML or JSON input)
//! - 3: Subprocess failure (pandoc could not be run)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an input file that could not be read.
pub const USER_ERROR: i32 = 1;

/// Parse failure: an input document was not well-formed.
pub const PARSE_FAILURE: i32 = 2;

/// Subprocess failure: an external tool could not be started or failed.
pub const PROCESS_FAILURE: i32 = 3;
