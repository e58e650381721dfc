//! Cell configuration extraction.
//!
//! Marimo cells in a Quarto document may start with comment-prefixed option
//! lines in Quarto's `#|` syntax:
//!
//! ```text
//! #| echo: false
//! #| fig-cap: "Sales by region"
//!
//! import marimo as mo
//! ```
//!
//! [`extract_and_strip_config`] splits such a block into the parsed options
//! and the remaining cell body. Parsing is total: values that are neither
//! booleans nor numbers are kept as strings, and input without any option
//! lines is returned untouched.

mod parser;
mod value;


pub use parser::extract_and_strip_config;
pub use value::{CellConfig, ConfigValue};
