//! Command implementations for quarto-marimo.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the input and output helpers they share.

mod extract;
mod plan;
mod render;
mod uv;

use crate::cli::Command;
use quarto_marimo::error::{EngineError, Result};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Config(args) => extract::cmd_config(args),
        Command::AppConfig(args) => extract::cmd_app_config(args),
        Command::UvCommand(args) => uv::cmd_command(args),
        Command::Cells(args) => extract::cmd_cells(args),
        Command::Claims(args) => uv::cmd_claims(args),
        Command::Plan(args) => plan::cmd_plan(args),
        Command::Render(args) => render::cmd_render(args),
    }
}

/// Read a file, or stdin when `path` is `None` or `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path).map_err(|e| {
            EngineError::User(format!("failed to read '{}': {}", path.display(), e))
        }),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| EngineError::User(format!("failed to read stdin: {}", e)))?;
            Ok(input)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| EngineError::User(format!("failed to serialize output: {}", e)))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}
