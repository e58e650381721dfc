//! `command` and `claims` commands.

use super::{print_json, read_input};
use crate::cli::{ClaimsArgs, CommandArgs};
use quarto_marimo::engine::claims_language;
use quarto_marimo::error::Result;
use quarto_marimo::uv_command::{ScriptMetadata, extract_command};

pub fn cmd_command(args: CommandArgs) -> Result<()> {
    let header = read_input(args.input.as_deref())?;
    if args.script_header {
        println!("{}", ScriptMetadata::from_header(&header).to_script_header());
        return Ok(());
    }
    print_json(&extract_command(&header))
}

pub fn cmd_claims(args: ClaimsArgs) -> Result<()> {
    println!(
        "{}",
        claim_label(claims_language(&args.language, args.first_class.as_deref()))
    );
    Ok(())
}

fn claim_label(priority: Option<u8>) -> String {
    priority.map_or_else(|| "false".to_string(), |p| p.to_string())
}
