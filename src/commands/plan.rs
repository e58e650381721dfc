//! `plan` command.

use super::{print_json, read_input};
use crate::cli::PlanArgs;
use quarto_marimo::engine::{DocumentOptions, ExecutionPlan, OutputFormat};
use quarto_marimo::error::Result;
use tracing::info;

pub fn cmd_plan(args: PlanArgs) -> Result<()> {
    let markdown = read_input(Some(args.document.as_path()))?;
    let options = DocumentOptions::from_document(&markdown)?;
    let format = OutputFormat::new(args.to);

    let plan = ExecutionPlan::build(
        &options,
        &args.script,
        &args.document,
        format.is_mime_sensitive(),
    );
    info!("Running: {}", plan.display());

    if args.json {
        print_json(&plan)
    } else {
        println!("{}", plan.display());
        Ok(())
    }
}
