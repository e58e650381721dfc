//! `config`, `app-config` and `cells` commands.

use super::{print_json, read_input};
use crate::cli::InputArgs;
use quarto_marimo::app_config::app_config_from_xml;
use quarto_marimo::cell_config::{CellConfig, extract_and_strip_config};
use quarto_marimo::cells::{CellKind, is_marimo_cell, split_cells};
use quarto_marimo::engine::DocumentOptions;
use quarto_marimo::error::Result;
use quarto_marimo::render::RenderOptions;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct ExtractedCell {
    config: CellConfig,
    body: String,
}

/// One marimo cell as listed by `cells`.
#[derive(Debug, Serialize)]
struct CellSummary {
    index: usize,
    language: String,
    config: CellConfig,
    options: RenderOptions,
    body: String,
}

pub fn cmd_config(args: InputArgs) -> Result<()> {
    let block = read_input(args.input.as_deref())?;
    let (config, body) = extract_and_strip_config(&block);
    print_json(&ExtractedCell { config, body })
}

pub fn cmd_app_config(args: InputArgs) -> Result<()> {
    let xml = read_input(args.input.as_deref())?;
    print_json(&app_config_from_xml(&xml)?)
}

pub fn cmd_cells(args: InputArgs) -> Result<()> {
    let markdown = read_input(args.input.as_deref())?;
    let summaries = summarize_cells(&markdown)?;
    info!("found {} marimo cells", summaries.len());
    print_json(&summaries)
}

fn summarize_cells(markdown: &str) -> Result<Vec<CellSummary>> {
    let document = DocumentOptions::from_document(markdown)?;

    let summaries = split_cells(markdown)
        .into_iter()
        .filter(is_marimo_cell)
        .enumerate()
        .map(|(index, cell)| {
            let (config, body) = extract_and_strip_config(cell.code());
            let language = match &cell.kind {
                CellKind::Code { language } => language.clone(),
                CellKind::Markdown => String::new(),
            };
            CellSummary {
                index,
                language,
                options: document.execute.with_overrides(&config),
                config,
                body,
            }
        })
        .collect();

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_cells_merges_document_and_cell_options() {
        let doc = "---\nexecute:\n  echo: true\n---\n\n```{python .marimo}\n#| include: false\n\nx = 1\n```\n\n```{python.marimo}\ny = 2\n```\n";
        let summaries = summarize_cells(doc).unwrap();

        assert_eq!(summaries.len(), 2);

        assert_eq!(summaries[0].language, "python");
        assert_eq!(summaries[0].config.get_bool("include"), Some(false));
        assert_eq!(summaries[0].body, "x = 1");
        assert!(!summaries[0].options.include);
        assert!(summaries[0].options.echo);

        assert_eq!(summaries[1].index, 1);
        assert_eq!(summaries[1].language, "python.marimo");
        assert!(summaries[1].config.is_empty());
        assert!(summaries[1].options.include);
    }

    #[test]
    fn extracted_cell_json_shape() {
        let (config, body) = extract_and_strip_config("#| echo: false\nprint('hello')");
        let json = serde_json::to_value(ExtractedCell { config, body }).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"config": {"echo": false}, "body": "print('hello')"})
        );
    }
}
