//! Tests for engine metadata, document options, planning and substitution.

use super::*;
use crate::render::{MarimoOutput, OutputKind, RenderOptions};
use std::path::Path;

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_claims_language() {
    assert_eq!(claims_language("python", Some("marimo")), Some(2));
    assert_eq!(claims_language("python.marimo", None), Some(1));
    assert_eq!(claims_language("python", None), None);
    assert_eq!(claims_language("python", Some("other")), None);
    assert_eq!(claims_language("r", Some("marimo")), None);
    assert_eq!(claims_language("julia", None), None);
}

#[test]
fn test_discovery_properties() {
    assert_eq!(NAME, "marimo");
    assert_eq!(DEFAULT_EXT, ".qmd");
    assert_eq!(valid_extensions(), [".qmd", ".md"]);
    assert!(!claims_file(Path::new("test.qmd"), ".qmd"));
    assert!(!claims_file(Path::new("test.py"), ".py"));
    assert!(!CAN_FREEZE);
    assert!(GENERATES_FIGURES);
}

#[test]
fn test_default_document_uses_marimo_fence() {
    assert!(default_yaml().contains(&"engine: marimo".to_string()));

    let content = default_content().join("\n");
    let cells = crate::cells::split_cells(&content);
    assert_eq!(cells.len(), 1);
    assert!(crate::cells::is_marimo_cell(&cells[0]));
}

// ============================================================================
// Document options
// ============================================================================

#[test]
fn test_front_matter_extraction() {
    let doc = "---\ntitle: X\nexternal-env: true\n---\nbody\n";
    assert_eq!(front_matter(doc), Some("title: X\nexternal-env: true\n"));

    assert_eq!(front_matter("no front matter"), None);
    assert_eq!(front_matter("---\nunclosed: true\n"), None);
    assert_eq!(front_matter("---\n---\n"), Some(""));
    assert_eq!(front_matter("---\r\na: 1\r\n---\r\n"), Some("a: 1\r\n"));
}

#[test]
fn test_document_options_from_front_matter() {
    let doc = r#"---
title: Report
engine: marimo
external-env: false
pyproject: |
  [project]
  dependencies = ["polars"]
execute:
  echo: true
---

Body.
"#;
    let options = DocumentOptions::from_document(doc).unwrap();

    assert!(!options.external_env);
    assert_eq!(
        options.pyproject.as_deref(),
        Some("[project]\ndependencies = [\"polars\"]\n")
    );
    assert_eq!(
        options.execute,
        RenderOptions {
            eval: true,
            echo: true,
            include: true
        }
    );
}

#[test]
fn test_document_without_front_matter_uses_defaults() {
    let options = DocumentOptions::from_document("# Title\n").unwrap();
    assert_eq!(options, DocumentOptions::default());
    assert_eq!(DocumentOptions::from_yaml("  \n").unwrap(), DocumentOptions::default());
}

#[test]
fn test_fenced_echo_in_front_matter_is_accepted() {
    let doc = "---\nexecute:\n  echo: fenced\n  eval: false\n---\n\nBody.\n";
    let options = DocumentOptions::from_document(doc).unwrap();

    assert_eq!(
        options.execute,
        RenderOptions {
            eval: false,
            echo: false,
            include: true
        }
    );
}

#[test]
fn test_malformed_front_matter_is_a_parse_error() {
    let err = DocumentOptions::from_document("---\nexternal-env: [\n---\n").unwrap_err();
    assert!(matches!(err, crate::error::EngineError::Parse(_)));
}

#[test]
fn test_output_format_sensitivity() {
    assert!(OutputFormat::new("pdf").is_mime_sensitive());
    assert!(OutputFormat::new("latex").is_mime_sensitive());
    assert!(!OutputFormat::new("html").is_mime_sensitive());
    assert!(!OutputFormat::new("docx").is_mime_sensitive());
    assert!(OutputFormat::default().is_html());
}

// ============================================================================
// Execution plan
// ============================================================================

#[test]
fn test_plan_with_external_env() {
    let options = DocumentOptions {
        external_env: true,
        ..Default::default()
    };
    let plan = ExecutionPlan::build(&options, Path::new("/ext/extract.py"), Path::new("doc.qmd"), true);

    assert_eq!(plan.program, "python");
    assert_eq!(plan.args, ["/ext/extract.py", "doc.qmd", "yes"]);
}

#[test]
fn test_plan_with_uv_and_header() {
    let options = DocumentOptions {
        pyproject: Some("[project]\ndependencies = [\"polars\"]".to_string()),
        ..Default::default()
    };
    let plan = ExecutionPlan::build(&options, Path::new("extract.py"), Path::new("doc.qmd"), false);

    assert_eq!(plan.program, "uv");
    assert_eq!(
        plan.args,
        [
            "run",
            "--isolated",
            "--no-project",
            "--with",
            "marimo",
            "--with",
            "polars",
            "extract.py",
            "doc.qmd",
            "no",
        ]
    );
}

#[test]
fn test_plan_display_quotes_arguments() {
    let plan = ExecutionPlan::build(
        &DocumentOptions::default(),
        Path::new("my scripts/extract.py"),
        Path::new("doc.qmd"),
        false,
    );

    assert_eq!(
        plan.display(),
        "uv run --isolated --no-project --with marimo 'my scripts/extract.py' doc.qmd no"
    );
}

// ============================================================================
// Substitution
// ============================================================================

const DOC: &str = "---
engine: marimo
---

Text before.

```{python .marimo}
x = 1
```

```{python}
print('not marimo')
```

```python {.marimo}
x
```
";

fn html_output(value: &str) -> MarimoOutput {
    MarimoOutput {
        kind: OutputKind::Html,
        value: value.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_substitutes_outputs_in_order() {
    let result = ExecutionResult {
        header: "<script src=\"marimo.js\"></script>".to_string(),
        outputs: vec![html_output("<p>one</p>"), html_output("<p>two</p>")],
        count: 2,
    };

    let rendered = substitute_outputs(DOC, &result, &OutputFormat::new("html"), |h| h.to_string());

    assert!(!rendered.markdown.contains("x = 1"));
    assert!(rendered.markdown.contains("```{=html}\n<p>one</p>\n```\n\n"));
    assert!(rendered.markdown.contains("```{python}\nprint('not marimo')\n```\n"));
    assert!(rendered.markdown.starts_with("---\nengine: marimo\n---\n\nText before.\n\n```{=html}"));
    assert!(rendered.markdown.ends_with("```{=html}\n<p>two</p>\n```\n\n"));
    assert_eq!(rendered.include_in_header, Some(result.header.clone()));
}

#[test]
fn test_missing_outputs_keep_cell_source() {
    let result = ExecutionResult {
        header: String::new(),
        outputs: vec![html_output("<p>one</p>")],
        count: 1,
    };

    let rendered = substitute_outputs(DOC, &result, &OutputFormat::new("html"), |h| h.to_string());

    assert!(rendered.markdown.contains("```python {.marimo}\nx\n```\n"));
    assert_eq!(rendered.include_in_header, None);
}

#[test]
fn test_pdf_target_converts_and_skips_header() {
    let result = ExecutionResult {
        header: "<script></script>".to_string(),
        outputs: vec![html_output("<p>one</p>"), html_output("")],
        count: 2,
    };

    let rendered = substitute_outputs(DOC, &result, &OutputFormat::new("pdf"), |h| {
        h.replace("<p>", "").replace("</p>", "")
    });

    assert!(rendered.markdown.contains("\n\none\n\n"));
    assert!(!rendered.markdown.contains("{=html}"));
    assert_eq!(rendered.include_in_header, None);
}

#[test]
fn test_execution_result_from_json() {
    let json = r#"{
        "header": "<link>",
        "outputs": [{"type": "figure", "value": "fig.png", "display_code": true, "reactive": false, "code": "plot()"}],
        "count": 1
    }"#;
    let result = ExecutionResult::from_json(json).unwrap();

    assert_eq!(result.count, 1);
    assert_eq!(result.outputs[0].kind, OutputKind::Figure);
    assert!(ExecutionResult::from_json("{\"outputs\": 3}").is_err());
}

#[test]
fn test_execution_result_accepts_unknown_output_kind() {
    let json = r#"{"header": "", "outputs": [{"type": "markdown", "value": "x", "display_code": false}], "count": 1}"#;
    let result = ExecutionResult::from_json(json).unwrap();
    assert_eq!(result.outputs[0].kind, OutputKind::Html);
}
