//! Tests for uv command construction.

use super::*;

fn with_pairs(args: &[String]) -> Vec<&str> {
    args.windows(2)
        .filter(|pair| pair[0] == "--with")
        .map(|pair| pair[1].as_str())
        .collect()
}

#[test]
fn test_script_header() {
    let header = "# /// script\n# dependencies = [\"marimo\"]\n# ///";
    let args = extract_command(header);

    assert_eq!(args[0], "run");
    assert_eq!(args, ["run", "--isolated", "--no-project", "--with", "marimo"]);
}

#[test]
fn test_plain_header_is_wrapped() {
    let header = "[project]\ndependencies = [\"marimo\"]";
    let args = extract_command(header);

    assert_eq!(args[0], "run");
    assert_eq!(with_pairs(&args), vec!["marimo"]);
}

#[test]
fn test_empty_header() {
    let args = extract_command("");
    assert_eq!(args[0], "run");
    assert_eq!(with_pairs(&args), vec!["marimo"]);
}

#[test]
fn test_script_header_with_python_and_dependencies() {
    let header = r#"# /// script
# requires-python = ">=3.11"
# dependencies = [
#     "marimo>=0.14",
#     "polars",
# ]
#
# [tool.uv]
# index-url = "https://pypi.example.com/simple"
# extra-index-url = ["https://extra.example.com/simple"]
# ///
"#;
    let args = extract_command(header);

    assert_eq!(
        args,
        [
            "run",
            "--isolated",
            "--no-project",
            "--python",
            ">=3.11",
            "--with",
            "marimo>=0.14",
            "--with",
            "polars",
            "--index-url",
            "https://pypi.example.com/simple",
            "--extra-index-url",
            "https://extra.example.com/simple",
        ]
    );
}

#[test]
fn test_marimo_added_when_not_declared() {
    let args = extract_command("[project]\ndependencies = [\"numpy\", \"Pandas[excel]>=2\"]");
    assert_eq!(with_pairs(&args), vec!["marimo", "numpy", "Pandas[excel]>=2"]);
}

#[test]
fn test_top_level_fragment_without_project_table() {
    let args = extract_command("dependencies = [\"altair\"]\nrequires-python = \">=3.10\"");

    assert_eq!(&args[3..5], ["--python", ">=3.10"]);
    assert_eq!(with_pairs(&args), vec!["marimo", "altair"]);
}

#[test]
fn test_invalid_toml_falls_back_to_bare_environment() {
    let args = extract_command("[project\ndependencies = ");
    assert_eq!(args, ["run", "--isolated", "--no-project", "--with", "marimo"]);
}

#[test]
fn test_unterminated_script_block_is_ignored() {
    let args = extract_command("# /// script\n# dependencies = [\"polars\"]\n");
    assert_eq!(with_pairs(&args), vec!["marimo"]);
}

#[test]
fn test_script_block_inside_larger_header() {
    let header = "import marimo\n# /// script\n# dependencies = [\"scipy\"]\n# ///\nprint(1)";
    let args = extract_command(header);
    assert_eq!(with_pairs(&args), vec!["marimo", "scipy"]);
}

#[test]
fn test_requirement_name_normalization() {
    assert_eq!(requirement_name("Pandas[excel]>=2"), "pandas");
    assert_eq!(requirement_name("  typing_extensions ; python_version<'3.11'"), "typing-extensions");
    assert_eq!(requirement_name("zope.interface==6"), "zope-interface");
    assert_eq!(requirement_name("marimo @ https://x/marimo.whl"), "marimo");
}

#[test]
fn test_has_dependency_ignores_specifiers_and_case() {
    let metadata = ScriptMetadata {
        dependencies: vec!["Marimo[recommended]==0.14.0".to_string()],
        ..Default::default()
    };
    assert!(metadata.has_dependency("marimo"));
    assert!(!metadata.has_dependency("polars"));
}

#[test]
fn test_wrapped_fragment_round_trips_through_script_header() {
    let fragment = r#"[project]
requires-python = ">=3.12"
dependencies = ["marimo", "duckdb>=1.0"]

[tool.uv]
index-url = "https://mirror.example/simple"
"#;
    let metadata = ScriptMetadata::from_header(fragment);
    let header = metadata.to_script_header();

    assert!(header.starts_with(SCRIPT_MARKER));
    assert!(header.ends_with("# ///"));
    assert_eq!(ScriptMetadata::from_header(&header), metadata);
    assert_eq!(extract_command(&header), extract_command(fragment));
}

#[test]
fn test_empty_descriptor_renders_valid_block() {
    let header = ScriptMetadata::default().to_script_header();
    assert_eq!(header, "# /// script\n# dependencies = [\n# ]\n# ///");
    assert_eq!(ScriptMetadata::from_header(&header), ScriptMetadata::default());
}
