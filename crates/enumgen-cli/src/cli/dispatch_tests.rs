//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use enumgen_compiler::{GenerationConfig, TransformMode};

use super::*;
use crate::cli::commands::{generate_command, inspect_command};
use crate::commands::generate::GenerateArgs;
use crate::commands::inspect::{InspectArgs, ReportFormat};

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["enumgen"]);
    assert!(result.is_err());
}

#[test]
fn generate_defaults() {
    let m = generate_command()
        .try_get_matches_from(["generate", "enums.json"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.naming.input, Some(PathBuf::from("enums.json")));
    assert!(params.naming.types.is_empty());
    assert_eq!(params.naming.transform, TransformMode::None);
    assert_eq!(params.naming.sparse_ratio, None);
    assert!(!params.json && !params.text && !params.yaml && !params.sql);
    assert_eq!(params.output, None);
}

#[test]
fn generate_without_input_reads_stdin() {
    let m = generate_command().try_get_matches_from(["generate"]).unwrap();
    let params = GenerateParams::from_matches(&m);
    assert_eq!(params.naming.input, None);
}

#[test]
fn type_flag_repeats_and_splits() {
    let m = generate_command()
        .try_get_matches_from(["generate", "in.json", "-t", "Day", "--type", "Color,Size"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);
    assert_eq!(params.naming.types, vec!["Day", "Color", "Size"]);
}

#[test]
fn transform_accepts_cli_spellings() {
    for (spelling, mode) in [
        ("snake", TransformMode::Snake),
        ("snake_upper", TransformMode::SnakeUpper),
        ("kebab-upper", TransformMode::KebabUpper),
        ("json-camel", TransformMode::JsonCamel),
        ("Pascal", TransformMode::Pascal),
    ] {
        let m = generate_command()
            .try_get_matches_from(["generate", "--transform", spelling])
            .unwrap();
        assert_eq!(GenerateParams::from_matches(&m).naming.transform, mode);
    }
}

#[test]
fn transform_rejects_unknown_mode() {
    let result = generate_command().try_get_matches_from(["generate", "--transform", "shouty"]);
    assert!(result.is_err());
}

#[test]
fn sparse_ratio_must_be_a_number() {
    let result = generate_command().try_get_matches_from(["generate", "--sparse-ratio", "half"]);
    assert!(result.is_err());

    let m = generate_command()
        .try_get_matches_from(["generate", "--sparse-ratio", "0.25"])
        .unwrap();
    assert_eq!(GenerateParams::from_matches(&m).naming.sparse_ratio, Some(0.25));
}

#[test]
fn generate_params_into_args() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "in.json",
            "--type",
            "Day",
            "--trim-prefix",
            "Day",
            "--transform",
            "snake",
            "--ignore-case",
            "--json",
            "--sql",
            "-o",
            "day_enum.go",
        ])
        .unwrap();
    let args: GenerateArgs = GenerateParams::from_matches(&m).into();

    let expected = GenerationConfig::new()
        .trim_prefix("Day")
        .transform(TransformMode::Snake)
        .ignore_case(true)
        .json(true)
        .sql(true);
    assert_eq!(args.config, expected);
    assert_eq!(args.input, Some(PathBuf::from("in.json")));
    assert_eq!(args.types, vec!["Day"]);
    assert_eq!(args.output, Some(PathBuf::from("day_enum.go")));
    assert_eq!(
        args.invocation,
        "enumgen generate --type=Day --trim-prefix=Day --transform=snake --ignore-case --json --sql"
    );
}

#[test]
fn invocation_without_flags() {
    let m = generate_command()
        .try_get_matches_from(["generate", "in.json", "-o", "out.go"])
        .unwrap();
    assert_eq!(GenerateParams::from_matches(&m).invocation(), "enumgen generate");
}

#[test]
fn inspect_rejects_adapter_flags() {
    let result = inspect_command().try_get_matches_from(["inspect", "in.json", "--json"]);
    assert!(result.is_err());
}

#[test]
fn inspect_params_into_args() {
    let m = inspect_command()
        .try_get_matches_from([
            "inspect",
            "in.json",
            "--allow-numeric",
            "--parse",
            "monday",
            "--parse",
            "3",
            "--format",
            "json",
        ])
        .unwrap();
    let args: InspectArgs = InspectParams::from_matches(&m).into();

    assert_eq!(args.config, GenerationConfig::new().allow_numeric(true));
    assert_eq!(args.parse, vec!["monday", "3"]);
    assert_eq!(args.format, ReportFormat::Json);
}

#[test]
fn inspect_format_defaults_to_text() {
    let m = inspect_command()
        .try_get_matches_from(["inspect", "in.json"])
        .unwrap();
    assert_eq!(InspectParams::from_matches(&m).format, ReportFormat::Text);
}

#[test]
fn inspect_format_is_validated() {
    let result = inspect_command().try_get_matches_from(["inspect", "--format", "yaml"]);
    assert!(result.is_err());
}
