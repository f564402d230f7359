//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so `generate` and `inspect` agree on every naming flag.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Arg, ArgAction, value_parser};
use enumgen_compiler::TransformMode;

/// Extraction document (positional, `-` for stdin).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .help("Extraction document (JSON), or - for stdin")
}

/// Restrict to named enums (--type, repeatable).
pub fn type_arg() -> Arg {
    Arg::new("types")
        .short('t')
        .long("type")
        .value_name("NAME")
        .action(ArgAction::Append)
        .value_delimiter(',')
        .help("Enum type to process (default: all)")
}

/// Prefix stripped from constant names (--trim-prefix).
pub fn trim_prefix_arg() -> Arg {
    Arg::new("trim_prefix")
        .long("trim-prefix")
        .value_name("PREFIX")
        .default_value("")
        .help("Prefix removed from each constant name")
}

/// Prefix added to display names (--add-prefix).
pub fn add_prefix_arg() -> Arg {
    Arg::new("add_prefix")
        .long("add-prefix")
        .value_name("PREFIX")
        .default_value("")
        .help("Prefix added to each display name")
}

/// Display name transformation (--transform).
pub fn transform_arg() -> Arg {
    Arg::new("transform")
        .long("transform")
        .value_name("MODE")
        .default_value("none")
        .value_parser(TransformMode::from_str)
        .help("Name transformation (none, upper, lower, snake, snake-upper, kebab, kebab-upper, json-camel, pascal)")
}

/// Case-insensitive parsing (--ignore-case).
pub fn ignore_case_arg() -> Arg {
    Arg::new("ignore_case")
        .long("ignore-case")
        .action(ArgAction::SetTrue)
        .help("Parse names case-insensitively")
}

/// Decimal fallback in parsing (--allow-numeric).
pub fn allow_numeric_arg() -> Arg {
    Arg::new("allow_numeric")
        .long("allow-numeric")
        .action(ArgAction::SetTrue)
        .help("Accept decimal member values when parsing")
}

/// Sparse map threshold (--sparse-ratio).
pub fn sparse_ratio_arg() -> Arg {
    Arg::new("sparse_ratio")
        .long("sparse-ratio")
        .value_name("RATIO")
        .value_parser(value_parser!(f64))
        .help("Use a map when partitions exceed RATIO * members [default: 0.5]")
}

/// JSON marshal/unmarshal methods (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Generate MarshalJSON/UnmarshalJSON")
}

/// Text marshal/unmarshal methods (--text).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .long("text")
        .action(ArgAction::SetTrue)
        .help("Generate MarshalText/UnmarshalText")
}

/// YAML marshal/unmarshal methods (--yaml).
pub fn yaml_arg() -> Arg {
    Arg::new("yaml")
        .long("yaml")
        .action(ArgAction::SetTrue)
        .help("Generate MarshalYAML/UnmarshalYAML")
}

/// SQL Value/Scan methods (--sql).
pub fn sql_arg() -> Arg {
    Arg::new("sql")
        .long("sql")
        .action(ArgAction::SetTrue)
        .help("Generate Value/Scan for database/sql")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the Go file here instead of stdout")
}

/// Names to resolve against the layout (--parse, repeatable).
pub fn parse_arg() -> Arg {
    Arg::new("parse")
        .long("parse")
        .value_name("TEXT")
        .action(ArgAction::Append)
        .help("Resolve TEXT the way the generated parse function would")
}

/// Report format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Report format")
}
