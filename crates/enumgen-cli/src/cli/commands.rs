//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Flags that shape display names and parsing, shared by every command.
fn with_naming_args(cmd: Command) -> Command {
    cmd.arg(input_arg())
        .arg(type_arg())
        .arg(trim_prefix_arg())
        .arg(add_prefix_arg())
        .arg(transform_arg())
        .arg(ignore_case_arg())
        .arg(allow_numeric_arg())
        .arg(sparse_ratio_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("enumgen")
        .about("String tables and lookup methods for Go integer enums")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(inspect_command())
}

/// Generate a Go file for the extracted enums.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Generate Go lookup code for extracted enums")
        .override_usage(
            "\
  enumgen generate <INPUT> [--type NAME]... [-o FILE]
  enumgen generate - < extraction.json",
        )
        .after_help(
            r#"EXAMPLES:
  enumgen generate enums.json                           # all enums to stdout
  enumgen generate enums.json --type Day -o day_enum.go
  enumgen generate enums.json --transform snake --json  # snake_case names + JSON
  enumgen generate enums.json --trim-prefix Day --ignore-case"#,
        );

    with_naming_args(cmd)
        .arg(json_arg())
        .arg(text_arg())
        .arg(yaml_arg())
        .arg(sql_arg())
        .arg(output_arg())
}

/// Show the lookup layout chosen for each enum.
pub fn inspect_command() -> Command {
    let cmd = Command::new("inspect")
        .about("Show the lookup strategy, partitions and string tables")
        .after_help(
            r#"EXAMPLES:
  enumgen inspect enums.json
  enumgen inspect enums.json --type Day --parse monday --ignore-case
  enumgen inspect enums.json --format json"#,
        );

    with_naming_args(cmd).arg(parse_arg()).arg(format_arg())
}
