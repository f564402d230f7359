use std::io::Write as _;
use std::path::PathBuf;

use enumgen_compiler::GenerationConfig;
use indoc::indoc;

use super::CommandError;
use super::generate::{GenerateArgs, execute};

const EXTRACTION: &str = indoc! {r#"
    {
      "package": "week",
      "enums": [
        {"type": "Day", "members": [
          {"name": "Monday", "value": 0},
          {"name": "Tuesday", "value": 1},
          {"name": "Wednesday", "value": 2}
        ]},
        {"type": "Broken", "members": [{"name": "_", "value": 0}]}
      ]
    }
"#};

fn write_temp(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn args(input: PathBuf, types: &[&str], output: Option<PathBuf>) -> GenerateArgs {
    GenerateArgs {
        input: Some(input),
        types: types.iter().map(|t| t.to_string()).collect(),
        config: GenerationConfig::new().json(true),
        output,
        invocation: "enumgen generate --type=Day --json".to_string(),
    }
}

#[test]
fn generate_to_stdout() {
    let input = write_temp(EXTRACTION);

    let code = execute(&args(input.path().to_path_buf(), &["Day"], None))
        .unwrap()
        .unwrap();

    assert!(code.starts_with(indoc! {r#"
        // Code generated by "enumgen generate --type=Day --json"; DO NOT EDIT.

        package week
    "#}));
    assert!(code.contains("func (i Day) String() string {"));
    assert!(code.contains("func (i Day) MarshalJSON() ([]byte, error) {"));
    assert!(code.contains("\t\"encoding/json\"\n"));
    assert!(!code.contains("Broken"));
}

#[test]
fn generate_to_file() {
    let input = write_temp(EXTRACTION);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("day_enum.go");

    let day = args(input.path().to_path_buf(), &["Day"], Some(output.clone()));
    let printed = execute(&day).unwrap();

    assert_eq!(printed, None);
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("func DayString(s string) (Day, error) {"));
    assert!(written.ends_with("}\n"));
}

#[test]
fn failing_enum_leaves_no_output_file() {
    let input = write_temp(EXTRACTION);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("all_enum.go");

    let all = args(input.path().to_path_buf(), &[], Some(output.clone()));
    let err = execute(&all).unwrap_err();

    assert!(matches!(err, CommandError::Generate(_)));
    assert_eq!(err.to_string(), "enum Broken has no members");
    assert!(!output.exists());
}

#[test]
fn unknown_type_is_reported() {
    let input = write_temp(EXTRACTION);

    let err = execute(&args(input.path().to_path_buf(), &["Month"], None)).unwrap_err();
    assert_eq!(err.to_string(), "no enum named Month in the extraction");
}

#[test]
fn unwritable_output_is_reported() {
    let input = write_temp(EXTRACTION);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing").join("day_enum.go");

    let err = execute(&args(input.path().to_path_buf(), &["Day"], Some(output))).unwrap_err();
    assert!(matches!(err, CommandError::Write { .. }));
}
