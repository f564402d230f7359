use std::io::Write as _;

use enumgen_compiler::GenerationConfig;
use indoc::indoc;

use super::inspect::{InspectArgs, ReportFormat, execute};

const EXTRACTION: &str = indoc! {r#"
    {
      "package": "palette",
      "enums": [
        {"type": "Day", "members": [
          {"name": "Monday", "value": 0},
          {"name": "Tuesday", "value": 1},
          {"name": "Wednesday", "value": 2},
          {"name": "Thursday", "value": 3},
          {"name": "Friday", "value": 4},
          {"name": "Saturday", "value": 5},
          {"name": "Sunday", "value": 6}
        ]},
        {"type": "Color", "kind": "uint8", "members": [
          {"name": "Red", "value": 1},
          {"name": "Crimson", "value": 1},
          {"name": "Green", "value": 2},
          {"name": "Blue", "value": 3},
          {"name": "Black", "value": 10},
          {"name": "White", "value": 11}
        ]},
        {"type": "Flags", "members": [
          {"name": "A", "value": 1},
          {"name": "B", "value": 4},
          {"name": "C", "value": 16}
        ]}
      ]
    }
"#};

fn write_temp(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn inspect(
    input: &tempfile::NamedTempFile,
    config: GenerationConfig,
    parse: &[&str],
    format: ReportFormat,
) -> String {
    let args = InspectArgs {
        input: Some(input.path().to_path_buf()),
        types: Vec::new(),
        config,
        parse: parse.iter().map(|p| p.to_string()).collect(),
        format,
    };
    execute(&args).unwrap()
}

#[test]
fn text_report_covers_every_strategy() {
    let input = write_temp(EXTRACTION);

    let report = inspect(&input, GenerationConfig::new(), &[], ReportFormat::Text);

    insta::assert_snapshot!(report, @r#"
    Day (int): single-range, 7 members
      range 0..=6 uint8
        names "MondayTuesdayWednesdayThursdayFridaySaturdaySunday"
        index [0, 6, 13, 22, 30, 36, 44, 50]

    Color (uint8): segmented-ranges, 5 members
      range 1..=3 uint8
        names "RedGreenBlue"
        index [0, 3, 8, 12]
      range 10..=11 uint8
        names "BlackWhite"
        index [0, 5, 10]
      alias Crimson = 1 (kept Red)

    Flags (int): sparse-map, 3 members
      map uint8
        names "ABC"
        index [0, 1, 2, 3]
    "#);
}

#[test]
fn text_report_resolves_parse_inputs() {
    let input = write_temp(EXTRACTION);
    let config = GenerationConfig::new().ignore_case(true).allow_numeric(true);

    let report = inspect(&input, config, &["red", "4"], ReportFormat::Text);

    let parse_lines: Vec<&str> = report
        .lines()
        .filter(|line| line.starts_with("  parse"))
        .collect();
    assert_eq!(
        parse_lines,
        vec![
            r#"  parse "red": red does not belong to Day values"#,
            r#"  parse "4" = 4 (Friday)"#,
            r#"  parse "red" = 1 (Red)"#,
            r#"  parse "4": 4 does not belong to Color values"#,
            r#"  parse "red": red does not belong to Flags values"#,
            r#"  parse "4" = 4 (B)"#,
        ]
    );
}

#[test]
fn single_value_range_prints_one_bound() {
    let input = write_temp(indoc! {r#"
        {"package": "p", "enums": [{"type": "Only", "members": [{"name": "One", "value": 7}]}]}
    "#});

    let report = inspect(&input, GenerationConfig::new(), &[], ReportFormat::Text);

    insta::assert_snapshot!(report, @r#"
    Only (int): single-range, 1 member
      range 7 uint8
        names "One"
        index [0, 3]
    "#);
}

#[test]
fn json_report() {
    let input = write_temp(EXTRACTION);

    let report = inspect(&input, GenerationConfig::new(), &["Blue"], ReportFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(json.as_array().map(Vec::len), Some(3));
    assert_eq!(json[0]["layout"]["type_name"], "Day");
    assert_eq!(json[0]["layout"]["representation"]["strategy"], "single_range");
    assert_eq!(json[1]["layout"]["representation"]["strategy"], "segmented_ranges");
    assert_eq!(json[2]["layout"]["representation"]["strategy"], "sparse_map");
    assert_eq!(json[1]["parse"][0]["value"], 3);
    assert_eq!(json[1]["parse"][0]["name"], "Blue");
    assert_eq!(
        json[0]["parse"][0]["error"],
        "Blue does not belong to Day values"
    );
}

#[test]
fn one_invalid_enum_fails_the_whole_report() {
    let input = write_temp(EXTRACTION);
    let args = InspectArgs {
        input: Some(input.path().to_path_buf()),
        types: Vec::new(),
        config: GenerationConfig::new().transform(enumgen_compiler::TransformMode::Upper),
        parse: Vec::new(),
        format: ReportFormat::Text,
    };

    assert!(execute(&args).is_ok());

    let args = InspectArgs {
        config: GenerationConfig::new().trim_prefix("Red"),
        ..args
    };
    let err = execute(&args).unwrap_err();
    assert_eq!(err.to_string(), "Color: constant Red has an empty display name");
}
