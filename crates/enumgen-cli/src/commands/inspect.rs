//! Layout report: strategy, partitions, string tables and trial lookups.

use std::fmt::Write as _;
use std::path::PathBuf;

use enumgen_compiler::emit::Segment;
use enumgen_compiler::{EnumLayout, GenerationConfig, Representation, Resolver, StringTable};
use enumgen_core::Value;

use super::input::{load_extraction, select_enums};
use super::{CommandError, exit_with};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub struct InspectArgs {
    pub input: Option<PathBuf>,
    pub types: Vec<String>,
    pub config: GenerationConfig,
    pub parse: Vec<String>,
    pub format: ReportFormat,
}

pub fn run(args: InspectArgs) {
    match execute(&args) {
        Ok(report) => print!("{}", report),
        Err(err) => exit_with(err),
    }
}

pub(crate) fn execute(args: &InspectArgs) -> Result<String, CommandError> {
    let extraction = load_extraction(args.input.as_deref())?;
    let enums = select_enums(&extraction, &args.types)?;
    let layouts = enums
        .iter()
        .map(|e| EnumLayout::build(e, &args.config))
        .collect::<Result<Vec<_>, _>>()?;

    match args.format {
        ReportFormat::Text => Ok(render_text(&layouts, &args.config, &args.parse)),
        ReportFormat::Json => render_json(&layouts, &args.config, &args.parse),
    }
}

/// Outcome of resolving one `--parse` input.
#[derive(Debug, serde::Serialize)]
struct ParseReport {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct EnumReport<'a> {
    layout: &'a EnumLayout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    parse: Vec<ParseReport>,
}

fn parse_reports(resolver: &Resolver<'_>, inputs: &[String]) -> Vec<ParseReport> {
    inputs
        .iter()
        .map(|text| match resolver.parse(text) {
            Ok(value) => ParseReport {
                text: text.clone(),
                value: Some(value),
                name: Some(resolver.render(value)),
                error: None,
            },
            Err(err) => ParseReport {
                text: text.clone(),
                value: None,
                name: None,
                error: Some(err.to_string()),
            },
        })
        .collect()
}

pub(crate) fn render_text(
    layouts: &[EnumLayout],
    config: &GenerationConfig,
    parse: &[String],
) -> String {
    let mut out = String::new();
    for (idx, layout) in layouts.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        render_layout(&mut out, layout);

        let resolver = Resolver::new(layout, config);
        for report in parse_reports(&resolver, parse) {
            match (report.value, report.name, report.error) {
                (Some(value), Some(name), _) => {
                    let _ = writeln!(out, "  parse {:?} = {} ({})", report.text, value, name);
                }
                (_, _, Some(error)) => {
                    let _ = writeln!(out, "  parse {:?}: {}", report.text, error);
                }
                _ => {}
            }
        }
    }
    out
}

fn render_layout(out: &mut String, layout: &EnumLayout) {
    let members = layout.canonical.len();
    let _ = writeln!(
        out,
        "{} ({}): {}, {} member{}",
        layout.type_name,
        layout.kind,
        layout.strategy().name(),
        members,
        if members == 1 { "" } else { "s" }
    );

    match &layout.representation {
        Representation::SingleRange(segment) => render_segment(out, segment),
        Representation::SegmentedRanges(segments) => {
            for segment in segments {
                render_segment(out, segment);
            }
        }
        Representation::SparseMap(table) => {
            let _ = writeln!(out, "  map {}", table.index_width().go_type());
            render_table(out, table);
        }
    }

    for alias in layout.canonical.aliases() {
        let _ = writeln!(
            out,
            "  alias {} = {} (kept {})",
            alias.raw_name, alias.value, alias.canonical
        );
    }
}

fn render_segment(out: &mut String, segment: &Segment) {
    let width = segment.table.index_width().go_type();
    if segment.low() == segment.high() {
        let _ = writeln!(out, "  range {} {}", segment.low(), width);
    } else {
        let _ = writeln!(
            out,
            "  range {}..={} {}",
            segment.low(),
            segment.high(),
            width
        );
    }
    render_table(out, &segment.table);
}

fn render_table(out: &mut String, table: &StringTable) {
    let offsets = table
        .offsets()
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "    names {:?}", table.concatenated());
    let _ = writeln!(out, "    index [{}]", offsets);
}

fn render_json(
    layouts: &[EnumLayout],
    config: &GenerationConfig,
    parse: &[String],
) -> Result<String, CommandError> {
    let reports: Vec<EnumReport<'_>> = layouts
        .iter()
        .map(|layout| EnumReport {
            layout,
            parse: parse_reports(&Resolver::new(layout, config), parse),
        })
        .collect();
    let mut json = serde_json::to_string_pretty(&reports)?;
    json.push('\n');
    Ok(json)
}
