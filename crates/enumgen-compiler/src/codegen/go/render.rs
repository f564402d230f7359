//! Name tables and `String()`.

use std::fmt::Write as _;

use crate::emit::{Representation, StringTable};

use super::Emitter;
use super::naming::{aligned_entries, aligned_specs, go_quote};

impl Emitter<'_> {
    pub(super) fn emit_tables(&mut self) {
        let mut out = String::new();
        match &self.layout.representation {
            Representation::SingleRange(segment) => {
                let _ = writeln!(
                    out,
                    "const {} = {}",
                    self.naming.name_const(None),
                    go_quote(segment.table.concatenated())
                );
                out.push('\n');
                let _ = writeln!(
                    out,
                    "var {} = {}",
                    self.naming.index_var(None),
                    index_literal(&segment.table)
                );
            }
            Representation::SegmentedRanges(segments) => {
                let names: Vec<_> = segments
                    .iter()
                    .enumerate()
                    .map(|(k, s)| {
                        (
                            self.naming.name_const(Some(k)),
                            go_quote(s.table.concatenated()),
                        )
                    })
                    .collect();
                let indexes: Vec<_> = segments
                    .iter()
                    .enumerate()
                    .map(|(k, s)| (self.naming.index_var(Some(k)), index_literal(&s.table)))
                    .collect();

                let _ = write!(out, "const (\n{})\n\n", aligned_specs(&names));
                let _ = write!(out, "var (\n{})\n", aligned_specs(&indexes));
            }
            Representation::SparseMap(table) => {
                let name_const = self.naming.name_const(None);
                let _ = writeln!(out, "const {name_const} = {}", go_quote(table.concatenated()));
                out.push('\n');

                let entries: Vec<_> = self
                    .layout
                    .name_refs()
                    .iter()
                    .map(|r| {
                        (
                            r.value.to_string(),
                            format!("{name_const}[{}:{}]", r.start, r.end),
                        )
                    })
                    .collect();
                let _ = write!(
                    out,
                    "var {} = map[{}]string{{\n{}}}\n",
                    self.naming.map_var(),
                    self.type_name(),
                    aligned_entries(&entries)
                );
            }
        }
        self.push_decl(&out);
    }

    pub(super) fn emit_string_method(&mut self) {
        let t = self.type_name().to_string();
        let mut out = format!("func (i {t}) String() string {{\n");

        match &self.layout.representation {
            Representation::SingleRange(segment) => {
                let name = self.naming.name_const(None);
                let index = self.naming.index_var(None);
                let low = segment.low();

                // `T(len(index)-1)` must be a representable constant of T.
                if self.needs_wide_index(segment.high() - low + 1) {
                    let wide = self.wide_type();
                    let _ = writeln!(out, "\tidx := {}", self.wide_offset(low));
                    let lower_bound = if self.is_signed() { "idx < 0 || " } else { "" };
                    let _ = writeln!(out, "\tif {lower_bound}idx >= {wide}(len({index})-1) {{");
                    let _ = writeln!(out, "\t\treturn fmt.Sprintf(\"{t}(%d)\", i)");
                    out.push_str("\t}\n");
                    let _ = writeln!(out, "\treturn {name}[{index}[idx]:{index}[idx+1]]");
                    out.push_str("}\n");
                    self.push_decl(&out);
                    return;
                }

                let fallback = if low == 0 {
                    "i".to_string()
                } else {
                    let _ = writeln!(out, "\ti -= {low}");
                    format!("i+{low}")
                };
                let lower_bound = if self.is_signed() { "i < 0 || " } else { "" };
                let _ = writeln!(out, "\tif {lower_bound}i >= {t}(len({index})-1) {{");
                let _ = writeln!(out, "\t\treturn fmt.Sprintf(\"{t}(%d)\", {fallback})");
                out.push_str("\t}\n");
                let _ = writeln!(out, "\treturn {name}[{index}[i]:{index}[i+1]]");
            }
            Representation::SegmentedRanges(segments) => {
                out.push_str("\tswitch {\n");
                for (k, segment) in segments.iter().enumerate() {
                    let name = self.naming.name_const(Some(k));
                    let index = self.naming.index_var(Some(k));
                    let _ = writeln!(
                        out,
                        "\tcase {}:",
                        self.range_condition(segment.low(), segment.high())
                    );
                    if segment.partition.is_single() {
                        let _ = writeln!(out, "\t\treturn {name}");
                        continue;
                    }
                    // `i - low` must not wrap in T.
                    if self.needs_wide_index(segment.high() - segment.low()) {
                        let _ = writeln!(out, "\t\tidx := {}", self.wide_offset(segment.low()));
                        let _ = writeln!(out, "\t\treturn {name}[{index}[idx]:{index}[idx+1]]");
                        continue;
                    }
                    if segment.low() != 0 {
                        let _ = writeln!(out, "\t\ti -= {}", segment.low());
                    }
                    let _ = writeln!(out, "\t\treturn {name}[{index}[i]:{index}[i+1]]");
                }
                out.push_str("\tdefault:\n");
                let _ = writeln!(out, "\t\treturn fmt.Sprintf(\"{t}(%d)\", i)");
                out.push_str("\t}\n");
            }
            Representation::SparseMap(_) => {
                let _ = writeln!(out, "\tif str, ok := {}[i]; ok {{", self.naming.map_var());
                out.push_str("\t\treturn str\n\t}\n");
                let _ = writeln!(out, "\treturn fmt.Sprintf(\"{t}(%d)\", i)");
            }
        }

        out.push_str("}\n");
        self.push_decl(&out);
    }

    /// `_TValues`, `_TNames` and `_TNameToValueMap`.
    pub(super) fn emit_lookup_vars(&mut self) {
        let t = self.type_name().to_string();
        let refs = self.layout.name_refs();
        let slices: Vec<String> = refs
            .iter()
            .map(|r| format!("{}[{}:{}]", self.naming.name_const(r.segment), r.start, r.end))
            .collect();

        let values: Vec<String> = self.layout.values().map(|v| v.to_string()).collect();
        let mut out = format!(
            "var {} = []{t}{{{}}}\n\n",
            self.naming.values_var(),
            values.join(", ")
        );

        let _ = writeln!(out, "var {} = []string{{", self.naming.names_var());
        for slice in &slices {
            let _ = writeln!(out, "\t{slice},");
        }
        out.push_str("}\n\n");

        let entries: Vec<_> = slices
            .into_iter()
            .zip(refs.iter().map(|r| r.value.to_string()))
            .collect();
        let _ = write!(
            out,
            "var {} = map[string]{t}{{\n{}}}\n",
            self.naming.name_to_value_var(),
            aligned_entries(&entries)
        );

        self.push_decl(&out);
    }
}

/// `[...]uintN{0, ...}` for a table's offsets.
fn index_literal(table: &StringTable) -> String {
    let offsets: Vec<String> = table.offsets().iter().map(|o| o.to_string()).collect();
    format!("[...]{}{{{}}}", table.index_width().go_type(), offsets.join(", "))
}
