//! Reverse lookup, accessors and membership.

use std::fmt::Write as _;

use crate::emit::Representation;
use crate::lookup::FoldLookup;

use super::Emitter;

impl Emitter<'_> {
    pub(super) fn emit_parse_fn(&mut self) {
        let t = self.type_name().to_string();
        let parse_fn = self.naming.parse_fn();
        let map = self.naming.name_to_value_var();

        let mut out = String::new();
        let _ = writeln!(
            out,
            "// {parse_fn} retrieves an enum value from the enum constants string name."
        );
        out.push_str("// Throws an error if the param is not part of the enum.\n");
        let _ = writeln!(out, "func {parse_fn}(s string) ({t}, error) {{");
        let _ = writeln!(out, "\tif val, ok := {map}[s]; ok {{");
        out.push_str("\t\treturn val, nil\n\t}\n");

        if self.config.ignore_case {
            self.imports.insert("strings");
            let names: Vec<&str> = self.layout.names().collect();
            match FoldLookup::for_names(&names) {
                FoldLookup::Lower => fold_lookup(&mut out, &map, "ToLower"),
                FoldLookup::Upper => fold_lookup(&mut out, &map, "ToUpper"),
                FoldLookup::Scan => {
                    let _ = writeln!(out, "\tfor name, val := range {map} {{");
                    out.push_str("\t\tif strings.EqualFold(name, s) {\n");
                    out.push_str("\t\t\treturn val, nil\n\t\t}\n\t}\n");
                }
            }
        }

        if self.config.allow_numeric {
            self.imports.insert("strconv");
            let (parse, width) = if self.is_signed() {
                ("ParseInt", "int64")
            } else {
                ("ParseUint", "uint64")
            };
            let _ = writeln!(out, "\tif n, err := strconv.{parse}(s, 10, 64); err == nil {{");
            let _ = writeln!(out, "\t\tfor _, v := range {} {{", self.naming.values_var());
            let _ = writeln!(out, "\t\t\tif {width}(v) == n {{");
            out.push_str("\t\t\t\treturn v, nil\n\t\t\t}\n\t\t}\n\t}\n");
        }

        let _ = writeln!(
            out,
            "\treturn 0, fmt.Errorf(\"%s does not belong to {t} values\", s)"
        );
        out.push_str("}\n");
        self.push_decl(&out);
    }

    /// `TValues()` and `TStrings()`.
    pub(super) fn emit_accessors(&mut self) {
        let t = self.type_name().to_string();
        let values_fn = self.naming.values_fn();
        let strings_fn = self.naming.strings_fn();
        let names_var = self.naming.names_var();

        let mut out = String::new();
        let _ = writeln!(out, "// {values_fn} returns all values of the enum");
        let _ = writeln!(out, "func {values_fn}() []{t} {{");
        let _ = writeln!(out, "\treturn {}", self.naming.values_var());
        out.push_str("}\n\n");

        let _ = writeln!(
            out,
            "// {strings_fn} returns a slice of all String values of the enum"
        );
        let _ = writeln!(out, "func {strings_fn}() []string {{");
        let _ = writeln!(out, "\tstrs := make([]string, len({names_var}))");
        let _ = writeln!(out, "\tcopy(strs, {names_var})");
        out.push_str("\treturn strs\n}\n");

        self.push_decl(&out);
    }

    /// `IsAT()` through the same structure `String()` uses.
    pub(super) fn emit_contains(&mut self) {
        let t = self.type_name().to_string();
        let is_a = self.naming.is_a();

        let mut out = String::new();
        let _ = writeln!(
            out,
            "// {is_a} returns \"true\" if the value is listed in the enum definition. \"false\" otherwise"
        );
        let _ = writeln!(out, "func (i {t}) {is_a}() bool {{");

        match &self.layout.representation {
            Representation::SparseMap(_) => {
                let _ = writeln!(out, "\t_, ok := {}[i]", self.naming.map_var());
                out.push_str("\treturn ok\n");
            }
            Representation::SingleRange(segment) => {
                let _ = writeln!(
                    out,
                    "\treturn {}",
                    self.range_condition(segment.low(), segment.high())
                );
            }
            Representation::SegmentedRanges(segments) => {
                let terms: Vec<String> = segments
                    .iter()
                    .map(|s| {
                        let cond = self.range_condition(s.low(), s.high());
                        if cond.contains("&&") {
                            format!("({cond})")
                        } else {
                            cond
                        }
                    })
                    .collect();
                let _ = writeln!(out, "\treturn {}", terms.join(" || "));
            }
        }

        out.push_str("}\n");
        self.push_decl(&out);
    }
}

fn fold_lookup(out: &mut String, map: &str, fold: &str) {
    let _ = writeln!(out, "\tif val, ok := {map}[strings.{fold}(s)]; ok {{");
    out.push_str("\t\treturn val, nil\n\t}\n");
}
