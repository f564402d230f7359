//! Identifiers and literals of the generated code.

use std::fmt::Write as _;

/// Package-level and exported names derived from the type name.
#[derive(Clone, Debug)]
pub(super) struct Naming {
    type_name: String,
}

impl Naming {
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// `_TName`, or `_TName_k` for segment `k`.
    pub fn name_const(&self, segment: Option<usize>) -> String {
        self.suffixed("Name", segment)
    }

    /// `_TIndex`, or `_TIndex_k` for segment `k`.
    pub fn index_var(&self, segment: Option<usize>) -> String {
        self.suffixed("Index", segment)
    }

    pub fn map_var(&self) -> String {
        format!("_{}Map", self.type_name)
    }

    pub fn values_var(&self) -> String {
        format!("_{}Values", self.type_name)
    }

    pub fn names_var(&self) -> String {
        format!("_{}Names", self.type_name)
    }

    pub fn name_to_value_var(&self) -> String {
        format!("_{}NameToValueMap", self.type_name)
    }

    pub fn parse_fn(&self) -> String {
        format!("{}String", self.type_name)
    }

    pub fn values_fn(&self) -> String {
        format!("{}Values", self.type_name)
    }

    pub fn strings_fn(&self) -> String {
        format!("{}Strings", self.type_name)
    }

    pub fn is_a(&self) -> String {
        format!("IsA{}", self.type_name)
    }

    fn suffixed(&self, what: &str, segment: Option<usize>) -> String {
        match segment {
            Some(k) => format!("_{}{}_{}", self.type_name, what, k),
            None => format!("_{}{}", self.type_name, what),
        }
    }
}

/// Quote `s` as a Go interpreted string literal.
///
/// The literal decodes to exactly the bytes of `s`, so table offsets computed
/// on the Rust side stay valid.
pub fn go_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `key: value,` lines with values aligned in one column, gofmt style.
pub(super) fn aligned_entries(entries: &[(String, String)]) -> String {
    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (key, value) in entries {
        let pad = width - key.len();
        let _ = writeln!(out, "\t{key}:{:pad$} {value},", "");
    }
    out
}

/// `name = value` lines of a grouped declaration, `=` aligned.
pub(super) fn aligned_specs(specs: &[(String, String)]) -> String {
    let width = specs.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (name, value) in specs {
        let _ = writeln!(out, "\t{name:width$} = {value}");
    }
    out
}
