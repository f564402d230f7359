//! Core emitter struct and main emit logic.

use std::collections::BTreeSet;

use enumgen_core::Value;

use crate::GenerationConfig;
use crate::emit::EnumLayout;

use super::GeneratedEnum;
use super::naming::Naming;

/// Go emitter for one enum layout.
pub struct Emitter<'a> {
    pub(super) layout: &'a EnumLayout,
    pub(super) config: &'a GenerationConfig,
    pub(super) naming: Naming,
    /// Import paths referenced so far
    pub(super) imports: BTreeSet<&'static str>,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(layout: &'a EnumLayout, config: &'a GenerationConfig) -> Self {
        Self {
            layout,
            config,
            naming: Naming::new(&layout.type_name),
            imports: BTreeSet::new(),
            output: String::new(),
        }
    }

    /// Emit the declarations and methods of the enum.
    pub fn emit(mut self) -> GeneratedEnum {
        // `String()` and `TString` both format through fmt.
        self.imports.insert("fmt");

        self.emit_tables();
        self.emit_string_method();
        self.emit_lookup_vars();
        self.emit_parse_fn();
        self.emit_accessors();
        self.emit_contains();

        if self.config.include_json {
            self.emit_json();
        }
        if self.config.include_text {
            self.emit_text();
        }
        if self.config.include_yaml {
            self.emit_yaml();
        }
        if self.config.include_sql {
            self.emit_sql();
        }

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');

        GeneratedEnum {
            type_name: self.layout.type_name.clone(),
            code: self.output,
            imports: self.imports,
        }
    }

    pub(super) fn type_name(&self) -> &str {
        self.naming.type_name()
    }

    pub(super) fn is_signed(&self) -> bool {
        self.layout.kind.is_signed()
    }

    /// Append a finished declaration followed by a blank line.
    pub(super) fn push_decl(&mut self, decl: &str) {
        self.output.push_str(decl);
        self.output.push('\n');
    }

    /// Whether `n` overflows the enum's own type, forcing index math in 64 bits.
    pub(super) fn needs_wide_index(&self, n: Value) -> bool {
        n > self.layout.kind.max_value()
    }

    /// `int64` for signed kinds, `uint64` for unsigned ones.
    pub(super) fn wide_type(&self) -> &'static str {
        if self.is_signed() { "int64" } else { "uint64" }
    }

    /// `i - low` converted to the wide type.
    pub(super) fn wide_offset(&self, low: Value) -> String {
        let wide = self.wide_type();
        match low {
            0 => format!("{wide}(i)"),
            low if low < 0 => format!("{wide}(i) + {}", -low),
            low => format!("{wide}(i) - {low}"),
        }
    }

    /// Go condition testing `i` against `[low, high]`.
    pub(super) fn range_condition(&self, low: Value, high: Value) -> String {
        if low == high {
            format!("i == {low}")
        } else if low == 0 && !self.is_signed() {
            format!("i <= {high}")
        } else {
            format!("{low} <= i && i <= {high}")
        }
    }
}
