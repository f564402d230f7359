//! Serialization adapter methods.

use std::fmt::Write as _;

use super::Emitter;

impl Emitter<'_> {
    pub(super) fn emit_json(&mut self) {
        self.imports.insert("encoding/json");
        let t = self.type_name().to_string();
        let parse_fn = self.naming.parse_fn();
        let is_a = self.naming.is_a();
        let width = if self.is_signed() { "int64" } else { "uint64" };

        let mut out = String::new();
        let _ = writeln!(out, "// MarshalJSON implements the json.Marshaler interface for {t}");
        let _ = writeln!(out, "func (i {t}) MarshalJSON() ([]byte, error) {{");
        out.push_str("\treturn json.Marshal(i.String())\n}\n\n");

        let _ = writeln!(
            out,
            "// UnmarshalJSON implements the json.Unmarshaler interface for {t}"
        );
        let _ = writeln!(out, "func (i *{t}) UnmarshalJSON(data []byte) error {{");
        out.push_str("\tvar s string\n");
        out.push_str("\tif err := json.Unmarshal(data, &s); err != nil {\n");
        let _ = writeln!(out, "\t\tvar n {width}");
        out.push_str("\t\tif err := json.Unmarshal(data, &n); err != nil {\n");
        let _ = writeln!(
            out,
            "\t\t\treturn fmt.Errorf(\"{t} should be a string, got %s\", data)"
        );
        out.push_str("\t\t}\n");
        let _ = writeln!(out, "\t\tv := {t}(n)");
        let _ = writeln!(out, "\t\tif {width}(v) != n || !v.{is_a}() {{");
        let _ = writeln!(
            out,
            "\t\t\treturn fmt.Errorf(\"Invalid value for {t} (%d)\", n)"
        );
        out.push_str("\t\t}\n\t\t*i = v\n\t\treturn nil\n\t}\n\n");
        out.push_str("\tvar err error\n");
        let _ = writeln!(out, "\t*i, err = {parse_fn}(s)");
        out.push_str("\treturn err\n}\n");

        self.push_decl(&out);
    }

    pub(super) fn emit_text(&mut self) {
        let t = self.type_name().to_string();
        let parse_fn = self.naming.parse_fn();

        let mut out = String::new();
        let _ = writeln!(
            out,
            "// MarshalText implements the encoding.TextMarshaler interface for {t}"
        );
        let _ = writeln!(out, "func (i {t}) MarshalText() ([]byte, error) {{");
        out.push_str("\treturn []byte(i.String()), nil\n}\n\n");

        let _ = writeln!(
            out,
            "// UnmarshalText implements the encoding.TextUnmarshaler interface for {t}"
        );
        let _ = writeln!(out, "func (i *{t}) UnmarshalText(text []byte) error {{");
        out.push_str("\tvar err error\n");
        let _ = writeln!(out, "\t*i, err = {parse_fn}(string(text))");
        out.push_str("\treturn err\n}\n");

        self.push_decl(&out);
    }

    pub(super) fn emit_yaml(&mut self) {
        let t = self.type_name().to_string();
        let parse_fn = self.naming.parse_fn();

        let mut out = String::new();
        let _ = writeln!(out, "// MarshalYAML implements a YAML Marshaler for {t}");
        let _ = writeln!(out, "func (i {t}) MarshalYAML() (interface{{}}, error) {{");
        out.push_str("\treturn i.String(), nil\n}\n\n");

        let _ = writeln!(out, "// UnmarshalYAML implements a YAML Unmarshaler for {t}");
        let _ = writeln!(
            out,
            "func (i *{t}) UnmarshalYAML(unmarshal func(interface{{}}) error) error {{"
        );
        out.push_str("\tvar s string\n");
        out.push_str("\tif err := unmarshal(&s); err != nil {\n\t\treturn err\n\t}\n\n");
        out.push_str("\tvar err error\n");
        let _ = writeln!(out, "\t*i, err = {parse_fn}(s)");
        out.push_str("\treturn err\n}\n");

        self.push_decl(&out);
    }

    pub(super) fn emit_sql(&mut self) {
        self.imports.insert("database/sql/driver");
        let t = self.type_name().to_string();
        let parse_fn = self.naming.parse_fn();

        let mut out = String::new();
        let _ = writeln!(out, "// Value implements the driver.Valuer interface for {t}");
        let _ = writeln!(out, "func (i {t}) Value() (driver.Value, error) {{");
        out.push_str("\treturn i.String(), nil\n}\n\n");

        let _ = writeln!(out, "// Scan implements the sql.Scanner interface for {t}");
        let _ = writeln!(out, "func (i *{t}) Scan(value interface{{}}) error {{");
        out.push_str("\tif value == nil {\n\t\treturn nil\n\t}\n\n");
        out.push_str("\tvar str string\n");
        out.push_str("\tswitch v := value.(type) {\n");
        out.push_str("\tcase string:\n\t\tstr = v\n");
        out.push_str("\tcase []byte:\n\t\tstr = string(v)\n");
        out.push_str("\tdefault:\n");
        let _ = writeln!(
            out,
            "\t\treturn fmt.Errorf(\"unsupported scan source type %T for {t}\", value)"
        );
        out.push_str("\t}\n\n");
        let _ = writeln!(out, "\tval, err := {parse_fn}(str)");
        out.push_str("\tif err != nil {\n\t\treturn err\n\t}\n\n");
        out.push_str("\t*i = val\n\treturn nil\n}\n");

        self.push_decl(&out);
    }
}
