//! Whole-file assembly.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use enumgen_core::EnumExtraction;

use crate::analyze::is_go_identifier;
use crate::{Error, GenerationConfig, Result};

use super::{GeneratedEnum, generate};

/// Generate a complete Go file for `enums`.
///
/// Every enum is generated before anything is assembled, so a failure in
/// any of them yields no output at all.
pub fn generate_file(
    package: &str,
    enums: &[EnumExtraction],
    config: &GenerationConfig,
    invocation: &str,
) -> Result<String> {
    if !is_go_identifier(package) {
        return Err(Error::InvalidPackageName {
            package: package.to_string(),
        });
    }

    let blocks = enums
        .iter()
        .map(|e| generate(e, config))
        .collect::<Result<Vec<GeneratedEnum>>>()?;

    let imports: BTreeSet<&str> = blocks.iter().flat_map(|b| b.imports.iter().copied()).collect();

    let mut out = String::new();
    let _ = writeln!(out, "// Code generated by \"{invocation}\"; DO NOT EDIT.");
    out.push('\n');
    let _ = writeln!(out, "package {package}");

    if !imports.is_empty() {
        out.push_str("\nimport (\n");
        for path in &imports {
            let _ = writeln!(out, "\t\"{path}\"");
        }
        out.push_str(")\n");
    }

    for block in &blocks {
        out.push('\n');
        out.push_str(&block.code);
    }

    tracing::info!(package, enums = blocks.len(), "assembled Go file");
    Ok(out)
}
