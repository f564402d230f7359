//! Loading the extraction document and picking the enums to process.

use std::io::Read;
use std::path::Path;

use enumgen_core::{EnumExtraction, PackageExtraction, parse_extraction};

use super::CommandError;

/// Read and parse the extraction document.
///
/// `None` and `-` both read stdin.
pub fn load_extraction(path: Option<&Path>) -> Result<PackageExtraction, CommandError> {
    let text = read_document(path)?;
    let extraction = parse_extraction(&text)?;
    tracing::debug!(
        package = %extraction.package,
        enums = extraction.enums.len(),
        "loaded extraction"
    );
    Ok(extraction)
}

fn read_document(path: Option<&Path>) -> Result<String, CommandError> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            std::fs::read_to_string(path).map_err(|source| CommandError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(CommandError::Stdin)?;
            Ok(text)
        }
    }
}

/// Enums named by `--type`, in the order given; every enum when none are named.
pub fn select_enums(
    extraction: &PackageExtraction,
    types: &[String],
) -> Result<Vec<EnumExtraction>, CommandError> {
    if types.is_empty() {
        return Ok(extraction.enums.clone());
    }

    let mut selected: Vec<EnumExtraction> = Vec::with_capacity(types.len());
    for name in types {
        if selected.iter().any(|e| &e.type_name == name) {
            continue;
        }
        let Some(found) = extraction.get(name) else {
            return Err(enumgen_compiler::Error::UnknownType {
                type_name: name.clone(),
            }
            .into());
        };
        selected.push(found.clone());
    }
    Ok(selected)
}
