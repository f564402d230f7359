//! Go source generation.
//!
//! Emits, for each enum type `T`:
//! - the name tables and `func (i T) String() string`
//! - `TString`, `TValues`, `TStrings` and `IsAT`
//! - optional JSON, text, YAML and SQL adapter methods
//!
//! [`generate_file`] wraps one or more blocks into a complete file.

mod adapters;
mod emitter;
mod file;
mod lookup;
mod naming;
mod render;


use std::collections::BTreeSet;

use enumgen_core::EnumExtraction;

use crate::emit::EnumLayout;
use crate::{GenerationConfig, Result};

pub use emitter::Emitter;
pub use file::generate_file;
pub use naming::go_quote;

/// Generated code for one enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEnum {
    pub type_name: String,
    /// Declarations and methods, ending with a single newline
    pub code: String,
    /// Import paths the code refers to
    pub imports: BTreeSet<&'static str>,
}

/// Analyze one extracted enum and generate its Go block.
pub fn generate(extraction: &EnumExtraction, config: &GenerationConfig) -> Result<GeneratedEnum> {
    let _span = tracing::info_span!("generate", type_name = %extraction.type_name).entered();

    let layout = EnumLayout::build(extraction, config)?;
    let generated = Emitter::new(&layout, config).emit();

    tracing::debug!(
        bytes = generated.code.len(),
        imports = generated.imports.len(),
        "generated enum block"
    );
    Ok(generated)
}
