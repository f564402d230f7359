//! Enum analysis: from extracted constants to a partitioned canonical enum.
//!
//! Passes run strictly in order:
//! - `transform` - raw identifier → display name
//! - `dedupe` - collapse aliases, sort by value
//! - `partition` - split into contiguous runs, choose the lookup strategy

mod dedupe;
mod partition;
mod transform;


use std::collections::HashMap;

use enumgen_core::EnumExtraction;

use crate::{Error, GenerationConfig, Result};

pub use dedupe::{Alias, CanonicalEnum, EnumMember, dedupe};
pub use partition::{Partition, Strategy, choose_strategy, partition};
pub use transform::transform;

/// Output of the analysis passes for one enum.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub canonical: CanonicalEnum,
    pub partitions: Vec<Partition>,
    pub strategy: Strategy,
}

/// Run transform, dedupe and partition over one extracted enum.
pub fn analyze(extraction: &EnumExtraction, config: &GenerationConfig) -> Result<Analysis> {
    let type_name = extraction.type_name.as_str();
    if !is_go_identifier(type_name) {
        return Err(Error::InvalidTypeName {
            type_name: type_name.to_string(),
        });
    }

    let mut members = Vec::with_capacity(extraction.members.len());
    for raw in extraction.members.iter().filter(|m| !m.is_blank()) {
        if !extraction.kind.contains(raw.value) {
            return Err(Error::ValueOutOfRange {
                type_name: type_name.to_string(),
                raw_name: raw.name.clone(),
                value: raw.value,
                kind: extraction.kind,
            });
        }

        let display_name = transform(&raw.name, &config.trim_prefix, config.transform);
        let display_name = format!("{}{}", config.add_prefix, display_name);
        if display_name.is_empty() {
            return Err(Error::EmptyDisplayName {
                type_name: type_name.to_string(),
                raw_name: raw.name.clone(),
            });
        }

        members.push(EnumMember::new(&raw.name, display_name, raw.value));
    }

    if members.is_empty() {
        return Err(Error::EmptyEnum {
            type_name: type_name.to_string(),
        });
    }

    let canonical = dedupe(members);
    check_unique_names(type_name, &canonical, config.ignore_case)?;

    let partitions = partition(&canonical);
    let strategy = choose_strategy(&partitions, canonical.len(), config.sparse_ratio);

    tracing::debug!(
        type_name,
        members = canonical.len(),
        aliases = canonical.aliases().len(),
        partitions = partitions.len(),
        ?strategy,
        "analyzed enum"
    );
    for p in &partitions {
        tracing::trace!(type_name, low = %p.low(), high = %p.high(), "partition");
    }

    Ok(Analysis {
        canonical,
        partitions,
        strategy,
    })
}

/// Reverse lookup needs distinct names (and distinct folded names when case is ignored).
fn check_unique_names(type_name: &str, canonical: &CanonicalEnum, ignore_case: bool) -> Result<()> {
    let mut seen: HashMap<&str, &EnumMember> = HashMap::new();
    for member in canonical.members() {
        if let Some(first) = seen.insert(member.display_name.as_str(), member) {
            return Err(Error::DuplicateName {
                type_name: type_name.to_string(),
                name: member.display_name.clone(),
                first: first.value,
                second: member.value,
            });
        }
    }

    if !ignore_case {
        return Ok(());
    }

    let mut folded: HashMap<String, &EnumMember> = HashMap::new();
    for member in canonical.members() {
        if let Some(first) = folded.insert(member.display_name.to_lowercase(), member) {
            return Err(Error::AmbiguousIgnoreCase {
                type_name: type_name.to_string(),
                first: first.display_name.clone(),
                second: member.display_name.clone(),
            });
        }
    }
    Ok(())
}

/// Go identifier rules, minus keywords and the blank identifier.
pub(crate) fn is_go_identifier(s: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ];

    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_') {
        return false;
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return false;
    }
    s != "_" && !KEYWORDS.contains(&s)
}
