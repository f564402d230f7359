#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for enumgen.
//!
//! Two layers:
//! - **Extraction layer**: 1:1 mapping to the JSON document a front end hands
//!   over (package name, enum type names, ordered `(name, value)` pairs)
//! - **Identifier utilities**: word splitting and case conversion used by the
//!   name transformer

use std::fmt;

mod int_kind;
pub mod utils;


pub use int_kind::IntKind;

/// Integer value of an enum constant.
///
/// Wide enough to hold every `int64` and every `uint64` value.
pub type Value = i128;

/// Go's blank identifier. Constants declared with it never become members.
pub const BLANK_IDENT: &str = "_";

// ============================================================================
// Extraction Layer
// ============================================================================

/// One constant as declared in source: identifier and integer value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct RawMember {
    pub name: String,
    pub value: Value,
}

impl RawMember {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Whether this constant was declared with the blank identifier.
    pub fn is_blank(&self) -> bool {
        self.name == BLANK_IDENT
    }
}

/// Constants of one enum type, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct EnumExtraction {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub kind: IntKind,
    pub members: Vec<RawMember>,
}

impl EnumExtraction {
    pub fn new(type_name: impl Into<String>, kind: IntKind) -> Self {
        Self {
            type_name: type_name.into(),
            kind,
            members: Vec::new(),
        }
    }

    /// Append a constant, keeping declaration order.
    pub fn member(mut self, name: impl Into<String>, value: Value) -> Self {
        self.members.push(RawMember::new(name, value));
        self
    }

    /// Build from `(name, value)` pairs with the default `int` kind.
    pub fn from_pairs<'a>(
        type_name: impl Into<String>,
        pairs: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Self {
        let mut extraction = Self::new(type_name, IntKind::default());
        extraction.members = pairs
            .into_iter()
            .map(|(name, value)| RawMember::new(name, value))
            .collect();
        extraction
    }
}

/// Every enum extracted from one package.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct PackageExtraction {
    pub package: String,
    pub enums: Vec<EnumExtraction>,
}

impl PackageExtraction {
    /// Find an enum by its type name.
    pub fn get(&self, type_name: &str) -> Option<&EnumExtraction> {
        self.enums.iter().find(|e| e.type_name == type_name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.enums.iter().map(|e| e.type_name.as_str())
    }
}

/// Error reading an extraction document.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("malformed extraction document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("extraction document declares no enums")]
    NoEnums,

    #[error("package name is empty")]
    EmptyPackage,
}

/// Parse an extraction document.
///
/// Structural problems inside individual enums (empty member lists, values out
/// of range) are left to the generator, which reports them per type.
pub fn parse_extraction(json: &str) -> Result<PackageExtraction, ExtractionError> {
    let extraction: PackageExtraction = serde_json::from_str(json)?;
    if extraction.package.trim().is_empty() {
        return Err(ExtractionError::EmptyPackage);
    }
    if extraction.enums.is_empty() {
        return Err(ExtractionError::NoEnums);
    }
    Ok(extraction)
}

impl fmt::Display for RawMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}
