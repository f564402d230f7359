//! enumgen compiler: enum layout analyzer and Go code generator.
//!
//! This crate provides the generation pipeline for integer enums:
//! - `analyze` - name transformation, alias deduplication, range partitioning
//! - `emit` - string tables and the chosen lookup representation
//! - `lookup` - in-process resolver with the semantics of the generated code
//! - `codegen` - Go source generation (lookup functions, serialization adapters)
//! - `config` - generation options

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod codegen;
pub mod config;
pub mod emit;
mod invariants;
pub mod lookup;

#[cfg(test)]
pub mod test_utils;

pub use analyze::{Analysis, CanonicalEnum, EnumMember, Partition, Strategy, analyze};
pub use codegen::go::{GeneratedEnum, generate, generate_file};
pub use config::{GenerationConfig, TransformMode};
pub use emit::{EnumLayout, Representation, StringTable};
pub use lookup::{AdapterError, LookupError, Resolver, ScanSource};

use enumgen_core::{IntKind, Value};

/// Errors that abort generation for an enum.
///
/// Generation is all-or-nothing: no partial output is produced when any of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("enum {type_name} has no members")]
    EmptyEnum { type_name: String },

    #[error("invalid type name: {type_name:?}")]
    InvalidTypeName { type_name: String },

    #[error("invalid package name: {package:?}")]
    InvalidPackageName { package: String },

    #[error("{type_name}: constant {raw_name} has an empty display name")]
    EmptyDisplayName { type_name: String, raw_name: String },

    #[error("{type_name}: display name {name:?} is used by both {first} and {second}")]
    DuplicateName {
        type_name: String,
        name: String,
        first: Value,
        second: Value,
    },

    #[error("{type_name}: names {first:?} and {second:?} collide when case is ignored")]
    AmbiguousIgnoreCase {
        type_name: String,
        first: String,
        second: String,
    },

    #[error("{type_name}: value {value} of {raw_name} does not fit in {kind}")]
    ValueOutOfRange {
        type_name: String,
        raw_name: String,
        value: Value,
        kind: IntKind,
    },

    #[error("no enum named {type_name} in the extraction")]
    UnknownType { type_name: String },
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
