//! Layout emission for analyzed enums.
//!
//! Turns the partitioned canonical enum into the concrete lookup
//! representation the code generator renders:
//! - String tables: concatenated display names with byte offsets
//! - Segments: one table per partition for range dispatch
//! - Name references: `(table, start, end)` slices for the reverse map

mod layout;
mod string_table;


pub use layout::{EnumLayout, NameRef, Representation, Segment};
pub use string_table::{IndexWidth, StringTable, StringTableBuilder};
