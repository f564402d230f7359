//! Source generation from enum layouts.

pub mod go;
