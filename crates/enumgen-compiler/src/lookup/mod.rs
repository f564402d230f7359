//! In-process evaluation of the generated lookup functions.
//!
//! [`Resolver`] answers the same questions as the generated Go code, from the
//! same layout, without compiling anything. The CLI `inspect` command and the
//! tests use it as the executable model of the emitted methods.

mod adapters;

#[cfg(test)]
mod lookup_tests;

use std::collections::HashMap;

use enumgen_core::{IntKind, Value};

use crate::GenerationConfig;
use crate::emit::EnumLayout;

pub use adapters::{AdapterError, ScanSource};

/// Parse failure: the text names no member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("{text} does not belong to {type_name} values")]
    NotRecognized { text: String, type_name: String },
}

/// How case-insensitive parsing is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldLookup {
    /// Every display name is lower case: look up `ToLower(s)`.
    Lower,
    /// Every display name is upper case: look up `ToUpper(s)`.
    Upper,
    /// Mixed case: compare against every name with `EqualFold`.
    Scan,
}

impl FoldLookup {
    pub fn for_names(names: &[&str]) -> Self {
        if names.iter().all(|n| *n == n.to_lowercase()) {
            FoldLookup::Lower
        } else if names.iter().all(|n| *n == n.to_uppercase()) {
            FoldLookup::Upper
        } else {
            FoldLookup::Scan
        }
    }
}

/// Render/parse/membership over one analyzed enum.
#[derive(Debug)]
pub struct Resolver<'a> {
    layout: &'a EnumLayout,
    by_name: HashMap<&'a str, Value>,
    fold: Option<FoldLookup>,
    allow_numeric: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(layout: &'a EnumLayout, config: &GenerationConfig) -> Self {
        let by_name = layout.names().zip(layout.values()).collect();
        let fold = config.is_ignore_case().then(|| {
            let names: Vec<&str> = layout.names().collect();
            FoldLookup::for_names(&names)
        });
        Self {
            layout,
            by_name,
            fold,
            allow_numeric: config.is_allow_numeric(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.layout.type_name
    }

    pub fn kind(&self) -> IntKind {
        self.layout.kind
    }

    /// `String()`: the display name, or `T(v)` for values outside the enum.
    pub fn render(&self, value: Value) -> String {
        match self.layout.name_of(value) {
            Some(name) => name.to_string(),
            None => format!("{}({})", self.type_name(), value),
        }
    }

    /// `TString(s)`: exact match, then the configured fallbacks.
    pub fn parse(&self, text: &str) -> Result<Value, LookupError> {
        if let Some(&value) = self.by_name.get(text) {
            return Ok(value);
        }

        if let Some(fold) = self.fold
            && let Some(value) = self.parse_folded(fold, text)
        {
            return Ok(value);
        }

        if self.allow_numeric
            && let Some(value) = self.parse_numeric(text)
        {
            return Ok(value);
        }

        Err(LookupError::NotRecognized {
            text: text.to_string(),
            type_name: self.type_name().to_string(),
        })
    }

    /// `IsAT()`.
    pub fn contains(&self, value: Value) -> bool {
        self.layout.canonical.contains(value)
    }

    /// `TValues()`.
    pub fn values(&self) -> Vec<Value> {
        self.layout.values().collect()
    }

    /// `TStrings()`.
    pub fn names(&self) -> Vec<String> {
        self.layout.names().map(str::to_string).collect()
    }

    fn parse_folded(&self, fold: FoldLookup, text: &str) -> Option<Value> {
        match fold {
            FoldLookup::Lower => self.by_name.get(text.to_lowercase().as_str()).copied(),
            FoldLookup::Upper => self.by_name.get(text.to_uppercase().as_str()).copied(),
            FoldLookup::Scan => self
                .layout
                .names()
                .zip(self.layout.values())
                .find(|(name, _)| equal_fold(name, text))
                .map(|(_, value)| value),
        }
    }

    /// Decimal text accepted only when it equals a member value.
    fn parse_numeric(&self, text: &str) -> Option<Value> {
        let value = parse_decimal(text, self.kind())?;
        self.contains(value).then_some(value)
    }
}

/// Base-10 parse with `strconv.ParseInt`/`ParseUint` rules for 64 bits.
pub(crate) fn parse_decimal(text: &str, kind: IntKind) -> Option<Value> {
    if kind.is_signed() {
        text.parse::<i64>().ok().map(Value::from)
    } else {
        if text.starts_with('+') {
            return None;
        }
        text.parse::<u64>().ok().map(Value::from)
    }
}

/// `strings.EqualFold`: rune by rune, each pair equal under simple case mapping.
fn equal_fold(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y
                || simple_case(x, char::to_lowercase) == simple_case(y, char::to_lowercase)
                || simple_case(x, char::to_uppercase) == simple_case(y, char::to_uppercase)
        })
}

/// One-rune case mapping; runes whose mapping expands keep themselves.
fn simple_case<I: Iterator<Item = char>>(c: char, map: fn(char) -> I) -> char {
    let mut mapped = map(c);
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
