//! Alias collapsing.

use indexmap::IndexMap;
use indexmap::map::Entry;

use enumgen_core::Value;

/// One enum constant after name transformation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EnumMember {
    /// Identifier as declared in source
    pub raw_name: String,
    /// Name used for rendering and parsing
    pub display_name: String,
    pub value: Value,
}

impl EnumMember {
    pub fn new(raw_name: impl Into<String>, display_name: impl Into<String>, value: Value) -> Self {
        Self {
            raw_name: raw_name.into(),
            display_name: display_name.into(),
            value,
        }
    }
}

/// A constant dropped because an earlier constant has the same value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Alias {
    pub raw_name: String,
    /// Raw name of the member that kept the value
    pub canonical: String,
    pub value: Value,
}

/// Members with unique values in ascending value order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CanonicalEnum {
    members: Vec<EnumMember>,
    aliases: Vec<Alias>,
}

impl CanonicalEnum {
    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    /// Aliases removed during deduplication, in input order.
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.members.iter().map(|m| m.value)
    }

    /// Find the member with the given value (binary search).
    pub fn get(&self, value: Value) -> Option<&EnumMember> {
        self.members
            .binary_search_by_key(&value, |m| m.value)
            .ok()
            .map(|idx| &self.members[idx])
    }

    pub fn contains(&self, value: Value) -> bool {
        self.get(value).is_some()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn into_members(self) -> Vec<EnumMember> {
        self.members
    }
}

/// Collapse members sharing a value to the first one seen, then sort by value.
pub fn dedupe(members: impl IntoIterator<Item = EnumMember>) -> CanonicalEnum {
    let mut by_value: IndexMap<Value, EnumMember> = IndexMap::new();
    let mut aliases = Vec::new();

    for member in members {
        match by_value.entry(member.value) {
            Entry::Vacant(e) => {
                e.insert(member);
            }
            Entry::Occupied(e) => {
                aliases.push(Alias {
                    raw_name: member.raw_name,
                    canonical: e.get().raw_name.clone(),
                    value: member.value,
                });
            }
        }
    }

    let mut members: Vec<EnumMember> = by_value.into_values().collect();
    members.sort_by_key(|m| m.value);

    CanonicalEnum { members, aliases }
}
