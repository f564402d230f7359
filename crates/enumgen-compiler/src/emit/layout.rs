//! Lookup layout for one enum.

use enumgen_core::{EnumExtraction, IntKind, Value};

use crate::analyze::{Analysis, CanonicalEnum, Partition, Strategy, analyze};
use crate::invariants::{assert_partitions_cover, assert_table_matches, ensure_single_partition};
use crate::{GenerationConfig, Result};

use super::string_table::StringTable;

/// A partition together with the string table of its names.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Segment {
    pub partition: Partition,
    pub table: StringTable,
}

impl Segment {
    fn new(partition: Partition) -> Self {
        let table = StringTable::from_names(
            partition
                .members()
                .iter()
                .map(|m| m.display_name.as_str()),
        );
        assert_table_matches(&table, partition.members());
        Self { partition, table }
    }

    pub fn low(&self) -> Value {
        self.partition.low()
    }

    pub fn high(&self) -> Value {
        self.partition.high()
    }

    /// Display name of `value` if it falls in this segment.
    pub fn name_of(&self, value: Value) -> Option<&str> {
        if !self.partition.contains(value) {
            return None;
        }
        let k = usize::try_from(value - self.low()).ok()?;
        self.table.get(k)
    }
}

/// Value-to-name representation selected by the partitioner.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "strategy", content = "tables", rename_all = "snake_case")]
pub enum Representation {
    SingleRange(Segment),
    SegmentedRanges(Vec<Segment>),
    /// One table over all members, indexed in value order.
    SparseMap(StringTable),
}

/// Where a display name lives in the generated tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRef {
    /// Segment index; `None` for the single unsuffixed table.
    pub segment: Option<usize>,
    pub start: usize,
    pub end: usize,
    pub value: Value,
}

/// Everything the code generator needs to render one enum.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EnumLayout {
    pub type_name: String,
    pub kind: IntKind,
    pub canonical: CanonicalEnum,
    pub representation: Representation,
}

impl EnumLayout {
    /// Analyze the extraction and build its tables.
    pub fn build(extraction: &EnumExtraction, config: &GenerationConfig) -> Result<Self> {
        let Analysis {
            canonical,
            partitions,
            strategy,
        } = analyze(extraction, config)?;
        assert_partitions_cover(&canonical, &partitions);

        let representation = match strategy {
            Strategy::SingleRange => {
                Representation::SingleRange(Segment::new(ensure_single_partition(partitions)))
            }
            Strategy::SegmentedRanges => {
                Representation::SegmentedRanges(partitions.into_iter().map(Segment::new).collect())
            }
            Strategy::SparseMap => {
                let table = StringTable::from_names(
                    canonical.members().iter().map(|m| m.display_name.as_str()),
                );
                assert_table_matches(&table, canonical.members());
                Representation::SparseMap(table)
            }
        };

        Ok(Self {
            type_name: extraction.type_name.clone(),
            kind: extraction.kind,
            canonical,
            representation,
        })
    }

    pub fn strategy(&self) -> Strategy {
        match self.representation {
            Representation::SingleRange(_) => Strategy::SingleRange,
            Representation::SegmentedRanges(_) => Strategy::SegmentedRanges,
            Representation::SparseMap(_) => Strategy::SparseMap,
        }
    }

    /// Segments in ascending order; empty for the sparse map.
    pub fn segments(&self) -> &[Segment] {
        match &self.representation {
            Representation::SingleRange(segment) => std::slice::from_ref(segment),
            Representation::SegmentedRanges(segments) => segments,
            Representation::SparseMap(_) => &[],
        }
    }

    /// Display name of a member value.
    pub fn name_of(&self, value: Value) -> Option<&str> {
        match &self.representation {
            Representation::SparseMap(table) => {
                let k = self
                    .canonical
                    .members()
                    .binary_search_by_key(&value, |m| m.value)
                    .ok()?;
                table.get(k)
            }
            _ => self.segments().iter().find_map(|s| s.name_of(value)),
        }
    }

    /// Table slices of every member, in value order.
    pub fn name_refs(&self) -> Vec<NameRef> {
        match &self.representation {
            Representation::SingleRange(segment) => refs_of(None, segment.low(), &segment.table),
            Representation::SegmentedRanges(segments) => segments
                .iter()
                .enumerate()
                .flat_map(|(idx, s)| refs_of(Some(idx), s.low(), &s.table))
                .collect(),
            Representation::SparseMap(table) => self
                .canonical
                .values()
                .enumerate()
                .filter_map(|(k, value)| {
                    let (start, end) = table.span(k)?;
                    Some(NameRef {
                        segment: None,
                        start,
                        end,
                        value,
                    })
                })
                .collect(),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.canonical.values()
    }

    /// Display names in value order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.canonical
            .members()
            .iter()
            .map(|m| m.display_name.as_str())
    }
}

fn refs_of(segment: Option<usize>, low: Value, table: &StringTable) -> Vec<NameRef> {
    (0..table.len())
        .filter_map(|k| {
            let (start, end) = table.span(k)?;
            Some(NameRef {
                segment,
                start,
                end,
                value: low + k as Value,
            })
        })
        .collect()
}
