//! Range partitioning and lookup strategy selection.

use enumgen_core::Value;

use super::{CanonicalEnum, EnumMember};

/// A maximal run of consecutive values.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Partition {
    low: Value,
    high: Value,
    members: Vec<EnumMember>,
}

impl Partition {
    fn start(member: EnumMember) -> Self {
        Self {
            low: member.value,
            high: member.value,
            members: vec![member],
        }
    }

    pub fn low(&self) -> Value {
        self.low
    }

    pub fn high(&self) -> Value {
        self.high
    }

    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, value: Value) -> bool {
        self.low <= value && value <= self.high
    }

    /// Run of exactly one value.
    pub fn is_single(&self) -> bool {
        self.low == self.high
    }
}

/// How the generated code maps a value to its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// One contiguous run: a bounds check and an index table.
    SingleRange,
    /// A few runs: dispatch on the run, then index its table.
    SegmentedRanges,
    /// Many runs: a hash map from value to name.
    SparseMap,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::SingleRange => "single-range",
            Strategy::SegmentedRanges => "segmented-ranges",
            Strategy::SparseMap => "sparse-map",
        }
    }
}

/// Split a canonical enum into maximal runs of consecutive values.
///
/// Runs come out in ascending order and cover every member exactly once.
pub fn partition(canonical: &CanonicalEnum) -> Vec<Partition> {
    let mut partitions: Vec<Partition> = Vec::new();

    for member in canonical.members() {
        match partitions.last_mut() {
            Some(run) if run.high.checked_add(1) == Some(member.value) => {
                run.high = member.value;
                run.members.push(member.clone());
            }
            _ => partitions.push(Partition::start(member.clone())),
        }
    }

    partitions
}

/// Pick the lookup strategy from the shape of the partitioning.
///
/// `SparseMap` wins once the run count exceeds `sparse_ratio * member_count`.
pub fn choose_strategy(
    partitions: &[Partition],
    member_count: usize,
    sparse_ratio: f64,
) -> Strategy {
    if partitions.len() <= 1 {
        return Strategy::SingleRange;
    }
    if partitions.len() as f64 > sparse_ratio * member_count as f64 {
        return Strategy::SparseMap;
    }
    Strategy::SegmentedRanges
}
