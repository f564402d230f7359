//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::analyze::{CanonicalEnum, EnumMember, Partition};
use crate::emit::StringTable;

#[inline]
pub fn assert_table_matches(table: &StringTable, members: &[EnumMember]) {
    debug_assert_eq!(
        table.len(),
        members.len(),
        "string_table: entry count differs from member count"
    );
    debug_assert!(
        members
            .iter()
            .enumerate()
            .all(|(k, m)| table.get(k) == Some(m.display_name.as_str())),
        "string_table: slice does not reproduce display name"
    );
}

#[inline]
pub fn assert_partitions_cover(canonical: &CanonicalEnum, partitions: &[Partition]) {
    debug_assert!(
        partitions
            .iter()
            .flat_map(|p| p.members().iter().map(|m| m.value))
            .eq(canonical.values()),
        "partition: runs do not cover the canonical values in order"
    );
    debug_assert!(
        partitions
            .windows(2)
            .all(|w| w[0].high().checked_add(1).is_some_and(|next| next < w[1].low())),
        "partition: adjacent or overlapping runs"
    );
}

#[inline]
pub fn ensure_single_partition(mut partitions: Vec<Partition>) -> Partition {
    assert_eq!(
        partitions.len(),
        1,
        "layout: single range strategy chosen for {} partitions",
        partitions.len()
    );
    partitions
        .pop()
        .expect("layout: single range strategy without a partition")
}
