//! Median-cut partitioning
//!
//! The partitioner works on one mutable working array. Each recursion level
//! picks the widest channel of its range, stable-sorts the range by that
//! channel with [`sort_range`], and bisects it. Sibling calls touch disjoint
//! sub-ranges, and leaves are emitted strictly left to right.

mod median_cut;
mod sorter;

pub use median_cut::{leaf_count, partition};
pub use sorter::sort_range;
