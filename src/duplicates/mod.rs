//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Size-based file grouping
//! - Sorting size groups by size
//! - Hash comparison within each size group
//! - Global numbering of the duplicates found

pub mod finder;
pub mod groups;

pub use finder::{detect_in_size_group, find_duplicates, DetectError, DetectionMode};
pub use groups::{
    group_by_size, sort_groups, DuplicateEntry, DuplicateGroup, GroupingStats, SizeGroup,
    SortOrder,
};
