//! Size grouping and duplicate group types.
//!
//! # Overview
//!
//! Files with different sizes cannot be duplicates, so every scan starts by
//! partitioning the walked files by their exact byte size. Groups appear in
//! the order their size was first seen and list their members in input
//! order. Empty files are never grouped.
//!
//! # Example
//!
//! ```
//! use dupescan::scanner::FileRecord;
//! use dupescan::duplicates::{group_by_size, sort_groups, SortOrder};
//! use std::path::PathBuf;
//!
//! let files = vec![
//!     FileRecord::new(PathBuf::from("/file1.txt"), 1024, "aa"),
//!     FileRecord::new(PathBuf::from("/file2.txt"), 2048, "bb"),
//!     FileRecord::new(PathBuf::from("/file3.txt"), 1024, "aa"),
//! ];
//!
//! let (mut groups, stats) = group_by_size(files);
//! sort_groups(&mut groups, SortOrder::Descending);
//!
//! assert_eq!(stats.total_files, 3);
//! assert_eq!(groups[0].size, 2048);
//! assert_eq!(groups[1].len(), 2);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::scanner::FileRecord;

/// A group of files with the same size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeGroup {
    /// File size in bytes (shared by all files in this group)
    pub size: u64,
    /// Files with this exact size, in input order
    pub files: Vec<FileRecord>,
}

impl SizeGroup {
    /// Create a new, empty size group.
    #[must_use]
    pub fn new(size: u64) -> Self {
        Self {
            size,
            files: Vec::new(),
        }
    }

    /// Create a size group with initial files.
    #[must_use]
    pub fn with_files(size: u64, files: Vec<FileRecord>) -> Self {
        Self { size, files }
    }

    /// Add a file to this group.
    ///
    /// # Panics
    ///
    /// Debug assertion fails if file size doesn't match group size.
    pub fn add(&mut self, file: FileRecord) {
        debug_assert_eq!(
            file.size, self.size,
            "File size {} doesn't match group size {}",
            file.size, self.size
        );
        self.files.push(file);
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Direction in which size groups are listed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Largest size first
    #[default]
    #[value(name = "desc")]
    Descending,
    /// Smallest size first
    #[value(name = "asc")]
    Ascending,
}

/// Sort size groups by size.
///
/// The sort is stable: groups of equal size keep their relative order.
pub fn sort_groups(groups: &mut [SizeGroup], order: SortOrder) {
    match order {
        SortOrder::Descending => groups.sort_by(|a, b| b.size.cmp(&a.size)),
        SortOrder::Ascending => groups.sort_by(|a, b| a.size.cmp(&b.size)),
    }
}

/// One file reported as a duplicate, with its running number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    /// The duplicate file
    pub file: FileRecord,
    /// Position in the numbering shared by the whole detection pass (1-based)
    pub number: usize,
}

impl DuplicateEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(file: FileRecord, number: usize) -> Self {
        Self { file, number }
    }
}

/// Files within one size group that share a content hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// File size in bytes
    pub size: u64,
    /// Hex content hash shared by the entries (empty until the first match)
    pub hash: String,
    /// Numbered duplicate entries
    pub entries: Vec<DuplicateEntry>,
}

impl DuplicateGroup {
    /// Create an empty group for a size.
    #[must_use]
    pub fn new(size: u64) -> Self {
        Self {
            size,
            hash: String::new(),
            entries: Vec::new(),
        }
    }

    /// Number of entries in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if this group has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Statistics from the size grouping pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Total number of files processed
    pub total_files: usize,
    /// Total size of all files in bytes
    pub total_size: u64,
    /// Number of empty files left out of grouping
    pub empty_files: usize,
    /// Number of distinct non-zero sizes (equals the number of groups)
    pub unique_sizes: usize,
    /// Number of groups holding exactly one file
    pub singleton_groups: usize,
}

/// Group files by size.
///
/// Every non-empty file lands in exactly one group, including sizes that
/// occur only once. Groups are ordered by first occurrence of their size
/// and list their files in input order.
///
/// # Example
///
/// ```
/// use dupescan::scanner::FileRecord;
/// use dupescan::duplicates::group_by_size;
/// use std::path::PathBuf;
///
/// let files = vec![
///     FileRecord::new(PathBuf::from("/a.txt"), 100, "x"),
///     FileRecord::new(PathBuf::from("/b.txt"), 0, "y"),
///     FileRecord::new(PathBuf::from("/c.txt"), 200, "z"),
/// ];
///
/// let (groups, stats) = group_by_size(files);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].size, 100);
/// assert_eq!(stats.empty_files, 1);
/// assert_eq!(stats.singleton_groups, 2);
/// ```
#[must_use]
pub fn group_by_size(files: impl IntoIterator<Item = FileRecord>) -> (Vec<SizeGroup>, GroupingStats) {
    let mut groups: Vec<SizeGroup> = Vec::new();
    let mut index_by_size: HashMap<u64, usize> = HashMap::new();
    let mut stats = GroupingStats::default();

    for file in files {
        stats.total_files += 1;
        stats.total_size += file.size;

        if file.size == 0 {
            stats.empty_files += 1;
            log::debug!("Empty file left out of grouping: {}", file.path.display());
            continue;
        }

        let idx = *index_by_size.entry(file.size).or_insert_with(|| {
            groups.push(SizeGroup::new(file.size));
            groups.len() - 1
        });
        groups[idx].add(file);
    }

    stats.unique_sizes = groups.len();
    stats.singleton_groups = groups.iter().filter(|g| g.len() == 1).count();

    log::debug!(
        "Grouping complete: {} files -> {} size groups ({} singletons, {} empty files skipped)",
        stats.total_files,
        stats.unique_sizes,
        stats.singleton_groups,
        stats.empty_files
    );

    (groups, stats)
}
