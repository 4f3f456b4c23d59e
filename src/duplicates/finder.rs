//! Hash comparison within size groups.
//!
//! # Overview
//!
//! Each size group with at least two members is examined for files sharing
//! a content hash. Every duplicate found receives a number from a single
//! counter that runs across the whole pass and is never reset between
//! groups. The counter is threaded through [`detect_in_size_group`] by value
//! and returned updated.
//!
//! Three detection modes are available, see [`DetectionMode`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::groups::{DuplicateEntry, DuplicateGroup, SizeGroup};

/// How members of a size group are matched against each other.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMode {
    /// Pair members with the first file of the group (the anchor).
    ///
    /// The first non-anchor member whose hash repeats in the group fixes
    /// the group hash. Non-anchor members with that hash are reported in
    /// order, the anchor last if it shares it. At most one group per size.
    #[default]
    Anchored,
    /// Anchored pairing with the historical always-true membership check:
    /// every non-anchor member is reported regardless of its hash.
    Legacy,
    /// True hash-equality grouping: one group per hash shared by 2+ files.
    Exact,
}

impl std::fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectionMode::Anchored => write!(f, "anchored"),
            DetectionMode::Legacy => write!(f, "legacy"),
            DetectionMode::Exact => write!(f, "exact"),
        }
    }
}

/// Reasons a size group yields no duplicate groups.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// The group has fewer than two files.
    #[error("need at least two files of the same size to check for duplicates ({size} bytes: {count} file(s))")]
    InsufficientMembers {
        /// Size of the group
        size: u64,
        /// Number of files in it
        count: usize,
    },
}

/// Find duplicates in a single size group.
///
/// # Arguments
///
/// * `group` - The size group to examine
/// * `mode` - Matching strategy
/// * `last_number` - Last sequence number handed out so far
///
/// # Returns
///
/// The duplicate groups built from this size group (zero or one for the
/// anchored modes, any number for [`DetectionMode::Exact`]) and the updated
/// last sequence number.
///
/// # Errors
///
/// [`DetectError::InsufficientMembers`] if the group has fewer than two
/// files. The counter is not advanced in that case.
pub fn detect_in_size_group(
    group: &SizeGroup,
    mode: DetectionMode,
    last_number: usize,
) -> Result<(Vec<DuplicateGroup>, usize), DetectError> {
    if group.len() < 2 {
        return Err(DetectError::InsufficientMembers {
            size: group.size,
            count: group.len(),
        });
    }

    let result = match mode {
        DetectionMode::Anchored => {
            let (dup, last) = anchored(group, last_number);
            (dup.into_iter().collect(), last)
        }
        DetectionMode::Legacy => {
            let (dup, last) = legacy(group, last_number);
            (dup.into_iter().collect(), last)
        }
        DetectionMode::Exact => exact(group, last_number),
    };

    Ok(result)
}

/// Run detection over every size group, numbering duplicates from 1.
///
/// Groups that are too small are skipped silently (logged at debug level).
/// Output order follows the input order of `groups`.
#[must_use]
pub fn find_duplicates(groups: &[SizeGroup], mode: DetectionMode) -> Vec<DuplicateGroup> {
    let mut last_number = 0;
    let mut found = Vec::new();

    for group in groups {
        match detect_in_size_group(group, mode, last_number) {
            Ok((dups, last)) => {
                last_number = last;
                found.extend(dups);
            }
            Err(e) => log::debug!("Skipping size group: {e}"),
        }
    }

    log::debug!(
        "Duplicate detection ({mode}) complete: {} group(s), {} file(s) numbered",
        found.len(),
        last_number
    );

    found
}

/// Anchor-based pairing with a single shared hash.
///
/// The group hash is taken from the first non-anchor member whose hash
/// occurs more than once in the size group. Every non-anchor member with
/// that hash is numbered in order, then the anchor if it carries it too.
fn anchored(group: &SizeGroup, mut last_number: usize) -> (Option<DuplicateGroup>, usize) {
    let Some((anchor, rest)) = group.files.split_first() else {
        return (None, last_number);
    };

    let occurs_twice = |hash: &str| group.files.iter().filter(|f| f.hash == hash).count() > 1;
    let Some(hash) = rest
        .iter()
        .map(|f| f.hash.as_str())
        .find(|hash| occurs_twice(hash))
    else {
        return (None, last_number);
    };

    let mut dup = DuplicateGroup::new(group.size);
    dup.hash = hash.to_string();

    for file in rest.iter().filter(|f| f.hash == hash) {
        last_number += 1;
        dup.entries.push(DuplicateEntry::new(file.clone(), last_number));
    }

    if anchor.hash == hash {
        last_number += 1;
        dup.entries.push(DuplicateEntry::new(anchor.clone(), last_number));
    }

    (Some(dup), last_number)
}

/// The historical pairing: the membership check runs after the member's
/// own hash was recorded, so it always succeeds.
fn legacy(group: &SizeGroup, mut last_number: usize) -> (Option<DuplicateGroup>, usize) {
    let Some((anchor, rest)) = group.files.split_first() else {
        return (None, last_number);
    };

    let mut dup = DuplicateGroup::new(group.size);
    let mut seen: Vec<&str> = vec![anchor.hash.as_str()];

    for file in rest {
        seen.push(file.hash.as_str());
        if seen.contains(&file.hash.as_str()) {
            last_number += 1;
            dup.entries.push(DuplicateEntry::new(file.clone(), last_number));
            if dup.hash.is_empty() {
                dup.hash.clone_from(&file.hash);
            }
        }
    }

    if rest.iter().any(|f| f.hash == anchor.hash) {
        last_number += 1;
        dup.entries.push(DuplicateEntry::new(anchor.clone(), last_number));
    }

    (Some(dup), last_number)
}

/// Hash-equality grouping within one size group.
fn exact(group: &SizeGroup, mut last_number: usize) -> (Vec<DuplicateGroup>, usize) {
    let mut order: Vec<&str> = Vec::new();
    let mut by_hash: HashMap<&str, Vec<usize>> = HashMap::new();

    for (idx, file) in group.files.iter().enumerate() {
        by_hash
            .entry(file.hash.as_str())
            .or_insert_with(|| {
                order.push(file.hash.as_str());
                Vec::new()
            })
            .push(idx);
    }

    let mut dups = Vec::new();
    for hash in order {
        let members = &by_hash[hash];
        if members.len() < 2 {
            continue;
        }

        let mut dup = DuplicateGroup::new(group.size);
        dup.hash = hash.to_string();
        for &idx in members {
            last_number += 1;
            dup.entries
                .push(DuplicateEntry::new(group.files[idx].clone(), last_number));
        }
        dups.push(dup);
    }

    (dups, last_number)
}
