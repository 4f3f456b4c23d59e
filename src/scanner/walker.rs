//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct, which traverses a directory
//! tree depth-first, keeps the regular files accepted by the extension
//! filter, and hashes each of them eagerly into a [`FileRecord`].
//!
//! Entries within a directory are visited in file-name order, so the
//! output order is stable for a given tree. Everything runs on the calling
//! thread; each file is opened, read to the end, and closed before the next
//! one is touched.
//!
//! # Failure policy
//!
//! The walk is all-or-nothing. A missing root or an unreadable directory
//! yields a traversal error, and a file that cannot be read yields a hash
//! error. No partial record list is returned in either case.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileRecord, Hasher, ScanError, WalkerConfig};

/// Sequential directory walker producing hashed file records.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
    /// Content hasher
    hasher: Hasher,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// # Arguments
    ///
    /// * `path` - Root directory to scan
    /// * `config` - Walker configuration options
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        let hasher = Hasher::with_algorithm(config.algorithm);
        Self {
            root: path.to_path_buf(),
            config,
            hasher,
        }
    }

    /// Walk the tree and hash every accepted file.
    ///
    /// # Errors
    ///
    /// - [`ScanError::NotFound`] if the root does not exist
    /// - [`ScanError::Traversal`] if the root itself cannot be read
    ///
    /// Unreadable subdirectories and symlink loops are skipped with a warning.
    /// - [`ScanError::Hash`] if an accepted file cannot be read
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dupescan::scanner::{Walker, WalkerConfig};
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."), WalkerConfig::default());
    /// let records = walker.walk().unwrap();
    /// println!("Found {} files", records.len());
    /// ```
    pub fn walk(&self) -> Result<Vec<FileRecord>, ScanError> {
        if !self.root.exists() {
            return Err(ScanError::NotFound(self.root.clone()));
        }

        let walk_dir = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();

        let mut records = Vec::new();

        for entry in walk_dir {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(ScanError::Traversal {
                        path: e
                            .path()
                            .map_or_else(|| self.root.clone(), Path::to_path_buf),
                        source: e,
                    });
                }
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };

            let file_type = entry.file_type();

            if file_type.is_dir() {
                continue;
            }

            if !file_type.is_file() {
                log::trace!("Skipping non-regular file: {}", entry.path().display());
                continue;
            }

            if !self.config.filter.matches(entry.path()) {
                log::trace!("Filtered out by extension: {}", entry.path().display());
                continue;
            }

            let metadata = entry.metadata().map_err(|e| ScanError::Metadata {
                path: entry.path().to_path_buf(),
                source: e,
            })?;

            let hash = self.hasher.full_hash(entry.path())?;
            log::trace!("Hashed {} ({} bytes): {}", entry.path().display(), metadata.len(), hash);

            records.push(FileRecord::new(entry.into_path(), metadata.len(), hash));
        }

        log::debug!(
            "Walk of {} complete: {} file(s) accepted",
            self.root.display(),
            records.len()
        );

        Ok(records)
    }
}
