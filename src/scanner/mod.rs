//! Scanner module for directory traversal and file hashing.
//!
//! This module provides functionality for:
//! - Extension filtering of candidate paths
//! - Sequential directory walking using walkdir
//! - Whole-file content hashing (MD5 by default)
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`filter`]: Extension filter built from the user's token
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: Streaming content hashing
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::{ExtensionFilter, Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let config = WalkerConfig {
//!     filter: ExtensionFilter::new("txt"),
//!     ..Default::default()
//! };
//!
//! let walker = Walker::new(Path::new("."), config);
//! for record in walker.walk().unwrap() {
//!     println!("{}: {} bytes ({})", record.path.display(), record.size, record.hash);
//! }
//! ```

pub mod filter;
pub mod hasher;
pub mod walker;

use std::path::PathBuf;

// Re-export main types
pub use filter::{extension_of, ExtensionFilter};
pub use hasher::{HashAlgorithm, Hasher};
pub use walker::Walker;

/// A scanned file together with its content hash.
///
/// Created once per file during traversal and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Final path component
    pub name: String,
    /// Path as produced by the walk (root joined with the relative path)
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Extension including the leading dot, empty if none
    pub extension: String,
    /// Lowercase hex digest of the full content
    pub hash: String,
}

impl FileRecord {
    /// Create a new FileRecord, deriving `name` and `extension` from `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the file
    /// * `size` - File size in bytes
    /// * `hash` - Hex digest of the file content
    #[must_use]
    pub fn new(path: PathBuf, size: u64, hash: impl Into<String>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = extension_of(&path);
        Self {
            name,
            path,
            size,
            extension,
            hash: hash.into(),
        }
    }
}

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Extension filter applied to every regular file.
    pub filter: ExtensionFilter,

    /// Follow symbolic links during traversal.
    /// Loops are detected by walkdir and reported as traversal errors.
    pub follow_symlinks: bool,

    /// Content hash algorithm.
    pub algorithm: HashAlgorithm,
}

/// Errors that can occur during directory scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The specified root path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The tree could not be traversed.
    #[error("Cannot traverse {path}: {source}")]
    Traversal {
        /// Path where traversal failed
        path: PathBuf,
        /// The underlying walkdir error
        #[source]
        source: walkdir::Error,
    },

    /// File metadata could not be read.
    #[error("Cannot read metadata for {path}: {source}")]
    Metadata {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying walkdir error
        #[source]
        source: walkdir::Error,
    },

    /// A file could not be opened or read while hashing.
    #[error(transparent)]
    Hash(#[from] HashError),
}

impl ScanError {
    /// Whether this error means the tree itself could not be walked,
    /// as opposed to a single file failing to read.
    #[must_use]
    pub fn is_traversal(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Traversal { .. })
    }
}

/// Errors that can occur during file hashing.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
