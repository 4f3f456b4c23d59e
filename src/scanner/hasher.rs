//! Streaming file content hasher.
//!
//! # Overview
//! This module provides the [`Hasher`] struct for computing content digests
//! of whole files. Files are read in fixed-size chunks so memory use stays
//! flat regardless of file size. The default algorithm is MD5 (128 bits),
//! rendered as lowercase hex; SHA-256 and BLAKE3 are available as well.

use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use super::HashError;

/// Read buffer size for streaming (64 KiB).
const BUFFER_SIZE: usize = 64 * 1024;

/// Content hash algorithm.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// 128-bit MD5 digest
    #[default]
    Md5,
    /// 256-bit SHA-2 digest
    Sha256,
    /// 256-bit BLAKE3 digest
    Blake3,
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::Md5 => write!(f, "md5"),
            HashAlgorithm::Sha256 => write!(f, "sha256"),
            HashAlgorithm::Blake3 => write!(f, "blake3"),
        }
    }
}

/// In-progress digest for one of the supported algorithms.
enum DigestState {
    Md5(Md5),
    Sha256(Sha256),
    Blake3(Box<blake3::Hasher>),
}

impl DigestState {
    fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Md5 => Self::Md5(Md5::new()),
            HashAlgorithm::Sha256 => Self::Sha256(Sha256::new()),
            HashAlgorithm::Blake3 => Self::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Md5(h) => h.update(data),
            Self::Sha256(h) => h.update(data),
            Self::Blake3(h) => {
                h.update(data);
            }
        }
    }

    fn finalize_hex(self) -> String {
        match self {
            Self::Md5(h) => format!("{:x}", h.finalize()),
            Self::Sha256(h) => format!("{:x}", h.finalize()),
            Self::Blake3(h) => h.finalize().to_hex().to_string(),
        }
    }
}

/// File hasher with a fixed algorithm.
///
/// # Example
///
/// ```no_run
/// use dupescan::scanner::Hasher;
/// use std::path::Path;
///
/// let hasher = Hasher::new();
/// let hex = hasher.full_hash(Path::new("notes.txt")).unwrap();
/// println!("{hex}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Hasher {
    algorithm: HashAlgorithm,
}

impl Hasher {
    /// Create a hasher using the default algorithm (MD5).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hasher for a specific algorithm.
    #[must_use]
    pub fn with_algorithm(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Hash the entire content of a file.
    ///
    /// The file is opened, streamed to the end, and closed before this
    /// returns, including on error.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or read.
    pub fn full_hash(&self, path: &Path) -> Result<String, HashError> {
        let file = File::open(path).map_err(|e| map_io_error(path, e))?;
        self.hash_reader(file).map_err(|e| map_io_error(path, e))
    }

    /// Hash everything readable from `reader`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error other than `Interrupted` raised by the reader.
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> io::Result<String> {
        let mut state = DigestState::new(self.algorithm);
        let mut buffer = vec![0u8; BUFFER_SIZE];

        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => state.update(&buffer[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(state.finalize_hex())
    }
}

fn map_io_error(path: &Path, source: io::Error) -> HashError {
    match source.kind() {
        ErrorKind::NotFound => HashError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => HashError::PermissionDenied(path.to_path_buf()),
        _ => HashError::Io {
            path: path.to_path_buf(),
            source,
        },
    }
}
