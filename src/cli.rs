//! Command-line interface definitions for dupescan.
//!
//! The tool takes a single directory argument and asks the remaining
//! questions interactively. Each question can be answered up front with a
//! flag, which skips the corresponding prompt.
//!
//! # Example
//!
//! ```bash
//! # Fully interactive
//! dupescan ~/Downloads
//!
//! # Only .jpg files, largest first, check duplicates without asking
//! dupescan ~/Pictures --ext jpg --sort desc --duplicates
//!
//! # True hash-equality grouping with BLAKE3
//! dupescan ~/Pictures --mode exact --algorithm blake3
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::duplicates::{DetectionMode, SortOrder};
use crate::scanner::HashAlgorithm;

/// Group files by size and find duplicates by content hash.
#[derive(Debug, Parser)]
#[command(name = "dupescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan (exactly one)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// File extension to keep, without the dot (skips the format prompt)
    ///
    /// An empty value keeps every file.
    #[arg(short, long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Size sort direction (skips the sorting prompt)
    #[arg(short, long, value_enum)]
    pub sort: Option<SortOrder>,

    /// Check for duplicates without asking
    #[arg(short, long, conflicts_with = "no_duplicates")]
    pub duplicates: bool,

    /// Skip the duplicate check without asking
    #[arg(long)]
    pub no_duplicates: bool,

    /// Duplicate detection mode
    #[arg(long, value_enum)]
    pub mode: Option<DetectionMode>,

    /// Content hash algorithm
    #[arg(long, value_enum)]
    pub algorithm: Option<HashAlgorithm>,

    /// Follow symbolic links during scan
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Path to a JSON config file with default settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

impl Cli {
    /// The answer to the duplicate prompt given on the command line, if any.
    #[must_use]
    pub fn duplicates_answer(&self) -> Option<bool> {
        if self.duplicates {
            Some(true)
        } else if self.no_duplicates {
            Some(false)
        } else {
            None
        }
    }

    /// Detection mode, falling back to the config file.
    #[must_use]
    pub fn resolve_mode(&self, config: &Config) -> DetectionMode {
        self.mode.unwrap_or(config.mode)
    }

    /// Hash algorithm, falling back to the config file.
    #[must_use]
    pub fn resolve_algorithm(&self, config: &Config) -> HashAlgorithm {
        self.algorithm.unwrap_or(config.algorithm)
    }

    /// Symlink following, enabled by either the flag or the config file.
    #[must_use]
    pub fn resolve_follow_symlinks(&self, config: &Config) -> bool {
        self.follow_symlinks || config.follow_symlinks
    }
}
