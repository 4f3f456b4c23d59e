//! Output formatters for scan results.
//!
//! Results are rendered as plain text on standard output:
//! - size groups: a blank line, `<size> bytes`, then one path per line
//! - duplicate groups: a blank line, `<size> bytes`, `Hash: <hex>`, then
//!   `<number>. <path>` per entry
//!
//! # Example
//!
//! ```no_run
//! use dupescan::duplicates::group_by_size;
//! use dupescan::output::text;
//! use dupescan::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let records = Walker::new(Path::new("."), WalkerConfig::default()).walk().unwrap();
//! let (groups, _stats) = group_by_size(records);
//!
//! let stdout = std::io::stdout();
//! text::write_size_groups(&mut stdout.lock(), &groups).unwrap();
//! ```

pub mod text;

pub use text::{render_duplicate_group, render_size_group, write_duplicate_groups, write_size_groups};
