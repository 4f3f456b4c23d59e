//! Extension filtering for the file walker.
//!
//! The user supplies an extension token without its leading dot (`txt`).
//! The filter stores it normalized as `.txt`; an empty token becomes the
//! bare `"."` sentinel, which disables filtering entirely.

use std::path::Path;

/// Sentinel value meaning "no extension was given".
const NO_FILTER: &str = ".";

/// Decides whether a path is included in a scan based on its extension.
///
/// Matching is exact and case-sensitive: `.TXT` does not match `.txt`.
///
/// # Example
///
/// ```
/// use dupescan::scanner::ExtensionFilter;
/// use std::path::Path;
///
/// let filter = ExtensionFilter::new("txt");
/// assert!(filter.matches(Path::new("/notes/a.txt")));
/// assert!(!filter.matches(Path::new("/notes/a.md")));
///
/// let everything = ExtensionFilter::new("");
/// assert!(!everything.should_filter());
/// assert!(everything.matches(Path::new("/notes/a.md")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    ext: String,
}

impl ExtensionFilter {
    /// Create a filter from a user-supplied token.
    #[must_use]
    pub fn new(token: &str) -> Self {
        Self {
            ext: format!(".{token}"),
        }
    }

    /// Whether this filter restricts anything at all.
    #[must_use]
    pub fn should_filter(&self) -> bool {
        self.ext != NO_FILTER
    }

    /// The normalized filter value, including the leading dot.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.ext
    }

    /// Check whether `path` passes the filter.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        !self.should_filter() || extension_of(path) == self.ext
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new("")
    }
}

/// Extension of the final path component, including the leading dot.
///
/// Everything from the last `.` of the file name onward is returned, so
/// dotfiles such as `.bashrc` report `.bashrc` and `archive.tar.gz`
/// reports `.gz`. Names without a dot yield an empty string.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    match name.rfind('.') {
        Some(idx) => name[idx..].to_string(),
        None => String::new(),
    }
}
