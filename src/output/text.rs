//! Plain text rendering of size groups and duplicate groups.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::duplicates::{DuplicateGroup, SizeGroup};

/// Render one size group, starting with a blank line.
#[must_use]
pub fn render_size_group(group: &SizeGroup) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{} bytes", group.size);
    for file in &group.files {
        let _ = writeln!(out, "{}", file.path.display());
    }
    out
}

/// Render one duplicate group, starting with a blank line.
#[must_use]
pub fn render_duplicate_group(group: &DuplicateGroup) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{} bytes", group.size);
    let _ = writeln!(out, "Hash: {}", group.hash);
    for entry in &group.entries {
        let _ = writeln!(out, "{}. {}", entry.number, entry.file.path.display());
    }
    out
}

/// Write every size group in order.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_size_groups<W: Write>(writer: &mut W, groups: &[SizeGroup]) -> io::Result<()> {
    for group in groups {
        writer.write_all(render_size_group(group).as_bytes())?;
    }
    Ok(())
}

/// Write every duplicate group in order.
///
/// Each block is followed by one extra blank line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_duplicate_groups<W: Write>(
    writer: &mut W,
    groups: &[DuplicateGroup],
) -> io::Result<()> {
    for group in groups {
        writeln!(writer, "{}", render_duplicate_group(group))?;
    }
    Ok(())
}
