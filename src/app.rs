//! Orchestration of a single scan.
//!
//! A run asks for (or takes from the command line) the extension filter and
//! sort direction, walks and hashes the tree, prints the size groups, then
//! asks whether to look for duplicates and prints those. Prompts and results
//! share the same output stream.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::Cli;
use crate::config::Config;
use crate::duplicates::{find_duplicates, group_by_size, sort_groups, DetectionMode, SortOrder};
use crate::error::ExitCode;
use crate::output::text;
use crate::prompt;
use crate::scanner::{ExtensionFilter, HashAlgorithm, Walker, WalkerConfig};

/// Message printed when the command line does not name exactly one directory.
pub const USAGE_MESSAGE: &str = "Directory is not specified";

/// Message printed when the tree cannot be walked.
pub const TRAVERSAL_MESSAGE: &str = "error walking directory";

/// Everything a run needs, with prompt answers that were given up front.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Root directory to scan
    pub root: PathBuf,
    /// Extension token; prompted for when `None`
    pub extension: Option<String>,
    /// Sort direction; prompted for when `None`
    pub sort_order: Option<SortOrder>,
    /// Whether to check duplicates; prompted for when `None`
    pub check_duplicates: Option<bool>,
    /// Duplicate detection mode
    pub mode: DetectionMode,
    /// Content hash algorithm
    pub algorithm: HashAlgorithm,
    /// Follow symbolic links while walking
    pub follow_symlinks: bool,
}

impl RunOptions {
    /// Options with every prompt left open and default settings.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: None,
            sort_order: None,
            check_duplicates: None,
            mode: DetectionMode::default(),
            algorithm: HashAlgorithm::default(),
            follow_symlinks: false,
        }
    }

    /// Build options from the command line, falling back to `config`.
    #[must_use]
    pub fn from_cli(cli: &Cli, config: &Config, root: PathBuf) -> Self {
        Self {
            root,
            extension: cli.ext.clone(),
            sort_order: cli.sort,
            check_duplicates: cli.duplicates_answer(),
            mode: cli.resolve_mode(config),
            algorithm: cli.resolve_algorithm(config),
            follow_symlinks: cli.resolve_follow_symlinks(config),
        }
    }
}

/// The single directory named on the command line, if exactly one was given.
#[must_use]
pub fn root_from(paths: &[PathBuf]) -> Option<&Path> {
    match paths {
        [root] => Some(root.as_path()),
        _ => None,
    }
}

/// Run the tool for parsed arguments against the given streams.
///
/// Anything other than exactly one path prints [`USAGE_MESSAGE`] and
/// succeeds without scanning.
///
/// # Errors
///
/// Returns an error if the `--config` file is invalid, or anything
/// [`run`] reports.
pub fn run_cli<R: BufRead, W: Write>(cli: &Cli, input: R, mut output: W) -> Result<ExitCode> {
    let Some(root) = root_from(&cli.paths) else {
        log::debug!("Expected one directory argument, got {}", cli.paths.len());
        writeln!(output, "{USAGE_MESSAGE}")?;
        output.flush()?;
        return Ok(ExitCode::Success);
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let options = RunOptions::from_cli(cli, &config, root.to_path_buf());
    run(&options, input, output)
}

/// Run one scan against the given input and output streams.
///
/// # Errors
///
/// Returns an error if a file cannot be read, input closes while a prompt
/// waits for an answer, or writing to `output` fails. A tree that cannot
/// be walked is not an error here: it prints [`TRAVERSAL_MESSAGE`] and
/// returns [`ExitCode::TraversalError`].
pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    mut input: R,
    mut output: W,
) -> Result<ExitCode> {
    let filter = match &options.extension {
        Some(token) => ExtensionFilter::new(token),
        None => prompt::ask_extension(&mut input, &mut output)?,
    };

    let order = match options.sort_order {
        Some(order) => order,
        None => prompt::ask_sort_order(&mut input, &mut output)?,
    };

    let config = WalkerConfig {
        filter,
        follow_symlinks: options.follow_symlinks,
        algorithm: options.algorithm,
    };
    log::debug!(
        "Scanning {} (algorithm: {}, filter: {:?})",
        options.root.display(),
        options.algorithm,
        config.filter.value()
    );

    let records = match Walker::new(&options.root, config).walk() {
        Ok(records) => records,
        Err(e) if e.is_traversal() => {
            log::debug!("Traversal failed: {e}");
            writeln!(output, "{TRAVERSAL_MESSAGE}")?;
            output.flush()?;
            return Ok(ExitCode::TraversalError);
        }
        Err(e) => return Err(e.into()),
    };

    let (mut groups, stats) = group_by_size(records);
    sort_groups(&mut groups, order);
    log::debug!(
        "{} file(s) in {} size group(s)",
        stats.total_files,
        groups.len()
    );

    text::write_size_groups(&mut output, &groups)?;

    let check = match options.check_duplicates {
        Some(answer) => answer,
        None => prompt::ask_check_duplicates(&mut input, &mut output)?,
    };

    if check {
        let duplicates = find_duplicates(&groups, options.mode);
        text::write_duplicate_groups(&mut output, &duplicates)?;
    }

    output.flush()?;
    Ok(ExitCode::Success)
}
