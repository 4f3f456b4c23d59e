use clap::Parser;
use dupescan::app::{run, run_cli, RunOptions};
use dupescan::cli::Cli;
use dupescan::duplicates::{DetectionMode, SortOrder};
use dupescan::error::ExitCode;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

const HELLO_MD5: &str = "5d41402abc4b2a76b9719d911017c592";

fn run_interactive(options: &RunOptions, input: &str) -> (ExitCode, String) {
    let mut out = Vec::new();
    let code = run(options, Cursor::new(input.as_bytes().to_vec()), &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

fn p(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_scenario_three_files_one_duplicate_pair() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("b.txt"), "hello").unwrap();
    fs::write(dir.path().join("c.txt"), "world").unwrap();

    let options = RunOptions::new(dir.path().to_path_buf());
    let (code, out) = run_interactive(&options, "\n1\nyes\n");

    let a = p(&dir.path().join("a.txt"));
    let b = p(&dir.path().join("b.txt"));
    let c = p(&dir.path().join("c.txt"));

    let expected = format!(
        "Enter file format:\n\
         Size sorting options:\n\
         1. Descending\n\
         2. Ascending\n\
         Enter a sorting option:\n\
         \n5 bytes\n{a}\n{b}\n{c}\n\
         \nCheck for duplicates\n\
         \n5 bytes\nHash: {HELLO_MD5}\n1. {b}\n2. {a}\n\n"
    );

    assert_eq!(code, ExitCode::Success);
    assert_eq!(out, expected);
}

#[test]
fn test_scenario_single_file_has_no_duplicate_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("only.txt"), "lonely").unwrap();

    let options = RunOptions {
        extension: Some(String::new()),
        sort_order: Some(SortOrder::Descending),
        check_duplicates: Some(true),
        ..RunOptions::new(dir.path().to_path_buf())
    };
    let (code, out) = run_interactive(&options, "");

    assert_eq!(code, ExitCode::Success);
    assert_eq!(out, format!("\n6 bytes\n{}\n", p(&dir.path().join("only.txt"))));
}

#[test]
fn test_sorting_ascending_and_descending() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("big.txt"), "0123456789").unwrap();
    fs::write(dir.path().join("small.txt"), "01").unwrap();
    fs::write(dir.path().join("mid.txt"), "01234").unwrap();

    let base = RunOptions {
        extension: Some(String::new()),
        check_duplicates: Some(false),
        ..RunOptions::new(dir.path().to_path_buf())
    };

    let (_, out) = run_interactive(&base, "2\n");
    let sizes: Vec<&str> = out.lines().filter(|l| l.ends_with(" bytes")).collect();
    assert_eq!(sizes, vec!["2 bytes", "5 bytes", "10 bytes"]);

    let (_, out) = run_interactive(&base, "1\n");
    let sizes: Vec<&str> = out.lines().filter(|l| l.ends_with(" bytes")).collect();
    assert_eq!(sizes, vec!["10 bytes", "5 bytes", "2 bytes"]);
}

#[test]
fn test_wrong_answers_reprompt() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();

    let options = RunOptions::new(dir.path().to_path_buf());
    let (code, out) = run_interactive(&options, "txt\n0\n2\nmaybe\nno\n");

    assert_eq!(code, ExitCode::Success);
    assert_eq!(out.matches("Wrong option").count(), 2);
    assert!(!out.contains("Hash:"));
}

#[test]
fn test_extension_answer_filters_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("x.txt"), "same").unwrap();
    fs::write(dir.path().join("x.md"), "same").unwrap();

    let options = RunOptions {
        sort_order: Some(SortOrder::Ascending),
        check_duplicates: Some(true),
        ..RunOptions::new(dir.path().to_path_buf())
    };
    let (_, out) = run_interactive(&options, "txt\n");

    assert!(out.contains(&p(&dir.path().join("x.txt"))));
    assert!(!out.contains(&p(&dir.path().join("x.md"))));
    assert!(!out.contains("Hash:"));
}

#[test]
fn test_legacy_mode_reports_same_size_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("b.txt"), "hello").unwrap();
    fs::write(dir.path().join("c.txt"), "world").unwrap();

    let options = RunOptions {
        extension: Some(String::new()),
        sort_order: Some(SortOrder::Descending),
        check_duplicates: Some(true),
        mode: DetectionMode::Legacy,
        ..RunOptions::new(dir.path().to_path_buf())
    };
    let (_, out) = run_interactive(&options, "");

    let c = p(&dir.path().join("c.txt"));
    let a = p(&dir.path().join("a.txt"));
    assert!(out.contains(&format!("2. {c}\n")));
    assert!(out.contains(&format!("3. {a}\n")));
}

#[test]
fn test_missing_root_prints_only_error_message() {
    let dir = tempdir().unwrap();
    let options = RunOptions::new(dir.path().join("does-not-exist"));

    let (code, out) = run_interactive(&options, "\n1\n");

    assert_eq!(code, ExitCode::TraversalError);
    assert!(out.ends_with("Enter a sorting option:\nerror walking directory\n"));
    assert!(!out.contains("bytes"));
}

fn run_args(args: &[&str], input: &str) -> (ExitCode, String) {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let code = run_cli(&cli, Cursor::new(input.as_bytes().to_vec()), &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn test_no_directory_argument_prints_usage() {
    let (code, out) = run_args(&["dupescan"], "");

    assert_eq!(code, ExitCode::Success);
    assert_eq!(out, "Directory is not specified\n");
}

#[test]
fn test_two_directory_arguments_print_usage() {
    let (code, out) = run_args(&["dupescan", "/a", "/b"], "");

    assert_eq!(code, ExitCode::Success);
    assert_eq!(out, "Directory is not specified\n");
}

#[test]
fn test_flags_answer_every_prompt() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("b.txt"), "hello").unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "{}").unwrap();

    let root = p(dir.path());
    let config_arg = p(&config);
    let (code, out) = run_args(
        &[
            "dupescan",
            root.as_str(),
            "-e",
            "txt",
            "-s",
            "asc",
            "-d",
            "--config",
            config_arg.as_str(),
        ],
        "",
    );

    let a = p(&dir.path().join("a.txt"));
    let b = p(&dir.path().join("b.txt"));
    assert_eq!(code, ExitCode::Success);
    assert_eq!(
        out,
        format!("\n5 bytes\n{a}\n{b}\n\n5 bytes\nHash: {HELLO_MD5}\n1. {b}\n2. {a}\n\n")
    );
}
