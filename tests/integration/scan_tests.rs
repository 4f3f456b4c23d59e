use dupescan::duplicates::{find_duplicates, group_by_size, sort_groups, DetectionMode, SortOrder};
use dupescan::scanner::{Walker, WalkerConfig};
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

const HELLO_MD5: &str = "5d41402abc4b2a76b9719d911017c592";

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();

    let records = Walker::new(dir.path(), WalkerConfig::default()).walk().unwrap();
    let (groups, stats) = group_by_size(records);

    assert!(groups.is_empty());
    assert_eq!(stats.total_files, 0);
    assert!(find_duplicates(&groups, DetectionMode::Anchored).is_empty());
}

#[test]
fn test_scan_same_size_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("b.txt"), "hello").unwrap();
    fs::write(dir.path().join("c.txt"), "world").unwrap();

    let records = Walker::new(dir.path(), WalkerConfig::default()).walk().unwrap();
    let (mut groups, _) = group_by_size(records);
    sort_groups(&mut groups, SortOrder::Descending);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].size, 5);
    let names: Vec<&str> = groups[0].files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);

    let dups = find_duplicates(&groups, DetectionMode::Anchored);
    assert_eq!(dups.len(), 1);
    assert_eq!(dups[0].hash, HELLO_MD5);
    let numbered: Vec<(usize, &str)> = dups[0]
        .entries
        .iter()
        .map(|e| (e.number, e.file.name.as_str()))
        .collect();
    assert_eq!(numbered, vec![(1, "b.txt"), (2, "a.txt")]);
}

#[test]
fn test_scan_nested_directories() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("subdir");
    fs::create_dir(&sub).unwrap();

    File::create(dir.path().join("a.txt"))
        .unwrap()
        .write_all(b"dup")
        .unwrap();
    File::create(sub.join("b.txt"))
        .unwrap()
        .write_all(b"dup")
        .unwrap();

    let records = Walker::new(dir.path(), WalkerConfig::default()).walk().unwrap();
    let (groups, _) = group_by_size(records);
    let dups = find_duplicates(&groups, DetectionMode::Exact);

    assert_eq!(dups.len(), 1);
    assert_eq!(
        dups[0]
            .entries
            .iter()
            .map(|e| e.file.path.clone())
            .collect::<Vec<_>>(),
        vec![dir.path().join("a.txt"), sub.join("b.txt")]
    );
}

#[test]
fn test_scan_multiple_groups_numbering_continues() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("1a.txt"), "group1").unwrap();
    fs::write(dir.path().join("1b.txt"), "group1").unwrap();
    fs::write(dir.path().join("1c.txt"), "group1").unwrap();
    fs::write(dir.path().join("2a.txt"), "group2!!").unwrap();
    fs::write(dir.path().join("2b.txt"), "group2!!").unwrap();

    let records = Walker::new(dir.path(), WalkerConfig::default()).walk().unwrap();
    let (mut groups, _) = group_by_size(records);
    sort_groups(&mut groups, SortOrder::Ascending);

    let dups = find_duplicates(&groups, DetectionMode::Exact);

    assert_eq!(dups.len(), 2);
    assert_eq!(dups[0].size, 6);
    assert_eq!(dups[1].size, 8);
    let numbers: Vec<usize> = dups
        .iter()
        .flat_map(|d| d.entries.iter().map(|e| e.number))
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_exact_mode_separates_genuine_duplicates_from_same_size_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.bin"), "AAAA").unwrap();
    fs::write(dir.path().join("b.bin"), "BBBB").unwrap();
    fs::write(dir.path().join("c.bin"), "AAAA").unwrap();
    fs::write(dir.path().join("d.bin"), "CCCC").unwrap();

    let records = Walker::new(dir.path(), WalkerConfig::default()).walk().unwrap();
    let (groups, _) = group_by_size(records);

    let exact = find_duplicates(&groups, DetectionMode::Exact);
    assert_eq!(exact.len(), 1);
    assert_eq!(
        exact[0]
            .entries
            .iter()
            .map(|e| e.file.path.clone())
            .collect::<Vec<_>>(),
        vec![dir.path().join("a.bin"), dir.path().join("c.bin")]
    );

    let legacy = find_duplicates(&groups, DetectionMode::Legacy);
    assert_eq!(legacy.len(), 1);
    assert_eq!(legacy[0].len(), 4);
}

#[test]
fn test_empty_files_are_never_grouped() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("empty1.txt")).unwrap();
    File::create(dir.path().join("empty2.txt")).unwrap();
    fs::write(dir.path().join("full.txt"), "x").unwrap();

    let records = Walker::new(dir.path(), WalkerConfig::default()).walk().unwrap();
    assert_eq!(records.len(), 3);

    let (groups, stats) = group_by_size(records);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].files[0].name, "full.txt");
    assert_eq!(stats.empty_files, 2);
}
