//! Tree differ integration tests
//!
//! Builds pairs of directory trees on disk and checks the verdict stream.

use dirdiff::{Config, DiffEngine, Verdict};
use std::fs;
use std::ops::ControlFlow;
use std::path::Path;
use tempfile::TempDir;

// ═══════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

fn engine() -> DiffEngine {
    DiffEngine::new(&Config::default()).expect("engine should build")
}

fn diff(left: &TempDir, right: &TempDir) -> Vec<Verdict> {
    engine()
        .collect(left.path(), right.path())
        .expect("diff should succeed")
        .verdicts
}

// ═══════════════════════════════════════════════════════════
// Matching
// ═══════════════════════════════════════════════════════════

#[test]
fn test_same_names_produce_no_exclusive_verdicts() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    for (name, left_body, right_body) in [
        ("a.txt", "one", "one"),
        ("sub/b.txt", "two", "TWO"),
        ("sub/deeper/c.bin", "three", "three and more"),
    ] {
        write(left.path(), name, left_body.as_bytes());
        write(right.path(), name, right_body.as_bytes());
    }

    let verdicts = diff(&left, &right);
    assert!(verdicts
        .iter()
        .all(|v| !v.is_left_only() && !v.is_right_only()));
    assert_eq!(verdicts.len(), 2);
}

#[test]
fn test_exclusive_and_identical_files() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    write(left.path(), "a/x.txt", b"identical bytes");
    write(left.path(), "a/y.txt", b"left only");
    write(right.path(), "a/x.txt", b"identical bytes");
    write(right.path(), "a/z.txt", b"right only");

    let verdicts = diff(&left, &right);

    assert_eq!(verdicts.len(), 2);
    assert!(verdicts.contains(&Verdict::left_only(left.path().join("a/y.txt"))));
    assert!(verdicts.contains(&Verdict::right_only(right.path().join("a/z.txt"))));
}

#[test]
fn test_missing_subtree_reported_once_at_root() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    write(left.path(), "b/one.txt", b"1");
    write(left.path(), "b/nested/two.txt", b"2");

    let verdicts = diff(&left, &right);
    assert_eq!(verdicts, vec![Verdict::left_only(left.path().join("b"))]);
}

#[test]
fn test_right_only_directory_is_marked_right() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    write(right.path(), "extra/file.txt", b"r");

    let verdicts = diff(&left, &right);
    assert_eq!(verdicts, vec![Verdict::right_only(right.path().join("extra"))]);
}

#[test]
fn test_directory_versus_file_with_same_name() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    fs::create_dir(left.path().join("thing")).unwrap();
    write(right.path(), "thing", b"a file");

    let verdicts = diff(&left, &right);
    assert_eq!(
        verdicts,
        vec![
            Verdict::left_only(left.path().join("thing")),
            Verdict::right_only(right.path().join("thing")),
        ]
    );
}

#[test]
fn test_empty_directories_produce_nothing() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    fs::create_dir_all(left.path().join("empty/inner")).unwrap();
    fs::create_dir_all(right.path().join("empty/inner")).unwrap();

    let report = engine().collect(left.path(), right.path()).unwrap();
    assert!(report.is_identical());
    assert_eq!(report.stats.dirs_compared, 3);
}

// ═══════════════════════════════════════════════════════════
// Content
// ═══════════════════════════════════════════════════════════

#[test]
fn test_different_content_reports_both_paths() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    write(left.path(), "deep/down/data.bin", b"version-1");
    write(right.path(), "deep/down/data.bin", b"version-2");

    let verdicts = diff(&left, &right);
    assert_eq!(
        verdicts,
        vec![Verdict::different(
            left.path().join("deep/down/data.bin"),
            right.path().join("deep/down/data.bin"),
        )]
    );
}

#[test]
fn test_size_mismatch_is_different() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    write(left.path(), "f", b"short");
    write(right.path(), "f", b"much longer");

    let report = engine().collect(left.path(), right.path()).unwrap();
    assert_eq!(report.stats.different, 1);
    assert_eq!(report.stats.bytes_compared, 0);
}

#[test]
fn test_empty_files_are_equal() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    write(left.path(), "empty", b"");
    write(right.path(), "empty", b"");

    let report = engine().collect(left.path(), right.path()).unwrap();
    assert!(report.is_identical());
    assert_eq!(report.stats.files_compared, 1);
}

#[test]
fn test_full_compare_flag_catches_sampled_gap() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();

    let content: Vec<u8> = (0..100 * 64).map(|i| (i % 13) as u8).collect();
    let mut changed = content.clone();
    changed[64 * 2] ^= 0xAA; // block 2: skipped by a skip-7 stride
    write(left.path(), "big.bin", &content);
    write(right.path(), "big.bin", &changed);

    let sampled = DiffEngine::new(&Config {
        block_size: 64,
        ..Config::default()
    })
    .unwrap()
    .collect(left.path(), right.path())
    .unwrap();
    assert!(sampled.is_identical());

    let full = DiffEngine::new(&Config {
        block_size: 64,
        full_compare: true,
        ..Config::default()
    })
    .unwrap()
    .collect(left.path(), right.path())
    .unwrap();
    assert_eq!(full.stats.different, 1);
}

// ═══════════════════════════════════════════════════════════
// Ordering, filtering and errors
// ═══════════════════════════════════════════════════════════

#[test]
fn test_repeated_runs_are_identical() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    write(left.path(), "m/1.txt", b"1");
    write(left.path(), "m/2.txt", b"2");
    write(left.path(), "n/3.txt", b"3");
    write(right.path(), "m/2.txt", b"two");
    write(right.path(), "o/4.txt", b"4");
    write(right.path(), "root.txt", b"r");

    let first = engine().collect(left.path(), right.path()).unwrap();
    let second = engine().collect(left.path(), right.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.verdicts.len(), 5);
}

#[test]
fn test_subdirectories_complete_before_files() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    write(left.path(), "a_file.txt", b"left");
    write(left.path(), "z_dir/inner.txt", b"left");
    write(right.path(), "a_file.txt", b"rite");
    fs::create_dir(right.path().join("z_dir")).unwrap();

    let verdicts = diff(&left, &right);
    assert_eq!(
        verdicts,
        vec![
            Verdict::left_only(left.path().join("z_dir/inner.txt")),
            Verdict::different(
                left.path().join("a_file.txt"),
                right.path().join("a_file.txt")
            ),
        ]
    );
}

#[test]
fn test_exclude_patterns_apply_to_both_sides() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    write(left.path(), "keep.txt", b"k");
    write(right.path(), "keep.txt", b"k");
    write(left.path(), "debug.log", b"left log");
    write(right.path(), "build/out.o", b"obj");

    let config = Config {
        exclude_patterns: vec!["*.log".to_string(), "build".to_string()],
        ..Config::default()
    };
    let report = DiffEngine::new(&config)
        .unwrap()
        .collect(left.path(), right.path())
        .unwrap();
    assert!(report.is_identical());
}

#[test]
fn test_streaming_callback_matches_collect() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();
    write(left.path(), "a.txt", b"a");
    write(right.path(), "b.txt", b"b");

    let engine = engine();
    let mut streamed = Vec::new();
    let stats = engine
        .run(
            left.path(),
            right.path(),
            &mut |v| {
                streamed.push(v);
                ControlFlow::Continue(())
            },
            None,
        )
        .unwrap();

    let collected = engine.collect(left.path(), right.path()).unwrap();
    assert_eq!(streamed, collected.verdicts);
    assert_eq!(stats, collected.stats);
}

#[test]
fn test_missing_right_root_aborts() {
    let left = TempDir::new().unwrap();
    let err = engine()
        .collect(left.path(), &left.path().join("does-not-exist"))
        .unwrap_err();
    assert!(err.is_not_found());
}
