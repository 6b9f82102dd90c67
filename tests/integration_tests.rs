mod common;

use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_flat_rename_with_yes() {
    let temp = create_test_tree();
    let root = temp.path();

    run_rename(root, "cpp", "txt", &[])
        .success()
        .stdout(predicate::str::contains("Scanning directory:"))
        .stdout(predicate::str::contains("file found:"))
        .stdout(predicate::str::contains(
            "Will change extensions from '.cpp' to '.txt'",
        ))
        .stdout(predicate::str::contains("Renaming: "))
        .stdout(predicate::str::contains("Done. Successfully renamed 2 files."))
        .stdout(predicate::str::contains("Do you want to proceed").not());

    assert!(root.join("main.txt").exists());
    assert!(root.join("util.txt").exists());
    assert!(!root.join("main.cpp").exists());
    assert!(!root.join("util.CPP").exists());

    // Nested file is untouched without -r
    assert!(root.join("src/lib.cpp").exists());
    assert!(root.join("notes.md").exists());
}

#[test]
fn test_recursive_rename() {
    let temp = create_test_tree();
    let root = temp.path();

    run_rename(root, "cpp", "txt", &["--recursive"])
        .success()
        .stdout(predicate::str::contains("(recursive)"))
        .stdout(predicate::str::contains("Done. Successfully renamed 3 files."));

    assert!(root.join("src/lib.txt").exists());
    assert!(!root.join("src/lib.cpp").exists());
}

#[test]
fn test_dotted_extensions_behave_like_bare_ones() {
    let temp = create_test_tree();
    let root = temp.path();

    run_rename(root, ".cpp", ".txt", &[])
        .success()
        .stdout(predicate::str::contains(
            "Will change extensions from '.cpp' to '.txt'",
        ))
        .stdout(predicate::str::contains("Done. Successfully renamed 2 files."));

    assert!(root.join("main.txt").exists());
    assert!(!root.join("main..txt").exists());
}

#[test]
fn test_single_file_summary_is_singular() {
    let temp = tempfile::TempDir::new().unwrap();
    touch(temp.path(), "only.cpp");

    run_rename(temp.path(), "cpp", "h", &[])
        .success()
        .stdout(predicate::str::contains("Done. Successfully renamed 1 file."));

    assert!(temp.path().join("only.h").exists());
}

#[test]
fn test_confirmation_yes_renames() {
    let temp = create_test_tree();
    let root = temp.path();

    run_with_answer(root, "cpp", "txt", "y\n")
        .success()
        .stdout(predicate::str::contains(
            "Do you want to proceed with renaming? (y/N): ",
        ))
        .stdout(predicate::str::contains("Done. Successfully renamed 2 files."));

    assert!(root.join("main.txt").exists());
}

#[test]
fn test_confirmation_uppercase_y_renames() {
    let temp = create_test_tree();

    run_with_answer(temp.path(), "cpp", "txt", "Y\n").success();

    assert!(temp.path().join("main.txt").exists());
}

#[test]
fn test_declined_confirmation_renames_nothing() {
    for answer in ["n\n", "\n", "yes\n", "", "yy\n"] {
        let temp = create_test_tree();
        let root = temp.path();

        run_with_answer(root, "cpp", "txt", answer)
            .success()
            .stdout(predicate::str::contains("Operation cancelled."))
            .stdout(predicate::str::contains("Renaming:").not());

        assert!(root.join("main.cpp").exists(), "answer {:?}", answer);
        assert!(!root.join("main.txt").exists(), "answer {:?}", answer);
    }
}

#[test]
fn test_yes_never_reads_closed_stdin() {
    let temp = create_test_tree();

    // stdin is closed by default when running through assert_cmd
    run_rename(temp.path(), "cpp", "txt", &[])
        .success()
        .stdout(predicate::str::contains("Operation cancelled.").not());

    assert!(temp.path().join("main.txt").exists());
}

#[test]
fn test_no_matches_exits_successfully_without_prompt() {
    let temp = create_test_tree();

    run_with_answer(temp.path(), "rs", "txt", "")
        .success()
        .stdout(predicate::str::contains(
            "No files with extension '.rs' found to rename.",
        ))
        .stdout(predicate::str::contains("Do you want to proceed").not());
}

#[test]
fn test_dry_run_changes_nothing() {
    let temp = create_test_tree();
    let root = temp.path();

    renamer()
        .arg("--path")
        .arg(root)
        .args(["--from", "cpp", "--to", "txt", "--dry-run", "-r"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would rename:"))
        .stdout(predicate::str::contains("Dry run: 3 files would be renamed."))
        .stdout(predicate::str::contains("Do you want to proceed").not());

    assert!(root.join("main.cpp").exists());
    assert!(root.join("src/lib.cpp").exists());
    assert!(!root.join("main.txt").exists());
}

#[test]
fn test_max_files_truncates_with_warning() {
    let temp = tempfile::TempDir::new().unwrap();
    for name in ["a.cpp", "b.cpp", "c.cpp"] {
        touch(temp.path(), name);
    }

    run_rename(temp.path(), "cpp", "txt", &["--max-files", "2"])
        .success()
        .stderr(predicate::str::contains("Maximum file limit (2) reached"))
        .stdout(predicate::str::contains("Done. Successfully renamed 2 files."));

    let remaining = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|x| x == "cpp"))
        .count();
    assert_eq!(remaining, 1);
}

#[test]
fn test_files_are_listed_before_renaming() {
    let temp = tempfile::TempDir::new().unwrap();
    touch(temp.path(), "one.cpp");

    let output = run_rename(temp.path(), "cpp", "txt", &[]).success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let listed = stdout.find("  ").unwrap();
    let renamed = stdout.find("Renaming:").unwrap();
    assert!(listed < renamed, "{}", stdout);
    assert!(stdout.contains(&format!(
        "  {}",
        temp.path().join("one.cpp").display()
    )));
}
