//! Shared fixtures for the end-to-end tests.
//!
//! These tests build real directory trees in a temp dir and drive the
//! `file-renamer` binary through its command-line interface.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an empty file (and any missing parents) under `root`.
pub fn touch(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, rel).unwrap();
    path
}

/// A small tree with matches at the top level and one level down.
///
/// ```text
/// main.cpp
/// util.CPP
/// notes.md
/// .gitignore
/// src/lib.cpp
/// ```
#[allow(unused)]
pub fn create_test_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "main.cpp");
    touch(temp.path(), "util.CPP");
    touch(temp.path(), "notes.md");
    touch(temp.path(), ".gitignore");
    touch(temp.path(), "src/lib.cpp");
    temp
}

/// Returns the binary with color disabled, ready for arguments.
pub fn renamer() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("file-renamer");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Runs a rename over `root` with `--yes`.
#[allow(unused)]
pub fn run_rename(
    root: &Path,
    from: &str,
    to: &str,
    extra_args: &[&str],
) -> assert_cmd::assert::Assert {
    renamer()
        .arg("-p")
        .arg(root)
        .args(["-f", from, "-t", to, "-y"])
        .args(extra_args)
        .assert()
}

/// Runs a rename over `root` without `--yes`, feeding `answer` on stdin.
#[allow(unused)]
pub fn run_with_answer(root: &Path, from: &str, to: &str, answer: &str) -> assert_cmd::assert::Assert {
    renamer()
        .arg("-p")
        .arg(root)
        .args(["-f", from, "-t", to])
        .write_stdin(answer)
        .assert()
}
