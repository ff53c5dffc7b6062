use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Commit date used by every scenario unless a test picks its own
pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";
/// `COMMIT_DATE` as printed by log
pub const READABLE_COMMIT_DATE: &str = "Sun Jan 1 12:00:00 2023 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository whose head commit tracks `1.txt` and `a/2.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two\n".to_string(),
    ));

    twig_add(repository_dir.path(), &["1.txt", "a/2.txt"]);
    twig_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success()
        .stdout("");

    repository_dir
}

pub fn run_twig_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("twig").expect("Failed to find twig binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("TWIG_COMMIT_DATE", COMMIT_DATE)]);
    cmd.env_remove("TWIG_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn twig_add(dir: &Path, files: &[&str]) {
    for file in files {
        run_twig_command(dir, &["add", file])
            .assert()
            .success()
            .stdout("");
    }
}

pub fn twig_commit(dir: &Path, message: &str) -> Command {
    run_twig_command(dir, &["commit", message])
}

pub fn twig_commit_at(dir: &Path, message: &str, date: &str) -> Command {
    let mut cmd = twig_commit(dir, message);
    cmd.env("TWIG_COMMIT_DATE", date);
    cmd
}

/// Write, stage and commit a single file
pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(name), content.to_string()));
    twig_add(dir, &[name]);
    twig_commit(dir, message).assert().success().stdout("");
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run twig");
    String::from_utf8(output.stdout).expect("twig printed invalid UTF-8")
}

/// Ids printed by `log`, newest first
pub fn log_commit_ids(dir: &Path) -> Vec<String> {
    stdout_of(&mut run_twig_command(dir, &["log"]))
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect()
}

pub fn head_commit_id(dir: &Path) -> String {
    log_commit_ids(dir)
        .into_iter()
        .next()
        .expect("log shows at least the root commit")
}

/// Id of the single commit with the given message
pub fn commit_id_with_message(dir: &Path, message: &str) -> String {
    let ids = stdout_of(&mut run_twig_command(dir, &["find", message]));
    let mut ids = ids.lines();

    let id = ids.next().expect("a commit with that message").to_string();
    assert_eq!(ids.next(), None, "more than one commit says {message:?}");
    id
}

/// Status output with the given section entries, each already sorted
pub fn expected_status(
    branches: &[&str],
    staged: &[&str],
    removed: &[&str],
    modified: &[&str],
    untracked: &[&str],
) -> String {
    let sections = [
        ("Branches", branches),
        ("Staged Files", staged),
        ("Removed Files", removed),
        ("Modifications Not Staged For Commit", modified),
        ("Untracked Files", untracked),
    ];

    sections
        .iter()
        .map(|(title, entries)| {
            let mut section = format!("=== {title} ===\n");
            for entry in entries.iter() {
                section.push_str(entry);
                section.push('\n');
            }
            section.push('\n');
            section
        })
        .collect()
}
