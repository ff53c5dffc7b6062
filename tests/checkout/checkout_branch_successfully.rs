use crate::common::command::{
    commit_file, expected_status, head_commit_id, init_repository_dir, run_twig_command,
    twig_add, twig_commit,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// History:
///
///   Initial commit  <- other
///         |
///   nested files added, 1.txt changed, a/2.txt removed  <- master
#[rstest]
fn checkout_branch_replaces_the_working_tree(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"]).assert().success();

    write_file(FileSpec::new(dir.join("1.txt"), "one on master\n".to_string()));
    write_file(FileSpec::new(
        dir.join("b").join("c").join("3.txt"),
        "three\n".to_string(),
    ));
    twig_add(dir, &["1.txt", "b/c/3.txt"]);
    run_twig_command(dir, &["rm", "a/2.txt"]).assert().success();
    twig_commit(dir, "Reshape master").assert().success();

    run_twig_command(dir, &["checkout", "other"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.join("1.txt")), "one\n");
    assert_eq!(read_file(&dir.join("a").join("2.txt")), "two\n");
    assert!(!dir.join("b").exists());
    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_status(
            &["master", "*other"],
            &[],
            &[],
            &[],
            &[],
        )));

    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.join("1.txt")), "one on master\n");
    assert_eq!(read_file(&dir.join("b").join("c").join("3.txt")), "three\n");
    assert!(!dir.join("a").exists());
}

#[rstest]
fn checkout_branch_discards_staged_changes(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "1.txt", "master\n", "On master");
    let master_head = head_commit_id(dir);

    write_file(FileSpec::new(dir.join("1.txt"), "staged on master\n".to_string()));
    twig_add(dir, &["1.txt"]);
    run_twig_command(dir, &["checkout", "other"]).assert().success();

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));
    run_twig_command(dir, &["checkout", "master"]).assert().success();
    assert_eq!(head_commit_id(dir), master_head);
    assert_eq!(read_file(&dir.join("1.txt")), "master\n");
}

#[rstest]
#[case("missing", "No such branch exists.\n")]
#[case("master", "No need to checkout the current branch.\n")]
fn checkout_branch_failures(
    init_repository_dir: TempDir,
    #[case] branch: &str,
    #[case] message: &str,
) {
    run_twig_command(init_repository_dir.path(), &["checkout", branch])
        .assert()
        .success()
        .stdout(predicate::str::diff(message.to_string()));
}
