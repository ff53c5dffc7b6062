use crate::common::command::{
    commit_file, head_commit_id, init_repository_dir, log_commit_ids, run_twig_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use rstest::rstest;

/// History:
///
///   Initial commit  <- master
///         |
///   3.txt added     <- other
///
/// Expected: master moves to other's head, no merge commit
#[rstest]
fn merge_fast_forwards_when_head_is_the_split_point(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"]).assert().success();
    run_twig_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "3.txt", "three\n", "On other");
    let other_head = head_commit_id(dir);
    run_twig_command(dir, &["checkout", "master"]).assert().success();
    assert!(!dir.join("3.txt").exists());

    run_twig_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("Current branch fast-forwarded.\n");

    assert_eq!(head_commit_id(dir), other_head);
    assert_eq!(read_file(&dir.join("3.txt")), "three\n");
    assert_eq!(log_commit_ids(dir).len(), 3);
}

/// History:
///
///   Initial commit  <- other
///         |
///   1.txt changed   <- master
///
/// Expected: nothing happens
#[rstest]
fn merging_an_ancestor_is_a_no_op(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "1.txt", "master\n", "On master");
    let head = head_commit_id(dir);

    run_twig_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("Given branch is an ancestor of the current branch.\n");

    assert_eq!(head_commit_id(dir), head);
    assert_eq!(read_file(&dir.join("1.txt")), "master\n");
}

#[rstest]
fn merging_a_branch_at_the_same_commit_is_a_no_op(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let head = head_commit_id(dir);
    run_twig_command(dir, &["branch", "other"]).assert().success();

    run_twig_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("Given branch is an ancestor of the current branch.\n");

    assert_eq!(head_commit_id(dir), head);
}
