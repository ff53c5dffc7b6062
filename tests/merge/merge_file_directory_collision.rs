use crate::common::command::{
    commit_file, expected_status, init_repository_dir, log_commit_ids, run_twig_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// History:
///
///       Initial commit
///        /          \
///   c (file)       c/d (file in directory c)
///
/// Expected: the head's file wins, the branch file is reported as a conflict
#[rstest]
fn branch_directory_colliding_with_head_file_is_a_conflict(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "c", "file on master\n", "Add c on master");
    run_twig_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "c/d", "file on other\n", "Add c/d on other");
    run_twig_command(dir, &["checkout", "master"]).assert().success();

    run_twig_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(read_file(&dir.join("c")), "file on master\n");
    assert_eq!(log_commit_ids(dir).len(), 4);
    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_status(
            &["*master", "other"],
            &[],
            &[],
            &[],
            &[],
        )));

    // the merge commit checks out intact
    run_twig_command(dir, &["checkout", "other"]).assert().success();
    assert_eq!(read_file(&dir.join("c").join("d")), "file on other\n");
    run_twig_command(dir, &["checkout", "master"]).assert().success();
    assert_eq!(read_file(&dir.join("c")), "file on master\n");
}

#[rstest]
fn branch_file_colliding_with_head_directory_is_a_conflict(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "c/d", "file on master\n", "Add c/d on master");
    run_twig_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "c", "file on other\n", "Add c on other");
    run_twig_command(dir, &["checkout", "master"]).assert().success();

    run_twig_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(read_file(&dir.join("c").join("d")), "file on master\n");
    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_status(
            &["*master", "other"],
            &[],
            &[],
            &[],
            &[],
        )));
}
