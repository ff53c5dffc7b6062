use crate::common::command::{
    commit_file, commit_id_with_message, init_repository_dir, run_twig_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn rm_branch_keeps_the_branch_commits(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"]).assert().success();
    run_twig_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "1.txt", "other\n", "On other");
    run_twig_command(dir, &["checkout", "master"]).assert().success();

    run_twig_command(dir, &["rm-branch", "other"])
        .assert()
        .success()
        .stdout("");

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("=== Branches ===\n*master\n\n"));
    // the commit is still reachable by id
    let orphan = commit_id_with_message(dir, "On other");
    run_twig_command(dir, &["checkout", &orphan, "--", "1.txt"])
        .assert()
        .success()
        .stdout("");
}

#[rstest]
#[case("master", "Cannot remove the current branch.\n")]
#[case("missing", "A branch with that name does not exist.\n")]
fn rm_branch_failures(init_repository_dir: TempDir, #[case] branch: &str, #[case] message: &str) {
    run_twig_command(init_repository_dir.path(), &["rm-branch", branch])
        .assert()
        .success()
        .stdout(predicate::str::diff(message.to_string()));
}
