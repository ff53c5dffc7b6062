use crate::common::command::{
    commit_file, init_repository_dir, log_commit_ids, run_twig_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn find_prints_sorted_ids_of_matching_commits(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "1.txt", "master\n", "Same message");
    let first = log_commit_ids(dir)[0].clone();
    run_twig_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "1.txt", "other\n", "Same message");
    let second = log_commit_ids(dir)[0].clone();

    let mut expected = vec![first, second];
    expected.sort();

    run_twig_command(dir, &["find", "Same message"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n{}\n", expected[0], expected[1])));
}

#[rstest]
fn find_matches_whole_messages_only(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["find", "Initial"])
        .assert()
        .success()
        .stdout("Found no commit with that message.\n");
}
