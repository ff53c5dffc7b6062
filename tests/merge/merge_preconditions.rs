use crate::common::command::{
    commit_file, head_commit_id, init_repository_dir, run_twig_command, twig_add,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn merge_with_staged_changes_is_rejected_first(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "staged\n".to_string()));
    twig_add(dir, &["1.txt"]);

    // uncommitted changes are reported before the unknown branch
    run_twig_command(dir, &["merge", "missing"])
        .assert()
        .success()
        .stdout("You have uncommitted changes.\n");
}

#[rstest]
fn merge_with_pending_removals_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"]).assert().success();
    run_twig_command(dir, &["rm", "1.txt"]).assert().success();

    run_twig_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("You have uncommitted changes.\n");
}

#[rstest]
fn merge_with_unknown_branch_is_rejected(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["merge", "missing"])
        .assert()
        .success()
        .stdout("A branch with that name does not exist.\n");
}

#[rstest]
fn merge_with_itself_is_rejected(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["merge", "master"])
        .assert()
        .success()
        .stdout("Cannot merge a branch with itself.\n");
}

#[rstest]
fn untracked_file_blocks_a_merge(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "1.txt", "master\n", "On master");
    run_twig_command(dir, &["checkout", "other"]).assert().success();
    commit_file(dir, "3.txt", "three\n", "On other");
    run_twig_command(dir, &["checkout", "master"]).assert().success();
    let head = head_commit_id(dir);
    write_file(FileSpec::new(dir.join("3.txt"), "mine\n".to_string()));

    run_twig_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        );

    assert_eq!(head_commit_id(dir), head);
    assert_eq!(read_file(&dir.join("3.txt")), "mine\n");
}
