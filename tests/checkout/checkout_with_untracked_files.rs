use crate::common::command::{
    commit_file, head_commit_id, init_repository_dir, run_twig_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

const UNTRACKED_IN_THE_WAY: &str =
    "There is an untracked file in the way; delete it, or add and commit it first.\n";

#[rstest]
fn untracked_file_blocks_checkout(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "1.txt", "master\n", "On master");
    let master_head = head_commit_id(dir);
    write_file(FileSpec::new(dir.join("untracked.txt"), "mine\n".to_string()));

    run_twig_command(dir, &["checkout", "other"])
        .assert()
        .success()
        .stdout(UNTRACKED_IN_THE_WAY);

    // nothing was touched
    assert_eq!(read_file(&dir.join("1.txt")), "master\n");
    assert_eq!(read_file(&dir.join("untracked.txt")), "mine\n");
    assert_eq!(head_commit_id(dir), master_head);
}

#[rstest]
fn staged_new_file_does_not_block_checkout(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"]).assert().success();
    write_file(FileSpec::new(dir.join("new.txt"), "new\n".to_string()));
    crate::common::command::twig_add(dir, &["new.txt"]);

    run_twig_command(dir, &["checkout", "other"])
        .assert()
        .success()
        .stdout("");

    // absent from the target snapshot, so it is removed
    assert!(!dir.join("new.txt").exists());
}
