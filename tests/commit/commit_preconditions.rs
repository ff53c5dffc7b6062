use crate::common::command::{head_commit_id, init_repository_dir, twig_add, twig_commit};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("")]
#[case("   ")]
fn blank_message_is_rejected(init_repository_dir: TempDir, #[case] message: &str) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "changed\n".to_string()));
    twig_add(dir, &["1.txt"]);
    let head = head_commit_id(dir);

    twig_commit(dir, message)
        .assert()
        .success()
        .stdout("Please enter a commit message.\n");

    assert_eq!(head_commit_id(dir), head);
}

#[rstest]
fn nothing_staged_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "changed but not added\n".to_string()));

    twig_commit(dir, "Forgot to add")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");
}
