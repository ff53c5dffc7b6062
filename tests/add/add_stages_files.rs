use crate::common::command::{expected_status, init_repository_dir, run_twig_command, twig_add};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_stages_new_and_modified_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "one, changed\n".to_string()));
    write_file(FileSpec::new(dir.join("b").join("3.txt"), "three\n".to_string()));

    twig_add(dir, &["1.txt", "b/3.txt"]);

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_status(
            &["*master"],
            &["1.txt", "b/3.txt"],
            &[],
            &[],
            &[],
        )));
}

#[rstest]
fn add_accepts_relative_spellings_of_a_name(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("b").join("3.txt"), "three\n".to_string()));

    twig_add(dir, &["./b//3.txt"]);

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\nb/3.txt\n\n"));
}

#[rstest]
fn staging_many_generated_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path().join("generated");
    std::fs::create_dir_all(&dir).expect("Failed to create directory");
    let files = write_generated_files(&dir, 5);

    let names = files
        .iter()
        .map(|file| {
            format!(
                "generated/{}",
                file.path.file_name().expect("file name").to_string_lossy()
            )
        })
        .collect::<Vec<_>>();
    let names = names.iter().map(String::as_str).collect::<Vec<_>>();

    run_twig_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_status(
            &["*master"],
            &[],
            &[],
            &[],
            &names,
        )));

    twig_add(init_repository_dir.path(), &names);

    run_twig_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected_status(
            &["*master"],
            &names,
            &[],
            &[],
            &[],
        )));
}
