use crate::common::command::{init_repository_dir, nit_commit, run_nit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;
use std::fs;

#[rstest]
fn checkout_materializes_each_branch_tip(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_nit_command(dir.path(), &["checkout", "-b", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(
        dir.path().join("1.txt"),
        "changed on feature".to_string(),
    ));
    run_nit_command(dir.path(), &["add", "1.txt"])
        .assert()
        .success();
    nit_commit(dir.path(), "Feature edit").assert().success();

    run_nit_command(dir.path(), &["checkout", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to branch 'master'"));
    assert_eq!(fs::read_to_string(dir.path().join("1.txt")).unwrap(), "one");

    run_nit_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(dir.path().join("1.txt")).unwrap(),
        "changed on feature"
    );
}

#[rstest]
fn checkout_discards_unstaged_edits(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(
        dir.path().join("1.txt"),
        "uncommitted edit".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("untracked.txt"),
        "scratch".to_string(),
    ));

    // re-checking out the current branch overwrites the working tree
    run_nit_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dir.path().join("1.txt")).unwrap(), "one");
    assert!(!dir.path().join("untracked.txt").exists());
}

#[rstest]
fn checkout_of_missing_branch_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_nit_command(dir.path(), &["checkout", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
