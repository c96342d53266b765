use crate::common::command::{
    init_repository_dir, read_head_oid, read_ref, repository_dir, run_nit_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn created_branch_points_at_head(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let head_oid = read_head_oid(dir.path()).unwrap();

    run_nit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created branch feature"));

    assert_eq!(read_ref(dir.path(), "refs/heads/feature").unwrap(), head_oid);
}

#[rstest]
fn listing_marks_the_current_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_nit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    run_nit_command(dir.path(), &["branch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* master"))
        .stdout(predicate::str::contains("  feature"));
}

#[rstest]
fn branch_on_unborn_head_creates_unborn_branch(repository_dir: TempDir) {
    let dir = repository_dir;

    run_nit_command(dir.path(), &["init"]).assert().success();
    run_nit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    assert!(dir.path().join(".nit/refs/heads/feature").is_file());
    assert_eq!(read_ref(dir.path(), "refs/heads/feature"), None);
}

#[rstest]
fn duplicate_branch_creation_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_nit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_nit_command(dir.path(), &["branch", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[rstest]
fn invalid_branch_names_are_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_nit_command(dir.path(), &["branch", ".hidden"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid branch name"));
}
