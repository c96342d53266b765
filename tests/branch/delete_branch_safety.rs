use crate::common::command::{init_repository_dir, nit_commit, run_nit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn deleting_a_branch_at_head_succeeds(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_nit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    // feature's tip equals HEAD, so it is trivially reachable
    run_nit_command(dir.path(), &["branch", "-d", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted branch feature"));

    assert!(!dir.path().join(".nit/refs/heads/feature").exists());
}

#[rstest]
fn deleting_a_branch_behind_head_succeeds(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // feature stays at the first commit while master advances
    run_nit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("more.txt"), "more".to_string()));
    run_nit_command(dir.path(), &["add", "more.txt"])
        .assert()
        .success();
    nit_commit(dir.path(), "Advance master").assert().success();

    run_nit_command(dir.path(), &["branch", "-d", "feature"])
        .assert()
        .success();
}

#[rstest]
fn deleting_an_unmerged_branch_requires_force(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_nit_command(dir.path(), &["checkout", "-b", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("wip.txt"), "wip".to_string()));
    run_nit_command(dir.path(), &["add", "wip.txt"])
        .assert()
        .success();
    nit_commit(dir.path(), "Unmerged work").assert().success();

    run_nit_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();

    run_nit_command(dir.path(), &["branch", "-d", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not merged"));

    run_nit_command(dir.path(), &["branch", "-d", "feature", "-f"])
        .assert()
        .success();
}

#[rstest]
fn deleting_a_missing_branch_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_nit_command(dir.path(), &["branch", "-d", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
