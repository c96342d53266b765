use crate::common::command::{
    init_repository_dir, nit_commit, read_head_oid, read_ref, repository_dir, run_nit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

fn metadata_url(dir: &std::path::Path) -> String {
    format!("file://{}", dir.join(".nit").display())
}

/// Seed a downstream repository by pushing to it, advance upstream by one
/// commit, then pull downstream: shared history makes it a fast-forward.
#[rstest]
fn pull_fast_forwards_tracking_branch(
    init_repository_dir: TempDir,
    repository_dir: TempDir,
) {
    let upstream = init_repository_dir;
    let downstream = repository_dir;

    run_nit_command(downstream.path(), &["init"]).assert().success();
    run_nit_command(
        upstream.path(),
        &["remote", "add", "downstream", &metadata_url(downstream.path())],
    )
    .assert()
    .success();
    run_nit_command(upstream.path(), &["push", "downstream", "master"])
        .assert()
        .success();

    let shared_tip = read_head_oid(upstream.path()).unwrap();
    assert_eq!(read_head_oid(downstream.path()).unwrap(), shared_tip);

    // upstream moves ahead
    write_file(FileSpec::new(
        upstream.path().join("new.txt"),
        "newer".to_string(),
    ));
    run_nit_command(upstream.path(), &["add", "new.txt"])
        .assert()
        .success();
    nit_commit(upstream.path(), "Upstream advance").assert().success();
    let upstream_tip = read_head_oid(upstream.path()).unwrap();

    run_nit_command(
        downstream.path(),
        &["remote", "add", "origin", &metadata_url(upstream.path())],
    )
    .assert()
    .success();

    run_nit_command(downstream.path(), &["pull", "origin", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fast-forwarded to origin/master"));

    assert_eq!(read_head_oid(downstream.path()).unwrap(), upstream_tip);
    assert_eq!(
        read_ref(downstream.path(), "refs/remotes/origin/heads/master").unwrap(),
        upstream_tip
    );
}

#[rstest]
fn pull_of_untracked_branch_fails(init_repository_dir: TempDir, repository_dir: TempDir) {
    let upstream = init_repository_dir;
    let downstream = repository_dir;

    run_nit_command(downstream.path(), &["init"]).assert().success();
    run_nit_command(
        downstream.path(),
        &["remote", "add", "origin", &metadata_url(upstream.path())],
    )
    .assert()
    .success();

    run_nit_command(downstream.path(), &["pull", "origin", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
