use crate::common::command::{
    init_repository_dir, load_commit, nit_commit, read_head_oid, read_ref, repository_dir,
    run_nit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

fn metadata_url(dir: &std::path::Path) -> String {
    format!("file://{}", dir.join(".nit").display())
}

#[rstest]
fn push_overwrites_remote_branch(init_repository_dir: TempDir, repository_dir: TempDir) {
    let local = init_repository_dir;
    let remote = repository_dir;

    run_nit_command(remote.path(), &["init"]).assert().success();
    run_nit_command(
        local.path(),
        &["remote", "add", "origin", &metadata_url(remote.path())],
    )
    .assert()
    .success();

    run_nit_command(local.path(), &["push", "origin", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pushed master to origin"));

    let local_tip = read_head_oid(local.path()).unwrap();
    assert_eq!(
        read_ref(remote.path(), "refs/heads/master").unwrap(),
        local_tip
    );

    // the commit object itself arrived with the push
    let pushed = load_commit(remote.path(), &local_tip);
    assert!(pushed.tree().contains_key("1.txt"));

    // push is an unconditional overwrite: rewinding the local branch and
    // pushing again moves the remote backwards too
    write_file(FileSpec::new(local.path().join("x.txt"), "x".to_string()));
    run_nit_command(local.path(), &["add", "x.txt"]).assert().success();
    nit_commit(local.path(), "Advance").assert().success();
    run_nit_command(local.path(), &["push", "origin", "master"])
        .assert()
        .success();

    std::fs::write(
        local.path().join(".nit/refs/heads/master"),
        local_tip.as_bytes(),
    )
    .unwrap();
    run_nit_command(local.path(), &["push", "origin", "master"])
        .assert()
        .success();

    assert_eq!(
        read_ref(remote.path(), "refs/heads/master").unwrap(),
        local_tip
    );
}

#[rstest]
fn push_of_missing_branch_fails(init_repository_dir: TempDir, repository_dir: TempDir) {
    let local = init_repository_dir;
    let remote = repository_dir;

    run_nit_command(remote.path(), &["init"]).assert().success();
    run_nit_command(
        local.path(),
        &["remote", "add", "origin", &metadata_url(remote.path())],
    )
    .assert()
    .success();

    run_nit_command(local.path(), &["push", "origin", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
