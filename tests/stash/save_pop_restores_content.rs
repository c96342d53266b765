use crate::common::command::{init_repository_dir, run_nit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;
use std::fs;

/// Stash parks uncommitted work: save snapshots the working files, a
/// destructive checkout throws them away, pop writes them back byte for
/// byte and consumes the slot.
#[rstest]
fn save_pop_restores_content(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(
        dir.path().join("1.txt"),
        "half-finished work".to_string(),
    ));

    run_nit_command(dir.path(), &["stash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved stash 0"));

    // checkout overwrites the working tree with the committed state
    run_nit_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(dir.path().join("1.txt")).unwrap(), "one");

    run_nit_command(dir.path(), &["stash", "pop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied stash 0"));

    assert_eq!(
        fs::read_to_string(dir.path().join("1.txt")).unwrap(),
        "half-finished work"
    );

    run_nit_command(dir.path(), &["stash", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stash entries."));
}

#[rstest]
fn pop_without_stash_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_nit_command(dir.path(), &["stash", "pop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[rstest]
fn pop_does_not_clear_other_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(
        dir.path().join("stashed.txt"),
        "parked".to_string(),
    ));
    run_nit_command(dir.path(), &["stash"]).assert().success();

    // a file created after the snapshot; pop is write-only and must leave
    // it alone
    write_file(FileSpec::new(
        dir.path().join("later.txt"),
        "kept".to_string(),
    ));

    run_nit_command(dir.path(), &["stash", "pop"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("stashed.txt")).unwrap(),
        "parked"
    );
    assert_eq!(fs::read_to_string(dir.path().join("later.txt")).unwrap(), "kept");
}
