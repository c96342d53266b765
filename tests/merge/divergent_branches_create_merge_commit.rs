use crate::common::command::{
    init_repository_dir, load_commit, nit_commit, read_head_oid, read_ref, run_nit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// History:
///
///       A (base)
///      / \
///     B   C
///     |   |
///   master  feature
///
/// Merging feature into master must record a commit with parent = B and
/// parent2 = C, and its tree must be exactly what was staged beforehand.
#[rstest]
fn divergent_branches_create_merge_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_nit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    // Commit B on master
    write_file(FileSpec::new(
        dir.path().join("left.txt"),
        "master change\n".to_string(),
    ));
    run_nit_command(dir.path(), &["add", "left.txt"])
        .assert()
        .success();
    nit_commit(dir.path(), "Commit B").assert().success();
    let master_oid = read_head_oid(dir.path()).unwrap();

    // Commit C on feature
    run_nit_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(
        dir.path().join("right.txt"),
        "feature change\n".to_string(),
    ));
    run_nit_command(dir.path(), &["add", "right.txt"])
        .assert()
        .success();
    nit_commit(dir.path(), "Commit C").assert().success();
    let feature_oid = read_head_oid(dir.path()).unwrap();

    // back on master, stage the desired merge result
    run_nit_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    write_file(FileSpec::new(
        dir.path().join("merged.txt"),
        "combined\n".to_string(),
    ));
    run_nit_command(dir.path(), &["add", "merged.txt"])
        .assert()
        .success();

    run_nit_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created merge commit"));

    let merge_oid = read_head_oid(dir.path()).unwrap();
    assert_ne!(merge_oid, master_oid);
    assert_eq!(read_ref(dir.path(), "refs/heads/master").unwrap(), merge_oid);

    let merge_commit = load_commit(dir.path(), &merge_oid);
    assert_eq!(
        merge_commit.parent().map(|oid| oid.to_string()),
        Some(master_oid)
    );
    assert_eq!(
        merge_commit.parent2().map(|oid| oid.to_string()),
        Some(feature_oid)
    );

    // the merge tree is the staged snapshot, nothing more
    assert!(merge_commit.tree().contains_key("merged.txt"));
    assert!(!merge_commit.tree().contains_key("left.txt"));
}
