use crate::common::command::{
    count_objects, init_repository_dir, read_head_oid, read_ref, repository_dir, run_nit_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

fn metadata_url(dir: &std::path::Path) -> String {
    format!("file://{}", dir.join(".nit").display())
}

#[rstest]
fn fetch_copies_objects_exactly_once(
    init_repository_dir: TempDir,
    repository_dir: TempDir,
) {
    let upstream = init_repository_dir;
    let local = repository_dir;
    let upstream_objects = count_objects(upstream.path());
    assert!(upstream_objects > 0);

    run_nit_command(local.path(), &["init"]).assert().success();
    run_nit_command(
        local.path(),
        &["remote", "add", "origin", &metadata_url(upstream.path())],
    )
    .assert()
    .success();

    run_nit_command(local.path(), &["fetch", "origin"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "({} new objects)",
            upstream_objects
        )));

    assert_eq!(count_objects(local.path()), upstream_objects);

    // the remote's branch head is mirrored into the tracking namespace
    assert_eq!(
        read_ref(local.path(), "refs/remotes/origin/heads/master"),
        read_head_oid(upstream.path())
    );

    // content addressing makes the second fetch a no-op
    run_nit_command(local.path(), &["fetch", "origin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 new objects)"));
}

#[rstest]
fn fetch_from_unknown_remote_fails(repository_dir: TempDir) {
    let dir = repository_dir;

    run_nit_command(dir.path(), &["init"]).assert().success();
    run_nit_command(dir.path(), &["fetch", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
