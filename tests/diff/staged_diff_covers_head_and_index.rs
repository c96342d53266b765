use crate::common::command::{nit_commit, repository_dir, run_nit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn staged_new_file_diffs_against_nothing(repository_dir: TempDir) {
    let dir = repository_dir;

    run_nit_command(dir.path(), &["init"]).assert().success();
    write_file(FileSpec::new(dir.path().join("a.txt"), "hello\n".to_string()));
    run_nit_command(dir.path(), &["add", "a.txt"]).assert().success();

    run_nit_command(dir.path(), &["diff", "--staged"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- a/a.txt"))
        .stdout(predicate::str::contains("+++ b/a.txt"))
        .stdout(predicate::str::contains("+hello"));
}

#[rstest]
fn staged_edit_diffs_against_head(repository_dir: TempDir) {
    let dir = repository_dir;

    run_nit_command(dir.path(), &["init"]).assert().success();
    write_file(FileSpec::new(dir.path().join("a.txt"), "old".to_string()));
    run_nit_command(dir.path(), &["add", "a.txt"]).assert().success();
    nit_commit(dir.path(), "c1").assert().success();

    write_file(FileSpec::new(dir.path().join("a.txt"), "new".to_string()));
    run_nit_command(dir.path(), &["add", "a.txt"]).assert().success();

    run_nit_command(dir.path(), &["diff", "--staged"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@@ -1 +1 @@"))
        .stdout(predicate::str::contains("-old"))
        .stdout(predicate::str::contains("+new"));
}

#[rstest]
fn matching_sides_produce_no_output(repository_dir: TempDir) {
    let dir = repository_dir;

    run_nit_command(dir.path(), &["init"]).assert().success();
    write_file(FileSpec::new(dir.path().join("a.txt"), "same".to_string()));
    run_nit_command(dir.path(), &["add", "a.txt"]).assert().success();
    nit_commit(dir.path(), "c1").assert().success();

    // restage the identical content: head and index agree again
    run_nit_command(dir.path(), &["add", "a.txt"]).assert().success();

    run_nit_command(dir.path(), &["diff", "--staged"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
