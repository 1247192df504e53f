mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn scan_reports_each_role_and_totals() {
    let ctx = TestContext::new();
    ctx.role("nginx");
    ctx.role("postgres");

    ctx.cli()
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("nginx"))
        .stdout(predicate::str::contains("postgres"))
        .stdout(predicate::str::contains(
            "2 roles scanned: 2 defaults, 2 facts, 4 tasks, 4 files, 14 lines",
        ));
}

#[test]
fn scan_without_default_path_explains_convention() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("scan")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("look for roles in 'playbooks/roles'"));
}

#[test]
fn scan_missing_explicit_path_names_it() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["scan", "nowhere"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("The following path could not be found:"))
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn scan_of_directory_without_roles_is_not_fatal() {
    let ctx = TestContext::new();
    ctx.write("stuff/docs/notes.txt", "hello\n");

    ctx.cli()
        .args(["scan", "stuff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No roles were found at this path:"));
}

#[test]
fn malformed_role_fails_batch_but_others_are_scanned() {
    let ctx = TestContext::new();
    ctx.role("good");
    ctx.write("playbooks/roles/bad/meta/main.yml", "galaxy_info: [oops\n");

    ctx.cli()
        .arg("scan")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("good"))
        .stderr(predicate::str::contains("contains 1 or more syntax errors"))
        .stderr(predicate::str::contains("bad"));
}
