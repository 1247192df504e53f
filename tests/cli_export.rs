mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn export_reqs_yml_to_stdout() {
    let ctx = TestContext::new();
    ctx.role("nginx");

    ctx.cli()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("- src: nginx\n  name: nginx"));
}

#[test]
fn export_reqs_txt_with_scm_config() {
    let ctx = TestContext::new();
    ctx.role("nginx");
    let config = ctx.write("ansigenome.toml", "[scm]\nuser = \"acme\"\n");

    ctx.cli()
        .args(["export", "-f", "txt", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://github.com/acme/nginx,,nginx"));
}

#[test]
fn export_graph_to_file() {
    let ctx = TestContext::new();
    ctx.role("nginx");
    ctx.write("playbooks/roles/nginx/meta/main.yml", "dependencies: [common]\n");

    ctx.cli()
        .args(["export", "-t", "graph", "-o", "deps.dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The roles were exported to:"));

    assert!(ctx.read("deps.dot").contains("\"nginx\" -> \"common\";"));
}
