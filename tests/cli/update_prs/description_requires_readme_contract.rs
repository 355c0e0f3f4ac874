use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn description_without_readme_fails_and_leaves_prs_alone() {
    let ctx = TestContext::new();
    ctx.write_repos(&["org/a"]);
    ctx.clone_repo("org/a");

    ctx.cli()
        .args(["update-prs", "--description", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load campaign: README.md not found"));

    assert!(ctx.gh().get_log().is_empty());
}

#[test]
fn close_runs_without_readme() {
    let ctx = TestContext::new();
    ctx.write_repos(&["org/a"]);
    ctx.clone_repo("org/a");

    ctx.cli()
        .args(["update-prs", "--close", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("update-prs completed (1 OK, 0 skipped, 0 errored)"));
}
