use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prompt_without_terminal_is_a_silent_decline() {
    let ctx = TestContext::new();
    ctx.write_repos(&["org/a"]);
    ctx.clone_repo("org/a");

    ctx.cli()
        .args(["update-prs", "--close"])
        .assert()
        .success()
        .stdout(predicate::str::contains("update-prs completed").not())
        .stderr(predicate::str::contains("Error:").not());

    assert!(ctx.gh().get_log().is_empty());
}
