use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn close_succeeds_for_every_cloned_repo() {
    let ctx = TestContext::new();
    ctx.write_repos(&["org/a", "org/b", "org/c"]);
    let dirs: Vec<_> = ["org/a", "org/b", "org/c"].iter().map(|r| ctx.clone_repo(r)).collect();

    ctx.cli()
        .args(["update-prs", "--close", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Closing PR in org/a"))
        .stdout(predicate::str::contains("Closing PR in org/c"))
        .stdout(predicate::str::contains("update-prs completed (3 OK, 0 skipped, 0 errored)"));

    for dir in &dirs {
        let calls = ctx.gh().calls_in(dir);
        assert_eq!(
            calls,
            ["pr view bump-deps --json number,state,headRefName", "pr close 12"],
            "unexpected gh calls in {}",
            dir.display()
        );
    }
}
