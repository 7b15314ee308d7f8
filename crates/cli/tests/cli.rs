//! Binary-level checks that need no running backend.

use assert_cmd::Command;
use predicates::prelude::*;

fn notehub() -> Command {
    let mut cmd = Command::cargo_bin("notehub").unwrap();
    cmd.env_remove("NOTEHUB_API_URL").env_remove("NOTEHUB_TOKEN");
    cmd
}

#[test]
fn help_lists_the_subcommands() {
    notehub()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn missing_token_is_reported_before_any_request() {
    notehub()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOTEHUB_TOKEN"));
}

#[test]
fn create_rejects_an_unknown_tag_client_side() {
    notehub()
        .env("NOTEHUB_TOKEN", "test-token")
        .args(["create", "--title", "Buy milk", "--content", "two liters", "--tag", "Groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tag"));
}

#[test]
fn create_reports_field_level_messages() {
    notehub()
        .env("NOTEHUB_TOKEN", "test-token")
        .args(["create", "--title", "ab", "--content", "", "--tag", "Todo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title: Minimum 3 characters"))
        .stderr(predicate::str::contains("content: Required"));
}
