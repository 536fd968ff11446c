use assert_cmd::Command;
use predicates::prelude::*;

fn blackjack() -> Command {
    let mut cmd = Command::cargo_bin("blackjack").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn stand_then_leave() {
    blackjack()
        .write_stdin("n\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Blackjack!"))
        .stdout(predicate::str::contains("*** Results ***"))
        .stdout(predicate::str::contains("Thanks for playing!"));
}

#[test]
fn invalid_answer_is_reprompted() {
    blackjack()
        .write_stdin("perhaps\nнет\nnah\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input."))
        .stdout(predicate::str::contains("You stand."));
}

#[test]
fn two_rounds_show_two_banners() {
    blackjack()
        .write_stdin("n\ny\nn\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Blackjack!").count(2));
}

#[test]
fn closed_stdin_fails() {
    blackjack()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed"));
}
