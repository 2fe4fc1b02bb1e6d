// tests/integration/cli_smoke.rs
use assert_cmd::Command;
use predicates::prelude::*;

fn prime_range() -> Command {
    Command::new(env!("CARGO_BIN_EXE_prime_range"))
}

#[test]
fn shows_help() {
    prime_range()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prime_range"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn prints_statistics_for_piped_range() {
    prime_range()
        .write_stdin("10\n20\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The last prime numbers in the range [10, 20] are: 13, 17, 19",
        ))
        .stdout(predicate::str::contains(
            "The number of prime numbers in this range is: 4",
        ));
}

#[test]
fn reports_empty_range() {
    prime_range()
        .write_stdin("0 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No prime numbers found in the range [0, 1]"));
}

#[test]
fn reprompts_then_succeeds() {
    prime_range()
        .arg("--quiet")
        .write_stdin("abc\n5 2\n2 5\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Error: Invalid input. Please enter integer values.\n\
             Error: Start of the range must be less than or equal to the end of the range.\n",
        ))
        .stdout(predicate::str::contains("are: 2, 3, 5"));
}

#[test]
fn json_format_flag() {
    let output = prime_range()
        .args(["--format", "json", "--quiet"])
        .write_stdin("10 20\n")
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["count"], 4);
}

#[test]
fn end_of_input_exits_with_failure() {
    prime_range()
        .write_stdin("7\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("input stream closed"));
}

#[test]
fn logs_go_to_stderr_only() {
    prime_range()
        .args(["--log-level", "info", "--quiet"])
        .env_remove("RUST_LOG")
        .write_stdin("1 10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO").not())
        .stderr(predicate::str::contains("accepted range [1, 10]"));
}

#[test]
fn oversized_bound_reprompts_instead_of_aborting() {
    prime_range()
        .arg("--quiet")
        .write_stdin("9223372036854775800 9223372036854775807\n10 20\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Error: Invalid input. Please enter integer values.\n",
        ))
        .stdout(predicate::str::contains("are: 13, 17, 19"));
}
