use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_malformed_rows_are_isolated() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "amount, payment_date, month").unwrap();
    writeln!(file, "100, 2024-01-05, ").unwrap();
    writeln!(file, "not_a_number, 2024-01-06, ").unwrap();
    writeln!(file, "-50, 2024-01-07, ").unwrap();
    writeln!(file, "100, bad-date, ").unwrap();
    writeln!(file, "100, 2024-02-05, 99").unwrap();
    writeln!(file, "100, 2024-02-10, ").unwrap();

    let mut cmd = Command::new(cargo_bin!("hostel-billing"));
    cmd.arg(file.path())
        .arg("--start-date")
        .arg("2024-01-01")
        .arg("--months")
        .arg("3")
        .arg("--monthly-fee")
        .arg("100");

    // The two valid 100 payments settle months 1 and 2; everything else is
    // reported and skipped.
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading payment"))
        .stderr(predicate::str::contains("Error recording payment"))
        .stderr(predicate::str::contains("payment month 99 is outside the schedule"))
        .stdout(predicate::str::contains("1,January 2024,2024-01-01,100,paid,100"))
        .stdout(predicate::str::contains("2,February 2024,2024-02-01,100,paid,100"))
        .stdout(predicate::str::contains("3,2,1,300,200,100,66.67"));
}

#[test]
fn test_zero_months_rejected() {
    let mut cmd = Command::new(cargo_bin!("hostel-billing"));
    cmd.arg("--start-date")
        .arg("2024-01-01")
        .arg("--months")
        .arg("0")
        .arg("--monthly-fee")
        .arg("100");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("months must be at least 1"));
}

#[test]
fn test_negative_fee_rejected() {
    let mut cmd = Command::new(cargo_bin!("hostel-billing"));
    cmd.arg("--start-date")
        .arg("2024-01-01")
        .arg("--months")
        .arg("12")
        .arg("--monthly-fee")
        .arg("-5");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("amount must be non-negative"));
}

#[test]
fn test_missing_payments_file() {
    let mut cmd = Command::new(cargo_bin!("hostel-billing"));
    cmd.arg("no_such_file.csv")
        .arg("--start-date")
        .arg("2024-01-01")
        .arg("--months")
        .arg("12")
        .arg("--monthly-fee")
        .arg("100");

    cmd.assert().failure();
}
