use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_month_end_clamping_across_leap_february() {
    let mut cmd = Command::new(cargo_bin!("hostel-billing"));
    cmd.arg("--start-date")
        .arg("2024-01-31")
        .arg("--months")
        .arg("4")
        .arg("--monthly-fee")
        .arg("100");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,January 2024,2024-01-31,100,unpaid,0"))
        .stdout(predicate::str::contains(
            "2,February 2024,2024-02-29,100,unpaid,0",
        ))
        .stdout(predicate::str::contains("3,March 2024,2024-03-31,100,unpaid,0"))
        // Back to the 30th, not February's clamped 29th
        .stdout(predicate::str::contains("4,April 2024,2024-04-30,100,unpaid,0"));
}

#[test]
fn test_extreme_decimal_precision() {
    let output_path = std::path::PathBuf::from("precision_test.csv");
    let mut wtr = csv::Writer::from_path(&output_path).unwrap();
    wtr.write_record(["amount", "payment_date", "month"]).unwrap();

    wtr.write_record(["0.0001", "2024-01-02", ""]).unwrap();
    wtr.write_record(["0.0001", "2024-01-03", ""]).unwrap();
    wtr.flush().unwrap();
    drop(wtr);

    let mut cmd = Command::new(cargo_bin!("hostel-billing"));
    cmd.arg(&output_path)
        .arg("--start-date")
        .arg("2024-01-01")
        .arg("--months")
        .arg("1")
        .arg("--monthly-fee")
        .arg("0.0002");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "1,January 2024,2024-01-01,0.0002,paid,0.0002",
        ))
        .stdout(predicate::str::contains("1,1,0,0.0002,0.0002,0.0000,100.00"));

    std::fs::remove_file(output_path).ok();
}

#[test]
fn test_long_contract() {
    let mut cmd = Command::new(cargo_bin!("hostel-billing"));
    cmd.arg("--start-date")
        .arg("2020-06-15")
        .arg("--months")
        .arg("360")
        .arg("--monthly-fee")
        .arg("1000000.0000");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("360,May 2050,2050-05-15,1000000.0000,unpaid,0"))
        .stdout(predicate::str::contains("360,0,360,360000000.0000,0,360000000.0000,0.00"));
}
