use assert_cmd::cargo_bin;
use std::path::PathBuf;
use std::process::Command;

mod common;

#[test]
fn test_large_payment_file_streaming() {
    let output_path = PathBuf::from("tests/fixtures/large_payments.csv");
    if !output_path.exists() {
        common::generate_payments_csv(&output_path, 100_000).expect("Failed to generate CSV");
    }
    let status = Command::new(cargo_bin!("hostel-billing"))
        .arg(&output_path)
        .arg("--start-date")
        .arg("2024-01-15")
        .arg("--months")
        .arg("300")
        .arg("--monthly-fee")
        .arg("1")
        .status()
        .expect("Failed to execute command");
    assert!(status.success(), "Binary failed to process 100k payments");
}
