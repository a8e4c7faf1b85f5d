//! End-to-end tests for the appraise binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn appraise() -> Command {
    Command::cargo_bin("appraise").unwrap()
}

#[test]
fn npv_minimal_prints_worked_example() {
    appraise()
        .args([
            "npv",
            "--rate",
            "10",
            "--cashflows",
            "-1000,500,500,500",
            "--format",
            "minimal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("243.43"));
}

#[test]
fn irr_minimal_prints_exact_rate() {
    // 1210 / 1.21 = 1000, so the rate is exactly 10%
    appraise()
        .args([
            "irr",
            "--cashflows",
            "-1000,0,1210",
            "--format",
            "minimal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.00%"));
}

#[test]
fn irr_reports_unavailable_without_sign_change() {
    appraise()
        .args(["irr", "--cashflows", "100,50,50", "--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be calculated"));
}

#[test]
fn payback_minimal_prints_fractional_period() {
    appraise()
        .args([
            "payback",
            "--cashflows",
            "-1000,400,400,400,400",
            "--format",
            "minimal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.50 years"));
}

#[test]
fn payback_reports_unavailable_when_never_recovered() {
    appraise()
        .args([
            "payback",
            "--cashflows",
            "-1000,100,100",
            "--format",
            "minimal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "not recovered within the forecast horizon",
        ));
}

#[test]
fn evaluate_table_lists_all_three_metrics() {
    appraise()
        .args(["evaluate", "--investment", "1000", "--cashflow", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Net Present Value (NPV)"))
        .stdout(predicate::str::contains("Internal Rate of Return (IRR)"))
        .stdout(predicate::str::contains("Payback Period"));
}

#[test]
fn evaluate_json_carries_tagged_outcomes() {
    appraise()
        .args([
            "evaluate",
            "--investment",
            "1000",
            "--cashflow",
            "500",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\""))
        .stdout(predicate::str::contains("\"npv\""));
}

#[test]
fn evaluate_rejects_negative_investment() {
    appraise()
        .args(["evaluate", "--investment=-5", "--cashflow", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn npv_rejects_minus_one_hundred_percent_rate() {
    appraise()
        .args(["npv", "--rate=-100", "--cashflows", "-1000,500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid rate"));
}

#[test]
fn malformed_cashflows_fail_with_hint() {
    appraise()
        .args(["irr", "--cashflows", "abc,def"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("comma-separated"));
}
