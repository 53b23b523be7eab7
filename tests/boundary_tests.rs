use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

mod common;

#[test]
fn test_invalid_job_drafts_leave_the_list_unchanged() {
    let dir = tempdir().unwrap();

    // Empty name.
    common::freela_cmd(dir.path())
        .args(["job", "add", "", "--hours-per-day", "4", "--total-hours", "20"])
        .assert()
        .success();
    // Zero hours per day.
    common::freela_cmd(dir.path())
        .args([
            "job",
            "add",
            "Logo",
            "--hours-per-day",
            "0",
            "--total-hours",
            "20",
        ])
        .assert()
        .success();
    // Zero total hours.
    common::freela_cmd(dir.path())
        .args([
            "job",
            "add",
            "Logo",
            "--hours-per-day",
            "4",
            "--total-hours",
            "0",
        ])
        .assert()
        .success();

    common::freela_cmd(dir.path())
        .args(["job", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no jobs yet"));
}

#[test]
fn test_out_of_range_indices_are_noops() {
    let dir = tempdir().unwrap();

    common::freela_cmd(dir.path())
        .args([
            "job",
            "add",
            "Logo",
            "--hours-per-day",
            "4",
            "--total-hours",
            "20",
        ])
        .assert()
        .success();

    common::freela_cmd(dir.path())
        .args(["job", "toggle", "7"])
        .assert()
        .success();
    common::freela_cmd(dir.path())
        .args(["job", "rm", "7"])
        .assert()
        .success();

    common::freela_cmd(dir.path())
        .args(["job", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0. [ ] Logo"));
}

#[test]
fn test_profile_set_rejects_out_of_range_values() {
    let dir = tempdir().unwrap();

    common::freela_cmd(dir.path())
        .args(["profile", "set", "--vacation-weeks", "60"])
        .assert()
        .failure();
    common::freela_cmd(dir.path())
        .args(["profile", "set", "--days-per-week", "8"])
        .assert()
        .failure();
    common::freela_cmd(dir.path())
        .args(["profile", "set", "--hours-per-day", "0"])
        .assert()
        .failure();
    common::freela_cmd(dir.path())
        .args(["profile", "set", "--monthly-income=-1"])
        .assert()
        .failure();

    // Rejected edits never reach storage.
    common::freela_cmd(dir.path())
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("monthly income: 5000.00"));
}

#[test]
fn test_full_year_vacation_renders_undefined_rate() {
    let dir = tempdir().unwrap();

    common::freela_cmd(dir.path())
        .args(["profile", "set", "--vacation-weeks", "52"])
        .assert()
        .success();

    common::freela_cmd(dir.path())
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hourly rate: undefined"));

    // Job values are undefined too, while the duration still computes.
    common::freela_cmd(dir.path())
        .args([
            "job",
            "add",
            "Logo",
            "--hours-per-day",
            "4",
            "--total-hours",
            "20",
        ])
        .assert()
        .success();
    common::freela_cmd(dir.path())
        .args(["job", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5.0 days, value undefined"));
}
