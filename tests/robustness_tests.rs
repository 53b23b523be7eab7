use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

mod common;

#[test]
fn test_corrupt_profile_snapshot_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("profile.json"), "not json at all").unwrap();

    common::freela_cmd(dir.path())
        .args(["profile", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("discarding stored profile"))
        .stdout(predicate::str::contains("monthly income: 5000.00"))
        .stdout(predicate::str::contains("hourly rate: 31.25"));
}

#[test]
fn test_corrupt_jobs_snapshot_starts_empty() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("jobs.json"), "[{]").unwrap();

    common::freela_cmd(dir.path())
        .args(["job", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no jobs yet"));
}

#[test]
fn test_mutation_after_corruption_repairs_the_snapshot() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("jobs.json"), "garbage").unwrap();

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
        .stdout(predicate::str::contains("0. [ ] Logo"));
}

#[test]
fn test_import_skips_malformed_rows() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("import.csv");
    std::fs::write(
        &csv_path,
        "name,hoursPerDay,totalHours\nLogo,4,20\nBroken,not_a_number,20\n,5,10\nSite,6,60\n",
    )
    .unwrap();

    common::freela_cmd(dir.path())
        .args(["job", "import"])
        .arg(&csv_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error reading job"));

    // The unparseable row is reported, the empty-name row is silently
    // rejected by the creation gate, the two valid rows land.
    common::freela_cmd(dir.path())
        .args(["job", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0. [ ] Logo"))
        .stdout(predicate::str::contains("1. [ ] Site"))
        .stdout(predicate::str::contains("Broken").not());
}

#[test]
fn test_stored_zero_hours_render_undefined_duration() {
    let dir = tempdir().unwrap();
    // Directly-edited storage bypasses the creation gate.
    std::fs::write(
        dir.path().join("jobs.json"),
        r#"[{"name":"Hand-edited","hoursPerDay":"0","totalHours":"20","isCompleted":false}]"#,
    )
    .unwrap();

    common::freela_cmd(dir.path())
        .args(["job", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("undefined days"));
}
