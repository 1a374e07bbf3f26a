#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("cli").expect("cli binary")
}

fn export() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    let tables = [
        (
            "project_summary",
            "PROJID,SHORT_NAME,STARU\n0,Alpha,2024-01-08 08:00:00\n1,Beta,2024-02-05 08:00:00\n",
        ),
        (
            "bar",
            "PROJID,BARID,NAMH,NATURAL_ORDER,STARV,ENF\n\
             0,1,Groundworks,1,2024-01-08 08:00:00,2024-01-09 17:00:00\n\
             0,2,Frame,2,2024-01-10 08:00:00,2024-01-10 17:00:00\n\
             1,3,Fit out,1,2024-02-05 08:00:00,2024-02-05 17:00:00\n",
        ),
        (
            "task",
            "PROJID,TASKID,NARE,BAR,NATURAO_ORDER,STARZ,ENJ\n\
             0,10,Excavate,1,1,2024-01-08 08:00:00,2024-01-08 17:00:00\n\
             0,11,Foundations,1,2,2024-01-09 08:00:00,2024-01-09 17:00:00\n\
             0,12,Erect,2,1,2024-01-10 08:00:00,2024-01-10 17:00:00\n\
             1,20,Partitions,3,1,2024-02-05 08:00:00,2024-02-05 17:00:00\n",
        ),
    ];
    for (name, content) in tables {
        fs::write(dir.path().join(format!("{name}.csv")), content).expect("write table");
    }
    dir
}

#[test]
fn cli_prints_task_table() {
    let dir = export();
    let assert = cli().arg(dir.path()).assert().success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(output.contains("| unique_id |"), "missing header:\n{output}");
    assert!(output.contains("Groundworks"));
    // children are indented beneath their bar
    assert!(output.contains("  Excavate"), "expected indented task:\n{output}");
    assert!(output.contains("2024-01-08 08:00"));
    assert!(!output.contains("Partitions"));
}

#[test]
fn cli_lists_projects() {
    let dir = export();
    cli()
        .arg(dir.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(str_contains("0\tAlpha"))
        .stdout(str_contains("1\tBeta"));
}

#[test]
fn cli_reads_selected_project_as_json() {
    let dir = export();
    let assert = cli()
        .arg(dir.path())
        .args(["--project", "1", "--json"])
        .assert()
        .success();
    let project: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("json output");
    assert_eq!(project["properties"]["name"], "Beta");
    assert_eq!(project["tasks"][0]["name"], "Partitions");
}

#[test]
fn cli_reports_missing_file() {
    let dir = TempDir::new().expect("create temp dir");
    cli()
        .arg(dir.path().join("missing.pp"))
        .assert()
        .failure()
        .stderr(str_contains("Error:"));
}
