//! CLI integration tests.
//!
//! The binary is pointed at `/bin/sh` as its runtime, so `sh ps --format ...`
//! runs a `ps` script in the test's temp dir that replays canned output.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use pspretty_common::ContainerRecord;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const WEB: &str = r#"{"CreatedAt":"2024-05-01 10:00:00 +0000 UTC","ID":"a1b2c3d4e5f6","Image":"nginx:latest","Names":"web","Ports":"0.0.0.0:8080->80/tcp","State":"running","Status":"Up 2 hours"}"#;
const DB: &str = r#"{"CreatedAt":"2024-04-28 08:30:00 +0000 UTC","ID":"0f9e8d7c6b5a","Image":"postgres:16","Names":"db","Ports":"5432/tcp","State":"exited","Status":"Exited (0) 3 days ago"}"#;
const CACHE: &str = r#"{"CreatedAt":"2024-05-02 12:00:00 +0000 UTC","ID":"1234567890ab","Image":"redis:7","Names":"Cache","Ports":"","State":"running","Status":"Up 5 minutes"}"#;

const PS_SCRIPT: &str = r#"printf '%s\n' "$@" > args.txt
while IFS= read -r line || [ -n "$line" ]; do
    printf '%s\n' "$line"
done < listing.jsonl
"#;

/// A temp dir holding a `ps` script and the listing it replays.
struct FakeRuntime {
    dir: TempDir,
}

impl FakeRuntime {
    fn new(lines: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("ps"), PS_SCRIPT).unwrap();
        std::fs::write(dir.path().join("listing.jsonl"), lines.join("\n")).unwrap();
        Self { dir }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("pspretty").expect("Failed to find pspretty binary");
        cmd.current_dir(self.dir.path())
            .env_remove("PSPRETTY_RUNTIME")
            .env_remove("PSPRETTY_PAGER")
            .env_remove("RUST_LOG")
            .args(["--runtime", "/bin/sh"]);
        cmd
    }

    fn path(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(name)
    }
}

fn json_names(stdout: &[u8]) -> Vec<String> {
    let records: Vec<ContainerRecord> = serde_json::from_slice(stdout).unwrap();
    records.iter().map(|r| r.get("Names").to_string()).collect()
}

// ============================================================================
// Empty Listing
// ============================================================================

#[test]
fn test_empty_listing_reports_no_containers() {
    let runtime = FakeRuntime::new(&[]);

    runtime
        .cmd()
        .args(["--format", "csv", "--output", "out.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No containers found."));

    assert!(!runtime.path("out.csv").exists());
}

#[test]
fn test_missing_runtime_reports_no_containers() {
    let runtime = FakeRuntime::new(&[WEB]);

    runtime
        .cmd()
        .args(["--runtime", "pspretty-no-such-runtime"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No containers found."));
}

#[test]
fn test_malformed_line_fails_with_line_number() {
    let runtime = FakeRuntime::new(&[WEB, "{not json"]);

    runtime
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

// ============================================================================
// Table Output
// ============================================================================

#[test]
fn test_default_table() {
    let runtime = FakeRuntime::new(&[WEB, DB]);

    runtime
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("a1b2c3d4e5f6"))
        .stdout(predicate::str::contains("postgres:16"))
        .stdout(predicate::str::contains("\u{1b}[").not());

    let args = std::fs::read_to_string(runtime.path("args.txt")).unwrap();
    assert_eq!(args, "--format\n{{json .}}\n");
}

#[test]
fn test_all_flag_is_forwarded() {
    let runtime = FakeRuntime::new(&[WEB]);

    runtime.cmd().arg("--all").assert().success();

    let args = std::fs::read_to_string(runtime.path("args.txt")).unwrap();
    assert_eq!(args, "--format\n{{json .}}\n--all\n");
}

#[test]
fn test_table_to_file_has_no_colors() {
    let runtime = FakeRuntime::new(&[WEB, DB]);

    runtime
        .cmd()
        .args(["--output", "table.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let table = std::fs::read_to_string(runtime.path("table.txt")).unwrap();
    assert!(table.contains("nginx:latest"));
    assert!(!table.contains('\u{1b}'));
    assert!(table.lines().all(|l| console::measure_text_width(l) <= 140));
}

// ============================================================================
// Query Options
// ============================================================================

#[test]
fn test_sort_by_name() {
    let runtime = FakeRuntime::new(&[WEB, DB, CACHE]);

    let output = runtime
        .cmd()
        .args(["--format", "json", "--sortby", "name"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_names(&output.stdout), ["Cache", "db", "web"]);

    let output = runtime
        .cmd()
        .args(["--format", "json", "--sortby", "name", "--desc"])
        .output()
        .unwrap();
    assert_eq!(json_names(&output.stdout), ["web", "db", "Cache"]);
}

#[test]
fn test_filter_and_limit() {
    let runtime = FakeRuntime::new(&[WEB, DB, CACHE]);

    let output = runtime
        .cmd()
        .args(["--format", "json", "--filter", "status:UP"])
        .output()
        .unwrap();
    assert_eq!(json_names(&output.stdout), ["web", "Cache"]);

    let output = runtime
        .cmd()
        .args(["--format", "json", "--filter", "status:up image:redis"])
        .output()
        .unwrap();
    assert_eq!(json_names(&output.stdout), ["Cache"]);

    let output = runtime
        .cmd()
        .args(["--format", "json", "--sortby", "created", "--limit", "2"])
        .output()
        .unwrap();
    assert_eq!(json_names(&output.stdout), ["db", "web"]);
}

#[test]
fn test_limit_zero() {
    let runtime = FakeRuntime::new(&[WEB, DB]);

    runtime
        .cmd()
        .args(["--format", "json", "--limit", "0"])
        .assert()
        .success()
        .stdout("[]\n");
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_csv_export_to_file() {
    let runtime = FakeRuntime::new(&[WEB, DB]);

    runtime
        .cmd()
        .args(["--format", "csv", "--output", "containers.csv"])
        .assert()
        .success();

    let csv = std::fs::read_to_string(runtime.path("containers.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("ID,Names,Image,Status,CreatedAt,Ports"));
    assert_eq!(
        lines.next(),
        Some("a1b2c3d4e5f6,web,nginx:latest,Up 2 hours,2024-05-01 10:00:00 +0000 UTC,0.0.0.0:8080->80/tcp")
    );
    assert_eq!(lines.count(), 1);
}

#[test]
fn test_json_export_keeps_all_fields() {
    let runtime = FakeRuntime::new(&[WEB]);

    let output = runtime.cmd().args(["--format", "json"]).output().unwrap();
    let records: Vec<ContainerRecord> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("State"), "running");
    assert_eq!(records[0], ContainerRecord::from_json_line(WEB).unwrap());
}

#[test]
fn test_markdown_stdout() {
    let runtime = FakeRuntime::new(&[DB]);

    runtime
        .cmd()
        .args(["--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "| ID | Name | Image | Status | Created | Ports |\n",
        ))
        .stdout(predicate::str::contains(
            "| 0f9e8d7c6b5a | db | postgres:16 | Exited (0) 3 days ago | 2024-04-28 08:30:00 +0000 UTC | 5432/tcp |",
        ));
}

// ============================================================================
// External Tools
// ============================================================================

#[test]
fn test_fzf_missing() {
    let runtime = FakeRuntime::new(&[WEB]);
    let empty_path = TempDir::new().unwrap();

    runtime
        .cmd()
        .env("PATH", empty_path.path())
        .args(["--fzf", "--output", "ignored.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fzf is not installed or not in PATH."));

    assert!(!runtime.path("ignored.txt").exists());
}

#[test]
fn test_pager_receives_output() {
    let runtime = FakeRuntime::new(&[WEB]);
    std::fs::write(runtime.path("pager.sh"), "cat > paged.txt\n").unwrap();

    runtime
        .cmd()
        .env("PSPRETTY_PAGER", "/bin/sh pager.sh")
        .args(["--pager", "--format", "csv"])
        .assert()
        .success();

    let paged = std::fs::read_to_string(runtime.path("paged.txt")).unwrap();
    assert!(paged.starts_with("ID,Names,Image,Status,CreatedAt,Ports\n"));
}

#[test]
fn test_missing_pager_fails() {
    let runtime = FakeRuntime::new(&[WEB]);

    runtime
        .cmd()
        .env("PSPRETTY_PAGER", "pspretty-no-such-pager")
        .arg("--pager")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pspretty-no-such-pager"));
}

#[test]
fn test_completions() {
    Command::cargo_bin("pspretty")
        .unwrap()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pspretty"));
}
