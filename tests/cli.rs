use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dealdesk(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dealdesk").expect("bin");
    cmd.env("DEALDESK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn asset_list_shows_portfolio() {
    let dir = TempDir::new().unwrap();
    dealdesk(&dir)
        .args(["asset", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kreuzberg Residential Complex"))
        .stdout(predicate::str::contains("Prenzlauer Berg Apartments"));
}

#[test]
fn asset_show_unknown_fails() {
    let dir = TempDir::new().unwrap();
    dealdesk(&dir)
        .args(["asset", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn import_then_list_screening() {
    let dir = TempDir::new().unwrap();

    let template = dealdesk(&dir)
        .args(["asset", "template"])
        .output()
        .expect("template");
    assert!(template.status.success());
    let header = String::from_utf8(template.stdout).unwrap();
    assert!(header.starts_with("name,location"));

    let csv_path = dir.path().join("assets.csv");
    fs::write(
        &csv_path,
        format!(
            "{}Wedding Lofts,\"Berlin, Germany\",,3200000,9.1,High,80,A,88\n,Berlin,1000000,8,,,,,\n",
            header
        ),
    )
    .unwrap();

    dealdesk(&dir)
        .args(["asset", "import", "--dry-run"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 assets would be imported, 1 rows skipped"));

    dealdesk(&dir)
        .args(["asset", "import"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 assets"))
        .stderr(predicate::str::contains("Line 3"));

    dealdesk(&dir)
        .args(["asset", "list", "--screening"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wedding Lofts"));
}

#[test]
fn transaction_list_and_show() {
    let dir = TempDir::new().unwrap();
    dealdesk(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Berlin Portfolio Acquisition"));

    dealdesk(&dir)
        .args(["txn", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Berlin Portfolio Acquisition"));
}

#[test]
fn transaction_export_json_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.json");

    dealdesk(&dir)
        .args(["transaction", "export", "1", "--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert!(json.get("schema_version").is_some());
}

#[test]
fn transaction_export_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    dealdesk(&dir)
        .args(["transaction", "export", "1", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown report format"));
}

#[test]
fn open_route_renders_building() {
    let dir = TempDir::new().unwrap();
    dealdesk(&dir)
        .args(["open", "/assets/1/buildings/b1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Building: Bergmannstraße Building"));
}

#[test]
fn open_unknown_route_fails() {
    let dir = TempDir::new().unwrap();
    dealdesk(&dir)
        .args(["open", "/portfolio/1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown route: /portfolio/1"));

    dealdesk(&dir)
        .args(["open", "/assets/1/buildings/b9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn tui_with_bad_route_fails_before_terminal_setup() {
    let dir = TempDir::new().unwrap();
    dealdesk(&dir)
        .args(["tui", "--route", "/transactions/999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
