use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "presupuesto";

fn presupuesto(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("PRESUPUESTO_DATA_DIR", dir)
        .env_remove("PRESUPUESTO_USER")
        .env_remove("RUST_LOG");
    cmd
}

fn month_file(dir: &Path, user: &str, month: &str) -> std::path::PathBuf {
    dir.join("data")
        .join("users")
        .join(user)
        .join("budgets")
        .join(format!("{month}.json"))
}

fn read_month(dir: &Path, user: &str, month: &str) -> serde_json::Value {
    let text = std::fs::read_to_string(month_file(dir, user, month)).expect("month file");
    serde_json::from_str(&text).expect("valid json")
}

#[test]
fn init_writes_settings_and_config_shows_them() {
    let temp = TempDir::new().unwrap();

    presupuesto(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete"));
    assert!(temp.path().join("config.json").exists());
    assert!(temp.path().join("data").is_dir());

    presupuesto(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("User id:      local").and(contains("Vivienda")));
}

#[test]
fn new_month_from_defaults_is_saved_once() {
    let temp = TempDir::new().unwrap();

    presupuesto(temp.path())
        .args(["month", "new", "2025-01", "--from", "defaults"])
        .assert()
        .success()
        .stdout(contains("January 2025"));

    let doc = read_month(temp.path(), "local", "2025-01");
    assert_eq!(doc["incomes"].as_array().unwrap().len(), 2);
    assert_eq!(doc["expenses"].as_array().unwrap().len(), 6);
    assert_eq!(doc["totals"]["remaining"], 0);
    assert!(doc["createdAt"].is_i64());

    presupuesto(temp.path())
        .args(["month", "new", "2025-01"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn rows_and_breakdowns_update_totals() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    presupuesto(dir)
        .args(["month", "new", "2025-01", "--from", "defaults"])
        .assert()
        .success();
    presupuesto(dir)
        .args(["month", "edit", "incomes", "1", "--amount", "2000", "--month", "2025-01"])
        .assert()
        .success();
    presupuesto(dir)
        .args(["month", "add", "expenses", "Luz", "45,50", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(contains("position 7"));
    presupuesto(dir)
        .args(["breakdown", "add", "expenses", "2", "Pollo", "20", "--month", "2025-01"])
        .assert()
        .success();
    presupuesto(dir)
        .args(["breakdown", "add", "expenses", "2", "Mercadona", "55.50", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(contains("2 items, worth 75.50"));

    let doc = read_month(dir, "local", "2025-01");
    assert_eq!(doc["totals"]["income"], 2000);
    assert_eq!(doc["totals"]["expense"], 121.0);
    assert_eq!(doc["totals"]["remaining"], 1879.0);
    assert_eq!(doc["expenses"][1]["breakdown"].as_array().unwrap().len(), 2);

    presupuesto(dir)
        .args(["month", "show", "2025-01"])
        .assert()
        .success()
        .stdout(
            contains("Luz")
                .and(contains("€45.50"))
                .and(contains("€75.50"))
                .and(contains("€1879.00"))
                .and(contains("Expense shares")),
        );

    presupuesto(dir)
        .args(["breakdown", "remove", "expenses", "2", "1", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(contains("1 items, worth 55.50"));
    presupuesto(dir)
        .args(["month", "remove", "expenses", "7", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(contains("Removed 'Luz'"));

    let doc = read_month(dir, "local", "2025-01");
    assert_eq!(doc["expenses"].as_array().unwrap().len(), 6);
    assert_eq!(doc["totals"]["expense"], 55.5);
}

#[test]
fn bad_positions_are_rejected() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    presupuesto(dir)
        .args(["month", "new", "2025-01", "--from", "empty"])
        .assert()
        .success();

    presupuesto(dir)
        .args(["month", "remove", "expenses", "0", "--month", "2025-01"])
        .assert()
        .failure()
        .stderr(contains("positions start at 1"));

    presupuesto(dir)
        .args(["month", "remove", "expenses", "3", "--month", "2025-01"])
        .assert()
        .failure()
        .stderr(contains("out of range"));

    presupuesto(dir)
        .args(["month", "edit", "expenses", "1", "--month", "2025-01"])
        .assert()
        .failure()
        .stderr(contains("Nothing to change"));
}

#[test]
fn next_month_can_project_or_copy_the_previous_one() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    presupuesto(dir)
        .args(["month", "new", "2025-01", "--from", "defaults"])
        .assert()
        .success();
    presupuesto(dir)
        .args(["month", "edit", "expenses", "1", "--amount", "800", "--month", "2025-01"])
        .assert()
        .success();
    presupuesto(dir)
        .args(["month", "add", "expenses", "Vacaciones", "900", "--month", "2025-01"])
        .assert()
        .success();

    presupuesto(dir)
        .args(["month", "new", "2025-02", "--from", "previous"])
        .assert()
        .success();
    let projected = read_month(dir, "local", "2025-02");
    assert_eq!(projected["expenses"].as_array().unwrap().len(), 6);
    assert_eq!(projected["expenses"][0]["amount"], 800);
    assert_eq!(projected["totals"]["expense"], 800);

    presupuesto(dir)
        .args(["month", "new", "2025-03", "--from", "copy"])
        .assert()
        .success();
    let copied = read_month(dir, "local", "2025-03");
    assert_eq!(copied["expenses"].as_array().unwrap().len(), 6);
    assert_eq!(copied["totals"]["expense"], 800);

    presupuesto(dir)
        .args(["month", "new", "2025-02", "--from", "copy"])
        .assert()
        .failure();
}

#[test]
fn users_are_kept_apart() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    presupuesto(dir)
        .args(["--user", "ana", "month", "new", "2024-12", "--from", "empty"])
        .assert()
        .success();
    assert!(month_file(dir, "ana", "2024-12").exists());

    presupuesto(dir)
        .args(["month", "list", "--user", "ana"])
        .assert()
        .success()
        .stdout(contains("2024-12").and(contains("December 2024")));

    presupuesto(dir)
        .args(["month", "list"])
        .assert()
        .success()
        .stdout(contains("No months saved for 'local'"));

    presupuesto(dir)
        .args(["--user", "../escape", "month", "list"])
        .assert()
        .failure()
        .stderr(contains("path separators"));
}

#[test]
fn legacy_documents_are_read_leniently() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let path = month_file(dir, "local", "2023-05");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"{"incomes": [{"label": "Nómina", "amount": 1500}],
            "expenses": [{"label": "Vivienda", "amount": "600"}, {"label": "Gimnasio"}],
            "owner": "legacy"}"#,
    )
    .unwrap();

    presupuesto(dir)
        .args(["month", "show", "2023-05"])
        .assert()
        .success()
        .stdout(contains("€600.00").and(contains("Gimnasio")));

    presupuesto(dir)
        .args(["month", "add", "expenses", "Luz", "40", "--month", "2023-05"])
        .assert()
        .success();

    let doc = read_month(dir, "local", "2023-05");
    assert_eq!(doc["owner"], "legacy");
    assert_eq!(doc["expenses"][1]["amount"], 0);
    assert_eq!(doc["totals"]["remaining"], 860);
}

#[test]
fn show_derives_totals_from_rows() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let path = month_file(dir, "local", "2023-05");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"{"incomes": [{"label": "Nómina", "amount": 1500}],
            "expenses": [{"label": "Vivienda", "amount": 600}],
            "totals": {"income": 1, "expense": 2, "remaining": 3}}"#,
    )
    .unwrap();

    presupuesto(dir)
        .args(["month", "show", "2023-05"])
        .assert()
        .success()
        .stdout(contains("€900.00").and(contains("€3.00").not()));
}

#[test]
fn invalid_month_is_reported() {
    let temp = TempDir::new().unwrap();

    presupuesto(temp.path())
        .args(["month", "show", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}
