use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_LEDGER_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn add(dir: &TempDir, description: &str, amount: &str, category: &str, date: &str) {
    expense(dir)
        .args(["add", description, amount, "--category", category, "--date", date])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense"));
}

fn first_id(dir: &TempDir) -> String {
    let text = std::fs::read_to_string(dir.path().join("data").join("expenses.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    json[0]["id"].as_str().unwrap().to_string()
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Lunch", "12.50", "Food", "2024-03-01");
    add(&dir, "Taxi", "$30", "travel", "2024-03-02");

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Taxi"))
        .stdout(predicate::str::contains("2 expense(s), total $42.50"));

    expense(&dir)
        .args(["list", "--category", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Taxi").not());
}

#[test]
fn add_persists_files() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Lunch", "12.50", "Food", "2024-03-01");

    let data = dir.path().join("data");
    assert!(data.join("expenses.json").exists());
    assert!(data.join("categories.json").exists());

    let text = std::fs::read_to_string(data.join("expenses.json")).unwrap();
    assert!(text.contains("\"date\": \"2024-03-01\""));
    assert!(text.contains("\"name\": \"Food\""));
}

#[test]
fn invalid_input_fails_without_saving() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "Lunch", "0", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    expense(&dir)
        .args(["add", "Lunch", "abc", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    expense(&dir)
        .args(["add", "Lunch", "5", "--category", "Gardening"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found"));

    assert!(!dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn show_edit_delete() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Lunch", "12.50", "Food", "2024-03-01");
    let id = first_id(&dir);
    let prefix = &id[..8];

    expense(&dir)
        .args(["show", prefix])
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()))
        .stdout(predicate::str::contains("Amount:      $12.50"));

    expense(&dir)
        .args(["edit", prefix, "--amount", "15", "--notes", "with client"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$15.00"));

    expense(&dir)
        .args(["show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes:       with client"));

    expense(&dir).args(["delete", id.as_str()]).assert().success();

    expense(&dir)
        .args(["show", id.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found"));
}

#[test]
fn category_in_use_cannot_be_deleted() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Lunch", "12.50", "Food", "2024-03-01");

    expense(&dir)
        .args(["category", "delete", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is used by 1 expense(s)"));

    expense(&dir)
        .args(["category", "add", "Pets", "--color", "#aabbcc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 9"));

    expense(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pets"))
        .stdout(predicate::str::contains("#aabbcc"));
}

#[test]
fn summary_report() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Lunch", "12.50", "Food", "2024-03-01");

    expense(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EXPENSE SUMMARY REPORT"))
        .stdout(predicate::str::contains("Total Expenses: $12.50"))
        .stdout(predicate::str::contains(
            "Food                : $   12.50 (100.0%)",
        ));
}

#[test]
fn monthly_and_overview_reports_on_empty_ledger() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["report", "monthly", "--months", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Expenses"));

    expense(&dir)
        .args(["report", "overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses:     $0.00"));
}

#[test]
fn export_and_import_csv() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Lunch", "12.50", "Food", "2024-03-01");
    let id = first_id(&dir);
    let out = dir.path().join("out.csv");

    expense(&dir)
        .args(["export", "csv"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expense(s)"));

    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        text.lines().nth(1).unwrap(),
        format!("\"{}\",\"Lunch\",12.50,\"Food\",\"2024-03-01\",\"\"", id)
    );

    let other = TempDir::new().unwrap();
    expense(&other)
        .arg("import")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 expense(s)"));

    expense(&other)
        .arg("import")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped 1 already present"));
}

#[test]
fn corrupt_data_file_is_moved_aside() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("expenses.json"), "{ not json").unwrap();

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));

    assert!(data.join("expenses.json.corrupt").exists());
}

#[test]
fn config_shows_paths_and_saves_settings() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["config", "--currency", "€"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: €"));

    assert!(dir.path().join("config.json").exists());
    add(&dir, "Lunch", "12.50", "Food", "2024-03-01");

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("€12.50"));
}

#[test]
fn unreadable_data_file_fails_and_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let expenses_file = dir.path().join("data").join("expenses.json");
    std::fs::create_dir_all(&expenses_file).unwrap();

    expense(&dir)
        .args(["report", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage error"));

    assert!(expenses_file.is_dir());
    assert!(!dir.path().join("data").join("expenses.json.corrupt").exists());
}

#[test]
fn oversized_amounts_are_rejected() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "Yacht", "92233720368547758.07", "--category", "Others"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    expense(&dir)
        .args(["report", "monthly", "--months", "4000000000"])
        .assert()
        .failure();
}
