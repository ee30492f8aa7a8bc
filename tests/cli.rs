use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendwise(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendwise").unwrap();
    cmd.env("SPENDWISE_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn add_expense(dir: &TempDir, amount: &str, description: &str, category: &str, date: &str) {
    spendwise(dir)
        .args(["expense", "add", amount, description, "--category", category, "--date", date])
        .assert()
        .success();
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").is_dir());
}

#[test]
fn expense_add_and_list() {
    let dir = TempDir::new().unwrap();
    add_expense(&dir, "12.50", "Lunch", "Food", "2024-01-15");
    add_expense(&dir, "30", "Train ticket", "transportation", "2024-01-20");

    spendwise(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Train ticket"))
        .stdout(predicate::str::contains("2 expense(s), total $42.50"));

    spendwise(&dir)
        .args(["expense", "list", "--search", "lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Train ticket").not());

    let stored = std::fs::read_to_string(dir.path().join("data").join("expenses.json")).unwrap();
    assert!(stored.starts_with('['));
    assert!(stored.contains("\"amount\":1250"));
}

#[test]
fn expense_validation_errors_store_nothing() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .args(["expense", "add", "12.345", "Lunch", "--date", "2024-01-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount"));

    spendwise(&dir)
        .args(["expense", "add", "5", "Moon trip", "--category", "Travel", "--date", "2024-01-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category"));

    spendwise(&dir)
        .args(["expense", "add", "5", "Later", "--date", "2999-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date"));

    spendwise(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn unknown_expense_is_not_found() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .args(["expense", "delete", "exp-deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found"));
}

#[test]
fn budget_set_twice_keeps_one_budget() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .args(["budget", "set", "Food", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created budget: Food $100.00"));

    spendwise(&dir)
        .args(["budget", "set", "food", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated budget: Food $150.00"));

    spendwise(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$150.00"))
        .stdout(predicate::str::contains("$100.00").not());
}

#[test]
fn budget_edit_onto_taken_category_fails() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir).args(["budget", "set", "Food", "100"]).assert().success();
    spendwise(&dir).args(["budget", "set", "Bills", "500"]).assert().success();

    spendwise(&dir)
        .args(["budget", "edit", "bills", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn savings_fund_reaches_goal() {
    let dir = TempDir::new().unwrap();

    spendwise(&dir)
        .args(["savings", "add", "Laptop", "1200", "--current", "1000"])
        .assert()
        .success();

    spendwise(&dir)
        .args(["savings", "fund", "laptop", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1500.00 of $1200.00"))
        .stdout(predicate::str::contains("Goal reached!"));
}

#[test]
fn reports_render() {
    let dir = TempDir::new().unwrap();
    add_expense(&dir, "40", "Market", "Grocery", "2024-01-15");

    spendwise(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spent:      $40.00"))
        .stdout(predicate::str::contains("Last 6 months"));

    spendwise(&dir)
        .args(["report", "planning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Financial health:"));
}

#[test]
fn export_csv() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");

    spendwise(&dir)
        .args(["export", "csv", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no expenses to export"));

    add_expense(&dir, "12.50", "Lunch, \"team\"", "Food", "2024-01-05");
    add_expense(&dir, "3", "Coffee", "Food", "2024-02-01");

    spendwise(&dir)
        .args(["export", "csv", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 expense(s)"));

    let csv = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        csv,
        "Date,Description,Category,Amount\n\
         Feb 01, 2024,\"Coffee\",Food,3.00\n\
         Jan 05, 2024,\"Lunch, \"\"team\"\"\",Food,12.50"
    );
}

#[test]
fn corrupt_collection_is_reported_and_replaced() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data").join("expenses.json"), "{broken").unwrap();

    spendwise(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."))
        .stderr(predicate::str::contains("Warning: could not load 'expenses'"));
}
