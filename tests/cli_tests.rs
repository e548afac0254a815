use predicates::str::contains;

mod common;
use common::{ldk, safe_future_weekday, setup_test_db};

#[test]
fn init_creates_the_database() {
    let db_path = setup_test_db("cli_init");

    ldk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn adduser_then_greeting_shows_the_balance() {
    let db_path = setup_test_db("cli_greeting");

    ldk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ldk()
        .args([
            "--db", &db_path, "adduser", "1002", "5000", "--el", "1", "--sl", "1", "--cl", "2",
        ])
        .assert()
        .success();

    ldk()
        .args(["--db", &db_path, "send", "1002", "hello"])
        .assert()
        .success()
        .stdout(contains("Earned Leave (EL): 1"))
        .stdout(contains("Total available: 4"));
}

#[test]
fn full_application_and_approval_cycle() {
    let db_path = setup_test_db("cli_cycle");
    let target = safe_future_weekday();
    let date_arg = target.format("%Y-%m-%d").to_string();
    let message = format!(
        "I want to apply CL leave for {}",
        target.format("%d-%m-%Y")
    );

    ldk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ldk()
        .args(["--db", &db_path, "adduser", "1002", "5000"])
        .assert()
        .success();

    ldk()
        .args(["--db", &db_path, "send", "1002", &message])
        .assert()
        .success()
        .stdout(contains("Submitted"));

    ldk()
        .args(["--db", &db_path, "pending", "5000"])
        .assert()
        .success()
        .stdout(contains("1002"))
        .stdout(contains(date_arg.as_str()));

    ldk()
        .args(["--db", &db_path, "approve", "5000", "--all"])
        .assert()
        .success()
        .stdout(contains("Approved 1/1"));

    // CL entitlement defaults to 5; one approved day leaves 4.
    ldk()
        .args(["--db", &db_path, "send", "1002", "what is my balance"])
        .assert()
        .success()
        .stdout(contains("CL: 4"));
}

#[test]
fn reject_leaves_the_balance_alone() {
    let db_path = setup_test_db("cli_reject");
    let target = safe_future_weekday();
    let date_arg = target.format("%Y-%m-%d").to_string();
    let message = format!(
        "I want to apply CL leave for {}",
        target.format("%d-%m-%Y")
    );

    ldk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    ldk()
        .args(["--db", &db_path, "adduser", "1002", "5000"])
        .assert()
        .success();
    ldk()
        .args(["--db", &db_path, "send", "1002", &message])
        .assert()
        .success()
        .stdout(contains("Submitted"));

    ldk()
        .args(["--db", &db_path, "reject", "5000", "1002", &date_arg])
        .assert()
        .success()
        .stdout(contains("Rejected"));

    ldk()
        .args(["--db", &db_path, "send", "1002", "what is my balance"])
        .assert()
        .success()
        .stdout(contains("CL: 5"));
}

#[test]
fn approving_someone_elses_request_is_refused() {
    let db_path = setup_test_db("cli_wrong_admin");
    let target = safe_future_weekday();
    let date_arg = target.format("%Y-%m-%d").to_string();
    let message = format!(
        "I want to apply CL leave for {}",
        target.format("%d-%m-%Y")
    );

    ldk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    ldk()
        .args(["--db", &db_path, "adduser", "1002", "5000"])
        .assert()
        .success();
    ldk()
        .args(["--db", &db_path, "send", "1002", &message])
        .assert()
        .success();

    // Admin 8001 does not own this request.
    ldk()
        .args(["--db", &db_path, "approve", "8001", "1002", &date_arg])
        .assert()
        .success()
        .stdout(contains("No pending request"));

    // Still pending for the right admin.
    ldk()
        .args(["--db", &db_path, "pending", "5000"])
        .assert()
        .success()
        .stdout(contains("1002"));
}

#[test]
fn history_shows_and_clears_the_conversation() {
    let db_path = setup_test_db("cli_history");

    ldk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    ldk()
        .args(["--db", &db_path, "adduser", "1000", "5000"])
        .assert()
        .success();
    ldk()
        .args(["--db", &db_path, "send", "1000", "hello"])
        .assert()
        .success();

    ldk()
        .args(["--db", &db_path, "history", "1000"])
        .assert()
        .success()
        .stdout(contains("you> hello"));

    ldk()
        .args(["--db", &db_path, "history", "1000", "--clear"])
        .assert()
        .success();

    ldk()
        .args(["--db", &db_path, "history", "1000"])
        .assert()
        .success()
        .stdout(contains("No chat history"));
}

#[test]
fn export_writes_a_workbook() {
    let db_path = setup_test_db("cli_export");
    let mut out: std::path::PathBuf = std::env::temp_dir();
    out.push("cli_export_leavedesk.xlsx");
    let out_path = out.to_string_lossy().to_string();
    std::fs::remove_file(&out_path).ok();

    ldk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    ldk()
        .args(["--db", &db_path, "adduser", "1000", "5000"])
        .assert()
        .success();

    ldk()
        .args([
            "--db", &db_path, "export", "--format", "xlsx", "--output", &out_path,
        ])
        .assert()
        .success();

    assert!(std::path::Path::new(&out_path).exists());
}
