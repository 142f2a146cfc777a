use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SAMPLE_ENTRIES, myot, seed_entries, setup_test_db, temp_file};

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    myot()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_entry_for_today() {
    let db_path = setup_test_db("cli_add");

    myot()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    myot()
        .args(["--db", &db_path, "add", "3.5"])
        .assert()
        .success()
        .stdout(contains("Added 3.5 h").and(contains(today())).and(contains("1.40")));

    myot()
        .args(["--db", &db_path, "day", &today()])
        .assert()
        .success()
        .stdout(contains("3.5 hrs"));
}

#[test]
fn test_add_rejects_invalid_hours() {
    let db_path = setup_test_db("cli_add_invalid");

    myot()
        .args(["--db", &db_path, "add", "abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid hours"));

    myot()
        .args(["--db", &db_path, "add", "0"])
        .assert()
        .failure();

    myot()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries."));
}

#[test]
fn test_invalid_add_does_not_create_database() {
    let db_path = setup_test_db("cli_add_invalid_fresh");

    myot()
        .args(["--db", &db_path, "add", "abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid hours"));

    assert!(!std::path::Path::new(&db_path).exists());
}

#[test]
fn test_relative_db_path_is_shared_by_init_and_commands() {
    let dir = std::env::temp_dir().join("myot_relative_db");
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();

    myot()
        .current_dir(&dir)
        .args(["--db", "rel.sqlite", "--test", "init"])
        .assert()
        .success();
    assert!(dir.join("rel.sqlite").exists());

    myot()
        .current_dir(&dir)
        .args(["--db", "rel.sqlite", "add", "2"])
        .assert()
        .success();

    myot()
        .current_dir(&dir)
        .args(["--db", "rel.sqlite", "day", &today()])
        .assert()
        .success()
        .stdout(contains("2 hrs"));
}

#[test]
fn test_rate_show_set_and_coerce() {
    let db_path = setup_test_db("cli_rate");

    myot()
        .args(["--db", &db_path, "rate"])
        .assert()
        .success()
        .stdout(contains("0.4"));

    myot()
        .args(["--db", &db_path, "rate", "0.75"])
        .assert()
        .success()
        .stdout(contains("set to BHD 0.75"));

    myot()
        .args(["--db", &db_path, "add", "2"])
        .assert()
        .success()
        .stdout(contains("BHD 1.50"));

    myot()
        .args(["--db", &db_path, "rate", "lots"])
        .assert()
        .success()
        .stdout(contains("Invalid hourly rate").and(contains("set to BHD 0 ")));
}

#[test]
fn test_summary_uses_current_rate() {
    let db_path = setup_test_db("cli_summary");
    seed_entries(&db_path, SAMPLE_ENTRIES);

    myot()
        .args(["--db", &db_path, "summary", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(
            contains("Summary for May 2024")
                .and(contains("7.0"))
                .and(contains("BHD 2.80")),
        );

    myot()
        .args(["--db", &db_path, "rate", "1"])
        .assert()
        .success();

    myot()
        .args(["--db", &db_path, "summary", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(contains("BHD 7.00"));
}

#[test]
fn test_summary_rejects_bad_month() {
    let db_path = setup_test_db("cli_summary_bad");

    myot()
        .args(["--db", &db_path, "summary", "--month", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_list_month_filter_keeps_stored_earnings() {
    let db_path = setup_test_db("cli_list_month");
    seed_entries(&db_path, SAMPLE_ENTRIES);

    myot()
        .args(["--db", &db_path, "rate", "5"])
        .assert()
        .success();

    myot()
        .args(["--db", &db_path, "list", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(
            contains("Entries for May 2024")
                .and(contains("2024-05-01"))
                .and(contains("BHD 1.40"))
                .and(contains("2024-06-01").not()),
        );

    myot()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Recent Entries").and(contains("2024-06-01")));
}

#[test]
fn test_day_is_exact_match() {
    let db_path = setup_test_db("cli_day");
    seed_entries(&db_path, SAMPLE_ENTRIES);

    myot()
        .args(["--db", &db_path, "day", "2024-05-02"])
        .assert()
        .success()
        .stdout(contains("3.5 hrs").and(contains("1.5 hrs")).and(contains("2 hrs").not()));

    myot()
        .args(["--db", &db_path, "day", "2024-05-03"])
        .assert()
        .success()
        .stdout(contains("No entries."));
}

#[test]
fn test_calendar_annotates_days() {
    let db_path = setup_test_db("cli_calendar");
    seed_entries(&db_path, SAMPLE_ENTRIES);

    myot()
        .args(["--db", &db_path, "calendar", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(
            contains("May 2024")
                .and(contains("Sun"))
                .and(contains("2h"))
                .and(contains("3.5+1.5h")),
        );
}

#[test]
fn test_malformed_stored_entries_are_skipped() {
    let db_path = setup_test_db("cli_malformed");
    seed_entries(
        &db_path,
        r#"[{"id": 1, "date": "2024-05-01", "hours": 2, "earnings": 0.8}, {"id": "x"}]"#,
    );

    myot()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ignored 1 malformed stored entry").and(contains("2024-05-01")));
}

#[test]
fn test_theme_show_and_change() {
    let db_path = setup_test_db("cli_theme");

    myot()
        .args(["--db", &db_path, "theme"])
        .assert()
        .success()
        .stdout(contains("light").and(contains("#1890ff")));

    myot()
        .args(["--db", &db_path, "theme", "--dark", "--color", "#FF0000"])
        .assert()
        .success()
        .stdout(contains("mode=dark").and(contains("color=#ff0000")));

    myot()
        .args(["--db", &db_path, "theme", "--color", "red"])
        .assert()
        .failure()
        .stderr(contains("Invalid color"));

    myot()
        .args(["--db", &db_path, "theme", "--dark", "--light"])
        .assert()
        .failure();
}

#[test]
fn test_import_browser_dump() {
    let db_path = setup_test_db("cli_import");
    let dump = temp_file("cli_import_dump", "json");

    // localStorage keeps every value as a string
    let entries: serde_json::Value = serde_json::from_str(SAMPLE_ENTRIES).unwrap();
    let entries = entries.to_string();
    let content = serde_json::json!({
        "overtimeEntries": entries,
        "hourlyRate": "0.5",
        "isDarkTheme": "true",
        "primaryColor": "#52c41a",
        "somethingElse": "ignored"
    });
    fs::write(&dump, content.to_string()).unwrap();

    myot()
        .args(["--db", &db_path, "import", "--file", &dump])
        .assert()
        .success()
        .stdout(contains("Imported 4 entries").and(contains("rate 0.5")));

    myot()
        .args(["--db", &db_path, "summary", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(contains("1.0").and(contains("BHD 0.50")));

    myot()
        .args(["--db", &db_path, "theme"])
        .assert()
        .success()
        .stdout(contains("dark").and(contains("#52c41a")));
}

#[test]
fn test_import_rejects_unrelated_file() {
    let db_path = setup_test_db("cli_import_bad");
    let dump = temp_file("cli_import_bad_dump", "json");
    fs::write(&dump, r#"{"foo": "bar"}"#).unwrap();

    myot()
        .args(["--db", &db_path, "import", "--file", &dump])
        .assert()
        .failure()
        .stderr(contains("Import error"));
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("cli_log");

    myot()
        .args(["--db", &db_path, "add", "1"])
        .assert()
        .success();
    myot()
        .args(["--db", &db_path, "rate", "0.9"])
        .assert()
        .success();

    myot()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("add")).and(contains("0.4 → 0.9")));
}
