#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use myot::db::store::{ENTRIES_KEY, SqliteStorage, Storage};
use myot::models::Entry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn myot() -> Command {
    cargo_bin_cmd!("myot")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_myot.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary file path inside tempdir and ensure it's removed
pub fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_myot.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Noon local time on the given day.
pub fn local_noon(y: i32, m: u32, d: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, 12, 0, 0)
        .single()
        .expect("valid local time")
}

pub fn entry(id: i64, date: &str, hours: f64, earnings: f64) -> Entry {
    Entry {
        id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date"),
        hours,
        earnings,
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Write a raw collection straight into the database, bypassing the tracker
pub fn seed_entries(db_path: &str, raw_json: &str) {
    let mut store = SqliteStorage::open(db_path).expect("open db");
    store.set_item(ENTRIES_KEY, raw_json).expect("seed entries");
}

/// A small dataset spread over two months, in insertion order
pub const SAMPLE_ENTRIES: &str = r#"[
    {"id": 1714557600000, "date": "2024-05-01", "hours": 2, "earnings": 0.8},
    {"id": 1714644000000, "date": "2024-05-02", "hours": 3.5, "earnings": 1.4},
    {"id": 1717236000000, "date": "2024-06-01", "hours": 1, "earnings": 0.5},
    {"id": 1714657000000, "date": "2024-05-02", "hours": 1.5, "earnings": 0.75}
]"#;
