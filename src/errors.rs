//! Unified application error type.
//! Every module (db, core, cli, utils) returns AppError so that error
//! handling stays consistent from the store up to main().

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid hours: '{0}' (expected a number greater than 0)")]
    InvalidHoursInput(String),

    #[error("Invalid hourly rate: '{0}'")]
    InvalidRateInput(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid color: {0} (expected #rrggbb)")]
    InvalidColor(String),

    // ---------------------------
    // Config / import
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Import error: {0}")]
    Import(String),
}

pub type AppResult<T> = Result<T, AppError>;
