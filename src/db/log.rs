use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append one line to the internal `log` table.
///
/// `operation` is the command that produced the row (`add`, `rate`, ...),
/// `target` what it acted on and `message` a human readable description.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![now, operation, target, message])?;

    Ok(())
}
