//! One module per subcommand. Each exposes `handle(cmd, cfg)`.

pub mod add;
pub mod calendar;
pub mod config;
pub mod day;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod rate;
pub mod summary;
pub mod theme;

use crate::config::Config;
use crate::core::Tracker;
use crate::db::store::SqliteStorage;
use crate::errors::{AppError, AppResult};
use crate::models::Preferences;
use crate::ui::messages::warning;
use crate::ui::theme::Palette;
use crate::utils::date;

pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStorage> {
    SqliteStorage::open(cfg.database_path())
}

/// Load the tracker for one invocation, warning about discarded records.
pub(crate) fn open_tracker(cfg: &Config) -> AppResult<Tracker<SqliteStorage>> {
    let tracker = Tracker::load_with_default_rate(open_store(cfg)?, cfg.default_rate)?;

    let dropped = tracker.dropped_records();
    if dropped > 0 {
        warning(format!(
            "Ignored {dropped} malformed stored entr{}",
            if dropped == 1 { "y" } else { "ies" }
        ));
    }

    Ok(tracker)
}

pub(crate) fn palette(tracker: &Tracker<SqliteStorage>) -> AppResult<Palette> {
    let prefs = Preferences::load(tracker.store())?;
    Ok(Palette::from_preferences(&prefs))
}

/// `--month YYYY-MM`, defaulting to the current month.
pub(crate) fn resolve_month(month: &Option<String>) -> AppResult<(i32, u32)> {
    match month {
        Some(m) => date::parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.clone())),
        None => Ok(date::current_month()),
    }
}

/// Internal log line; a failure here never fails the command.
pub(crate) fn audit(store: &SqliteStorage, operation: &str, target: &str, message: &str) {
    if let Err(e) = crate::db::log::ttlog(store.conn(), operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
