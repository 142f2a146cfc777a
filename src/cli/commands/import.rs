use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Tracker;
use crate::db::store::{
    DARK_THEME_KEY, ENTRIES_KEY, KNOWN_KEYS, MemoryStorage, PRIMARY_COLOR_KEY, RATE_KEY,
};
use crate::errors::{AppError, AppResult};
use crate::models::Preferences;
use crate::ui::messages::{success, warning};
use serde_json::{Map, Value};
use std::fs;

/// Import a browser `localStorage` dump: a JSON object mapping storage keys
/// to their (string) values. Known keys replace the local data, every other
/// key is ignored.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let content = fs::read_to_string(file)?;
        let staged = stage(&content)?;

        // validate through the same load path used at startup
        let imported = Tracker::load_with_default_rate(staged.clone(), cfg.default_rate)?;
        let imported_prefs = Preferences::load(&staged)?;

        let mut tracker = open_tracker(cfg)?;
        let mut summary = Vec::new();

        if staged.contains(ENTRIES_KEY) {
            tracker.replace_entries(imported.entries().to_vec())?;
            summary.push(format!("{} entries", imported.entries().len()));
            if imported.dropped_records() > 0 {
                warning(format!(
                    "Skipped {} malformed entries from {file}",
                    imported.dropped_records()
                ));
            }
        }

        if staged.contains(RATE_KEY) {
            let rate = tracker.set_rate(&imported.rate().to_string())?;
            summary.push(format!("rate {rate}"));
        }

        let mut store = tracker.into_store();
        let mut prefs = Preferences::load(&store)?;
        if staged.contains(DARK_THEME_KEY) {
            prefs.set_dark_theme(&mut store, imported_prefs.dark_theme)?;
            summary.push("theme mode".to_string());
        }
        if staged.contains(PRIMARY_COLOR_KEY) {
            prefs.set_primary_color(&mut store, &imported_prefs.primary_color)?;
            summary.push("primary color".to_string());
        }

        let message = format!("Imported {}", summary.join(", "));
        success(&message);
        audit(&store, "import", file, &message);
    }

    Ok(())
}

/// Copy the known keys of the dump into a scratch store.
fn stage(content: &str) -> AppResult<MemoryStorage> {
    let dump: Map<String, Value> = serde_json::from_str(content)
        .map_err(|e| AppError::Import(format!("expected a JSON object of storage keys: {e}")))?;

    let items: Vec<(&str, String)> = KNOWN_KEYS
        .iter()
        .filter_map(|key| {
            let raw = match dump.get(*key)? {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                // already-parsed values (arrays, numbers, booleans)
                other => other.to_string(),
            };
            Some((*key, raw))
        })
        .collect();

    if items.is_empty() {
        return Err(AppError::Import(format!(
            "none of the keys {} found",
            KNOWN_KEYS.join(", ")
        )));
    }

    Ok(MemoryStorage::with_items(items))
}
