use crate::cli::commands::{open_tracker, palette};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::total_hours;
use crate::errors::{AppError, AppResult};
use crate::utils::{date, formatting};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date: day } = cmd {
        let parsed = date::parse_date(day).ok_or_else(|| AppError::InvalidDate(day.clone()))?;
        let key = parsed.format("%Y-%m-%d").to_string();

        let tracker = open_tracker(cfg)?;
        let pal = palette(&tracker)?;
        let entries = tracker.entries_for_date(&key);

        println!("{}", pal.heading(&key));
        if entries.is_empty() {
            println!("{}", pal.muted("No entries."));
            return Ok(());
        }

        for e in &entries {
            println!(
                "- {} hrs {}",
                formatting::hours(e.hours),
                pal.muted(&format!("({})", formatting::money(&cfg.currency, e.earnings)))
            );
        }
        println!(
            "{} {} hrs",
            pal.muted("Total:"),
            pal.strong(&formatting::total_hours(total_hours(entries.iter().copied())))
        );
    }

    Ok(())
}
