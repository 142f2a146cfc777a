use crate::cli::commands::{open_tracker, palette, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::{date, formatting};

/// Month summary: total hours and earnings at the current rate.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month } = cmd {
        let (year, month) = resolve_month(month)?;
        let tracker = open_tracker(cfg)?;
        let pal = palette(&tracker)?;

        let s = tracker.summary(year, month);

        println!(
            "{}",
            pal.heading(&format!("Summary for {}", date::month_title(year, month)))
        );
        println!(
            "{} {}",
            pal.muted(&formatting::pad_right("Total Hours", 16)),
            pal.strong(&formatting::total_hours(s.total_hours))
        );
        println!(
            "{} {}",
            pal.muted(&formatting::pad_right("Total Earnings", 16)),
            pal.strong(&formatting::money(&cfg.currency, s.total_earnings))
        );
    }

    Ok(())
}
