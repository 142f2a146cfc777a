use crate::cli::commands::{open_tracker, palette};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::utils::table::Table;
use crate::utils::{date, formatting};

/// "Recent entries": insertion order, stored earnings per row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let tracker = open_tracker(cfg)?;
        let pal = palette(&tracker)?;

        let (title, entries): (String, Vec<&Entry>) = match month {
            Some(m) => {
                let (y, mo) =
                    date::parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?;
                (
                    format!("Entries for {}", date::month_title(y, mo)),
                    tracker.entries_for_month(y, mo),
                )
            }
            None => ("Recent Entries".to_string(), tracker.entries().iter().collect()),
        };

        println!("{}", pal.heading(&title));

        if entries.is_empty() {
            println!("{}", pal.muted("No entries."));
            return Ok(());
        }

        let mut table = Table::new(["ID", "Date", "Hours", "Earnings"]);
        for e in entries {
            table.add_row(vec![
                e.id.to_string(),
                e.date_str(),
                formatting::hours(e.hours),
                formatting::money(&cfg.currency, e.earnings),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
