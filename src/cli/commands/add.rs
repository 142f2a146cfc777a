use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::parse_hours;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting;

/// Log overtime hours for today.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { hours } = cmd {
        // bad input must not even create the database
        parse_hours(hours)?;

        let mut tracker = open_tracker(cfg)?;
        let entry = tracker.add_entry(hours)?;

        let earnings = formatting::money(&cfg.currency, entry.earnings);
        success(format!(
            "Added {} h on {} → {}",
            formatting::hours(entry.hours),
            entry.date_str(),
            earnings
        ));

        audit(
            tracker.store(),
            "add",
            &entry.date_str(),
            &format!("id={} hours={} earnings={}", entry.id, entry.hours, entry.earnings),
        );
    }

    Ok(())
}
