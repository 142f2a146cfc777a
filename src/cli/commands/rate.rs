use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::parse_rate;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Print or change the hourly rate.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate { value } = cmd {
        let mut tracker = open_tracker(cfg)?;

        let Some(value) = value else {
            info(format!("Hourly rate: {} {} per hour", cfg.currency, tracker.rate()));
            return Ok(());
        };

        let previous = tracker.rate();
        let rate = tracker.set_rate(value)?;

        match parse_rate(value) {
            Err(e) => warning(format!("{e}; using 0")),
            Ok(requested) if requested != rate => warning(format!(
                "Hourly rate {value} is too large for the logged hours; using 0"
            )),
            Ok(_) => {}
        }

        success(format!("Hourly rate set to {} {} per hour", cfg.currency, rate));
        success("Existing entries keep the earnings they were logged with.");

        audit(
            tracker.store(),
            "rate",
            "hourlyRate",
            &format!("{previous} → {rate}"),
        );
    }

    Ok(())
}
