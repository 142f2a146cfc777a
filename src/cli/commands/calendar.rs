use crate::cli::commands::{open_tracker, palette, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{CalendarDay, MonthCalendar};
use crate::errors::AppResult;
use crate::ui::theme::Palette;
use crate::utils::{date, formatting};

const CELL: usize = 10;
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let (year, month) = resolve_month(month)?;
        let tracker = open_tracker(cfg)?;
        let pal = palette(&tracker)?;

        let cal = MonthCalendar::build(&tracker, year, month)?;
        print!("{}", render(&cal, &pal));
    }

    Ok(())
}

/// Hours of a day as shown in its cell: each entry joined with `+`, or the
/// day total when that does not fit.
fn cell_hours(day: &CalendarDay) -> String {
    if day.hours.is_empty() {
        return String::new();
    }

    let joined = day
        .hours
        .iter()
        .map(|h| formatting::hours(*h))
        .collect::<Vec<_>>()
        .join("+");
    let text = format!("{joined}h");

    if text.chars().count() < CELL {
        text
    } else {
        format!("{}h", formatting::total_hours(day.total_hours()))
    }
}

fn render(cal: &MonthCalendar, pal: &Palette) -> String {
    let mut out = String::new();

    out.push_str(&pal.heading(&date::month_title(cal.year, cal.month)));
    out.push('\n');

    let header: Vec<String> = WEEKDAYS
        .iter()
        .map(|d| formatting::pad_right(d, CELL))
        .collect();
    out.push_str(&pal.muted(header.concat().trim_end()));
    out.push('\n');

    for week in &cal.weeks {
        let mut days = String::new();
        let mut hours = String::new();

        for cell in week {
            match cell {
                Some(day) => {
                    let num = day.date.format("%e").to_string();
                    days.push_str(&formatting::pad_right(num.trim_start(), CELL));

                    // pad before colouring so escape codes do not skew widths
                    let h = formatting::pad_right(&cell_hours(day), CELL);
                    hours.push_str(&pal.accent(&h));
                }
                None => {
                    days.push_str(&" ".repeat(CELL));
                    hours.push_str(&" ".repeat(CELL));
                }
            }
        }

        out.push_str(days.trim_end());
        out.push('\n');
        out.push_str(hours.trim_end());
        out.push('\n');
    }

    out
}
