use crate::core::tracker::Tracker;
use crate::db::store::Storage;
use crate::errors::{AppError, AppResult};
use crate::utils::date::all_days_of_month;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Hours of every entry logged on this day, in insertion order.
    pub hours: Vec<f64>,
}

impl CalendarDay {
    pub fn total_hours(&self) -> f64 {
        self.hours.iter().sum()
    }
}

/// A month laid out in Sunday-first weeks. Cells outside the month are `None`.
#[derive(Debug, Clone)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<CalendarDay>; 7]>,
}

impl MonthCalendar {
    pub fn build<S: Storage>(tracker: &Tracker<S>, year: i32, month: u32) -> AppResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::InvalidMonth(format!("{year:04}-{month:02}")))?;

        let mut weeks: Vec<[Option<CalendarDay>; 7]> = Vec::new();
        let mut week: [Option<CalendarDay>; 7] = Default::default();
        let mut col = first.weekday().num_days_from_sunday() as usize;

        for date in all_days_of_month(year, month) {
            let key = date.format("%Y-%m-%d").to_string();
            let hours = tracker
                .entries_for_date(&key)
                .iter()
                .map(|e| e.hours)
                .collect();

            week[col] = Some(CalendarDay { date, hours });
            col += 1;

            if col == 7 {
                weeks.push(std::mem::take(&mut week));
                col = 0;
            }
        }

        if col > 0 {
            weeks.push(week);
        }

        Ok(Self { year, month, weeks })
    }

    pub fn day(&self, day: u32) -> Option<&CalendarDay> {
        self.weeks
            .iter()
            .flatten()
            .flatten()
            .find(|d| d.date.day() == day)
    }

    /// Days with at least one entry.
    pub fn logged_days(&self) -> usize {
        self.weeks
            .iter()
            .flatten()
            .flatten()
            .filter(|d| !d.hours.is_empty())
            .count()
    }
}
