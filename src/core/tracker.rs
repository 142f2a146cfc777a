//! Overtime entry tracker.
//!
//! Owns the entry collection and the hourly rate, both mirrored to a
//! [`Storage`]. State is read once by [`Tracker::load`] and the full new
//! state is written back synchronously after every mutation; an operation
//! either applies completely or leaves memory and storage untouched.

use crate::db::store::{ENTRIES_KEY, RATE_KEY, Storage};
use crate::errors::{AppError, AppResult};
use crate::models::entry::{DecodedEntries, Entry, decode_entries};
use chrono::{DateTime, Local};

/// Rate applied when nothing has been stored yet.
pub const DEFAULT_RATE: f64 = 0.4;

/// Totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub total_hours: f64,
    /// Total hours × the *current* rate (not the sum of stored earnings).
    pub total_earnings: f64,
}

pub struct Tracker<S: Storage> {
    store: S,
    entries: Vec<Entry>,
    rate: f64,
    dropped: usize,
}

impl<S: Storage> Tracker<S> {
    pub fn load(store: S) -> AppResult<Self> {
        Self::load_with_default_rate(store, DEFAULT_RATE)
    }

    /// Load state from `store`; `default_rate` is used when no rate has been
    /// persisted or the stored one is unusable.
    pub fn load_with_default_rate(store: S, default_rate: f64) -> AppResult<Self> {
        let default_rate = if default_rate.is_finite() && default_rate >= 0.0 {
            default_rate
        } else {
            DEFAULT_RATE
        };

        let decoded = match store.get_item(ENTRIES_KEY)? {
            Some(raw) => decode_entries(&raw),
            None => DecodedEntries::default(),
        };

        let rate = store
            .get_item(RATE_KEY)?
            .and_then(|raw| parse_rate(&raw).ok())
            .unwrap_or(default_rate);

        Ok(Self {
            store,
            entries: decoded.entries,
            rate,
            dropped: decoded.dropped,
        })
    }

    /// Write the whole collection and the rate back to storage.
    pub fn save(&mut self) -> AppResult<()> {
        self.save_entries()?;
        self.save_rate()
    }

    fn save_entries(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.entries)?;
        self.store.set_item(ENTRIES_KEY, &json)
    }

    fn save_rate(&mut self) -> AppResult<()> {
        self.store.set_item(RATE_KEY, &self.rate.to_string())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Number of persisted records discarded by the last load.
    pub fn dropped_records(&self) -> usize {
        self.dropped
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Log `hours_input` hours for today (local time).
    pub fn add_entry(&mut self, hours_input: &str) -> AppResult<Entry> {
        self.add_entry_at(hours_input, Local::now())
    }

    /// Same as [`Tracker::add_entry`] with an explicit clock value.
    pub fn add_entry_at(&mut self, hours_input: &str, now: DateTime<Local>) -> AppResult<Entry> {
        let hours = parse_hours(hours_input)?;

        // earnings and every later total must stay representable in JSON
        if !self.totals_stay_finite(hours, self.rate) {
            return Err(AppError::InvalidHoursInput(hours_input.to_string()));
        }

        let entry = Entry {
            id: self.next_id(now.timestamp_millis()),
            date: now.date_naive(),
            hours,
            earnings: hours * self.rate,
        };

        self.entries.push(entry.clone());
        if let Err(e) = self.save_entries() {
            self.entries.pop();
            return Err(e);
        }

        Ok(entry)
    }

    /// Change the rate used for future entries.
    ///
    /// Input that is not a non-negative number, or a rate so large that the
    /// logged hours would price to infinity, sets the rate to 0. Returns the
    /// rate now in force.
    pub fn set_rate(&mut self, value: &str) -> AppResult<f64> {
        let new_rate = parse_rate(value)
            .ok()
            .filter(|r| self.totals_stay_finite(0.0, *r))
            .unwrap_or(0.0);

        let previous = self.rate;
        self.rate = new_rate;
        if let Err(e) = self.save_rate() {
            self.rate = previous;
            return Err(e);
        }

        Ok(new_rate)
    }

    /// Replace the whole collection (the only way existing entries change).
    /// Later duplicates of an id are discarded.
    pub fn replace_entries(&mut self, entries: Vec<Entry>) -> AppResult<()> {
        let mut unique: Vec<Entry> = Vec::with_capacity(entries.len());
        for e in entries {
            if !unique.iter().any(|x| x.id == e.id) {
                unique.push(e);
            }
        }

        let previous = std::mem::replace(&mut self.entries, unique);
        if let Err(e) = self.save_entries() {
            self.entries = previous;
            return Err(e);
        }
        Ok(())
    }

    pub fn entries_for_month(&self, year: i32, month: u32) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.is_in_month(year, month))
            .collect()
    }

    /// Entries whose `YYYY-MM-DD` date equals `date` exactly.
    pub fn entries_for_date(&self, date: &str) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.date_str() == date).collect()
    }

    pub fn summary(&self, year: i32, month: u32) -> MonthSummary {
        let entries = self.entries_for_month(year, month);
        MonthSummary {
            year,
            month,
            total_hours: total_hours(entries.iter().copied()),
            total_earnings: total_earnings(entries.iter().copied(), self.rate),
        }
    }

    /// Whether all hours plus `extra_hours`, priced at `rate`, stay finite.
    /// Month totals are subsets of this, so they stay finite too.
    fn totals_stay_finite(&self, extra_hours: f64, rate: f64) -> bool {
        let hours = total_hours(&self.entries) + extra_hours;
        hours.is_finite() && (hours * rate).is_finite()
    }

    fn next_id(&self, now_ms: i64) -> i64 {
        match self.entries.iter().map(|e| e.id).max() {
            Some(last) if now_ms <= last => last.saturating_add(1),
            _ => now_ms,
        }
    }
}

pub fn total_hours<'a, I>(entries: I) -> f64
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries.into_iter().map(|e| e.hours).sum()
}

/// Total hours of `entries` priced at `rate`.
pub fn total_earnings<'a, I>(entries: I, rate: f64) -> f64
where
    I: IntoIterator<Item = &'a Entry>,
{
    total_hours(entries) * rate
}

/// Parse user input for a new entry: a finite number greater than 0.
pub fn parse_hours(input: &str) -> AppResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(h) if h.is_finite() && h > 0.0 => Ok(h),
        _ => Err(AppError::InvalidHoursInput(input.to_string())),
    }
}

/// Strict rate parse: a finite number that is not negative.
pub fn parse_rate(input: &str) -> AppResult<f64> {
    match input.trim().parse::<f64>() {
        // `-0` is normalized so it is stored as "0"
        Ok(r) if r.is_finite() && r >= 0.0 => Ok(r + 0.0),
        _ => Err(AppError::InvalidRateInput(input.to_string())),
    }
}
