pub mod calendar;
pub mod log;
pub mod tracker;

pub use tracker::{MonthSummary, Tracker, total_earnings, total_hours};
