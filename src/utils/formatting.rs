//! Formatting utilities used for CLI output.

use unicode_width::UnicodeWidthStr;

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(fill))
}

/// Hours as entered: `3.5` stays `3.5`, `2.0` prints as `2`.
pub fn hours(h: f64) -> String {
    format!("{h}")
}

/// Total hours with one decimal, as shown in the month summary.
pub fn total_hours(h: f64) -> String {
    format!("{h:.1}")
}

pub fn money(currency: &str, amount: f64) -> String {
    format!("{currency} {amount:.2}")
}
