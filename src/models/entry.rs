use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One logged overtime session.
///
/// Serialized as `{"id", "date", "hours", "earnings"}` with the date in
/// `YYYY-MM-DD` form, which is the layout stored under `overtimeEntries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Creation timestamp (ms since epoch).
    pub id: i64,
    /// Local calendar day, no time component.
    pub date: NaiveDate,
    /// Always > 0.
    pub hours: f64,
    /// Hours × rate in force when the entry was added.
    pub earnings: f64,
}

impl Entry {
    /// Date as stored and compared by the calendar (`YYYY-MM-DD`).
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// Decode a single persisted record.
    ///
    /// Numeric fields stored as strings are coerced. Returns `None` when the
    /// record cannot be trusted: not an object, id not integral, date not
    /// `YYYY-MM-DD`, hours not a positive finite number or earnings not a
    /// non-negative finite number.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let id = coerce_id(obj.get("id")?)?;
        let date = obj
            .get("date")?
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())?;
        let hours = coerce_number(obj.get("hours")?).filter(|h| *h > 0.0)?;
        let earnings = coerce_number(obj.get("earnings")?).filter(|e| *e >= 0.0)?;

        Some(Self {
            id,
            date,
            hours,
            earnings,
        })
    }
}

/// Result of decoding the raw `overtimeEntries` value.
#[derive(Debug, Default)]
pub struct DecodedEntries {
    pub entries: Vec<Entry>,
    /// Records that were discarded. A value that is not a JSON array at all
    /// counts as a single dropped record.
    pub dropped: usize,
}

/// Decode the stored collection, keeping insertion order and the first
/// occurrence of every id.
pub fn decode_entries(raw: &str) -> DecodedEntries {
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(Value::Null) => return DecodedEntries::default(),
        _ => {
            return DecodedEntries {
                entries: Vec::new(),
                dropped: 1,
            };
        }
    };

    let mut out = DecodedEntries::default();
    for item in &items {
        match Entry::from_value(item) {
            Some(e) if !out.entries.iter().any(|x| x.id == e.id) => out.entries.push(e),
            _ => out.dropped += 1,
        }
    }
    out
}

fn coerce_number(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn coerce_id(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
