use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Datetime patterns to try when a time column is not numeric.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
];

/// How a time column's entries are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// Plain numbers, taken as fractional Unix seconds.
    Numeric,
    /// RFC 3339 / ISO 8601 with timezone (e.g. `2026-02-10T22:26:28.987Z`).
    Rfc3339,
    /// A strftime pattern from `DATE_FORMATS`.
    Pattern(&'static str),
}

impl TimeFormat {
    /// Pick the format with the highest parse-success rate over a sample of
    /// the column. Numeric wins when most entries parse as `f64`.
    pub fn detect(values: &[String]) -> Option<Self> {
        let sample: Vec<&str> = values
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .take(100)
            .collect();
        if sample.is_empty() {
            return None;
        }

        let score = |ok: usize| ok as f64 / sample.len() as f64;

        let numeric = sample.iter().filter(|s| s.parse::<f64>().is_ok()).count();
        if score(numeric) > 0.7 {
            return Some(TimeFormat::Numeric);
        }

        let mut best: Option<Self> = None;
        let mut best_score = 0.0;

        let rfc = sample
            .iter()
            .filter(|s| DateTime::parse_from_rfc3339(s).is_ok())
            .count();
        if score(rfc) > best_score {
            best_score = score(rfc);
            best = Some(TimeFormat::Rfc3339);
        }

        for &fmt in DATE_FORMATS {
            let ok = sample
                .iter()
                .filter(|s| {
                    NaiveDateTime::parse_from_str(s, fmt).is_ok()
                        || NaiveDate::parse_from_str(s, fmt).is_ok()
                })
                .count();
            if score(ok) > best_score {
                best_score = score(ok);
                best = Some(TimeFormat::Pattern(fmt));
            }
        }

        if best_score > 0.0 {
            best
        } else {
            None
        }
    }

    /// Parse one entry to fractional Unix seconds. Millisecond precision is
    /// preserved for datetime inputs.
    pub fn parse(&self, value: &str) -> Option<f64> {
        let value = value.trim();
        match self {
            TimeFormat::Numeric => value.parse::<f64>().ok(),
            TimeFormat::Rfc3339 => DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.timestamp_millis() as f64 / 1000.0),
            TimeFormat::Pattern(fmt) => {
                if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
                    Some(dt.and_utc().timestamp_millis() as f64 / 1000.0)
                } else if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
                    Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp() as f64)
                } else {
                    None
                }
            }
        }
    }

    pub fn is_datetime(&self) -> bool {
        !matches!(self, TimeFormat::Numeric)
    }
}

/// Format fractional Unix seconds as a human-readable UTC datetime, with
/// milliseconds when the timestamp has a fractional component.
pub fn format_timestamp(ts: f64) -> String {
    let secs = ts.floor() as i64;
    let nanos = ((ts - ts.floor()) * 1_000_000_000.0) as u32;
    match DateTime::<Utc>::from_timestamp(secs, nanos) {
        Some(dt) => {
            if nanos == 0 {
                dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
            } else {
                dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
            }
        }
        None => format!("{ts:.3}"),
    }
}
