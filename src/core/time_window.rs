//! Acquisition window extraction from tile names, and the lenient timestamp
//! parser used to validate it.
use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

static WINDOW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}-\d{2}-\d{2}_\d{4}-\d{2}-\d{2}").expect("window pattern is valid")
});

/// Seconds field of `60`, either after `:` or as the last pair of a compact `THHMMSS`
static LEAP_SECOND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<head>.*(?::|T\d{4}))60$").expect("leap-second pattern is valid")
});

const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y%m%dT%H%M%S",
];

/// Start and end of an acquisition, as they appear in the tile name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

/// Extract the last `YYYY-MM-DD_YYYY-MM-DD` range embedded in `name`.
pub fn parse_time_window(name: &str) -> Result<TimeWindow> {
    let matched = WINDOW_RE
        .find_iter(name)
        .last()
        .ok_or_else(|| Error::MissingTimeWindow {
            name: name.to_string(),
        })?;

    let (start, end) = matched
        .as_str()
        .split_once('_')
        .ok_or_else(|| Error::MissingTimeWindow {
            name: name.to_string(),
        })?;

    let from = parse_timestamp(start)?;
    let to = parse_timestamp(end)?;
    if to < from {
        warn!("Time window in {} ends before it starts: {} > {}", name, start, end);
    }
    debug!("Parsed time window {} -> {} from {}", start, end, name);

    Ok(TimeWindow {
        start: start.to_string(),
        end: end.to_string(),
    })
}

/// Parse a date or date-time string.
///
/// Accepts plain dates (midnight), ISO-like date-times with `T` or space
/// separators, compact `YYYYMMDDTHHMMSS` and RFC 3339 (normalized to UTC).
/// A seconds field of `60` is read as `00` of the following minute.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();

    if let Some(head) = LEAP_SECOND_RE.captures(value).and_then(|c| c.name("head")) {
        let rolled = format!("{}00", head.as_str());
        let parsed = parse_plain(&rolled).ok_or_else(|| Error::InvalidTimestamp {
            value: value.to_string(),
        })?;
        debug!("Corrected leap second in {}", value);
        return Ok(parsed + Duration::minutes(1));
    }

    parse_plain(value).ok_or_else(|| Error::InvalidTimestamp {
        value: value.to_string(),
    })
}

fn parse_plain(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
