//! Display helpers for stored values: en-US dates and grouped numbers.
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

/// Shown in place of a timestamp that is empty or cannot be read.
pub const NOT_AVAILABLE: &str = "N/A";

// e.g. "Jan 5, 2024, 03:07 PM"
const DATE_TIME_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Formats a stored timestamp in the viewer's local time zone.
pub fn format_date(timestamp: &str) -> String {
    format_date_in(timestamp, &Local)
}

pub fn format_date_in<Tz>(timestamp: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_timestamp(timestamp, tz) {
        Some(moment) => moment.format(DATE_TIME_FORMAT).to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(moment) = DateTime::parse_from_rfc3339(raw) {
        return Some(moment.with_timezone(tz));
    }

    // Without an offset the wall-clock time is read as local.
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    // A bare date means midnight UTC.
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(tz))
}

/// en-US grouping with at most three fraction digits: `12345.5` -> `12,345.5`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + whole.len() / 3 + 1);
    if value < 0.0 && (whole != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

pub fn format_currency(value: f64) -> String {
    format!("${}", format_grouped(value))
}
