// src/utils/timestamp.rs

use chrono::{DateTime, Local, TimeZone};

/// Format used for stored quiz timestamps. Sorts lexicographically in time order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Current local time as a result timestamp.
pub fn now() -> String {
    format(&Local::now())
}

pub fn format<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}
