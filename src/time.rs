//! Epoch time helpers for report headers.
use chrono::{DateTime, TimeZone, Utc};

/// Convert epoch milliseconds to a UTC datetime. Returns `None` for values
/// outside the representable range.
pub fn epoch_time_to_utc_datetime(epoch_millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(epoch_millis).single()
}

/// Convert a UTC datetime to epoch milliseconds.
pub fn datetime_to_utc_epoch(datetime: &DateTime<Utc>) -> i64 {
    datetime.timestamp_millis()
}

/// Format a UTC datetime the way report headers display times.
pub fn format_report_time(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string()
}
