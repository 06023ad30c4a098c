use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a calendar date in YYYY-MM-DD format
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

/// Parse a clock time in HH:MM or HH:MM:SS format
pub fn parse_time(time_str: &str) -> Option<NaiveTime> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    let second = match parts.get(2) {
        Some(second) => second.parse::<u32>().ok()?,
        None => 0,
    };
    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Combine a date and an optional clock time into a wall-clock instant.
///
/// A missing time means midnight. Returns `None` when either part does not
/// parse, including a present but malformed time.
pub fn wall_clock_instant(date_str: &str, time_str: Option<&str>) -> Option<NaiveDateTime> {
    let date = parse_date(date_str)?;
    let time = match time_str {
        Some(time_str) => parse_time(time_str)?,
        None => NaiveTime::from_hms_opt(0, 0, 0)?,
    };
    Some(date.and_time(time))
}

/// Format a date as a month heading key, e.g. `2025-09`
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
