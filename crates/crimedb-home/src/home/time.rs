//! Relative timestamps for the recent complaints list.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

pub const INVALID_DATE: &str = "Invalid Date";

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Offset-less date-times are read as wall-clock time in the display zone.
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Formats `raw` relative to `now` in the server's local time zone.
pub fn format_created_at(raw: &str, now: DateTime<Utc>) -> String {
    format_created_at_in(raw, now, &Local)
}

/// `"<N> hours ago"` for anything less than a day old (future timestamps give a
/// negative N), otherwise the `M/D/YYYY` date in `zone`.
pub fn format_created_at_in<Tz>(raw: &str, now: DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(created) = parse_timestamp(raw, zone) else {
        return INVALID_DATE.to_string();
    };

    let hours = (now - created)
        .num_milliseconds()
        .div_euclid(MILLIS_PER_HOUR);

    if hours < 24 {
        format!("{hours} hours ago")
    } else {
        created.with_timezone(zone).format("%-m/%-d/%Y").to_string()
    }
}

pub fn parse_timestamp<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return local_to_utc(&naive, zone);
        }
    }

    // Date-only strings are UTC midnight.
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Resolves a wall-clock time. Times skipped by a DST jump move forward one hour,
/// the way browsers do.
fn local_to_utc<Tz: TimeZone>(naive: &NaiveDateTime, zone: &Tz) -> Option<DateTime<Utc>> {
    zone.from_local_datetime(naive)
        .earliest()
        .or_else(|| {
            zone.from_local_datetime(&(*naive + Duration::hours(1)))
                .earliest()
        })
        .map(|local| local.with_timezone(&Utc))
}
