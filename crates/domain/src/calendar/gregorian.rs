//! Resolving the Gregorian date a request refers to.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use super::CalendarError;

/// Parses a strict `YYYY-MM-DD` date.
///
/// Each segment must be an integer; the triple must name a real day with a
/// year in 1..=9999.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, CalendarError> {
    let segments: Vec<&str> = input.split('-').collect();
    let [year, month, day] = segments.as_slice() else {
        return Err(CalendarError::InvalidFormat {
            input: input.to_string(),
        });
    };

    let year: i32 = parse_segment(input, "year", year)?;
    let month: u32 = parse_segment(input, "month", month)?;
    let day: u32 = parse_segment(input, "day", day)?;

    let out_of_range = |reason: String| CalendarError::OutOfRange {
        input: input.to_string(),
        reason,
    };

    if !(1..=9999).contains(&year) {
        return Err(out_of_range(format!("year {year} is out of range")));
    }
    if !(1..=12).contains(&month) {
        return Err(out_of_range("month must be in 1..12".to_string()));
    }
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| out_of_range("day is out of range for month".to_string()))
}

fn parse_segment<T>(input: &str, component: &'static str, raw: &str) -> Result<T, CalendarError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    raw.trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| CalendarError::InvalidComponent {
            input: input.to_string(),
            component,
            reason: e.to_string(),
        })
}

/// Calendar date of `now` as seen in the named IANA timezone.
pub fn today_in(timezone: &str, now: DateTime<Utc>) -> Result<NaiveDate, CalendarError> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| CalendarError::UnknownTimezone(timezone.to_string()))?;
    Ok(now.with_timezone(&tz).date_naive())
}
