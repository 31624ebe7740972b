//! Calendar date handling for exercise records
//!
//! Exercise dates are stored and returned in a human-readable calendar form
//! such as `Mon Jan 01 2024`. Log filtering re-parses that text, so the
//! parser here accepts both the calendar form and the ISO forms clients
//! send as `from`/`to` bounds. All dates are interpreted in UTC.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Text stored for a date that could not be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Weekday, month and day of calendar strings; the year is appended separately
const CALENDAR_DAY_FORMAT: &str = "%a %b %d";

/// Highest day-of-month an ISO date may carry; larger days roll into the next month
const MAX_ISO_DAY: u32 = 31;

/// Date-only layouts accepted besides ISO 8601
const DATE_FORMATS: &[&str] = &[
    "%b %d %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%Y/%m/%d",
    "%m/%d/%Y",
];

/// Date-time layouts without an offset, read as UTC
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const MONTHS: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const WEEKDAYS: &[&str] = &[
    "mon", "tue", "wed", "thu", "fri", "sat", "sun", "monday", "tuesday", "wednesday", "thursday",
    "friday", "saturday", "sunday",
];

/// Format an instant as a calendar string, e.g. `Mon Jan 01 2024`.
///
/// Years are at least four digits and never carry a `+` sign; years before
/// the common era are written as `-` and six digits.
pub fn format_calendar(date: &DateTime<Utc>) -> String {
    let year = date.year();
    let year = if year >= 0 {
        format!("{:04}", year)
    } else {
        format!("-{:06}", year.unsigned_abs())
    };
    format!("{} {}", date.format(CALENDAR_DAY_FORMAT), year)
}

/// Calendar string for a possibly invalid date
pub fn calendar_or_invalid(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| format_calendar(&d))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Calendar string for the current day
pub fn today() -> String {
    format_calendar(&Utc::now())
}

/// Interpret a number as milliseconds since the Unix epoch
pub fn from_epoch_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.trunc() as i64)
}

/// Parse a date string into a UTC instant.
///
/// Returns `None` for anything unrecognised, which callers treat as an
/// invalid date rather than an error.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() || s == INVALID_DATE {
        return None;
    }

    parse_iso(s)
        .or_else(|| DateTime::parse_from_rfc2822(s).ok().map(|d| d.with_timezone(&Utc)))
        .or_else(|| parse_loose(s))
}

fn parse_iso(s: &str) -> Option<DateTime<Utc>> {
    // Year or year-month only
    if let Some(date) = parse_partial_iso(s) {
        return Some(midnight(date));
    }

    if let Some(date) = parse_iso_date(s) {
        return Some(midnight(date));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(midnight(date));
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }

    let naive = s.strip_suffix('Z').unwrap_or(s);
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
        .map(|dt| Utc.from_utc_datetime(&dt))
}

fn parse_partial_iso(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('-');
    let year = parts.next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month = match parts.next() {
        None => "01",
        Some(m) if m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()) => m,
        Some(_) => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// `YYYY-MM-DD` where any day up to 31 is accepted and rolls past month end
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some()
        || year.len() != 4
        || month.len() != 2
        || day.len() != 2
        || ![year, month, day]
            .iter()
            .all(|p| p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let day: u32 = day.parse().ok()?;
    if !(1..=MAX_ISO_DAY).contains(&day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?
        .checked_add_days(Days::new(u64::from(day - 1)))
}

fn parse_loose(s: &str) -> Option<DateTime<Utc>> {
    let s = strip_weekday(s);
    parse_month_day_year(s)
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        })
        .map(midnight)
}

/// `Jan 01 2024` with a year of any length, as written by [`format_calendar`]
fn parse_month_day_year(s: &str) -> Option<NaiveDate> {
    let mut tokens = s.split_whitespace();
    let (month, day, year) = (tokens.next()?, tokens.next()?, tokens.next()?);
    if tokens.next().is_some() || month.len() < 3 {
        return None;
    }

    let month = month.to_ascii_lowercase();
    let index = MONTHS.iter().position(|m| month.starts_with(m))?;
    let month = u32::try_from(index).ok()? + 1;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, day.parse().ok()?)
}

/// Drop a leading weekday name; it carries no information and may not match the date
fn strip_weekday(s: &str) -> &str {
    match s.split_once(|c: char| c.is_whitespace() || c == ',') {
        Some((first, rest)) if WEEKDAYS.contains(&first.to_ascii_lowercase().as_str()) => {
            rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',')
        }
        _ => s,
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}
