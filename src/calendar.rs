//! Calendar helpers: the year-month type used to select budgets and the
//! lenient ISO-8601 date parsing applied to data from the finance service.

use std::{fmt::Display, str::FromStr};

use time::{
    Date, Duration, Month, OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};

use crate::Error;

/// A calendar month in a specific year, e.g. March 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    first_day: Date,
}

impl YearMonth {
    /// The month that contains `date`.
    pub fn from_date(date: Date) -> Self {
        Self {
            first_day: date - Duration::days(date.day() as i64 - 1),
        }
    }

    /// The first day of the month.
    pub fn first_day(&self) -> Date {
        self.first_day
    }

    /// The last day of the month.
    pub fn last_day(&self) -> Date {
        let days = self.first_day.month().length(self.first_day.year());
        self.first_day + Duration::days(days as i64 - 1)
    }

    /// Whether `date` falls on or between the first and last day of the month.
    pub fn contains(&self, date: Date) -> bool {
        (self.first_day()..=self.last_day()).contains(&date)
    }

    /// The month formatted for chart axes and headings, e.g. "Mar 2024".
    pub fn label(&self) -> String {
        let format = format_description!("[month repr:short] [year]");

        self.first_day
            .format(format)
            .unwrap_or_else(|_| self.to_string())
    }
}

impl Display for YearMonth {
    /// Formats as `yyyy-MM`, the value used by `<input type="month">`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}",
            self.first_day.year(),
            self.first_day.month() as u8
        )
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    /// Parses `yyyy-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::Validation(format!("\"{s}\" is not a month in the format YYYY-MM"));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;

        let all_digits = |text: &str| text.bytes().all(|byte| byte.is_ascii_digit());

        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let month = Month::try_from(month).map_err(|_| invalid())?;

        Date::from_calendar_date(year, month, 1)
            .map(|first_day| Self { first_day })
            .map_err(|_| invalid())
    }
}

/// Parse a date sent by the finance service.
///
/// Accepts a plain date (`2024-03-05`), an RFC 3339 timestamp
/// (`2024-03-05T00:00:00.000Z`, taken in UTC), or a timestamp without an
/// offset whose first ten characters are a plain date.
///
/// Returns `None` for anything else so callers can skip the record.
pub fn parse_iso_date(text: &str) -> Option<Date> {
    let plain_date = format_description!("[year]-[month]-[day]");
    let text = text.trim();

    if let Ok(date) = Date::parse(text, plain_date) {
        return Some(date);
    }

    if let Ok(date_time) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(date_time.to_offset(UtcOffset::UTC).date());
    }

    text.get(..10)
        .filter(|_| text.as_bytes().get(10) == Some(&b'T'))
        .and_then(|prefix| Date::parse(prefix, plain_date).ok())
}

/// Parse a budget month sent by the finance service.
///
/// Budgets may carry either `yyyy-MM` or any date accepted by
/// [parse_iso_date], in which case the month containing that date is used.
pub fn parse_iso_month(text: &str) -> Option<YearMonth> {
    text.parse::<YearMonth>()
        .ok()
        .or_else(|| parse_iso_date(text).map(YearMonth::from_date))
}

/// Format a date for tables, e.g. "Mar 05, 2024".
pub fn format_long_date(date: Date) -> String {
    let format = format_description!("[month repr:short] [day], [year]");

    date.format(format).unwrap_or_else(|_| date.to_string())
}
