mod calendar;
mod consts;
mod prelude;
#[cfg(feature = "rusqlite")]
mod sql;

pub use calendar::{is_leap_year, weeks_in_year};
pub use consts::*;

use crate::prelude::*;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An ISO 8601 week-date: a week-numbering year and a week within it.
///
/// Construction only rejects weeks below 1. The full range check runs in
/// [`WeekDate::validate`], which every formatter and storage adapter calls,
/// so a value such as `2001-W99` can be built but never written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display(fmt = "{year:04}-W{week:02}")]
pub struct WeekDate {
    year: i32,
    week: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekError {
    #[error("Year out of range: {0}")]
    InvalidYear(i32),
    #[error("Invalid week {week} for year {year}")]
    InvalidWeek { year: i32, week: i32 },
    #[error("Invalid week-date format: {0}")]
    InvalidFormat(String),
    #[error("Unsupported storage type for week-date: {0}")]
    InvalidType(String),
}

impl WeekDate {
    /// Creates a week-date without checking `week` against the year's week count.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidWeek` if `week` is below 1.
    pub fn new(year: i32, week: i32) -> Result<Self, WeekError> {
        if week < MIN_WEEK {
            return Err(WeekError::InvalidWeek { year, week });
        }
        Ok(Self { year, week })
    }

    /// Returns the ISO week-numbering year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the week number within the year
    #[inline]
    pub const fn week(&self) -> i32 {
        self.week
    }

    /// Returns the number of weeks (52 or 53) in this value's year
    pub fn weeks_in_year(&self) -> u8 {
        weeks_in_year(self.year)
    }

    /// Checks that the year fits four digits and the week exists in that year.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidYear` if the year is outside `MIN_YEAR..=MAX_YEAR`,
    /// or `WeekError::InvalidWeek` if the week is outside `1..=weeks_in_year`.
    pub fn validate(&self) -> Result<(), WeekError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(WeekError::InvalidYear(self.year));
        }
        if self.week < MIN_WEEK || self.week > last_week(self.year) {
            return Err(WeekError::InvalidWeek {
                year: self.year,
                week: self.week,
            });
        }
        Ok(())
    }

    /// Returns the following week, rolling into week 1 of the next year.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidYear` when rolling past `MAX_YEAR`.
    pub fn next(&self) -> Result<Self, WeekError> {
        if self.week < last_week(self.year) {
            return Ok(Self {
                year: self.year,
                week: self.week + 1,
            });
        }
        if self.year >= MAX_YEAR {
            return Err(WeekError::InvalidYear(self.year.saturating_add(1)));
        }
        Ok(Self {
            year: self.year + 1,
            week: MIN_WEEK,
        })
    }

    /// Returns the preceding week, rolling into the last week of the previous year.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidYear` when rolling below `MIN_PREVIOUS_YEAR`.
    pub fn previous(&self) -> Result<Self, WeekError> {
        if self.week > MIN_WEEK {
            return Ok(Self {
                year: self.year,
                week: self.week - 1,
            });
        }
        if self.year <= MIN_PREVIOUS_YEAR {
            return Err(WeekError::InvalidYear(self.year.saturating_sub(1)));
        }
        let year = self.year - 1;
        Ok(Self {
            year,
            week: last_week(year),
        })
    }

    /// Formats as the canonical `YYYY-Www` text after validating.
    ///
    /// # Errors
    /// Returns the validation error if the value is out of range.
    pub fn to_text(&self) -> Result<String, WeekError> {
        self.validate()?;
        Ok(self.to_string())
    }

    /// Parses the canonical form from raw bytes, as read from storage.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidFormat` for non-UTF-8 or malformed input,
    /// or the validation error if the parsed value is out of range.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WeekError> {
        let s = std::str::from_utf8(bytes)
            .map_err(|_| WeekError::InvalidFormat(String::from_utf8_lossy(bytes).into_owned()))?;
        s.parse()
    }

    /// Returns the ISO week containing the given calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        // ISO week numbers are 1..=53
        #[allow(clippy::cast_possible_wrap)]
        let week = iso.week() as i32;
        Self {
            year: iso.year(),
            week,
        }
    }

    /// Returns the Monday that starts this week.
    ///
    /// # Errors
    /// Returns the validation error if the value is out of range.
    pub fn monday(&self) -> Result<NaiveDate, WeekError> {
        self.weekday(Weekday::Mon)
    }

    /// Returns the Sunday that ends this week.
    ///
    /// # Errors
    /// Returns the validation error if the value is out of range.
    pub fn sunday(&self) -> Result<NaiveDate, WeekError> {
        self.weekday(Weekday::Sun)
    }

    fn weekday(&self, day: Weekday) -> Result<NaiveDate, WeekError> {
        self.validate()?;
        let invalid = || WeekError::InvalidWeek {
            year: self.year,
            week: self.week,
        };
        let week = u32::try_from(self.week).map_err(|_| invalid())?;
        NaiveDate::from_isoywd_opt(self.year, week, day).ok_or_else(invalid)
    }
}

fn last_week(year: i32) -> i32 {
    i32::from(weeks_in_year(year))
}

fn is_all_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for WeekDate {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WeekError::InvalidFormat(s.to_owned());

        // Exact `YYYY-Www`: no trimming, signs or lowercase designator
        let (year_part, rest) = s.split_at_checked(YEAR_DIGITS).ok_or_else(invalid)?;
        let week_part = rest
            .strip_prefix(DATE_SEPARATOR)
            .and_then(|r| r.strip_prefix(WEEK_DESIGNATOR))
            .ok_or_else(invalid)?;

        if !is_all_digits(year_part, YEAR_DIGITS) || !is_all_digits(week_part, WEEK_DIGITS) {
            return Err(invalid());
        }

        let year = year_part.parse::<i32>().map_err(|_| invalid())?;
        let week = week_part.parse::<i32>().map_err(|_| invalid())?;

        let date = Self { year, week };
        date.validate()?;
        Ok(date)
    }
}

impl TryFrom<(i32, i32)> for WeekDate {
    type Error = WeekError;

    fn try_from(value: (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl Serialize for WeekDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let text = self.to_text().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for WeekDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
