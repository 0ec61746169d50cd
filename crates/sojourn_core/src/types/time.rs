//! Calendar date type for stay tracking.
//!
//! This module provides `Date`, a type-safe wrapper around
//! `chrono::NaiveDate` with ISO 8601 parsing and whole-day arithmetic.
//! Stays are naive calendar dates: no time-of-day component and no
//! timezone handling.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Fixed date format for parsing and display (ISO 8601 calendar date).
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 (`YYYY-MM-DD`) parsing and display plus the
/// whole-day arithmetic the compliance scan and the planner need.
///
/// # Examples
///
/// ```
/// use sojourn_core::types::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2017, 3, 19).unwrap();
/// assert_eq!(date.year(), 2017);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2017-03-19".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Days between dates
/// let end = Date::from_ymd(2017, 4, 2).unwrap();
/// assert_eq!(end - date, 14);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2017)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sojourn_core::types::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 29).unwrap(); // leap year
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Arguments
    /// * `s` - Date string in ISO 8601 format
    ///
    /// # Returns
    /// `Ok(Date)` if parsing succeeds, `Err(DateError::ParseError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sojourn_core::types::Date;
    ///
    /// let date = Date::parse("2017-03-19").unwrap();
    /// assert_eq!(date.month(), 3);
    ///
    /// assert!(Date::parse("19/03/2017").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the date `days` days after this one.
    ///
    /// Negative values step backwards. Returns `None` if the result
    /// falls outside chrono's representable range.
    ///
    /// # Examples
    ///
    /// ```
    /// use sojourn_core::types::Date;
    ///
    /// let date = Date::from_ymd(2019, 2, 26).unwrap();
    /// let later = date.add_days(44).unwrap();
    /// assert_eq!(later.to_string(), "2019-04-11");
    /// ```
    pub fn add_days(self, days: i64) -> Option<Self> {
        let delta = chrono::Duration::try_days(days)?;
        self.0.checked_add_signed(delta).map(Date)
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sojourn_core::types::Date;
    ///
    /// let begin = Date::from_ymd(2017, 1, 1).unwrap();
    /// let end = Date::from_ymd(2017, 1, 11).unwrap();
    ///
    /// assert_eq!(end - begin, 10);
    /// assert_eq!(begin - end, -10);
    /// ```
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
