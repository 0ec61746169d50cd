//! Stay interval value type.
//!
//! A `StayInterval` is an immutable, inclusive range of calendar dates
//! representing continuous presence. Construction validates that the
//! range is well-formed; instances never change afterwards.

use std::fmt;

use super::error::IntervalError;
use super::time::Date;

/// An inclusive range of calendar dates representing one stay.
///
/// Both endpoints are part of the stay, so a single-day stay has
/// `begin == end` and a day count of 1.
///
/// # Examples
///
/// ```
/// use sojourn_core::types::StayInterval;
///
/// let stay = StayInterval::from_raw("2017-03-19", "2017-04-02").unwrap();
/// assert_eq!(stay.day_count(), 15);
/// assert_eq!(stay.to_string(), "2017-03-19 - 2017-04-02");
///
/// // Reversed endpoints are rejected
/// assert!(StayInterval::from_raw("2017-04-02", "2017-03-19").is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StayInterval {
    begin: Date,
    end: Date,
}

impl StayInterval {
    /// Creates a stay from two dates.
    ///
    /// # Arguments
    /// * `begin` - First day of the stay (inclusive)
    /// * `end` - Last day of the stay (inclusive)
    ///
    /// # Returns
    /// `Ok(StayInterval)` when `begin <= end`,
    /// `Err(IntervalError::EndBeforeBegin)` otherwise.
    pub fn new(begin: Date, end: Date) -> Result<Self, IntervalError> {
        if begin > end {
            return Err(IntervalError::EndBeforeBegin { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// Creates a stay from two ISO 8601 date strings.
    ///
    /// Parses both strings as `YYYY-MM-DD`, then delegates to
    /// [`StayInterval::new`], so both the parse failure and the
    /// reversed-endpoint failure are reachable from here.
    ///
    /// # Examples
    ///
    /// ```
    /// use sojourn_core::types::{IntervalError, StayInterval};
    ///
    /// let stay = StayInterval::from_raw("2017-01-01", "2017-01-10").unwrap();
    /// assert_eq!(stay.day_count(), 10);
    ///
    /// let err = StayInterval::from_raw("2017-01-01", "not-a-date").unwrap_err();
    /// assert!(matches!(err, IntervalError::Date(_)));
    /// ```
    pub fn from_raw(begin: &str, end: &str) -> Result<Self, IntervalError> {
        Self::new(Date::parse(begin)?, Date::parse(end)?)
    }

    /// First day of the stay (inclusive).
    pub fn begin(&self) -> Date {
        self.begin
    }

    /// Last day of the stay (inclusive).
    pub fn end(&self) -> Date {
        self.end
    }

    /// Number of calendar days covered, inclusive of both endpoints.
    ///
    /// Always at least 1.
    pub fn day_count(&self) -> i64 {
        (self.end - self.begin) + 1
    }

    /// Builds a stay whose endpoints are already known to be ordered.
    pub(crate) fn new_unchecked(begin: Date, end: Date) -> Self {
        debug_assert!(begin <= end);
        Self { begin, end }
    }
}

impl fmt::Display for StayInterval {
    /// Formats the stay as `"<begin> - <end>"` in ISO 8601 dates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.begin, self.end)
    }
}

/// Parses an ordered sequence of raw date pairs into stays.
///
/// Fails on the first invalid pair, propagating the underlying
/// [`IntervalError`]; pairs after the failing one are not inspected.
///
/// # Examples
///
/// ```
/// use sojourn_core::types::parse_intervals;
///
/// let stays = parse_intervals(&[
///     ("2017-03-19", "2017-04-02"),
///     ("2017-07-21", "2017-08-25"),
/// ])
/// .unwrap();
/// assert_eq!(stays.len(), 2);
/// ```
pub fn parse_intervals<S: AsRef<str>>(
    pairs: &[(S, S)],
) -> Result<Vec<StayInterval>, IntervalError> {
    pairs
        .iter()
        .map(|(begin, end)| StayInterval::from_raw(begin.as_ref(), end.as_ref()))
        .collect()
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{de, Deserialize, Deserializer};

    use super::super::time::Date;
    use super::StayInterval;

    #[derive(Deserialize)]
    struct RawInterval {
        begin: Date,
        end: Date,
    }

    // Deserialisation funnels through the constructor so the
    // begin <= end invariant holds for decoded values too.
    impl<'de> Deserialize<'de> for StayInterval {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = RawInterval::deserialize(deserializer)?;
            StayInterval::new(raw.begin, raw.end).map_err(de::Error::custom)
        }
    }
}
