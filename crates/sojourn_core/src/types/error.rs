//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `IntervalError`: Errors from stay interval construction
//! - `RuleError`: Errors from stay rule construction
//! - `ComplianceError`: Hard failures of the compliance scan
//! - `PlanError`: Errors from the forward search for a next stay
//!
//! Each enum covers one failure family; all operations surface their
//! errors to the immediate caller with no internal recovery or retry.

use thiserror::Error;

use super::time::Date;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse a date string as `YYYY-MM-DD`
///
/// # Examples
/// ```
/// use sojourn_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Stay interval construction errors.
///
/// # Variants
/// - `EndBeforeBegin`: The end date precedes the begin date
/// - `Date`: A raw date string failed to parse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// The end date precedes the begin date.
    #[error("Stay end date {end} is before begin date {begin}")]
    EndBeforeBegin {
        /// Requested begin date
        begin: Date,
        /// Requested end date
        end: Date,
    },

    /// A raw date string failed to parse.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Stay rule construction errors.
///
/// # Variants
/// - `EmptyWindow`: The rolling window length is zero
/// - `AllowanceExceedsWindow`: More days allowed than the window holds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The rolling window length is zero.
    #[error("Rolling window length must be at least one day")]
    EmptyWindow,

    /// The allowance is larger than the window it applies to.
    #[error("Allowance of {allowed} days exceeds the {window}-day window")]
    AllowanceExceedsWindow {
        /// Allowed days per window
        allowed: u32,
        /// Window length in days
        window: u32,
    },
}

/// Hard failures of the compliance scan.
///
/// A history that exceeds its rolling-window budget is a normal
/// negative result of the predicate, not an error. Only structurally
/// invalid input lands here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComplianceError {
    /// Two or more stays cover the same calendar day.
    #[error("Overlapping stays: {day} is covered more than once")]
    OverlappingStays {
        /// First day found to be covered twice
        day: Date,
    },
}

/// Errors from the forward search for a next stay.
///
/// All variants indicate an unsatisfiable request, never a transient
/// condition; callers should not retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The requested stay has zero length.
    #[error("Planned stay must be at least one day long")]
    EmptyDuration,

    /// No stay of the requested length can ever satisfy the rule.
    #[error("Planned duration of {planned} days exceeds the allowance of {allowed} days")]
    DurationExceedsAllowance {
        /// Requested stay length in days
        planned: u32,
        /// Allowed days per window
        allowed: u32,
    },

    /// There is no recorded stay to anchor the search at.
    #[error("Cannot plan a stay against an empty history")]
    EmptyHistory,

    /// The recorded history already breaks the rule.
    #[error("History already exceeds the rolling-window allowance")]
    HistoryNotCompliant,

    /// No compliant stay was found within the search horizon.
    #[error("No compliant stay within {days} days of the last recorded stay")]
    HorizonExhausted {
        /// Search horizon in days
        days: u32,
    },

    /// The history itself is structurally invalid.
    #[error(transparent)]
    Compliance(#[from] ComplianceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        let err = DateError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
        };
        assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");

        let err = DateError::ParseError("invalid format".to_string());
        assert_eq!(format!("{}", err), "Date parse error: invalid format");
    }

    #[test]
    fn test_interval_error_display() {
        let begin = Date::from_ymd(2017, 4, 2).unwrap();
        let end = Date::from_ymd(2017, 3, 19).unwrap();
        let err = IntervalError::EndBeforeBegin { begin, end };
        assert_eq!(
            format!("{}", err),
            "Stay end date 2017-03-19 is before begin date 2017-04-02"
        );
    }

    #[test]
    fn test_interval_error_from_date_error() {
        let date_err = DateError::ParseError("bad".to_string());
        let err: IntervalError = date_err.clone().into();
        assert_eq!(err, IntervalError::Date(date_err));
    }

    #[test]
    fn test_rule_error_display() {
        let err = RuleError::AllowanceExceedsWindow {
            allowed: 200,
            window: 180,
        };
        assert_eq!(
            format!("{}", err),
            "Allowance of 200 days exceeds the 180-day window"
        );
    }

    #[test]
    fn test_compliance_error_display() {
        let day = Date::from_ymd(2017, 1, 1).unwrap();
        let err = ComplianceError::OverlappingStays { day };
        assert!(format!("{}", err).contains("2017-01-01"));
    }

    #[test]
    fn test_plan_error_display() {
        let err = PlanError::DurationExceedsAllowance {
            planned: 91,
            allowed: 90,
        };
        assert!(format!("{}", err).contains("91"));
        assert!(format!("{}", err).contains("90"));

        let err = PlanError::HorizonExhausted { days: 3650 };
        assert!(format!("{}", err).contains("3650"));
    }

    #[test]
    fn test_plan_error_from_compliance_error() {
        let day = Date::from_ymd(2017, 1, 1).unwrap();
        let err: PlanError = ComplianceError::OverlappingStays { day }.into();
        assert!(matches!(err, PlanError::Compliance(_)));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PlanError::EmptyHistory;
        let _: &dyn std::error::Error = &err;
    }
}
