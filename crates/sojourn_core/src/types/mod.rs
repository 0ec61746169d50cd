//! Core value and error types.
//!
//! This module provides:
//! - `time`: The `Date` calendar type (ISO 8601, whole-day arithmetic)
//! - `interval`: The `StayInterval` value type and batch parsing
//! - `rule`: The `StayRule` rolling-window rule
//! - `error`: Structured error types for dates, intervals, rules,
//!   compliance scanning, and planning
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`Date`] from `time`
//! - [`StayInterval`], [`parse_intervals`] from `interval`
//! - [`StayRule`], [`DEFAULT_WINDOW_DAYS`], [`DEFAULT_ALLOWED_DAYS`] from `rule`
//! - [`DateError`], [`IntervalError`], [`RuleError`], [`ComplianceError`],
//!   [`PlanError`] from `error`

pub mod error;
pub mod interval;
pub mod rule;
pub mod time;

// Re-export commonly used types at module level
pub use error::{ComplianceError, DateError, IntervalError, PlanError, RuleError};
pub use interval::{parse_intervals, StayInterval};
pub use rule::{StayRule, DEFAULT_ALLOWED_DAYS, DEFAULT_WINDOW_DAYS};
pub use time::Date;
