//! Forward search for the soonest compliant stay.
//!
//! Given a compliant history and a desired stay length, the planner
//! scans forward from the day after the last recorded stay, proposing
//! one candidate per start offset and testing each trial history with
//! the compliance check until a candidate passes. The scan is strictly
//! sequential: the predicate is not monotone in the start offset (a
//! later window can fall back under budget), so skipping ahead would
//! forfeit the soonest-result guarantee.

use crate::compliance::is_compliant;
use crate::types::{PlanError, StayInterval, StayRule};

/// Default search horizon in days (ten years of offsets).
pub const DEFAULT_SEARCH_HORIZON_DAYS: u32 = 3650;

/// Configuration for the forward search.
///
/// The search loop examines one start offset per day; the horizon
/// bounds how far past the last recorded stay it may reach before
/// giving up with [`PlanError::HorizonExhausted`].
///
/// # Example
///
/// ```
/// use sojourn_core::planner::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.max_horizon_days, 3650);
///
/// let tight = SearchConfig::new(365);
/// assert_eq!(tight.max_horizon_days, 365);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of days past the last recorded stay to examine.
    pub max_horizon_days: u32,
}

impl Default for SearchConfig {
    /// Create a default configuration with a ten-year horizon.
    fn default() -> Self {
        Self {
            max_horizon_days: DEFAULT_SEARCH_HORIZON_DAYS,
        }
    }
}

impl SearchConfig {
    /// Create a configuration with the given horizon.
    ///
    /// # Panics
    ///
    /// Panics if `max_horizon_days == 0`.
    pub fn new(max_horizon_days: u32) -> Self {
        assert!(max_horizon_days > 0, "max_horizon_days must be > 0");
        Self { max_horizon_days }
    }
}

/// Plans the soonest stay that keeps a history compliant.
///
/// # Example
///
/// ```
/// use sojourn_core::planner::StayPlanner;
/// use sojourn_core::types::{parse_intervals, StayRule};
///
/// let history = parse_intervals(&[("2017-01-01", "2017-01-10")]).unwrap();
/// let planner = StayPlanner::new(StayRule::new(30, 12).unwrap());
///
/// let next = planner.find_next(&history, 5).unwrap();
/// assert_eq!(next.to_string(), "2017-01-29 - 2017-02-02");
/// ```
#[derive(Debug, Clone)]
pub struct StayPlanner {
    rule: StayRule,
    config: SearchConfig,
}

impl StayPlanner {
    /// Create a planner for the given rule with the default horizon.
    pub fn new(rule: StayRule) -> Self {
        Self {
            rule,
            config: SearchConfig::default(),
        }
    }

    /// Create a planner with an explicit search configuration.
    pub fn with_config(rule: StayRule, config: SearchConfig) -> Self {
        Self { rule, config }
    }

    /// Returns the rule this planner checks candidates against.
    pub fn rule(&self) -> &StayRule {
        &self.rule
    }

    /// Finds the soonest stay of `planned_days` days that can be
    /// appended to `history` without breaking the rule.
    ///
    /// The returned stay begins strictly after the last recorded end;
    /// every earlier start offset is tried first and rejected, so no
    /// sooner compliant stay of that length exists.
    ///
    /// # Arguments
    /// * `history` - Date-sorted, non-overlapping recorded stays
    /// * `planned_days` - Desired stay length, at least 1
    ///
    /// # Returns
    /// * `Ok(stay)` - The soonest compliant stay
    /// * `Err(PlanError::EmptyDuration)` - Zero-length request
    /// * `Err(PlanError::DurationExceedsAllowance)` - No stay of this
    ///   length can ever comply
    /// * `Err(PlanError::EmptyHistory)` - Nothing to anchor the search at
    /// * `Err(PlanError::HistoryNotCompliant)` - The record is already
    ///   over budget
    /// * `Err(PlanError::Compliance)` - The record is structurally
    ///   invalid (overlapping stays)
    /// * `Err(PlanError::HorizonExhausted)` - No compliant stay within
    ///   the configured horizon
    pub fn find_next(
        &self,
        history: &[StayInterval],
        planned_days: u32,
    ) -> Result<StayInterval, PlanError> {
        if planned_days == 0 {
            return Err(PlanError::EmptyDuration);
        }
        if planned_days > self.rule.allowed_days() {
            return Err(PlanError::DurationExceedsAllowance {
                planned: planned_days,
                allowed: self.rule.allowed_days(),
            });
        }
        let last = history.last().ok_or(PlanError::EmptyHistory)?;
        if !is_compliant(history, &self.rule)? {
            return Err(PlanError::HistoryNotCompliant);
        }

        let anchor = last.end();
        let mut trial = Vec::with_capacity(history.len() + 1);
        trial.extend_from_slice(history);

        for offset in 1..=i64::from(self.config.max_horizon_days) {
            let begin = match anchor.add_days(offset) {
                Some(day) => day,
                None => break,
            };
            let end = match begin.add_days(i64::from(planned_days) - 1) {
                Some(day) => day,
                None => break,
            };
            let candidate = StayInterval::new_unchecked(begin, end);

            trial.truncate(history.len());
            trial.push(candidate);
            if is_compliant(&trial, &self.rule)? {
                return Ok(candidate);
            }
        }

        Err(PlanError::HorizonExhausted {
            days: self.config.max_horizon_days,
        })
    }
}

/// Finds the soonest compliant stay using the default search horizon.
///
/// Convenience wrapper over [`StayPlanner::find_next`]; this and
/// [`parse_intervals`](crate::types::parse_intervals) are the two
/// entry points external callers need.
///
/// # Examples
///
/// ```
/// use sojourn_core::planner::find_next_stay;
/// use sojourn_core::types::{parse_intervals, StayRule};
///
/// let history = parse_intervals(&[("2017-01-01", "2017-01-10")]).unwrap();
/// let next = find_next_stay(&history, 5, &StayRule::new(30, 12).unwrap()).unwrap();
/// assert_eq!(next.day_count(), 5);
/// ```
pub fn find_next_stay(
    history: &[StayInterval],
    planned_days: u32,
    rule: &StayRule,
) -> Result<StayInterval, PlanError> {
    StayPlanner::new(*rule).find_next(history, planned_days)
}
