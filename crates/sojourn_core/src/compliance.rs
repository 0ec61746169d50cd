//! Rolling-window compliance check.
//!
//! Given an ordered history of stays and a [`StayRule`], this module
//! answers two questions in one pass: do any stays overlap (a hard
//! error, the input is corrupt), and does any rolling window of the
//! rule's length contain more occupied days than the rule allows (the
//! predicate's ordinary negative result).

use crate::types::{ComplianceError, StayInterval, StayRule};

/// Checks a stay history against a rolling-window rule.
///
/// The history is expected date-sorted. An empty history is vacuously
/// compliant. Overlapping stays fail hard with
/// [`ComplianceError::OverlappingStays`]; exceeding the occupied-day
/// budget in any window is the normal `Ok(false)` outcome. The two
/// conditions are deliberately kept on separate channels: the first is
/// a caller error, the second an expected answer.
///
/// Every window start anchored at a recorded day is examined; the
/// window is clamped at the last recorded day, never extended past it.
/// Occupancy is zero outside the recorded span, so windows starting
/// earlier or reaching further can only contain fewer occupied days
/// than one of the examined windows.
///
/// # Examples
///
/// ```
/// use sojourn_core::compliance::is_compliant;
/// use sojourn_core::types::{parse_intervals, StayRule};
///
/// let stays = parse_intervals(&[
///     ("2017-01-01", "2017-01-01"),
///     ("2017-01-03", "2017-01-03"),
/// ])
/// .unwrap();
///
/// // Two occupied days never share a 2-day window here
/// assert!(is_compliant(&stays, &StayRule::new(2, 1).unwrap()).unwrap());
///
/// // A 3-day window catches both
/// assert!(!is_compliant(&stays, &StayRule::new(3, 1).unwrap()).unwrap());
/// ```
pub fn is_compliant(stays: &[StayInterval], rule: &StayRule) -> Result<bool, ComplianceError> {
    let occupied = match occupancy(stays)? {
        Some(occupied) => occupied,
        None => return Ok(true),
    };

    let span = occupied.len();
    let window = rule.window_days() as usize;

    // prefix[i] holds the number of occupied days among the first i
    let mut prefix = vec![0u32; span + 1];
    for (i, &occ) in occupied.iter().enumerate() {
        prefix[i + 1] = prefix[i] + u32::from(occ);
    }

    for start in 0..span {
        let end = span.min(start + window);
        if prefix[end] - prefix[start] > rule.allowed_days() {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Builds the per-day occupancy map over the covered span.
///
/// Returns `None` for an empty history. The span runs from the
/// earliest begin through the latest end, so out-of-order input cannot
/// index outside it. A day covered twice aborts the scan.
fn occupancy(stays: &[StayInterval]) -> Result<Option<Vec<bool>>, ComplianceError> {
    let first_day = match stays.iter().map(StayInterval::begin).min() {
        Some(day) => day,
        None => return Ok(None),
    };
    let last_day = stays
        .iter()
        .map(StayInterval::end)
        .max()
        .unwrap_or(first_day);

    let span = ((last_day - first_day) + 1) as usize;
    let mut occupied = vec![false; span];

    for stay in stays {
        let mut day = stay.begin();
        for _ in 0..stay.day_count() {
            let idx = (day - first_day) as usize;
            if occupied[idx] {
                return Err(ComplianceError::OverlappingStays { day });
            }
            occupied[idx] = true;
            day = match day.add_days(1) {
                Some(next) => next,
                // stay.end() is representable, so this can only be
                // reached after the stay's last day
                None => break,
            };
        }
    }

    Ok(Some(occupied))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{parse_intervals, Date};

    fn rule(window: u32, allowed: u32) -> StayRule {
        StayRule::new(window, allowed).unwrap()
    }

    #[test]
    fn test_one_interval_within_budget() {
        let stays = parse_intervals(&[("2017-01-01", "2017-01-01")]).unwrap();
        assert!(is_compliant(&stays, &rule(2, 1)).unwrap());
    }

    #[test]
    fn test_one_interval_over_budget() {
        let stays = parse_intervals(&[("2017-01-01", "2017-01-01")]).unwrap();
        assert!(!is_compliant(&stays, &rule(2, 0)).unwrap());
    }

    #[test]
    fn test_two_intervals_separate_windows() {
        let stays = parse_intervals(&[
            ("2017-01-01", "2017-01-01"),
            ("2017-01-03", "2017-01-03"),
        ])
        .unwrap();
        assert!(is_compliant(&stays, &rule(2, 1)).unwrap());
    }

    #[test]
    fn test_two_intervals_zero_allowance() {
        let stays = parse_intervals(&[
            ("2017-01-01", "2017-01-01"),
            ("2017-01-03", "2017-01-03"),
        ])
        .unwrap();
        assert!(!is_compliant(&stays, &rule(2, 0)).unwrap());
    }

    #[test]
    fn test_two_intervals_shared_window() {
        let stays = parse_intervals(&[
            ("2017-01-01", "2017-01-01"),
            ("2017-01-03", "2017-01-03"),
        ])
        .unwrap();
        // The window over 01-01..01-03 holds both occupied days
        assert!(!is_compliant(&stays, &rule(3, 1)).unwrap());
    }

    #[test]
    fn test_empty_history_is_vacuously_compliant() {
        assert!(is_compliant(&[], &rule(180, 90)).unwrap());
        assert!(is_compliant(&[], &rule(1, 0)).unwrap());
    }

    #[test]
    fn test_overlap_is_an_error_not_a_verdict() {
        let stays = parse_intervals(&[
            ("2017-01-01", "2017-01-01"),
            ("2017-01-01", "2017-01-01"),
        ])
        .unwrap();
        let err = is_compliant(&stays, &rule(2, 5)).unwrap_err();
        assert_eq!(
            err,
            ComplianceError::OverlappingStays {
                day: Date::parse("2017-01-01").unwrap(),
            }
        );
    }

    #[test]
    fn test_partial_overlap_reports_first_shared_day() {
        let stays = parse_intervals(&[
            ("2017-01-01", "2017-01-05"),
            ("2017-01-04", "2017-01-08"),
        ])
        .unwrap();
        let err = is_compliant(&stays, &rule(30, 30)).unwrap_err();
        assert_eq!(
            err,
            ComplianceError::OverlappingStays {
                day: Date::parse("2017-01-04").unwrap(),
            }
        );
    }

    #[test]
    fn test_adjacent_stays_do_not_overlap() {
        let stays = parse_intervals(&[
            ("2017-01-01", "2017-01-05"),
            ("2017-01-06", "2017-01-10"),
        ])
        .unwrap();
        assert!(is_compliant(&stays, &rule(30, 10)).unwrap());
        assert!(!is_compliant(&stays, &rule(30, 9)).unwrap());
    }

    #[test]
    fn test_window_clamped_at_last_recorded_day() {
        // 10 occupied days at the end of the span; the windows that
        // reach past the last day must not invent occupancy
        let stays = parse_intervals(&[("2017-01-01", "2017-01-10")]).unwrap();
        assert!(is_compliant(&stays, &rule(180, 10)).unwrap());
        assert!(!is_compliant(&stays, &rule(180, 9)).unwrap());
    }

    #[test]
    fn test_budget_spread_across_full_rule() {
        // 90 days used, then a gap, under the 90-in-180 default
        let stays = parse_intervals(&[("2017-01-01", "2017-03-31")]).unwrap();
        assert!(is_compliant(&stays, &StayRule::default()).unwrap());

        let stays = parse_intervals(&[("2017-01-01", "2017-04-01")]).unwrap();
        assert!(!is_compliant(&stays, &StayRule::default()).unwrap());
    }

    #[test]
    fn test_zero_allowance_rejects_any_presence() {
        let stays = parse_intervals(&[("2017-06-15", "2017-06-15")]).unwrap();
        assert!(!is_compliant(&stays, &rule(1, 0)).unwrap());
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use crate::types::StayInterval;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (2000i32..2100i32, 1u32..13u32, 1u32..29u32)
                .prop_filter_map("valid date", |(year, month, day)| {
                    Date::from_ymd(year, month, day).ok()
                })
        }

        proptest! {
            #[test]
            fn single_stay_within_allowance_is_compliant(
                begin in date_strategy(),
                len in 1i64..120,
                slack in 0u32..50,
            ) {
                let end = begin.add_days(len - 1).unwrap();
                let stay = StayInterval::new(begin, end).unwrap();
                let allowed = len as u32 + slack;
                let rule = StayRule::new(allowed + 400, allowed).unwrap();

                prop_assert!(is_compliant(&[stay], &rule).unwrap());
            }

            #[test]
            fn single_stay_over_allowance_is_not_compliant(
                begin in date_strategy(),
                allowed in 0u32..90,
                excess in 1i64..40,
            ) {
                let len = i64::from(allowed) + excess;
                let end = begin.add_days(len - 1).unwrap();
                let stay = StayInterval::new(begin, end).unwrap();
                // Window long enough to see the whole stay
                let rule = StayRule::new(200, allowed).unwrap();

                prop_assert!(!is_compliant(&[stay], &rule).unwrap());
            }

            #[test]
            fn duplicate_stay_always_overlaps(
                begin in date_strategy(),
                len in 1i64..60,
            ) {
                let end = begin.add_days(len - 1).unwrap();
                let stay = StayInterval::new(begin, end).unwrap();
                let result = is_compliant(&[stay, stay], &StayRule::default());

                prop_assert_eq!(
                    result,
                    Err(ComplianceError::OverlappingStays { day: begin })
                );
            }

            #[test]
            fn stays_a_full_window_apart_never_interact(
                begin in date_strategy(),
                window in 1u32..400,
                extra in 0i64..100,
            ) {
                let first = StayInterval::new(begin, begin).unwrap();
                let other_day = begin.add_days(i64::from(window) + extra).unwrap();
                let second = StayInterval::new(other_day, other_day).unwrap();
                let rule = StayRule::new(window, 1).unwrap();

                prop_assert!(is_compliant(&[first, second], &rule).unwrap());
            }
        }
    }
}
