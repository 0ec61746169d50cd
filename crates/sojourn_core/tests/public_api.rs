//! Integration tests through the public API only.
//!
//! Exercises the two entry points external callers use
//! (`parse_intervals` and the planner) against full multi-year
//! histories, including the reference scenario of eight recorded
//! stays under the 90-in-180 rule.

use sojourn_core::compliance::is_compliant;
use sojourn_core::planner::{find_next_stay, SearchConfig, StayPlanner};
use sojourn_core::types::{parse_intervals, PlanError, StayInterval, StayRule};

/// Eight stays from spring 2017 through early 2019, all compliant
/// under the default 90-in-180 rule.
fn reference_history() -> Vec<StayInterval> {
    parse_intervals(&[
        ("2017-03-19", "2017-04-02"),
        ("2017-07-21", "2017-08-25"),
        ("2017-10-16", "2017-11-28"),
        ("2018-01-15", "2018-02-27"),
        ("2018-04-16", "2018-05-29"),
        ("2018-07-16", "2018-08-28"),
        ("2018-10-15", "2018-11-27"),
        ("2019-01-14", "2019-02-26"),
    ])
    .unwrap()
}

#[test]
fn reference_history_is_compliant() {
    let history = reference_history();
    assert!(is_compliant(&history, &StayRule::default()).unwrap());
}

#[test]
fn reference_history_next_45_day_stay() {
    let history = reference_history();
    let next = find_next_stay(&history, 45, &StayRule::default()).unwrap();

    assert_eq!(next.to_string(), "2019-04-11 - 2019-05-25");
    assert_eq!(next.day_count(), 45);

    // 43 free days between the last recorded stay and the planned one
    let last = history.last().unwrap();
    assert_eq!((next.begin() - last.end()) - 1, 43);
}

#[test]
fn reference_history_extended_with_result_stays_compliant() {
    let mut history = reference_history();
    let next = find_next_stay(&history, 45, &StayRule::default()).unwrap();

    history.push(next);
    assert!(is_compliant(&history, &StayRule::default()).unwrap());
}

#[test]
fn reference_history_no_sooner_45_day_stay_exists() {
    let history = reference_history();
    let rule = StayRule::default();
    let next = find_next_stay(&history, 45, &rule).unwrap();

    let anchor = history.last().unwrap().end();
    let found_offset = next.begin() - anchor;

    for offset in 1..found_offset {
        let begin = anchor.add_days(offset).unwrap();
        let end = begin.add_days(44).unwrap();
        let candidate = StayInterval::new(begin, end).unwrap();

        let mut trial = history.clone();
        trial.push(candidate);
        assert!(
            !is_compliant(&trial, &rule).unwrap(),
            "a 45-day stay starting {} should not be compliant",
            begin
        );
    }
}

#[test]
fn planner_with_tight_horizon_reports_exhaustion() {
    let history = reference_history();
    let planner = StayPlanner::with_config(StayRule::default(), SearchConfig::new(30));

    let err = planner.find_next(&history, 45).unwrap_err();
    assert_eq!(err, PlanError::HorizonExhausted { days: 30 });
}

#[test]
fn public_types_are_reachable_from_module_roots() {
    use sojourn_core::types::{
        ComplianceError, Date, DateError, IntervalError, RuleError, DEFAULT_ALLOWED_DAYS,
        DEFAULT_WINDOW_DAYS,
    };

    let _date = Date::from_ymd(2017, 3, 19).unwrap();
    let _rule = StayRule::new(DEFAULT_WINDOW_DAYS, DEFAULT_ALLOWED_DAYS).unwrap();
    let _date_err = DateError::ParseError("x".to_string());
    let _interval_err: Option<IntervalError> = None;
    let _rule_err: Option<RuleError> = None;
    let _compliance_err: Option<ComplianceError> = None;
}
