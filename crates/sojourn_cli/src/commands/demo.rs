//! Demo command for the built-in sample scenario.
//!
//! Runs the planner over a fixed history of eight stays recorded
//! between March 2017 and February 2019 under the 90-in-180 rule,
//! then prints each consecutive pair of stays with the stay length
//! and the number of free days between them.

use sojourn_core::planner::find_next_stay;
use sojourn_core::types::{parse_intervals, StayRule};

use crate::Result;

/// Runs the sample scenario.
///
/// Plans a 45-day stay on top of the recorded history and shows how
/// it lines up with the existing record.
///
/// # Returns
///
/// `Ok(())` on success, `Err` on failure.
pub fn run() -> Result<()> {
    println!("========================================");
    println!("Rolling-Window Stay Planner Demo");
    println!("========================================");
    println!();

    let history = parse_intervals(&[
        ("2017-03-19", "2017-04-02"),
        ("2017-07-21", "2017-08-25"),
        ("2017-10-16", "2017-11-28"),
        ("2018-01-15", "2018-02-27"),
        ("2018-04-16", "2018-05-29"),
        ("2018-07-16", "2018-08-28"),
        ("2018-10-15", "2018-11-27"),
        ("2019-01-14", "2019-02-26"),
    ])?;

    let rule = StayRule::default();
    println!(
        "[Demo] Rule: at most {} days in any {}-day window",
        rule.allowed_days(),
        rule.window_days()
    );
    println!("[Demo] Recorded stays: {}", history.len());
    println!("[Demo] Planning a 45-day stay...");
    println!();

    let next = find_next_stay(&history, 45, &rule)?;

    let mut timeline = history.clone();
    timeline.push(next);

    println!("{:<26} {:<26} {:>6} {:>6}", "Stay", "Next stay", "days", "gap");
    println!("----------------------------------------------------------------------");
    for pair in timeline.windows(2) {
        println!(
            "{:<26} {:<26} {:>6} {:>6}",
            pair[0].to_string(),
            pair[1].to_string(),
            pair[0].day_count(),
            (pair[1].begin() - pair[0].end()) - 1
        );
    }
    println!();

    println!("[Demo] Soonest compliant stay: {} ({} days)", next, next.day_count());
    println!();
    println!("========================================");
    println!("Demo completed successfully!");
    println!("========================================");

    Ok(())
}
