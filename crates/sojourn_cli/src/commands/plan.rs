//! Plan command implementation
//!
//! Finds the soonest stay of the requested length that keeps the
//! recorded history compliant.

use std::path::Path;

use tracing::info;

use sojourn_core::planner::{SearchConfig, StayPlanner};
use sojourn_core::types::StayRule;

use crate::Result;

/// Run the plan command
pub fn run(
    history_path: &Path,
    duration: u32,
    rule: &StayRule,
    search: SearchConfig,
) -> Result<()> {
    info!("Planning next stay...");
    info!("  History: {}", history_path.display());
    info!("  Duration: {} days", duration);
    info!(
        "  Rule: {} days in any {}-day window",
        rule.allowed_days(),
        rule.window_days()
    );
    info!("  Search horizon: {} days", search.max_horizon_days);

    let history = super::load_history(history_path)?;
    info!("  Stays loaded: {}", history.len());

    let planner = StayPlanner::with_config(*rule, search);
    let next = planner.find_next(&history, duration)?;

    println!("Next stay: {}", next);
    println!("Day count: {}", next.day_count());
    if let Some(last) = history.last() {
        println!("Free days before it: {}", (next.begin() - last.end()) - 1);
    }

    Ok(())
}
