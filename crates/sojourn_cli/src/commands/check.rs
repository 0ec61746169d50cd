//! Check command implementation
//!
//! Checks a recorded stay history against the rolling-window rule.
//! A budget breach is a normal negative verdict; overlapping stays in
//! the input are an error.

use std::path::Path;

use tracing::info;

use sojourn_core::compliance::is_compliant;
use sojourn_core::types::StayRule;

use crate::Result;

/// Run the check command
pub fn run(history_path: &Path, rule: &StayRule) -> Result<()> {
    info!("Checking history...");
    info!("  History: {}", history_path.display());
    info!(
        "  Rule: {} days in any {}-day window",
        rule.allowed_days(),
        rule.window_days()
    );

    let history = super::load_history(history_path)?;
    info!("  Stays loaded: {}", history.len());

    let total_days: i64 = history.iter().map(|stay| stay.day_count()).sum();

    if is_compliant(&history, rule)? {
        println!(
            "Compliant: {} stays ({} occupied days) keep within {} days in any {}-day window",
            history.len(),
            total_days,
            rule.allowed_days(),
            rule.window_days()
        );
    } else {
        println!(
            "NOT compliant: some {}-day window holds more than {} occupied days",
            rule.window_days(),
            rule.allowed_days()
        );
    }

    Ok(())
}
