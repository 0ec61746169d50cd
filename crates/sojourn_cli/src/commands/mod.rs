//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod demo;
pub mod plan;

use std::path::Path;

use sojourn_core::types::StayInterval;

use crate::{CliError, Result};

/// Read a stay history from a JSON file.
///
/// The file holds an array of `{"begin": "YYYY-MM-DD", "end": "..."}`
/// objects; decoding re-validates each stay's date order.
pub(crate) fn load_history(path: &Path) -> Result<Vec<StayInterval>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
