//! Error types for the sojourn CLI.

use thiserror::Error;

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error type wrapping core, configuration, and I/O failures.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// History file not found
    #[error("History file not found: {0}")]
    FileNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// History decoding error
    #[error("History decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Stay interval error
    #[error("Stay interval error: {0}")]
    Interval(#[from] sojourn_core::types::IntervalError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] sojourn_core::types::RuleError),

    /// Compliance error
    #[error("Compliance error: {0}")]
    Compliance(#[from] sojourn_core::types::ComplianceError),

    /// Planning error
    #[error("Planning error: {0}")]
    Plan(#[from] sojourn_core::types::PlanError),
}
