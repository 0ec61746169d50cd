//! Rolling-window stay rule.

use super::error::RuleError;

/// Default rolling window length in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 180;

/// Default number of allowed days per rolling window.
pub const DEFAULT_ALLOWED_DAYS: u32 = 90;

/// A regulatory rule of the form "no more than `allowed_days` occupied
/// days within any rolling window of `window_days` days".
///
/// The rule is an ordinary value passed explicitly to every operation;
/// there is no process-wide rule state, so the same code can serve
/// several rule sets at once.
///
/// # Examples
///
/// ```
/// use sojourn_core::types::StayRule;
///
/// // The common 90-in-180 rule
/// let rule = StayRule::default();
/// assert_eq!(rule.window_days(), 180);
/// assert_eq!(rule.allowed_days(), 90);
///
/// // A custom rule
/// let rule = StayRule::new(30, 12).unwrap();
/// assert_eq!(rule.allowed_days(), 12);
///
/// // An allowance larger than its window is rejected
/// assert!(StayRule::new(90, 180).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StayRule {
    window_days: u32,
    allowed_days: u32,
}

impl StayRule {
    /// Creates a rule after validating its parameters.
    ///
    /// # Arguments
    /// * `window_days` - Rolling window length, at least 1
    /// * `allowed_days` - Occupied-day budget per window, at most
    ///   `window_days`
    ///
    /// # Returns
    /// `Err(RuleError::EmptyWindow)` when `window_days` is zero,
    /// `Err(RuleError::AllowanceExceedsWindow)` when the budget is
    /// larger than the window. An allowance of zero is valid and
    /// forbids any presence at all.
    pub fn new(window_days: u32, allowed_days: u32) -> Result<Self, RuleError> {
        if window_days == 0 {
            return Err(RuleError::EmptyWindow);
        }
        if allowed_days > window_days {
            return Err(RuleError::AllowanceExceedsWindow {
                allowed: allowed_days,
                window: window_days,
            });
        }
        Ok(Self {
            window_days,
            allowed_days,
        })
    }

    /// Rolling window length in days.
    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Occupied-day budget per window.
    pub fn allowed_days(&self) -> u32 {
        self.allowed_days
    }
}

impl Default for StayRule {
    /// The 90-days-in-any-180 rule.
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            allowed_days: DEFAULT_ALLOWED_DAYS,
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{de, Deserialize, Deserializer};

    use super::StayRule;

    #[derive(Deserialize)]
    struct RawRule {
        window_days: u32,
        allowed_days: u32,
    }

    // Deserialisation funnels through the constructor so decoded
    // rules are validated like constructed ones.
    impl<'de> Deserialize<'de> for StayRule {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = RawRule::deserialize(deserializer)?;
            StayRule::new(raw.window_days, raw.allowed_days).map_err(de::Error::custom)
        }
    }
}
