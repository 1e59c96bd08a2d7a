//! Ignore rules applied to every cleaned candidate.
//!
//! The rules are tier-independent and always run before scoring: a
//! candidate is only ever returned if it passes this filter. Rejection is
//! the only outcome; the filter never raises.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Configuration for the ignore rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgnoreConfig {
    /// Candidates longer than this are tracking numbers, not codes.
    #[serde(default = "default_max_len")]
    pub max_len: usize,

    /// Candidates shorter than this are too short to be codes.
    #[serde(default = "default_min_len")]
    pub min_len: usize,

    /// Reject 4-digit values that read as a calendar year (1900-2099).
    #[serde(default = "default_reject_years")]
    pub reject_years: bool,

    /// Uniformly repeated values longer than this are rejected ("11111").
    #[serde(default = "default_max_uniform_run")]
    pub max_uniform_run: usize,
}

const fn default_max_len() -> usize {
    12
}

const fn default_min_len() -> usize {
    4
}

const fn default_reject_years() -> bool {
    true
}

const fn default_max_uniform_run() -> usize {
    4
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
            min_len: default_min_len(),
            reject_years: default_reject_years(),
            max_uniform_run: default_max_uniform_run(),
        }
    }
}

/// Compiled rejection rules.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    config: IgnoreConfig,
}

impl IgnoreRules {
    /// Create rules from configuration.
    #[must_use]
    pub const fn new(config: IgnoreConfig) -> Self {
        Self { config }
    }

    /// Create rules with the default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(IgnoreConfig::default())
    }

    /// True when a cleaned candidate must be discarded.
    ///
    /// `accepted` is the length range of the tier that produced the
    /// candidate; the global min/max bounds apply on top of it.
    #[must_use]
    pub fn rejects(&self, cleaned: &str, accepted: &RangeInclusive<usize>) -> bool {
        let len = cleaned.chars().count();
        if len > self.config.max_len || len < self.config.min_len {
            return true;
        }
        if !accepted.contains(&len) {
            return true;
        }
        if self.config.reject_years && is_calendar_year(cleaned) {
            return true;
        }
        is_uniform_run(cleaned, self.config.max_uniform_run)
    }
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// A 4-digit value in 1900-2099. Years embedded in longer runs are not years.
fn is_calendar_year(cleaned: &str) -> bool {
    if cleaned.len() != 4 {
        return false;
    }
    cleaned
        .parse::<u32>()
        .is_ok_and(|year| (1900..=2099).contains(&year))
}

/// A single character repeated across the entire value, past the cap.
fn is_uniform_run(cleaned: &str, max_run: usize) -> bool {
    if cleaned.chars().count() <= max_run {
        return false;
    }
    let mut chars = cleaned.chars();
    chars
        .next()
        .is_some_and(|first| chars.all(|c| c == first))
}
