//! Candidate model for tiered extraction.
//!
//! A candidate is a cleaned code value scored by the tier and table position
//! of the pattern that produced it.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// The escalation tier a pattern belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Tier {
    /// Lexical templates that strongly imply which digit run is the code.
    Structural = 0,
    /// Looser templates, consulted only when keyword context is present.
    Contextual = 1,
    /// Standalone digit runs, the last resort under keyword context.
    Fallback = 2,
}

impl Tier {
    /// Escalation order: structural first, fallback last.
    pub const ALL: [Self; 3] = [Self::Structural, Self::Contextual, Self::Fallback];

    /// Returns the string representation of this tier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Structural => "structural",
            Self::Contextual => "contextual",
            Self::Fallback => "fallback",
        }
    }

    /// Base priority for this tier; the pattern's index within its tier is
    /// subtracted from it. Bases are spaced so no length bonus can lift a
    /// candidate past the tier above it.
    #[must_use]
    pub const fn base(&self) -> i32 {
        match self {
            Self::Structural => 300,
            Self::Contextual => 200,
            Self::Fallback => 100,
        }
    }

    /// Cleaned candidate lengths this tier accepts.
    #[must_use]
    pub const fn accepted_len(&self) -> RangeInclusive<usize> {
        match self {
            Self::Structural => 4..=12,
            Self::Contextual | Self::Fallback => 4..=8,
        }
    }

    /// Whether this tier is gated on keyword context.
    #[must_use]
    pub const fn requires_context(&self) -> bool {
        !matches!(self, Self::Structural)
    }

    /// Priority bump for fallback candidates of typical OTP length.
    #[must_use]
    pub fn length_bonus(&self, len: usize) -> i32 {
        match self {
            Self::Fallback if (4..=6).contains(&len) => 10,
            _ => 0,
        }
    }
}

impl FromStr for Tier {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "structural" => Ok(Self::Structural),
            "contextual" => Ok(Self::Contextual),
            "fallback" => Ok(Self::Fallback),
            _ => Err("unknown tier"),
        }
    }
}

/// A cleaned, filter-surviving code value with its selection priority.
///
/// Candidates are ephemeral: created per extraction call, compared by
/// priority within the terminating tier, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    /// The cleaned code text.
    pub value: String,

    /// Tier-local rank; higher wins within the terminating tier.
    pub priority: i32,

    /// The tier whose pattern produced this candidate.
    pub tier: Tier,
}

impl Candidate {
    /// Create a new candidate.
    #[must_use]
    pub const fn new(value: String, priority: i32, tier: Tier) -> Self {
        Self {
            value,
            priority,
            tier,
        }
    }
}
