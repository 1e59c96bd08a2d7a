//! Tiered extraction engine.
//!
//! Applies the structural, contextual, and fallback tables in order with a
//! strict early exit: the first tier that produces a surviving candidate
//! decides the result and lower tiers are never consulted.

use tracing::debug;

use crate::clean::clean_candidate;
use crate::context::{KeywordSet, default_keywords};
use crate::extraction::candidates::{Candidate, Tier};
use crate::extraction::patterns::{BuildError, CompiledPattern, PatternDef, default_patterns};
use crate::filter::{IgnoreConfig, IgnoreRules};
use crate::message::MessageText;

/// Configuration for the extraction engine.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EngineConfig {
    /// Pattern tables to apply, in precedence order within each tier.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<PatternDef>,

    /// Keywords whose presence unlocks the contextual and fallback tiers.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Rejection rules applied to every cleaned candidate.
    #[serde(default)]
    pub ignore: IgnoreConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
            keywords: default_keywords(),
            ignore: IgnoreConfig::default(),
        }
    }
}

/// Free-text OTP extraction engine.
///
/// Stateless once built: extraction is deterministic, never fails, and may
/// be called concurrently from any number of threads.
pub struct OtpExtractor {
    /// Compiled pattern tables, in declaration order.
    patterns: Vec<CompiledPattern>,
    /// Keyword table gating the lower tiers.
    keywords: KeywordSet,
    /// Rejection rules for cleaned candidates.
    ignore: IgnoreRules,
}

impl OtpExtractor {
    /// Create a new extractor from configuration.
    ///
    /// # Errors
    /// Returns an error if pattern compilation fails.
    pub fn new(config: EngineConfig) -> Result<Self, BuildError> {
        let patterns = config
            .patterns
            .iter()
            .map(PatternDef::build)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            patterns,
            keywords: KeywordSet::new(config.keywords),
            ignore: IgnoreRules::new(config.ignore),
        })
    }

    /// Create an extractor with the default tables.
    ///
    /// # Errors
    /// Returns an error if default pattern compilation fails.
    pub fn with_defaults() -> Result<Self, BuildError> {
        Self::new(EngineConfig::default())
    }

    /// Extract the single best OTP candidate from free text.
    ///
    /// Returns `None` for blank text and for text in which no tier produces
    /// a candidate that survives cleaning and the ignore rules. Within the
    /// terminating tier the highest-priority candidate wins; ties keep the
    /// earliest one collected.
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        let has_context = self.keywords.contains_any(text);
        let mut sweep = Sweep::Open;

        for tier in Tier::ALL {
            if sweep.is_decided() {
                break;
            }
            if tier.requires_context() && !has_context {
                debug!("skipping {} tier: no keyword context", tier.as_str());
                continue;
            }
            let survivors = self.tier_candidates(tier, text);
            debug!(
                "{} tier produced {} candidate(s)",
                tier.as_str(),
                survivors.len()
            );
            sweep.offer(survivors);
        }

        match sweep.into_winner() {
            Some(winner) => {
                debug!(
                    "extracted '{}' from {} tier",
                    winner.value,
                    winner.tier.as_str()
                );
                Some(winner.value)
            }
            None => {
                debug!("no acceptable candidate");
                None
            }
        }
    }

    /// Extract from a structured message by joining its text fields first.
    #[must_use]
    pub fn extract_from_message(&self, message: &MessageText) -> Option<String> {
        self.extract(&message.search_text())
    }

    /// Every cleaned, filter-passing match across all tiers.
    ///
    /// Ignores both the context gates and the early-exit escalation policy;
    /// intended for debugging and corpus analysis, never for the primary
    /// decision path. Duplicate values are collapsed, first occurrence wins.
    #[must_use]
    pub fn extract_all_candidates(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut values = Vec::new();
        for tier in Tier::ALL {
            for candidate in self.tier_candidates(tier, text) {
                if !values.contains(&candidate.value) {
                    values.push(candidate.value);
                }
            }
        }
        values
    }

    /// Run one tier's table and collect the candidates that survive
    /// cleaning and the ignore rules.
    fn tier_candidates(&self, tier: Tier, text: &str) -> Vec<Candidate> {
        let accepted = tier.accepted_len();
        let mut candidates = Vec::new();
        let mut table_index = 0_i32;

        for pattern in self.patterns.iter().filter(|p| p.tier == tier) {
            for caps in pattern.regex.captures_iter(text) {
                let Some(raw) = caps.get(pattern.capture) else {
                    continue;
                };
                let cleaned = clean_candidate(raw.as_str());
                if self.ignore.rejects(&cleaned, &accepted) {
                    debug!("rejected '{}' from pattern {}", cleaned, pattern.name);
                    continue;
                }
                let priority =
                    tier.base() - table_index + tier.length_bonus(cleaned.chars().count());
                candidates.push(Candidate::new(cleaned, priority, tier));
            }
            table_index += 1;
        }

        candidates
    }
}

/// Escalation state across tiers.
///
/// Starts open; the first offer of a non-empty survivor set moves the sweep
/// to `Decided`, and every later offer is ignored, so lower tiers can never
/// overturn a higher tier's result.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Sweep {
    Open,
    Decided(Candidate),
}

impl Sweep {
    const fn is_decided(&self) -> bool {
        matches!(self, Self::Decided(_))
    }

    /// Offer one tier's surviving candidates.
    fn offer(&mut self, candidates: Vec<Candidate>) {
        if self.is_decided() {
            return;
        }
        if let Some(best) = best_candidate(candidates) {
            *self = Self::Decided(best);
        }
    }

    fn into_winner(self) -> Option<Candidate> {
        match self {
            Self::Open => None,
            Self::Decided(winner) => Some(winner),
        }
    }
}

/// Highest priority wins; ties keep the earliest-collected candidate.
fn best_candidate(candidates: Vec<Candidate>) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for candidate in candidates {
        match &best {
            Some(current) if current.priority >= candidate.priority => {}
            _ => best = Some(candidate),
        }
    }
    best
}
