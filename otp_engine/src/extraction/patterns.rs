//! Configurable pattern tables for tiered extraction.
//!
//! Tables are data, not control flow: order within a tier encodes
//! precedence, so every template can be audited and tested on its own.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extraction::candidates::Tier;

/// Error type for pattern building.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The regex source failed to compile.
    #[error("invalid regex in pattern '{0}': {1}")]
    Regex(String, regex::Error),

    /// The pattern does not define the capture group it names.
    #[error("pattern '{0}' is missing capture group {1}")]
    Capture(String, usize),
}

/// Definition of a single extraction pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDef {
    /// Unique name for this pattern.
    pub name: String,

    /// The tier this pattern belongs to.
    pub tier: Tier,

    /// Regex source; the code must be isolated in a capture group.
    pub pattern: String,

    /// Index of the capture group holding the code.
    #[serde(default = "default_capture")]
    pub capture: usize,
}

const fn default_capture() -> usize {
    1
}

impl PatternDef {
    /// Compile to a `CompiledPattern`.
    ///
    /// # Errors
    /// Returns an error if the regex is invalid or the named capture group
    /// does not exist.
    pub fn build(&self) -> Result<CompiledPattern, BuildError> {
        let regex =
            Regex::new(&self.pattern).map_err(|e| BuildError::Regex(self.name.clone(), e))?;

        if self.capture >= regex.captures_len() {
            return Err(BuildError::Capture(self.name.clone(), self.capture));
        }

        Ok(CompiledPattern {
            name: self.name.clone(),
            tier: self.tier,
            regex,
            capture: self.capture,
        })
    }
}

/// A pattern definition with its regex compiled and capture group verified.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Name carried over from the definition.
    pub name: String,

    /// The tier this pattern belongs to.
    pub tier: Tier,

    /// Compiled regex.
    pub regex: Regex,

    /// Index of the capture group holding the code.
    pub capture: usize,
}

/// Default pattern tables for the three tiers.
///
/// Order within each tier is significant: earlier patterns outrank later
/// ones when both produce surviving candidates.
#[must_use]
pub fn default_patterns() -> Vec<PatternDef> {
    let mut patterns = Vec::new();
    patterns.extend(structural_patterns());
    patterns.extend(contextual_patterns());
    patterns.extend(fallback_patterns());
    patterns
}

/// High-confidence lexical templates, applied without keyword gating.
fn structural_patterns() -> Vec<PatternDef> {
    vec![
        // "Your OTP is 123456", "OTP: 4567", "use OTP-890227", "Code: \"4567\""
        PatternDef {
            name: "keyword_value".to_string(),
            tier: Tier::Structural,
            pattern: r#"(?i)\b(?:otp|code|pin|passcode|password|verification)\s*(?:is|:|-)?\s*["'\[(<]?\s*([0-9]{4,10})\b"#.to_string(),
            capture: 1,
        },
        // "6767 is otp for 3838", "987654 - Your verification code",
        // "\"4567\" is your verification code"
        PatternDef {
            name: "value_keyword".to_string(),
            tier: Tier::Structural,
            pattern: r#"(?i)\b([0-9]{4,10})\s*["'\])>]?\s*(?:is|as|-|:)\s*(?:your|the)?\s*(?:one[- ]?time\s+)?(?:otp|code|pin|passcode|password|verification)\b"#.to_string(),
            capture: 1,
        },
        // "OTP for 9876543210 is 4279", "Your OTP for +919876543210 is 567890"
        PatternDef {
            name: "keyword_phone_value".to_string(),
            tier: Tier::Structural,
            pattern: r"(?i)\b(?:otp|code|pin|passcode|password|verification)\s*(?:for|to)?\s*\+?[0-9]{10,13}\s*(?:is|:|-)?\s*([0-9]{4,10})\b".to_string(),
            capture: 1,
        },
        // "Use 456789 to verify", "Enter 678901 to proceed"
        PatternDef {
            name: "action_value".to_string(),
            tier: Tier::Structural,
            pattern: r"(?i)\b(?:use|enter|type|submit)\s+(?:otp|code|pin)?[-\s]*([0-9]{4,10})\b\s*(?:to|for)\b".to_string(),
            capture: 1,
        },
    ]
}

/// Looser templates, only reachable when the text carries keyword context.
fn contextual_patterns() -> Vec<PatternDef> {
    vec![
        // "Please verify with 334455": keyword, then digits within 20 chars
        PatternDef {
            name: "context_value".to_string(),
            tier: Tier::Contextual,
            pattern: r"(?i)\b(?:verification|verify|authenticat[a-z]*|security|login|sign[- ]?in|confirm|activation|one[- ]time|2fa)\b[^0-9]{0,20}\b([0-9]{4,8})\b".to_string(),
            capture: 1,
        },
        // "12-34-56", "98 76 54": separator groups collapsed by the cleaner
        PatternDef {
            name: "grouped_digits".to_string(),
            tier: Tier::Contextual,
            pattern: r"\b([0-9]{2,4}(?:[-\s][0-9]{2,4}){1,3})\b".to_string(),
            capture: 1,
        },
    ]
}

/// Last-resort standalone digit runs.
fn fallback_patterns() -> Vec<PatternDef> {
    vec![PatternDef {
        name: "bare_digits".to_string(),
        tier: Tier::Fallback,
        pattern: r"\b([0-9]{4,10})\b".to_string(),
        capture: 1,
    }]
}
