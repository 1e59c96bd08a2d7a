//! Keyword context detection.
//!
//! Presence of any OTP-related keyword anywhere in the text unlocks the
//! contextual and fallback tiers. Matching is case-insensitive substring
//! containment with no proximity requirement.

/// Case-insensitive keyword table gating the lower-confidence tiers.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Create a set from raw keywords, lower-casing each.
    #[must_use]
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Create a set with the default vocabulary.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(default_keywords())
    }

    /// Add a keyword; matching logic is untouched.
    pub fn add(&mut self, keyword: impl Into<String>) {
        self.keywords.push(keyword.into().to_lowercase());
    }

    /// True when any keyword appears anywhere in the text.
    #[must_use]
    pub fn contains_any(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| lower.contains(keyword.as_str()))
    }

    /// The configured keywords.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Default OTP-related vocabulary.
#[must_use]
pub fn default_keywords() -> Vec<String> {
    [
        "otp",
        "verification",
        "code",
        "pin",
        "password",
        "authenticate",
        "verify",
        "security",
        "login",
        "signin",
        "confirm",
        "activation",
        "2fa",
        "one-time",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}
