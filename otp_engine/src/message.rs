//! Inbound message text assembly.

use serde::{Deserialize, Serialize};

/// Text fields of a notification-style message.
///
/// Mirrors the fields a platform notification exposes. Every field is
/// optional; absent fields contribute empty strings to the search text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageText {
    /// Short headline.
    pub title: Option<String>,

    /// Main body text.
    pub body: Option<String>,

    /// Secondary line under the title.
    pub subtext: Option<String>,

    /// Expanded body for multi-line styles.
    pub big_text: Option<String>,

    /// Auxiliary info line.
    pub info_text: Option<String>,

    /// Collapsed-state summary line.
    pub summary_text: Option<String>,
}

impl MessageText {
    /// Create an empty message.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            body: None,
            subtext: None,
            big_text: None,
            info_text: None,
            summary_text: None,
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the subtext line.
    #[must_use]
    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    /// Set the expanded body text.
    #[must_use]
    pub fn with_big_text(mut self, big_text: impl Into<String>) -> Self {
        self.big_text = Some(big_text.into());
        self
    }

    /// Set the info line.
    #[must_use]
    pub fn with_info_text(mut self, info_text: impl Into<String>) -> Self {
        self.info_text = Some(info_text.into());
        self
    }

    /// Set the summary line.
    #[must_use]
    pub fn with_summary_text(mut self, summary_text: impl Into<String>) -> Self {
        self.summary_text = Some(summary_text.into());
        self
    }

    /// Join all fields into a single search string.
    ///
    /// Fields are joined with single spaces in a fixed order (title, body,
    /// subtext, big text, info text, summary text); absent fields become
    /// empty strings.
    #[must_use]
    pub fn search_text(&self) -> String {
        [
            &self.title,
            &self.body,
            &self.subtext,
            &self.big_text,
            &self.info_text,
            &self.summary_text,
        ]
        .iter()
        .map(|field| field.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
    }
}
