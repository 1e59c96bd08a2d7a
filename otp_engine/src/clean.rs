//! Candidate cleaning.

/// Collapse separator-formatted digit groups into a bare digit string.
///
/// Captures made up solely of digits, whitespace, and dashes have the
/// separators stripped ("12-34-56" becomes "123456"). Anything else is
/// returned trimmed, so alphanumeric codes from custom patterns pass
/// through untouched. Idempotent: cleaning a clean string is a no-op.
#[must_use]
pub fn clean_candidate(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || c == '-')
    {
        trimmed.chars().filter(char::is_ascii_digit).collect()
    } else {
        trimmed.to_string()
    }
}
