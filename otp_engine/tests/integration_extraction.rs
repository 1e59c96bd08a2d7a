//! Integration tests for the tiered OTP extraction flow.
//!
//! These tests verify the complete flow of:
//! - Structural, contextual, and fallback pattern matching
//! - Keyword gating and strict early-exit escalation
//! - Candidate cleaning and the ignore rules
//! - Message text assembly and caller-side deduplication

use otp_engine::{
    EngineConfig, MessageText, OtpExtractor, PatternDef, RecentMessages, Tier, clean_candidate,
    content_key, default_keywords, default_patterns,
};

fn assert_extracts(engine: &OtpExtractor, cases: &[(&str, &str)]) {
    for (text, expected) in cases {
        assert_eq!(
            engine.extract(text),
            Some((*expected).to_string()),
            "input: {text}"
        );
    }
}

fn assert_no_match(engine: &OtpExtractor, cases: &[&str]) {
    for text in cases {
        assert_eq!(engine.extract(text), None, "input: {text}");
    }
}

/// Test keyword-then-value templates ("OTP is 123456" and friends).
#[test]
fn test_keyword_value_templates() {
    let engine = OtpExtractor::with_defaults().unwrap();

    assert_extracts(
        &engine,
        &[
            ("Your OTP is 123456", "123456"),
            ("OTP: 4567", "4567"),
            ("code is 789012", "789012"),
            ("Your verification code is 789012", "789012"),
            ("bank send otp 123456", "123456"),
            ("use OTP 890123", "890123"),
            ("please use OTP-890227 to accept delivery", "890227"),
        ],
    );
}

/// Test value-then-keyword templates ("6767 is otp for 3838").
#[test]
fn test_value_before_keyword_templates() {
    let engine = OtpExtractor::with_defaults().unwrap();

    assert_extracts(
        &engine,
        &[
            // The value BEFORE "for" is the code, not the one after.
            ("6767 is otp for 3838", "6767"),
            ("2322 is otp for 2284", "2322"),
            ("123456 is your verification code", "123456"),
            ("654321 is your OTP for login", "654321"),
            ("987654 - Your verification code", "987654"),
            // Long codes are acceptable when an explicit template names them.
            ("2310990533 is otp for 6767", "2310990533"),
        ],
    );
}

/// Test templates where a phone number sits between keyword and code.
#[test]
fn test_phone_number_templates() {
    let engine = OtpExtractor::with_defaults().unwrap();

    assert_extracts(
        &engine,
        &[
            ("OTP for 9876543210 is 4279", "4279"),
            ("Your OTP for +919876543210 is 567890", "567890"),
        ],
    );
}

/// Test action-verb templates ("Use 456789 to verify").
#[test]
fn test_action_templates() {
    let engine = OtpExtractor::with_defaults().unwrap();

    assert_extracts(
        &engine,
        &[
            ("Use 456789 to verify", "456789"),
            ("Please use 567890 to complete", "567890"),
            ("Enter 678901 to proceed", "678901"),
            ("Type 789012 to confirm", "789012"),
            ("Use code 5432 to login", "5432"),
            ("Enter code 3344 to proceed", "3344"),
        ],
    );
}

/// Test codes wrapped in brackets or quotes.
#[test]
fn test_bracketed_and_quoted_codes() {
    let engine = OtpExtractor::with_defaults().unwrap();

    assert_extracts(
        &engine,
        &[
            ("Your OTP is [123456]", "123456"),
            ("Code: \"4567\"", "4567"),
            ("OTP: <8899>", "8899"),
        ],
    );
}

/// Test dash- and space-separated groups collapsing to one code.
#[test]
fn test_separator_groups_collapse() {
    let engine = OtpExtractor::with_defaults().unwrap();

    assert_extracts(
        &engine,
        &[
            ("Your code is 12-34-56", "123456"),
            ("OTP: 98 76 54", "987654"),
        ],
    );
}

/// Test real-world notification wording.
#[test]
fn test_real_world_messages() {
    let engine = OtpExtractor::with_defaults().unwrap();

    assert_extracts(
        &engine,
        &[
            ("Hi, 567890 is your OTP for PhonePe login", "567890"),
            ("Your Amazon OTP is 445566. Do not share", "445566"),
            ("Google verification code: 889900", "889900"),
            ("WhatsApp code: 665544", "665544"),
            ("Your Instagram code is 123890", "123890"),
            ("Your authentication code is 445566", "445566"),
            ("Authorization code: 778899", "778899"),
        ],
    );
}

/// Test that bare numbers are only codes under keyword context.
#[test]
fn test_bare_numbers_need_keyword_context() {
    let engine = OtpExtractor::with_defaults().unwrap();

    // Phone and tracking numbers without any OTP keyword stay untouched.
    assert_no_match(
        &engine,
        &[
            "Call me at 9876543210",
            "Order number 123456789012",
            "1234",
        ],
    );

    // The same kind of digit run is accepted once context appears.
    assert_extracts(&engine, &[("2fa: 445566", "445566")]);
}

/// Test that the fallback tier prefers 4-6 digit runs.
#[test]
fn test_fallback_prefers_common_lengths() {
    let engine = OtpExtractor::with_defaults().unwrap();

    // Both runs pass the filters; the shorter one is the more likely code
    // even though it appears later in the text.
    assert_eq!(
        engine.extract("Your codes: 87654321 then 4321"),
        Some("4321".to_string())
    );
}

/// Test that a structural match masks any lower-tier reading.
#[test]
fn test_structural_tier_masks_fallback_reading() {
    let engine = OtpExtractor::with_defaults().unwrap();
    let text = "Your OTP is 887766, order 12345678";

    // The structural template decides; the fallback reading is never consulted.
    assert_eq!(engine.extract(text), Some("887766".to_string()));

    // The diagnostic still surfaces the masked reading.
    assert_eq!(engine.extract_all_candidates(text), ["887766", "12345678"]);
}

/// Test that pattern table order outranks text order within a tier.
#[test]
fn test_table_order_beats_text_order() {
    let engine = OtpExtractor::with_defaults().unwrap();

    // The action template matches "111222" earlier in the text, but the
    // keyword-value template is declared first and wins the tier.
    assert_eq!(
        engine.extract("use 111222 to proceed, OTP: 4567"),
        Some("4567".to_string())
    );
}

/// Test that ignore rules drop candidates in every tier.
#[test]
fn test_ignore_rules_run_before_selection() {
    let engine = OtpExtractor::with_defaults().unwrap();

    assert_no_match(
        &engine,
        &[
            // Uniform runs longer than four characters.
            "Your OTP is 111111",
            "PIN: 11111",
            // Calendar years.
            "Use code 2024 to verify",
            "Your OTP is 1999",
        ],
    );

    // Boundary values stay accepted.
    assert_extracts(
        &engine,
        &[
            ("Your OTP is 1111", "1111"),
            ("Use code 1899 to verify", "1899"),
            ("code is 2100", "2100"),
        ],
    );
}

/// Test inputs with no extractable digit run at all.
#[test]
fn test_no_match_when_no_candidate_run_exists() {
    let engine = OtpExtractor::with_defaults().unwrap();

    assert_no_match(
        &engine,
        &[
            "",
            "   ",
            "Hello, how are you?",
            // A 14-digit run has no word boundary to split on.
            "Your OTP is 12345678901234",
            // Three digits is below every tier's floor.
            "code 123",
        ],
    );
}

/// Test that adversarial input finds no candidate instead of failing.
#[test]
fn test_adversarial_inputs_find_no_candidate() {
    let engine = OtpExtractor::with_defaults().unwrap();

    let long = "lorem ipsum ".repeat(5000);
    assert_eq!(engine.extract(&long), None);

    let long_with_code = format!("{} your code is 445566", "x".repeat(100_000));
    assert_eq!(engine.extract(&long_with_code), Some("445566".to_string()));

    // Repeated separators never form a 2-4 digit group.
    assert_eq!(engine.extract("code 1-2-3-4-5-6"), None);

    // Non-Latin digits are not candidates; the keyword gate still works on
    // mixed-script text, so the ASCII run is picked up by the fallback.
    assert_eq!(engine.extract("Ваш код подтверждения: ١٢٣٤٥٦"), None);
    assert_eq!(engine.extract("これはOTPです 4567"), Some("4567".to_string()));
}

/// Test extraction from assembled notification fields.
#[test]
fn test_message_text_flow() {
    let engine = OtpExtractor::with_defaults().unwrap();

    let message = MessageText::new()
        .with_title("Amazon")
        .with_body("Your OTP is 445566. Do not share")
        .with_summary_text("Do not share");
    assert_eq!(
        engine.extract_from_message(&message),
        Some("445566".to_string())
    );

    // A code in a secondary field is still found.
    let message = MessageText::new()
        .with_title("Bank alert")
        .with_subtext("OTP: 4567");
    assert_eq!(
        engine.extract_from_message(&message),
        Some("4567".to_string())
    );

    assert_eq!(engine.extract_from_message(&MessageText::default()), None);
}

/// Test the all-candidates diagnostic against the primary path.
#[test]
fn test_extract_all_candidates_diagnostic() {
    let engine = OtpExtractor::with_defaults().unwrap();

    // Every tier's surviving values, first-seen order, duplicates collapsed.
    assert_eq!(
        engine.extract_all_candidates("Your OTP is 123456 or call 555-1234"),
        ["123456", "5551234", "1234"]
    );
    assert_eq!(
        engine.extract_all_candidates("code 4567 and code 4567"),
        ["4567"]
    );

    // The diagnostic ignores the keyword gate that blocks the primary path.
    assert_eq!(engine.extract("hello 4321 world"), None);
    assert_eq!(engine.extract_all_candidates("hello 4321 world"), ["4321"]);
}

/// Test custom pattern tables and keyword vocabularies.
#[test]
fn test_custom_tables() {
    let mut config = EngineConfig::default();
    config.patterns.push(PatternDef {
        name: "ticket_code".to_string(),
        tier: Tier::Structural,
        pattern: r"(?i)\bticket\s+([A-Z0-9]{6})\b".to_string(),
        capture: 1,
    });
    config.keywords.push("token".to_string());

    let engine = OtpExtractor::new(config).unwrap();

    // Alphanumeric captures pass through the cleaner untouched.
    assert_eq!(
        engine.extract("your ticket A1B2C3 is ready"),
        Some("A1B2C3".to_string())
    );

    // The custom keyword unlocks the fallback tier.
    assert_eq!(
        engine.extract("Your token: 445566"),
        Some("445566".to_string())
    );

    // Without the custom vocabulary the same text has no context.
    let stock = OtpExtractor::with_defaults().unwrap();
    assert_eq!(stock.extract("Your token: 445566"), None);
}

/// Test cleaning through the public surface.
#[test]
fn test_cleaning_is_idempotent() {
    assert_eq!(clean_candidate("12-34-56"), "123456");
    assert_eq!(clean_candidate(&clean_candidate("12-34-56")), "123456");
    assert_eq!(clean_candidate("A1B2C3"), "A1B2C3");
}

/// Test configuration round-trips and serde defaults.
#[test]
fn test_config_round_trip() {
    let config = EngineConfig::default();

    let json = serde_json::to_string(&config).unwrap();
    let restored: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.patterns.len(), config.patterns.len());
    assert_eq!(restored.keywords, config.keywords);

    let engine = OtpExtractor::new(restored).unwrap();
    assert_eq!(
        engine.extract("Your OTP is 123456"),
        Some("123456".to_string())
    );

    // An empty document falls back to the default tables.
    let partial: EngineConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(partial.patterns.len(), default_patterns().len());
    assert_eq!(partial.keywords, default_keywords());
}

/// Test the caller-side dedup guard around the extractor.
#[test]
fn test_recent_messages_guard() {
    let engine = OtpExtractor::with_defaults().unwrap();
    let mut recent = RecentMessages::new(16);
    let mut delivered = Vec::new();

    let inbound = [
        ("bank", "Your OTP is 123456"),
        ("bank", "Your OTP is 123456"), // redelivered notification
        ("mail", "code is 789012"),
    ];

    for (source, text) in inbound {
        if recent.insert(content_key(source, text)) {
            if let Some(code) = engine.extract(text) {
                delivered.push(code);
            }
        }
    }

    assert_eq!(delivered, ["123456", "789012"]);
}
