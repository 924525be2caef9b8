// maskat-core/tests/masker_tests.rs
//! End-to-end behaviour of the public masking API.

use anyhow::Result;
use test_log::test; // Routes `log` output from the engine through env_logger.

use maskat_core::{derive_token, find_matches, is_token, mask_string, Masker, Replacement, TOKEN_LEN};

#[test]
fn test_single_address_scenario() {
    let mut masker = Masker::new();
    let result = masker.mask("Contact us at test@example.com");

    assert!(!result.contains("test@example.com"));
    assert!(result.contains("973dfe463ec857"));
    assert!(result.starts_with("Contact us at "));
    assert_eq!(masker.replacements().len(), 1);
}

#[test]
fn test_standard_addresses() {
    let cases = [
        ("single email", "Contact us at test@example.com", 1),
        ("multiple emails", "From user1@test.com to user2@test.org", 2),
        ("no emails", "No email addresses here", 0),
        ("email with subdomain", "Send to admin@mail.company.co.jp", 1),
        ("email with plus sign", "Tagged email user+tag@example.com", 1),
        ("email with numbers", "user123@test456.com", 1),
    ];

    for (name, input, expected) in cases {
        let mut masker = Masker::new();
        let result = masker.mask(input);
        let replacements = masker.replacements();

        assert_eq!(replacements.len(), expected, "case '{}'", name);
        for r in replacements {
            assert!(!result.contains(&r.original), "case '{}': original leaked", name);
            assert!(result.contains(&r.masked), "case '{}': token missing", name);
        }
        if expected == 0 {
            assert_eq!(result, input, "case '{}': text changed", name);
        }
    }
}

#[test]
fn test_rfc_violating_addresses() {
    let cases = [
        ("consecutive dots", "RFC violation: user..name@example.com", "user..name@example.com"),
        ("leading dot", ".user@example.com", ".user@example.com"),
        ("trailing dot", "user.@example.com", "user.@example.com"),
    ];

    for (name, input, original) in cases {
        let mut masker = Masker::new();
        let result = masker.mask(input);
        assert_eq!(
            masker.replacements(),
            &[Replacement::new(original, derive_token(original.as_bytes()))],
            "case '{}'",
            name
        );
        assert!(!result.contains('@'), "case '{}': {}", name, result);
    }
}

#[test]
fn test_invalid_addresses_produce_no_matches() {
    for input in ["plainaddress", "@missinglocal.com", "missing@", "missing.domain@"] {
        let mut masker = Masker::new();
        let result = masker.mask(input);
        assert!(masker.replacements().is_empty(), "{:?} should not match", input);
        assert_eq!(result, input);
        assert!(find_matches(input).is_empty());
    }
}

#[test]
fn test_determinism_across_instances() {
    let mut first = Masker::new();
    let mut second = Masker::new();
    let input = "ping alice@example.org and bob@example.net";
    assert_eq!(first.mask(input), second.mask(input));
    assert_eq!(first.replacements(), second.replacements());
}

#[test]
fn test_distinct_originals_get_distinct_tokens() {
    let mut masker = Masker::new();
    masker.mask("a@example.com b@example.com A@example.com a@example.co");
    let tokens: std::collections::HashSet<&str> =
        masker.replacements().iter().map(|r| r.masked.as_str()).collect();
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_ledger_growth_matches_match_count() {
    let mut masker = Masker::new();
    let lines = [
        "first@example.com",
        "none here",
        "x@y.io, z@w.io and q@r.io",
        "",
    ];
    for line in lines {
        let before = masker.len();
        masker.mask(line);
        assert_eq!(masker.len() - before, find_matches(line).len());
    }
    assert_eq!(masker.len(), 4);
}

#[test]
fn test_reset_then_get_is_empty() {
    let mut masker = Masker::new();
    masker.mask("test@example.com");
    masker.reset();
    assert!(masker.replacements().is_empty());
    masker.reset();
    assert!(masker.replacements().is_empty());
}

#[test]
fn test_large_line_is_not_truncated() {
    let padding = "x ".repeat(600 * 1024);
    let input = format!("{}test@example.com {}", padding, padding);
    assert!(input.len() > 1024 * 1024);

    let mut masker = Masker::new();
    let result = masker.mask(&input);

    assert_eq!(result.len(), input.len() - "test@example.com".len() + TOKEN_LEN);
    assert_eq!(result, format!("{}973dfe463ec857 {}", padding, padding));
    assert_eq!(masker.len(), 1);
}

#[test]
fn test_tokens_have_token_shape() {
    let (_, replacements) = mask_string("a@b.c, first.last@sub.example.co.uk, {x}@y.org");
    assert_eq!(replacements.len(), 3);
    for r in &replacements {
        assert!(is_token(&r.masked), "{}", r.masked);
    }
}

#[test]
fn test_replacement_serializes_as_object() -> Result<()> {
    let (_, replacements) = mask_string("test@example.com");
    let json = serde_json::to_string(&replacements)?;
    assert_eq!(json, r#"[{"original":"test@example.com","masked":"973dfe463ec857"}]"#);
    Ok(())
}
