//! Transcript redaction for diagnostics.
//!
//! Raw request/response transcripts carry PANs, stored-card tokens and
//! authorization codes; callers run them through [`scrub`] before persisting
//! or logging. Replacement keeps the surrounding XML structure intact.

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::FILTERED_PLACEHOLDER;

/// Elements whose text content is sensitive, matched case-insensitively.
const SENSITIVE_ELEMENTS: &[&str] = &[
    "CardNumber",
    "DS_TOKEN_USER",
    "DS_MERCHANT_JETTOKEN",
    "DS_MERCHANT_AUTHCODE",
    "DS_MERCHANT_PAN",
    "DS_MERCHANT_CVV2",
];

static BASIC_AUTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Authorization: Basic )\w+").expect("static scrub pattern")
});

static ELEMENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SENSITIVE_ELEMENTS
        .iter()
        .map(|name| {
            Regex::new(&format!(r"(?i)(<{name}>)[^<]+(<)")).expect("static scrub pattern")
        })
        .collect()
});

/// Replaces sensitive values in a transcript with `[FILTERED]`.
pub fn scrub(transcript: &str) -> String {
    let mut scrubbed = BASIC_AUTH_PATTERN
        .replace_all(transcript, format!("${{1}}{FILTERED_PLACEHOLDER}"))
        .into_owned();
    for pattern in ELEMENT_PATTERNS.iter() {
        scrubbed = pattern
            .replace_all(&scrubbed, format!("${{1}}{FILTERED_PLACEHOLDER}${{2}}"))
            .into_owned();
    }
    scrubbed
}
