// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Zero-cost heuristic scoring of conversation text.
//!
//! Accumulates fixed weights for keyword, phrase, and pattern signals.
//! No network, no latency; the score is deterministic over the input.

use std::sync::LazyLock;

use regex::Regex;

/// Fixed scam vocabulary. Each distinct hit adds [`KEYWORD_WEIGHT`] once,
/// and the keyword itself is recorded as a signal, in this order.
pub const SCAM_KEYWORDS: &[&str] = &[
    "otp",
    "kyc",
    "refund",
    "verification",
    "gift card",
    "fee",
    "processing charge",
    "wire",
    "bank transfer",
    "upi",
    "ifsc",
    "crypto",
    "wallet",
    "payment link",
    "secure link",
    "one-time password",
    "settlement",
    "compensation",
    "prize",
    "insurance",
];

/// Pressure phrases typical of social-engineering scripts.
pub const URGENCY_PHRASES: &[&str] = &[
    "immediately",
    "urgent",
    "right now",
    "asap",
    "today",
    "instantly",
];

/// Signals that point at payment/identity artifacts being in play.
/// Any of these firing escalates the phase hint straight to HARVEST.
pub const ACCOUNT_HINTS: &[&str] = &[
    "upi",
    "ifsc",
    "bank transfer",
    "account number",
    "iban",
    "routing",
    "swift",
];

const KEYWORD_WEIGHT: f64 = 0.08;
const URGENCY_WEIGHT: f64 = 0.05;
const LONG_DIGITS_WEIGHT: f64 = 0.08;
const CURRENCY_WEIGHT: f64 = 0.05;
const LINK_WEIGHT: f64 = 0.07;

/// Account/amount/OTP-like content shows up as long digit runs.
static LONG_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{6,}").expect("long digits regex"));

/// Currency tokens suggest payment context.
static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(inr|usd|rs\.?|rupees|dollars?)\b").expect("currency regex"));

/// Links hint at phishing.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://").expect("link regex"));

/// Score `text` (already expected to be the full conversation text) for
/// scam likelihood.
///
/// Returns the clamped score in [0, 1] and the fired signal names in
/// check order: keywords in declared list order, urgency phrases, then
/// `long_digits`, `currency`, `link` (each pattern at most once).
pub fn score_text(text: &str) -> (f64, Vec<String>) {
    let text_lower = text.to_lowercase();
    let mut score = 0.0;
    let mut signals = Vec::new();

    for kw in SCAM_KEYWORDS {
        if text_lower.contains(kw) {
            score += KEYWORD_WEIGHT;
            signals.push((*kw).to_string());
        }
    }

    for phrase in URGENCY_PHRASES {
        if text_lower.contains(phrase) {
            score += URGENCY_WEIGHT;
            signals.push((*phrase).to_string());
        }
    }

    if LONG_DIGITS_RE.is_match(&text_lower) {
        score += LONG_DIGITS_WEIGHT;
        signals.push("long_digits".to_string());
    }

    if CURRENCY_RE.is_match(&text_lower) {
        score += CURRENCY_WEIGHT;
        signals.push("currency".to_string());
    }

    if LINK_RE.is_match(&text_lower) {
        score += LINK_WEIGHT;
        signals.push("link".to_string());
    }

    (score.min(1.0), signals)
}

/// True when any fired signal belongs to the account-hint subset.
pub fn has_account_hint(signals: &[String]) -> bool {
    signals.iter().any(|s| ACCOUNT_HINTS.contains(&s.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_text_scores_zero() {
        let (score, signals) = score_text("see you at the park later");
        assert_eq!(score, 0.0);
        assert!(signals.is_empty());
    }

    #[test]
    fn each_keyword_counts_once() {
        let (score, signals) = score_text("otp otp otp");
        assert!((score - 0.08).abs() < 1e-9);
        assert_eq!(signals, vec!["otp"]);
    }

    #[test]
    fn signals_follow_check_order() {
        let (_, signals) =
            score_text("urgent: share the otp and upi now, send usd 500000 via https://x.test");
        // Keywords first in declared order, then urgency, then patterns.
        assert_eq!(
            signals,
            vec!["otp", "upi", "urgent", "long_digits", "currency", "link"]
        );
    }

    #[test]
    fn long_digit_run_counts_once() {
        let (score, signals) = score_text("1234567 and 7654321");
        assert!((score - 0.08).abs() < 1e-9);
        assert_eq!(signals, vec!["long_digits"]);
    }

    #[test]
    fn currency_and_link_patterns_fire() {
        let (score, signals) = score_text("pay 50 dollars at http://pay.test");
        assert!((score - 0.12).abs() < 1e-9);
        assert_eq!(signals, vec!["currency", "link"]);
    }

    #[test]
    fn score_is_clamped_to_one() {
        let everything = format!(
            "{} {} 123456789 inr https://x.test",
            SCAM_KEYWORDS.join(" "),
            URGENCY_PHRASES.join(" ")
        );
        let (score, signals) = score_text(&everything);
        assert_eq!(score, 1.0);
        assert_eq!(
            signals.len(),
            SCAM_KEYWORDS.len() + URGENCY_PHRASES.len() + 3
        );
    }

    #[test]
    fn account_hints_are_a_subset_of_interest() {
        assert!(has_account_hint(&["upi".to_string()]));
        assert!(has_account_hint(&["ifsc".to_string(), "otp".to_string()]));
        assert!(!has_account_hint(&["otp".to_string(), "link".to_string()]));
        assert!(!has_account_hint(&[]));
    }
}
