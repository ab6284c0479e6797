// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Regex-first extraction of payment/identity artifacts from free text.
//!
//! Extraction is a pure, total function: any input string yields a
//! well-formed [`ExtractedIntel`], empty lists on no matches. Confidence
//! values are static per-pattern constants reflecting each pattern's
//! false-positive rate, assigned once at extraction time.

use std::sync::LazyLock;

use regex::Regex;

use lurebot_core::{ExtractedIntel, IntelItem};

/// Bank-account-like digit runs. High confidence, but OTPs and order
/// numbers land here too.
static ACCOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{8,18}\b").expect("account regex"));

/// IFSC-style routing codes: four letters, a literal zero, six alphanumerics.
static IFSC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[A-Z]{4}0[A-Z0-9]{6}\b").expect("ifsc regex"));

/// UPI-style handles: `local@domain` with a local part of at least two chars.
static UPI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9.\-_]{2,}@\w+\b").expect("upi regex"));

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://[^\s]+").expect("url regex"));

/// Currency-prefixed amounts. Low confidence: matches order totals and
/// phone fragments as readily as demanded payments.
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:inr|rs\.?|rupees|usd|\$)\s?\d{2,7}\b").expect("amount regex")
});

const ACCOUNT_CONFIDENCE: f64 = 0.78;
const UPI_CONFIDENCE: f64 = 0.8;
const URL_CONFIDENCE: f64 = 0.75;
const AMOUNT_CONFIDENCE: f64 = 0.4;

/// Scan `text` for payment/identity artifacts.
///
/// Bank accounts are cross-linked with routing codes found in the same
/// text: the i-th account receives the i-th code, and accounts beyond the
/// number of codes all receive the last one. Best-effort pairing, not a
/// guaranteed association.
pub fn extract_intel(text: &str) -> ExtractedIntel {
    let mut bank_accounts: Vec<IntelItem> = ACCOUNT_RE
        .find_iter(text)
        .map(|m| IntelItem::new(m.as_str(), ACCOUNT_CONFIDENCE))
        .collect();

    let upi_ids: Vec<IntelItem> = UPI_RE
        .find_iter(text)
        .map(|m| IntelItem::new(m.as_str().to_lowercase(), UPI_CONFIDENCE))
        .collect();

    let urls: Vec<IntelItem> = URL_RE
        .find_iter(text)
        .map(|m| IntelItem::new(clean_url(m.as_str()), URL_CONFIDENCE))
        .collect();

    let amounts: Vec<IntelItem> = AMOUNT_RE
        .find_iter(text)
        .map(|m| IntelItem::new(m.as_str(), AMOUNT_CONFIDENCE))
        .collect();

    let ifsc_codes: Vec<String> = IFSC_RE
        .find_iter(text)
        .map(|m| m.as_str().to_uppercase())
        .collect();

    if !bank_accounts.is_empty() && !ifsc_codes.is_empty() {
        for (i, acct) in bank_accounts.iter_mut().enumerate() {
            acct.ifsc = Some(ifsc_codes[i.min(ifsc_codes.len() - 1)].clone());
        }
    }

    ExtractedIntel {
        bank_accounts,
        upi_ids,
        urls,
        amounts,
    }
}

/// Strip trailing punctuation/brackets that sentence context glues onto URLs.
fn clean_url(url: &str) -> String {
    url.trim_end_matches(['.', ',', ')', ';', ']']).to_string()
}
