//! Sanitization pipeline for free-form requirement text.
//!
//! Two stages, composed by [`preprocess`]:
//!
//! 1. [`clean_text`] — strips HTML markup (script/style bodies included),
//!    removes URL tokens, and normalizes whitespace.
//! 2. [`anonymize`] — replaces PII substrings (emails, phone numbers,
//!    national id numbers, bank card numbers) with fixed placeholder tokens.
//!
//! The order is fixed: markup and URLs are removed first so PII embedded in
//! an attribute cannot survive tag stripping, and whitespace collapsing
//! happens before any pattern that spans a space. All functions are pure and
//! total over arbitrary input.

mod anonymize;
mod clean;

pub use anonymize::{PiiRules, anonymize};
pub use clean::clean_text;

use tracing::debug;

/// Runs the full sanitization pipeline: [`clean_text`] then [`anonymize`].
///
/// The result contains no HTML tags, no bare URLs, no whitespace runs, and
/// no raw PII covered by the default [`PiiRules`] table. Re-running the
/// pipeline on its own output is a no-op: the placeholder tokens are plain
/// bracketed text and survive [`clean_text`] untouched.
pub fn preprocess(input: &str) -> String {
    let cleaned = clean_text(input);
    let sanitized = anonymize(&cleaned);
    debug!(
        raw_len = input.len(),
        sanitized_len = sanitized.len(),
        "requirement preprocessed"
    );
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup_and_redacts_id() {
        assert_eq!(
            preprocess("The ID: 110101198001011234. <b>Important!</b>"),
            "The ID: [ID]. Important!"
        );
    }

    #[test]
    fn redacts_card_and_phone_and_drops_url() {
        assert_eq!(
            preprocess("My card 6228000011112222, phone 13000001111, and site https://secret.com/."),
            "My card [BANKCARD], phone [PHONE], and site"
        );
    }

    #[test]
    fn mixed_phone_email_markup_and_url() {
        assert_eq!(
            preprocess("Call 13912345678, email user@corp.com, and check <p>this page: http://bug.com/.</p>"),
            "Call [PHONE], email [EMAIL], and check this page:"
        );
    }

    #[test]
    fn collapses_whitespace_only_input() {
        assert_eq!(preprocess("   Spaces   and   tabs\t\t\t"), "Spaces and tabs");
    }

    #[test]
    fn matches_stage_composition() {
        let input = "Ping <a href='https://x.io'>me</a> at support@taiga.io or 138-0000-1111.";
        assert_eq!(preprocess(input), anonymize(&clean_text(input)));
    }

    #[test]
    fn idempotent_on_sanitized_text() {
        let inputs = [
            "Plain requirement with no markup.",
            "Already redacted [EMAIL] and [PHONE] stay put.",
            "The ID: [ID]. Important!",
        ];
        for input in inputs {
            let once = preprocess(input);
            assert_eq!(preprocess(&once), once);
        }
    }
}
