//! Pattern-based PII redaction.
//!
//! Detection is an ordered table of `(pattern, placeholder)` rules applied
//! top to bottom over the text. The order is part of the contract: longer,
//! more specific digit patterns (national id, bank card) run before the
//! shorter phone patterns, and word boundaries keep one long digit run from
//! being partially consumed by a shorter rule.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Replacement token for detected email addresses.
pub const EMAIL_TOKEN: &str = "[EMAIL]";
/// Replacement token for detected phone numbers (all delimiter styles).
pub const PHONE_TOKEN: &str = "[PHONE]";
/// Replacement token for detected national id numbers.
pub const ID_TOKEN: &str = "[ID]";
/// Replacement token for detected bank card numbers.
pub const BANKCARD_TOKEN: &str = "[BANKCARD]";

/// Ordered redaction table.
///
/// The default table covers emails, 15/18-digit national ids, 16–19-digit
/// bank cards, and three phone shapes (contiguous 11-digit mobile,
/// hyphen-grouped, space-grouped). Callers with different overlap rules can
/// build their own table with [`PiiRules::new`]; rules always run in the
/// given order.
pub struct PiiRules {
    rules: Vec<(Regex, &'static str)>,
}

impl PiiRules {
    /// Builds a table from explicit `(pattern, placeholder)` pairs.
    pub fn new(rules: Vec<(Regex, &'static str)>) -> Self {
        Self { rules }
    }

    /// Applies every rule in order and returns the redacted text.
    ///
    /// Non-matching text is left untouched; the function is total over any
    /// string input.
    pub fn apply(&self, input: &str) -> String {
        let mut text = input.to_string();
        for (pattern, placeholder) in &self.rules {
            text = pattern.replace_all(&text, *placeholder).into_owned();
        }
        trace!(in_len = input.len(), out_len = text.len(), "pii rules applied");
        text
    }
}

impl Default for PiiRules {
    fn default() -> Self {
        Self::new(vec![
            (
                Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid regex"),
                EMAIL_TOKEN,
            ),
            // 18-digit id (last position may be a checksum X) or legacy 15-digit.
            // Must precede the bank card rule: an 18-digit run is an id, not a card.
            (
                Regex::new(r"\b(?:\d{17}[0-9Xx]|\d{15})\b").expect("valid regex"),
                ID_TOKEN,
            ),
            (Regex::new(r"\b\d{16,19}\b").expect("valid regex"), BANKCARD_TOKEN),
            // Phone shapes, longest first: contiguous 11-digit mobile,
            // hyphen-grouped, space-grouped.
            (Regex::new(r"\b1[3-9]\d{9}\b").expect("valid regex"), PHONE_TOKEN),
            (Regex::new(r"\b\d{3}-\d{4}-\d{4}\b").expect("valid regex"), PHONE_TOKEN),
            (Regex::new(r"\b\d{3} \d{4}\b").expect("valid regex"), PHONE_TOKEN),
        ])
    }
}

static DEFAULT_RULES: LazyLock<PiiRules> = LazyLock::new(PiiRules::default);

/// Redacts PII in `input` using the default [`PiiRules`] table.
pub fn anonymize(input: &str) -> String {
    DEFAULT_RULES.apply(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_email() {
        assert_eq!(
            anonymize("Please email me at support@taiga.io for details."),
            "Please email me at [EMAIL] for details."
        );
    }

    #[test]
    fn redacts_both_phone_shapes() {
        assert_eq!(
            anonymize("Call me at 138-0000-1111 or 555 1234."),
            "Call me at [PHONE] or [PHONE]."
        );
    }

    #[test]
    fn redacts_contiguous_mobile() {
        assert_eq!(anonymize("Reach me on 13912345678 today."), "Reach me on [PHONE] today.");
    }

    #[test]
    fn redacts_national_id() {
        assert_eq!(
            anonymize("User's ID is 330101198005012345, must be secured."),
            "User's ID is [ID], must be secured."
        );
    }

    #[test]
    fn redacts_bank_card() {
        assert_eq!(
            anonymize("My card 6228000011112222 should be safe."),
            "My card [BANKCARD] should be safe."
        );
    }

    #[test]
    fn eighteen_digits_are_id_not_card() {
        // Both the id and card ranges cover 18 digits; the id rule wins.
        assert_eq!(anonymize("110101198001011234"), "[ID]");
    }

    #[test]
    fn nineteen_digits_are_card() {
        assert_eq!(anonymize("6222000011112222333"), "[BANKCARD]");
    }

    #[test]
    fn clean_text_is_untouched() {
        assert_eq!(
            anonymize("This is a clean user requirement."),
            "This is a clean user requirement."
        );
    }

    #[test]
    fn custom_table_order_is_respected() {
        // A one-rule table that treats every long digit run as a card,
        // including the 18-digit runs the default table calls an id.
        let rules = PiiRules::new(vec![(
            Regex::new(r"\b\d{15,19}\b").unwrap(),
            BANKCARD_TOKEN,
        )]);
        assert_eq!(rules.apply("110101198001011234"), "[BANKCARD]");
    }
}
