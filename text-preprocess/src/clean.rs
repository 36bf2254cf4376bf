//! Markup and URL stripping with whitespace normalization.

use std::sync::LazyLock;

use regex::Regex;

/// `<script>`/`<style>` elements are removed together with their bodies.
static RE_SCRIPT_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style)\b[^>]*>.*?</(?:script|style)>").expect("valid regex")
});

/// A URL token runs from the scheme to the next whitespace. It may swallow
/// adjacent markup (`https://a.com'>Link`); the tag pass below cleans up
/// whatever half-open tag is left behind.
static RE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid regex"));

/// Any remaining tag, inner text preserved.
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Strips HTML markup and URL tokens from `input` and normalizes whitespace.
///
/// Pass order matters: script/style bodies go first (their content must not
/// leak as text), then URL tokens, then remaining tags, then every
/// whitespace run collapses to a single space and the ends are trimmed.
/// Never fails; any string input yields a plain-text string.
pub fn clean_text(input: &str) -> String {
    let text = RE_SCRIPT_STYLE.replace_all(input, "");
    let text = RE_URL.replace_all(&text, "");
    let text = RE_TAG.replace_all(&text, "");
    let text = RE_WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}
