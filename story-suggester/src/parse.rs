//! Parsing of the model reply into a [`StorySuggestion`].

use tracing::debug;

use crate::errors::AiServiceError;
use crate::story::StorySuggestion;

/// Parses a raw model reply as story JSON.
///
/// Providers sometimes wrap JSON with Markdown code fences; those are
/// trimmed first. An empty reply (including the client's fail-soft empty
/// string) maps to [`AiServiceError::EmptyReply`], anything unparseable to
/// [`AiServiceError::InvalidReply`].
pub fn parse_story_reply(raw: &str) -> Result<StorySuggestion, AiServiceError> {
    let clean = cleanup_json_like(raw);
    if clean.is_empty() {
        return Err(AiServiceError::EmptyReply);
    }

    debug!(raw_len = raw.len(), clean_len = clean.len(), "parsing story reply");
    serde_json::from_str(&clean).map_err(|e| {
        AiServiceError::InvalidReply(format!(
            "{e}; expected keys suggestion_subject/suggestion_description/suggestion_tags"
        ))
    })
}

/// Trim common code-fence wrappers around JSON.
fn cleanup_json_like(s: &str) -> String {
    let mut t = s.trim().to_string();
    if t.starts_with("```") {
        t = t
            .trim_start_matches("```json")
            .trim_start_matches("```")
            .to_string();
        if let Some(pos) = t.rfind("```") {
            t.truncate(pos);
        }
    }
    t.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{
        "suggestion_subject": "Password reset by email",
        "suggestion_description": "As a customer, I want to reset my password using my email address, So that I can regain access on my own.",
        "suggestion_tags": ["account", "security", "email"]
    }"#;

    #[test]
    fn parses_plain_json() {
        let story = parse_story_reply(REPLY).unwrap();
        assert_eq!(story.suggestion_subject, "Password reset by email");
        assert_eq!(story.suggestion_tags.len(), 3);
        assert!(story.looks_complete());
    }

    #[test]
    fn parses_fenced_json() {
        let fenced = format!("```json\n{REPLY}\n```");
        let story = parse_story_reply(&fenced).unwrap();
        assert!(story.looks_complete());
    }

    #[test]
    fn empty_reply_is_distinguished() {
        assert!(matches!(parse_story_reply(""), Err(AiServiceError::EmptyReply)));
        assert!(matches!(parse_story_reply("   \n"), Err(AiServiceError::EmptyReply)));
    }

    #[test]
    fn prose_reply_is_invalid() {
        let err = parse_story_reply("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, AiServiceError::InvalidReply(_)));
    }

    #[test]
    fn wrong_shape_is_invalid() {
        let err = parse_story_reply(r#"{"subject": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("suggestion_subject"));
    }
}
