//! Story suggestion schema shared with the host application.

use serde::{Deserialize, Serialize};

/// One generated user story, in the shape the host application consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorySuggestion {
    /// Short subject line for the story.
    pub suggestion_subject: String,
    /// Narrative in "As a … I want … So that …" form.
    pub suggestion_description: String,
    /// 3–5 short tags (soft contract, see [`StorySuggestion::looks_complete`]).
    pub suggestion_tags: Vec<String>,
}

impl StorySuggestion {
    /// Reports whether the soft output contract holds: a non-empty subject,
    /// the three narrative markers (case-insensitive), and 3–5 tags.
    ///
    /// The pipeline never enforces this — callers decide what to do with an
    /// incomplete story; the service only logs a warning.
    pub fn looks_complete(&self) -> bool {
        let description = self.suggestion_description.to_lowercase();
        !self.suggestion_subject.trim().is_empty()
            && description.contains("as a")
            && description.contains("i want")
            && description.contains("so that")
            && (3..=5).contains(&self.suggestion_tags.len())
    }
}

/// Fixed stub story substituted when generation fails under the
/// default-story fallback policy.
pub fn default_story() -> StorySuggestion {
    StorySuggestion {
        suggestion_subject: "Refine this requirement manually".to_string(),
        suggestion_description: "As a product owner, I want the original requirement to be \
                                 refined by the team, So that the work can still be planned \
                                 when automatic suggestion is unavailable."
            .to_string(),
        suggestion_tags: vec![
            "backlog".to_string(),
            "refinement".to_string(),
            "manual".to_string(),
        ],
    }
}
