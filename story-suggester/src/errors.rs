//! Service-level error for story generation.
//!
//! Callers of the story service see exactly one error type; the low-level
//! client cause is wrapped, never propagated raw.

use ark_llm_service::ArkLlmError;
use thiserror::Error;

/// Root error for the story-suggestion service.
#[derive(Debug, Error)]
pub enum AiServiceError {
    /// The LLM client failed (transport, HTTP status, config).
    #[error("llm request failed: {0}")]
    Llm(#[from] ArkLlmError),

    /// The model returned nothing to parse (empty or fail-soft reply).
    #[error("model reply was empty")]
    EmptyReply,

    /// The model replied, but not with the expected story JSON.
    #[error("model reply was not a valid story: {0}")]
    InvalidReply(String),
}
