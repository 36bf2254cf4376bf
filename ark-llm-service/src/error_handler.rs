//! Unified error handling for `ark-llm-service`.
//!
//! This module exposes a single top-level error type [`ArkLlmError`] for the
//! whole crate, and groups domain-specific errors in nested enums
//! ([`ConfigError`], [`ProviderError`]).
//!
//! All messages include the suffix `[Ark LLM Service]` to simplify
//! attribution in logs.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, ArkLlmError>;

/// Top-level error for the `ark-llm-service` crate.
///
/// Variants wrap domain-specific enums (config/provider) plus the underlying
/// HTTP transport error. Prefer adding new sub-enums for distinct domains
/// instead of growing this type indefinitely.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ArkLlmError {
    /// Configuration/validation errors (startup/readiness).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Errors talking to the Ark endpoint (status, decoding).
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Underlying HTTP transport error (e.g., `reqwest::Error`).
    #[error("[Ark LLM Service] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),
}

/// Error enum for env/config-driven setup.
///
/// Keep this focused: only errors that realistically happen at config
/// load/validation time.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured `.env` file does not exist.
    #[error("[Ark LLM Service] env file not found: {}", .0.display())]
    EnvFileNotFound(PathBuf),

    /// The `.env` file exists but could not be read or parsed.
    #[error("[Ark LLM Service] failed to read env file: {0}")]
    EnvFileRead(String),

    /// Required variable is missing or empty.
    #[error("[Ark LLM Service] {0} must be set")]
    MissingVar(&'static str),

    /// A number failed to parse (like timeouts or token limits).
    #[error("[Ark LLM Service] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `ARK_TIMEOUT_SECS`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u64`).
        reason: &'static str,
    },
}

/// Error enum for the provider call itself.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The endpoint is empty or does not start with http/https.
    #[error("[Ark LLM Service] invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Upstream returned a non-successful HTTP status.
    #[error("[Ark LLM Service] HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// Request payload could not be built as expected.
    #[error("[Ark LLM Service] decode error: {0}")]
    Decode(String),
}

/// Trims a response body down to a short, single-purpose log snippet.
pub fn make_snippet(body: &str) -> String {
    const MAX: usize = 240;
    let trimmed = body.trim();
    if trimmed.len() <= MAX {
        return trimmed.to_string();
    }
    let mut end = MAX;
    while end > 0 && !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &trimmed[..end])
}
