//! Ark (Doubao) chat service for single-turn text generation.
//!
//! Minimal, non-streaming client around the OpenAI-compatible REST surface:
//! - POST {base_url}/chat/completions — chat completion
//!
//! Constructor validation:
//! - `cfg.base_url` must start with http:// or https://
//!
//! Response handling is deliberately fail-soft at the shape level: a reply
//! body without `choices[0].message.content` yields a warning and an empty
//! string, never an error. Status and transport failures stay errors.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::{
    config::ark_config::ArkConfig,
    error_handler::{ArkLlmError, ProviderError, make_snippet},
};

/// Thin client for the Ark chat-completion API.
///
/// Constructed once from a complete [`ArkConfig`]; internally keeps a
/// preconfigured `reqwest::Client` (auth header + timeout). The value is
/// cheap to share — wrap it in `Arc` and pass clones to dependents.
#[derive(Debug)]
pub struct ArkChatService {
    client: reqwest::Client,
    cfg: ArkConfig,
    url_chat: String,
}

impl ArkChatService {
    /// Creates a new [`ArkChatService`] from the given config.
    ///
    /// # Errors
    /// - [`ArkLlmError::Provider`] with `InvalidEndpoint` if `cfg.base_url` is invalid
    /// - [`ArkLlmError::Provider`] with `Decode` if the API key cannot form a header
    /// - [`ArkLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: ArkConfig) -> Result<Self, ArkLlmError> {
        let base = cfg.base_url.trim();
        if base.is_empty() || !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ProviderError::InvalidEndpoint(cfg.base_url.clone()).into());
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key)).map_err(|e| {
                ProviderError::Decode(format!("invalid API key header: {e}"))
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()?;

        let url_chat = format!("{}/chat/completions", base.trim_end_matches('/'));

        info!(
            model = %cfg.model,
            endpoint = %cfg.base_url,
            timeout_secs = cfg.timeout_secs,
            "ArkChatService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// Performs a single-turn chat completion: one system message, one user
    /// message, plain-text reply.
    ///
    /// Returns the reply content on a well-formed response. A structurally
    /// unexpected body (missing `choices`, missing `message.content`, or not
    /// JSON at all) is logged as a warning and mapped to an empty string so
    /// that one bad reply does not abort the calling workflow.
    ///
    /// # Errors
    /// - [`ArkLlmError::Provider`] with `HttpStatus` for non-2xx responses
    /// - [`ArkLlmError::HttpTransport`] for client/network failures
    pub async fn ask_once(&self, query: &str, system: &str) -> Result<String, ArkLlmError> {
        let started = Instant::now();
        let body = ChatCompletionRequest::new(&self.cfg.model, query, system);

        debug!(
            model = %self.cfg.model,
            query_len = query.len(),
            "POST {}", self.url_chat
        );

        let resp = self.client.post(&self.url_chat).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_chat.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "Ark /chat/completions returned non-success status"
            );

            return Err(ProviderError::HttpStatus {
                status,
                url,
                snippet,
            }
            .into());
        }

        let out: Value = match resp.json().await {
            Ok(v) => v,
            Err(e) if e.is_decode() => {
                warn!(
                    error = %e,
                    model = %self.cfg.model,
                    latency_ms = started.elapsed().as_millis(),
                    "Ark API response was not JSON; treating as unexpected structure"
                );
                return Ok(String::new());
            }
            Err(e) => return Err(e.into()),
        };

        match reply_text(&out) {
            Some(content) => {
                info!(
                    model = %self.cfg.model,
                    latency_ms = started.elapsed().as_millis(),
                    "chat completion completed"
                );
                Ok(content)
            }
            None => {
                warn!(
                    model = %self.cfg.model,
                    latency_ms = started.elapsed().as_millis(),
                    "unexpected Ark API response structure; expected `choices[0].message.content`, returning empty reply"
                );
                Ok(String::new())
            }
        }
    }
}

/// Extracts `choices[0].message.content` from a chat-completion body.
///
/// Returns `None` for every structurally unexpected shape: missing or empty
/// `choices`, missing `message`, non-string or absent `content`.
fn reply_text(body: &Value) -> Option<String> {
    body.get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_owned)
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Minimal request body for `/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Builds a single-turn request: system message then user message.
    fn new(model: &'a str, query: &'a str, system: &'a str) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: query,
                },
            ],
        }
    }
}

/// Chat message for the Ark API.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    /// One of: "system" | "user" | "assistant".
    role: &'a str,
    content: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_response_yields_content() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": "Testing Response"}}]
        });
        assert_eq!(reply_text(&body).as_deref(), Some("Testing Response"));
    }

    #[test]
    fn missing_choices_is_unexpected() {
        assert_eq!(reply_text(&json!({"id": "resp-1"})), None);
    }

    #[test]
    fn empty_choices_is_unexpected() {
        assert_eq!(reply_text(&json!({"choices": []})), None);
    }

    #[test]
    fn message_without_content_is_unexpected() {
        let body = json!({"choices": [{"message": {"role": "assistant"}}]});
        assert_eq!(reply_text(&body), None);
    }

    #[test]
    fn non_string_content_is_unexpected() {
        let body = json!({"choices": [{"message": {"content": 42}}]});
        assert_eq!(reply_text(&body), None);
    }

    #[test]
    fn non_object_body_is_unexpected() {
        assert_eq!(reply_text(&json!("oops")), None);
    }

    #[test]
    fn request_serializes_both_roles_in_order() {
        let req = ChatCompletionRequest::new("doubao-lite-4k", "Q", "Prompt");
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["model"], "doubao-lite-4k");
        assert_eq!(v["messages"][0]["role"], "system");
        assert_eq!(v["messages"][0]["content"], "Prompt");
        assert_eq!(v["messages"][1]["role"], "user");
        assert_eq!(v["messages"][1]["content"], "Q");
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let cfg = ArkConfig {
            api_key: "sk-test".into(),
            base_url: "ark.example.com".into(),
            model: "doubao-lite-4k".into(),
            timeout_secs: 5,
        };
        let err = ArkChatService::new(cfg).unwrap_err();
        assert!(err.to_string().contains("invalid endpoint"), "got: {err}");
    }
}
