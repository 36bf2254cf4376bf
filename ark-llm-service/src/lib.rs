//! Thin client for the Ark (Doubao) chat-completion API.
//!
//! The crate owns two things:
//!
//! - [`ArkConfig`] — credentials and endpoint, loaded once from a `.env`
//!   file or the process environment. Loading returns `Result`; there is no
//!   global state and no import-time failure mode.
//! - [`ArkChatService`] — one preconfigured `reqwest::Client` exposing a
//!   single-turn [`ArkChatService::ask_once`]. Transport and HTTP failures
//!   surface as errors; a structurally unexpected response body is recovered
//!   locally (warning log + empty string) so one bad reply cannot crash a
//!   calling workflow.
//!
//! Errors are normalized via unified error types in `error_handler`.

pub mod config;
pub mod error_handler;
pub mod services;

pub use config::ark_config::ArkConfig;
pub use error_handler::{ArkLlmError, ConfigError, ProviderError};
pub use services::ark_chat_service::ArkChatService;
