//! Ark credentials and endpoint config, loaded strictly once by the caller.
//!
//! Two constructors cover the two startup shapes:
//!
//! - [`ArkConfig::from_env_file`] — read a `.env`-style file directly.
//!   A missing file and a present-but-keyless file are distinct fatal
//!   errors, surfaced as `Result` values rather than a crash.
//! - [`ArkConfig::from_env`] — read the process environment (the usual path
//!   after `dotenvy::dotenv()` in a binary).
//!
//! # Environment variables
//!
//! - `ARK_API_KEY`       = API key (mandatory)
//! - `ARK_BASE_URL`      = endpoint base (optional, provider default)
//! - `ARK_MODEL`         = model id (optional)
//! - `ARK_TIMEOUT_SECS`  = request timeout in seconds (optional, u64)

use std::collections::HashMap;
use std::path::Path;

use crate::error_handler::{ArkLlmError, ConfigError};

/// Provider's standard endpoint, used when `ARK_BASE_URL` is absent.
pub const DEFAULT_BASE_URL: &str = "https://ark.cn-beijing.volces.com/api/v3";

/// Default chat model when `ARK_MODEL` is absent.
pub const DEFAULT_MODEL: &str = "doubao-1-5-pro-32k-250115";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Immutable credentials + endpoint bundle for [`ArkChatService`].
///
/// Loaded once at process start and passed by value into the client
/// constructor; nothing here mutates afterwards.
///
/// [`ArkChatService`]: crate::services::ark_chat_service::ArkChatService
#[derive(Debug, Clone)]
pub struct ArkConfig {
    /// API key sent as a bearer token (mandatory).
    pub api_key: String,

    /// Endpoint base URL, e.g. `https://ark.cn-beijing.volces.com/api/v3`.
    pub base_url: String,

    /// Model identifier string.
    pub model: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ArkConfig {
    /// Reads the config from a `.env`-style file at `path`.
    ///
    /// # Errors
    /// - [`ConfigError::EnvFileNotFound`] if the file does not exist
    /// - [`ConfigError::EnvFileRead`] if it cannot be read or parsed
    /// - [`ConfigError::MissingVar`] if `ARK_API_KEY` is absent or empty
    /// - [`ConfigError::InvalidNumber`] if `ARK_TIMEOUT_SECS` is not a u64
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ArkLlmError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::EnvFileNotFound(path.to_path_buf()).into());
        }

        let mut vars = HashMap::new();
        let iter = dotenvy::from_path_iter(path)
            .map_err(|e| ConfigError::EnvFileRead(e.to_string()))?;
        for item in iter {
            let (key, value) = item.map_err(|e| ConfigError::EnvFileRead(e.to_string()))?;
            vars.insert(key, value);
        }

        Self::from_lookup(|name| vars.get(name).cloned())
    }

    /// Reads the config from the process environment.
    ///
    /// # Errors
    /// Same contract as [`ArkConfig::from_env_file`], minus the file cases.
    pub fn from_env() -> Result<Self, ArkLlmError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ArkLlmError> {
        let api_key = lookup("ARK_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar("ARK_API_KEY"))?;

        let base_url = lookup("ARK_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let model = lookup("ARK_MODEL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_secs = match lookup("ARK_TIMEOUT_SECS") {
            Some(v) if !v.trim().is_empty() => {
                v.trim().parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                    var: "ARK_TIMEOUT_SECS",
                    reason: "expected u64",
                })?
            }
            _ => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout_secs,
        })
    }
}
