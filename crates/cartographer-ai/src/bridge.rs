//! Provider abstraction and configuration for file summaries

use crate::error::AiError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROVIDER: &str = "gemini";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// AI settings, read from the `[ai]` table of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// `gemini` or `local`.
    pub provider: String,
    pub model: String,
    /// Falls back to `GEMINI_API_KEY` when unset.
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 60,
        }
    }
}

/// A generative-text backend able to describe a source file.
#[async_trait::async_trait]
pub trait AIProvider: Send + Sync {
    /// Natural-language, bullet-point summary of one file.
    async fn summarize_file(&self, file_name: &str, code: &str) -> Result<String, AiError>;

    /// Send a raw prompt and return the model's text.
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;

    /// Get provider name
    fn name(&self) -> &str;
}

/// Where a summary's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOrigin {
    /// Text produced by the configured provider.
    Provider,
    /// Provider failed; text is the templated summary.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
    pub origin: SummaryOrigin,
}
