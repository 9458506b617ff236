//! Google Gemini provider implementation

use crate::bridge::{AIProvider, AiConfig};
use crate::error::AiError;
use crate::prompt::file_summary_prompt;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const PROVIDER: &str = "Gemini";

/// Environment variables consulted, in order, when no key is configured.
pub const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "VITE_GEMINI_API_KEY"];

pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

impl GeminiProvider {
    pub fn new(config: &AiConfig) -> Result<Self, AiError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| API_KEY_VARS.iter().find_map(|var| std::env::var(var).ok()))
            .filter(|key| !key.trim().is_empty());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| AiError::Http {
                provider: PROVIDER.to_string(),
                source,
            })?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().map(|p| p.text).collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

#[async_trait::async_trait]
impl AIProvider for GeminiProvider {
    async fn summarize_file(&self, file_name: &str, code: &str) -> Result<String, AiError> {
        let prompt = file_summary_prompt(file_name, code);
        self.complete(&prompt).await
    }

    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| AiError::MissingApiKey {
            provider: PROVIDER.to_string(),
        })?;

        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!("Sending {} chars to {} ({})", prompt.len(), PROVIDER, self.model);

        let http_error = |source: reqwest::Error| AiError::Http {
            provider: PROVIDER.to_string(),
            source,
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await.map_err(http_error)?;
        parsed.text().ok_or_else(|| AiError::EmptyResponse {
            provider: PROVIDER.to_string(),
        })
    }

    fn name(&self) -> &str {
        PROVIDER
    }
}
