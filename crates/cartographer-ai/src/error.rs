//! Errors from AI providers

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("{provider} API key is not configured")]
    MissingApiKey { provider: String },

    #[error("request to {provider} failed: {source}")]
    Http {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API error ({status}): {body}")]
    Api {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("{provider} returned no text")]
    EmptyResponse { provider: String },

    #[error("{provider} does not support free-form prompts")]
    Unsupported { provider: String },
}
