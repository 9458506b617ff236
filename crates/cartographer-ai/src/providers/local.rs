//! Offline provider that answers with the templated summary

use crate::bridge::AIProvider;
use crate::error::AiError;
use crate::fallback::basic_summary;

pub struct LocalProvider;

impl LocalProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AIProvider for LocalProvider {
    async fn summarize_file(&self, file_name: &str, code: &str) -> Result<String, AiError> {
        Ok(basic_summary(code, file_name))
    }

    async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
        Err(AiError::Unsupported {
            provider: self.name().to_string(),
        })
    }

    fn name(&self) -> &str {
        "Local (Heuristic)"
    }
}
