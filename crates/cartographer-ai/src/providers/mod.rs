//! AI provider implementations

pub mod gemini;
pub mod local;

use crate::bridge::{AIProvider, AiConfig};
use anyhow::Result;

/// Factory function to create AI providers
pub fn create_provider(config: &AiConfig) -> Result<Box<dyn AIProvider>> {
    match config.provider.as_str() {
        "gemini" => Ok(Box::new(gemini::GeminiProvider::new(config)?)),
        "local" => Ok(Box::new(local::LocalProvider::new())),
        other => anyhow::bail!("Unknown AI provider: {}", other),
    }
}
