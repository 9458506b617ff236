//! Summary generation with caching and a deterministic fallback

use crate::bridge::{AIProvider, Summary, SummaryOrigin};
use crate::cache::{compute_content_hash, CacheStats, SummaryCache};
use crate::fallback::basic_summary;
use crate::prompt::CONNECTION_TEST_PROMPT;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info, warn};

/// Front door for summaries: asks the provider once per file and never fails.
pub struct Summarizer {
    provider: Box<dyn AIProvider>,
    cache: RwLock<SummaryCache>,
    /// One lock per (file name, content hash); held while that file is summarized.
    in_flight: Mutex<HashMap<(String, u64), Arc<Mutex<()>>>>,
}

impl Summarizer {
    pub fn new(provider: Box<dyn AIProvider>) -> Self {
        Self {
            provider,
            cache: RwLock::new(SummaryCache::new()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Summarize a file, falling back to [`basic_summary`] if the provider fails.
    ///
    /// Results, fallbacks included, are cached by name and content.
    pub async fn generate_summary(&self, code: &str, file_name: &str) -> Summary {
        let gate = self.gate(file_name, code).await;
        let _guard = gate.lock().await;

        if let Some(cached) = self.cache.write().await.get(file_name, code) {
            return cached;
        }

        let summary = match self.provider.summarize_file(file_name, code).await {
            Ok(text) => {
                info!("{} summarized {}", self.provider.name(), file_name);
                Summary {
                    text,
                    origin: SummaryOrigin::Provider,
                }
            }
            Err(e) => {
                error!("Error generating summary for {}: {}", file_name, e);
                Summary {
                    text: basic_summary(code, file_name),
                    origin: SummaryOrigin::Fallback,
                }
            }
        };

        self.cache
            .write()
            .await
            .insert(file_name, code, summary.clone());
        summary
    }

    async fn gate(&self, file_name: &str, code: &str) -> Arc<Mutex<()>> {
        let key = (file_name.to_string(), compute_content_hash(code));
        let mut in_flight = self.in_flight.lock().await;
        Arc::clone(in_flight.entry(key).or_default())
    }

    /// True when the provider answers the connection test prompt with `OK`.
    pub async fn test_connection(&self) -> bool {
        match self.provider.complete(CONNECTION_TEST_PROMPT).await {
            Ok(reply) => reply.contains("OK"),
            Err(e) => {
                warn!("{} API not available: {}", self.provider.name(), e);
                false
            }
        }
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }
}
