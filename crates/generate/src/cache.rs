use std::sync::Arc;

use anyhow::Result;
use dashmap::DashMap;
use sha2::{Digest, Sha256};

use crate::TextGenerator;

/// Generation responses keyed by SHA-256 of the prompt.
pub struct ResponseCache {
    responses: Arc<DashMap<String, String>>,
    max_entries: usize,
}

impl ResponseCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            responses: Arc::new(DashMap::new()),
            max_entries,
        }
    }

    pub fn get(&self, prompt: &str) -> Option<String> {
        let key = hash_prompt(prompt);
        self.responses.get(&key).map(|r| r.value().clone())
    }

    pub fn set(&self, prompt: &str, response: String) {
        if self.responses.len() >= self.max_entries {
            // Simple eviction: clear 25% when full
            let to_remove: Vec<_> = self
                .responses
                .iter()
                .take(self.max_entries / 4)
                .map(|r| r.key().clone())
                .collect();
            for key in to_remove {
                self.responses.remove(&key);
            }
        }
        let key = hash_prompt(prompt);
        self.responses.insert(key, response);
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn clear(&self) {
        self.responses.clear();
    }
}

fn hash_prompt(prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Wraps any generator with prompt-keyed response caching, so repeated
/// evaluation runs over the same scenario set skip the model entirely.
/// Empty responses are not cached; they stand for "no output" and should be
/// retried on the next run.
pub struct CachedGenerator<G> {
    inner: G,
    cache: ResponseCache,
}

impl<G> CachedGenerator<G> {
    pub fn new(inner: G, cache: ResponseCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }
}

impl<G: TextGenerator + Sync> TextGenerator for CachedGenerator<G> {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if let Some(hit) = self.cache.get(prompt) {
            return Ok(hit);
        }

        let response = self.inner.generate(prompt).await?;
        if !response.is_empty() {
            self.cache.set(prompt, response.clone());
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::FixedResponder;

    #[test]
    fn set_then_get_round_trips() {
        let cache = ResponseCache::new(10);
        assert!(cache.get("prompt").is_none());

        cache.set("prompt", "response".to_string());
        assert_eq!(cache.get("prompt").as_deref(), Some("response"));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn cached_generator_reuses_responses() {
        let generator = CachedGenerator::new(FixedResponder::new("text"), ResponseCache::new(10));

        assert_eq!(generator.generate("p").await.unwrap(), "text");
        assert_eq!(generator.cache().len(), 1);
        assert_eq!(generator.generate("p").await.unwrap(), "text");
        assert_eq!(generator.cache().len(), 1);
    }

    #[tokio::test]
    async fn empty_responses_are_not_cached() {
        let generator = CachedGenerator::new(FixedResponder::empty(), ResponseCache::new(10));

        assert_eq!(generator.generate("p").await.unwrap(), "");
        assert!(generator.cache().is_empty());
    }
}
