use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::TextGenerator;

/// Exponential backoff for generation calls.
#[derive(Clone)]
pub struct RetryPolicy {
    max_retries: usize,
    initial_backoff: Duration,
    max_backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: usize, initial_backoff_ms: u64, max_backoff_ms: u64) -> Self {
        Self {
            max_retries,
            initial_backoff: Duration::from_millis(initial_backoff_ms),
            max_backoff: Duration::from_millis(max_backoff_ms),
        }
    }

    pub async fn generate<G: TextGenerator + Sync>(
        &self,
        generator: &G,
        prompt: &str,
    ) -> Result<String> {
        let mut attempt = 0;
        let mut backoff = self.initial_backoff;

        loop {
            match generator.generate(prompt).await {
                Ok(text) => {
                    if attempt > 0 {
                        info!(attempts = attempt + 1, "Generation succeeded after retries");
                    }
                    return Ok(text);
                }
                Err(e) => {
                    attempt += 1;
                    if attempt > self.max_retries {
                        warn!(
                            attempts = attempt,
                            error = %e,
                            "Generation failed after max retries"
                        );
                        return Err(e);
                    }

                    warn!(
                        attempt = attempt,
                        max_retries = self.max_retries,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %e,
                        "Generation failed, retrying"
                    );

                    sleep(backoff).await;

                    backoff = std::cmp::min(backoff * 2, self.max_backoff);
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, 1000, 10000)
    }
}

/// Composable wrapper applying a `RetryPolicy` to any generator.
pub struct RetryingGenerator<G> {
    inner: G,
    policy: RetryPolicy,
}

impl<G> RetryingGenerator<G> {
    pub fn new(inner: G, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

impl<G: TextGenerator + Sync> TextGenerator for RetryingGenerator<G> {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.policy.generate(&self.inner, prompt).await
    }
}
