pub mod cache;
pub mod ollama;
pub mod prompt;
pub mod retry;
pub mod stub;

pub use cache::{CachedGenerator, ResponseCache};
pub use ollama::OllamaClient;
pub use retry::{RetryPolicy, RetryingGenerator};
pub use stub::{FailingResponder, FixedResponder, ScriptedResponder};

use std::future::Future;

use anyhow::Result;

/// Seam to the external generation model: one operation, prompt in, text
/// out. The call is synchronous request/response from the caller's point of
/// view, may be slow, and may legitimately return an empty string — the
/// evaluation harness treats empty output and errors alike as "no output".
///
/// Implementations exist for the Ollama HTTP client, the caching and
/// retrying wrappers, and deterministic test doubles.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}
