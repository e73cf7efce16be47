//! Model trait for LLM completions.
//!
//! The pipeline needs exactly one capability from the language-model
//! service: one formatted prompt in, one text response out. Retries,
//! rate limits, and provider specifics stay behind this seam.

use async_trait::async_trait;

use crate::error::ModelResult;

/// Text-completion seam for the briefing pipeline.
///
/// Implementations wrap a specific provider (OpenAI, a local model,
/// a scripted mock). The pipeline issues one request per stage and
/// awaits one response; it never inspects the text.
#[async_trait]
pub trait Model: Send + Sync {
    /// Complete a single prompt, returning the model's verbatim response.
    async fn complete(&self, prompt: &str) -> ModelResult<String>;
}
