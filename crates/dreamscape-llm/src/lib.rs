//! dreamscape-llm
//!
//! Single-prompt text completion against a hosted chat model.

pub mod bedrock;
pub mod error;
pub mod openai;

use async_trait::async_trait;

use crate::error::LlmError;

/// A chat model that turns one user prompt into one free-text completion.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model identifier, for logging.
    fn model_id(&self) -> &str;
}
