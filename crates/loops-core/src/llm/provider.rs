//! LlmProvider trait definition.
//!
//! The single abstraction the relay talks to. Uses native async fn in traits
//! (RPITIT, Rust 2024 edition); implementations live in loops-infra
//! (e.g., `OpenAiCompatibleProvider`).

use loops_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat-completion backends.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
