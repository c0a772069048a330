//! OpenAI-compatible LLM provider implementation.
//!
//! A single [`OpenAiCompatibleProvider`] speaks the chat-completions protocol
//! (`POST {base_url}/chat/completions`) so OpenAI and any compatible gateway
//! can be used by changing the base URL.
//!
//! Each `complete` call issues exactly one HTTP request. Non-2xx responses are
//! mapped to [`LlmError`] variants carrying the upstream message; nothing is
//! retried here.

pub mod config;
pub mod types;

use secrecy::{ExposeSecret, SecretString};

use loops_core::llm::provider::LlmProvider;
use loops_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

use self::config::OpenAiCompatConfig;
use self::types::{ChatCompletionRequest, ChatCompletionResponse, ErrorEnvelope, WireMessage};

/// Unified provider for any OpenAI-compatible API.
///
/// # API Key Security
///
/// Does NOT derive Debug. The key is a [`SecretString`] exposed only when the
/// `Authorization` header is built.
pub struct OpenAiCompatibleProvider {
    client: reqwest::Client,
    provider_name: String,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl OpenAiCompatibleProvider {
    /// Create a new OpenAI-compatible provider from a configuration.
    pub fn new(config: OpenAiCompatConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            provider_name: config.provider_name,
            base_url: config.base_url,
            api_key: config.api_key,
            model: config.model,
        }
    }

    /// The default model for this provider.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Convert a generic [`CompletionRequest`] into the wire request.
    ///
    /// The system directive goes first as a `system` message, followed by the
    /// conversation in order.
    fn to_wire_request(&self, request: &CompletionRequest) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = &request.system {
            messages.push(WireMessage {
                role: "system".into(),
                content: system.clone(),
            });
        }
        messages.extend(request.messages.iter().map(|m| WireMessage {
            role: m.role.to_string(),
            content: m.content.clone(),
        }));

        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        ChatCompletionRequest {
            model,
            messages,
            temperature: request.temperature,
            max_completion_tokens: request.max_tokens,
        }
    }
}

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_wire_request(request);

        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status.as_u16(), &error_body));
        }

        let wire: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let choice = wire
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Deserialization("response contained no choices".into()))?;

        let stop_reason = match choice.finish_reason.as_deref() {
            Some("length") => StopReason::MaxTokens,
            Some("content_filter") => StopReason::ContentFilter,
            Some("tool_calls") | Some("function_call") => StopReason::ToolUse,
            _ => StopReason::EndTurn,
        };

        let usage = wire
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: wire.id,
            content: choice.message.content.unwrap_or_default(),
            model: wire.model,
            stop_reason,
            usage,
        })
    }
}

/// Map a non-2xx status and body to an [`LlmError`].
///
/// The upstream `error.message` is preferred; a body that is not the OpenAI
/// error envelope is carried verbatim. Some compatible servers put the error
/// code in `type` instead of `code`, so both are checked.
fn map_status_error(status: u16, body: &str) -> LlmError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();
    let message = envelope
        .as_ref()
        .map(|e| e.error.message.clone())
        .unwrap_or_else(|| body.to_string());
    let code = envelope
        .as_ref()
        .and_then(|e| e.error.code.as_deref().or(e.error.kind.as_deref()));

    match (status, code) {
        (_, Some("context_length_exceeded")) => LlmError::ContextLengthExceeded(message),
        (401 | 403, _) => LlmError::AuthenticationFailed(message),
        (429, _) => LlmError::RateLimited(message),
        (400 | 404 | 422, _) => LlmError::InvalidRequest(message),
        (503 | 529, _) => LlmError::Overloaded(message),
        _ => LlmError::Provider {
            message: format!("HTTP {status}: {message}"),
        },
    }
}
