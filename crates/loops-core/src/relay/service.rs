//! ChatRelay: one request in, one completion call, one parsed reply out.
//!
//! The relay is stateless. Every call truncates the incoming window, composes
//! the system directive, calls the provider exactly once and parses the
//! off-topic sentinel. Provider failures surface as `RelayError::Upstream`
//! carrying the provider message; there is no retry.

use tracing::{Instrument, debug, info, info_span, warn};

use loops_types::chat::{ChatRequest, ChatResult};
use loops_types::config::{AppConfig, BrandProfile};
use loops_types::error::RelayError;
use loops_types::llm::CompletionRequest;

use crate::llm::provider::LlmProvider;
use crate::relay::prompt::build_system_directive;
use crate::relay::sentinel::parse_reply;
use crate::window::recent;

/// Fixed inputs of every relay call, captured at startup.
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub brand: BrandProfile,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: Option<u32>,
    pub window: usize,
    pub sentinel: String,
}

impl RelaySettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            brand: config.brand.clone(),
            model: config.llm.model.clone(),
            temperature: config.llm.temperature,
            max_tokens: config.llm.max_tokens,
            window: config.relay.window,
            sentinel: config.relay.sentinel.clone(),
        }
    }
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Stateless chat relay, generic over the completion provider.
pub struct ChatRelay<P: LlmProvider> {
    provider: P,
    settings: RelaySettings,
}

impl<P: LlmProvider> ChatRelay<P> {
    pub fn new(provider: P, settings: RelaySettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &RelaySettings {
        &self.settings
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build the provider request for a chat request (window truncation,
    /// directive, sampling parameters).
    pub fn build_completion_request(&self, request: &ChatRequest) -> CompletionRequest {
        let window = recent(&request.messages, self.settings.window);
        let system = build_system_directive(
            &self.settings.brand,
            &self.settings.sentinel,
            request.language_mode,
        );

        CompletionRequest {
            model: self.settings.model.clone(),
            system: Some(system),
            messages: window.to_vec(),
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        }
    }

    /// Relay a conversation window to the provider and parse the reply.
    ///
    /// An empty window is forwarded as-is; the provider decides what it means.
    pub async fn relay(&self, request: &ChatRequest) -> Result<ChatResult, RelayError> {
        let completion = self.build_completion_request(request);
        debug!(
            received = request.messages.len(),
            forwarded = completion.messages.len(),
            language_mode = %request.language_mode,
            "relaying chat window"
        );

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %completion.model,
            gen_ai.request.max_tokens = ?completion.max_tokens,
            gen_ai.request.temperature = ?completion.temperature,
        );

        let response = self
            .provider
            .complete(&completion)
            .instrument(span)
            .await
            .map_err(|e| {
                warn!(provider = self.provider.name(), error = %e, "completion call failed");
                RelayError::Upstream(e.to_string())
            })?;

        let result = parse_reply(&response.content, &self.settings.sentinel);
        info!(
            response_id = %response.id,
            stop_reason = %response.stop_reason,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            off_topic = result.off_topic,
            "completion call succeeded"
        );

        Ok(result)
    }
}
