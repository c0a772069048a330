//! Application state wiring the relay and contact intake together.
//!
//! Services are generic over the provider and sink traits; [`ConcreteAppState`]
//! pins them to the infra implementations used by `loops serve`.

use std::sync::Arc;

use anyhow::Context;

use loops_core::contact::{ContactIntake, ContactSink};
use loops_core::llm::provider::LlmProvider;
use loops_core::relay::{ChatRelay, RelaySettings};
use loops_infra::config::load_api_key;
use loops_infra::contact::ConfiguredContactSink;
use loops_infra::llm::openai_compat::OpenAiCompatibleProvider;
use loops_infra::llm::openai_compat::config::OpenAiCompatConfig;
use loops_types::config::AppConfig;

/// Shared state handed to every HTTP handler.
pub struct AppState<P: LlmProvider, S: ContactSink> {
    pub relay: Arc<ChatRelay<P>>,
    pub contact: Arc<ContactIntake<S>>,
}

impl<P: LlmProvider, S: ContactSink> AppState<P, S> {
    pub fn new(relay: ChatRelay<P>, contact: ContactIntake<S>) -> Self {
        Self {
            relay: Arc::new(relay),
            contact: Arc::new(contact),
        }
    }
}

// Manual impl: derive would require `P: Clone` and `S: Clone`.
impl<P: LlmProvider, S: ContactSink> Clone for AppState<P, S> {
    fn clone(&self) -> Self {
        Self {
            relay: Arc::clone(&self.relay),
            contact: Arc::clone(&self.contact),
        }
    }
}

pub type ConcreteAppState = AppState<OpenAiCompatibleProvider, ConfiguredContactSink>;

impl ConcreteAppState {
    /// Wire the OpenAI-compatible provider and the configured contact sink.
    ///
    /// Fails when the API key variable is unset or the sink is misconfigured.
    pub fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let api_key = load_api_key(&config.llm.api_key_env)?;
        let provider =
            OpenAiCompatibleProvider::new(OpenAiCompatConfig::from_llm_config(&config.llm, api_key));
        let sink = ConfiguredContactSink::from_config(&config.contact)
            .context("invalid [contact] configuration")?;

        tracing::info!(
            provider = provider.name(),
            model = provider.model(),
            sink = sink.name(),
            "relay services initialized"
        );

        Ok(Self::new(
            ChatRelay::new(provider, RelaySettings::from_config(config)),
            ContactIntake::new(sink),
        ))
    }
}
