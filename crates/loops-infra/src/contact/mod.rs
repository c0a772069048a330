//! Contact sink implementations.
//!
//! - `log`: records the lead in the structured log
//! - `webhook`: POSTs the lead as JSON to a configured URL
//!
//! [`ConfiguredContactSink`] picks one from `[contact]` at startup.

pub mod log;
pub mod webhook;

use std::time::Duration;

use loops_core::contact::ContactSink;
use loops_types::config::{ContactConfig, ContactSinkKind};
use loops_types::contact::ContactLead;
use loops_types::error::ContactError;

use crate::config::ConfigError;

use self::log::LogContactSink;
use self::webhook::WebhookContactSink;

/// The sink selected by configuration.
pub enum ConfiguredContactSink {
    Log(LogContactSink),
    Webhook(WebhookContactSink),
}

impl ConfiguredContactSink {
    pub fn from_config(config: &ContactConfig) -> Result<Self, ConfigError> {
        match config.sink {
            ContactSinkKind::Log => Ok(Self::Log(LogContactSink)),
            ContactSinkKind::Webhook => {
                let url = config
                    .webhook_url
                    .as_deref()
                    .filter(|u| !u.trim().is_empty())
                    .ok_or(ConfigError::MissingWebhookUrl)?;
                let sink = WebhookContactSink::new(
                    url,
                    Duration::from_secs(config.webhook_timeout_secs),
                )?;
                tracing::debug!(url = sink.url(), "webhook contact sink configured");
                Ok(Self::Webhook(sink))
            }
        }
    }
}

impl ContactSink for ConfiguredContactSink {
    fn name(&self) -> &str {
        match self {
            Self::Log(sink) => sink.name(),
            Self::Webhook(sink) => sink.name(),
        }
    }

    async fn deliver(&self, lead: &ContactLead) -> Result<(), ContactError> {
        match self {
            Self::Log(sink) => sink.deliver(lead).await,
            Self::Webhook(sink) => sink.deliver(lead).await,
        }
    }
}
