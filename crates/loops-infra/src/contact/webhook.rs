//! Contact sink that POSTs leads to a webhook.
//!
//! Body: `{name, email, message, reference, received_at}` as JSON. Any non-2xx
//! status or transport failure is a [`ContactError::Sink`]. One attempt only.

use std::time::Duration;

use loops_core::contact::ContactSink;
use loops_types::contact::ContactLead;
use loops_types::error::ContactError;

use crate::config::ConfigError;

pub struct WebhookContactSink {
    client: reqwest::Client,
    url: String,
}

impl WebhookContactSink {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ContactSink for WebhookContactSink {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn deliver(&self, lead: &ContactLead) -> Result<(), ContactError> {
        let response = self
            .client
            .post(&self.url)
            .json(lead)
            .send()
            .await
            .map_err(|e| ContactError::Sink(format!("webhook request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContactError::Sink(format!("webhook returned HTTP {status}: {body}")));
        }

        tracing::debug!(reference = %lead.reference, url = %self.url, "lead posted to webhook");
        Ok(())
    }
}
