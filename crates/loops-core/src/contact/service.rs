//! ContactIntake: presence validation and delegation to a [`ContactSink`].

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use loops_types::contact::{ContactLead, ContactReceipt, ContactRequest};
use loops_types::error::ContactError;

use super::sink::ContactSink;

/// Returns the trimmed field, or `None` when absent or blank.
fn required(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

/// Validate a submission into a lead. Blank fields count as missing.
pub fn validate(request: &ContactRequest) -> Result<ContactLead, ContactError> {
    let (Some(name), Some(email), Some(message)) = (
        required(&request.name),
        required(&request.email),
        required(&request.message),
    ) else {
        return Err(ContactError::MissingFields);
    };

    Ok(ContactLead {
        reference: Uuid::now_v7().to_string(),
        name,
        email,
        message,
        received_at: Utc::now(),
    })
}

/// Validates contact submissions and forwards them to the configured sink.
pub struct ContactIntake<S: ContactSink> {
    sink: S,
}

impl<S: ContactSink> ContactIntake<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Validate and deliver. The sink is never called for an invalid request.
    pub async fn intake(&self, request: &ContactRequest) -> Result<ContactReceipt, ContactError> {
        let lead = validate(request)?;

        if let Err(e) = self.sink.deliver(&lead).await {
            warn!(sink = self.sink.name(), reference = %lead.reference, error = %e, "contact delivery failed");
            return Err(e);
        }

        info!(sink = self.sink.name(), reference = %lead.reference, "contact lead accepted");
        Ok(ContactReceipt {
            success: true,
            reference: Some(lead.reference),
        })
    }
}
