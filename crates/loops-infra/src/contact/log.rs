//! Contact sink that records leads in the structured log.

use loops_core::contact::ContactSink;
use loops_types::contact::ContactLead;
use loops_types::error::ContactError;

/// Writes each lead as an `info` event and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogContactSink;

impl ContactSink for LogContactSink {
    fn name(&self) -> &str {
        "log"
    }

    async fn deliver(&self, lead: &ContactLead) -> Result<(), ContactError> {
        tracing::info!(
            reference = %lead.reference,
            name = %lead.name,
            email = %lead.email,
            message = %lead.message,
            received_at = %lead.received_at.to_rfc3339(),
            "contact lead received"
        );
        Ok(())
    }
}
