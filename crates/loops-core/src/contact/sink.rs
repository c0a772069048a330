//! ContactSink trait: the collaborator that stores or forwards leads.
//!
//! Implementations live in loops-infra (`LogContactSink`, `WebhookContactSink`).

use loops_types::contact::ContactLead;
use loops_types::error::ContactError;

/// Receives validated leads.
pub trait ContactSink: Send + Sync {
    /// Short identifier used in logs (e.g., "log", "webhook").
    fn name(&self) -> &str;

    /// Deliver a lead. Failures should be reported as `ContactError::Sink`.
    fn deliver(
        &self,
        lead: &ContactLead,
    ) -> impl std::future::Future<Output = Result<(), ContactError>> + Send;
}
