//! WidgetBackend trait: the two server endpoints the widget calls.
//!
//! The HTTP implementation lives in loops-infra (`HttpWidgetBackend`).

use loops_types::chat::{ChatRequest, ChatResult};
use loops_types::contact::{ContactReceipt, ContactRequest};
use loops_types::error::WidgetError;

pub trait WidgetBackend: Send + Sync {
    /// `POST /chat`
    fn chat(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<ChatResult, WidgetError>> + Send;

    /// `POST /contact`
    fn contact(
        &self,
        request: &ContactRequest,
    ) -> impl std::future::Future<Output = Result<ContactReceipt, WidgetError>> + Send;
}
