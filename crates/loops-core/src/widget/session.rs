//! WidgetSession: a [`ChatWidget`] wired to a [`WidgetBackend`].
//!
//! Each operation is begin -> one backend call -> complete, so a session issues
//! at most one outstanding call at a time. Every completed call appends exactly
//! one bubble, which the operation returns.

use tracing::debug;

use super::backend::WidgetBackend;
use super::state::{ChatWidget, WidgetEntry};

pub struct WidgetSession<B: WidgetBackend> {
    widget: ChatWidget,
    backend: B,
}

impl<B: WidgetBackend> WidgetSession<B> {
    pub fn new(widget: ChatWidget, backend: B) -> Self {
        Self { widget, backend }
    }

    pub fn widget(&self) -> &ChatWidget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut ChatWidget {
        &mut self.widget
    }

    /// Send `input`. Returns the bubble the turn produced (reply or error
    /// notice), or `None` if nothing was sent.
    pub async fn send(&mut self, input: &str) -> Option<WidgetEntry> {
        let request = self.widget.begin_send(input)?;
        debug!(
            messages = request.messages.len(),
            language_mode = %request.language_mode,
            "sending chat request"
        );

        let outcome = self.backend.chat(&request).await;
        self.widget.complete_send(outcome);
        self.widget.entries().last().cloned()
    }

    /// Submit the contact form. Returns the resulting notice, or `None` if the
    /// form was not ready.
    pub async fn submit_contact(&mut self) -> Option<WidgetEntry> {
        let request = self.widget.begin_contact()?;
        let outcome = self.backend.contact(&request).await;
        self.widget.complete_contact(outcome);
        self.widget.entries().last().cloned()
    }
}
