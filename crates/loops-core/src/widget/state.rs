//! Chat widget state machine.
//!
//! Phases: `Closed`, `OpenIdle`, `OpenSending`, `OpenAwaitingContactForm`. The
//! phase is derived from three flags (open, sending, form visible) so history
//! and form visibility survive closing the panel.
//!
//! Sends are optimistic: the user message is appended as `Pending` before the
//! server answers. On failure it is marked `Failed` and an `Error: ...` notice
//! is appended. Notices are displayed but never sent upstream.

use loops_types::chat::{ChatMessage, ChatRequest, ChatResult, DEFAULT_WINDOW, LanguageMode};
use loops_types::contact::{ContactReceipt, ContactRequest};
use loops_types::error::WidgetError;

use crate::language::LanguageClassifier;
use crate::window::keep_recent;

/// Shown after a successful contact submission.
pub const CONTACT_THANKS: &str = "Thanks! Our team will contact you soon.";

/// Observable widget phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    Closed,
    OpenIdle,
    OpenSending,
    OpenAwaitingContactForm,
}

/// Delivery state of a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Pending,
    Delivered,
    Failed,
}

/// What a bubble in the widget represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Part of the conversation sent to the relay.
    Message(Delivery),
    /// Local, assistant-authored status text (errors, thanks).
    Notice,
}

/// One bubble in the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEntry {
    pub message: ChatMessage,
    pub kind: EntryKind,
}

impl WidgetEntry {
    fn is_upstream(&self) -> bool {
        matches!(
            self.kind,
            EntryKind::Message(Delivery::Pending | Delivery::Delivered)
        )
    }
}

/// Lead-capture form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Client-side chat widget.
#[derive(Debug, Clone)]
pub struct ChatWidget {
    entries: Vec<WidgetEntry>,
    window: usize,
    language_mode: LanguageMode,
    classifier: LanguageClassifier,
    open: bool,
    sending: bool,
    submitting_contact: bool,
    show_form: bool,
    form: ContactForm,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(LanguageClassifier::default())
    }
}

impl ChatWidget {
    pub fn new(classifier: LanguageClassifier) -> Self {
        Self {
            entries: Vec::new(),
            window: DEFAULT_WINDOW,
            language_mode: LanguageMode::Auto,
            classifier,
            open: false,
            sending: false,
            submitting_contact: false,
            show_form: false,
            form: ContactForm::default(),
        }
    }

    pub fn phase(&self) -> WidgetPhase {
        match (self.open, self.sending, self.show_form) {
            (false, _, _) => WidgetPhase::Closed,
            (true, true, _) => WidgetPhase::OpenSending,
            (true, false, true) => WidgetPhase::OpenAwaitingContactForm,
            (true, false, false) => WidgetPhase::OpenIdle,
        }
    }

    pub fn entries(&self) -> &[WidgetEntry] {
        &self.entries
    }

    pub fn language_mode(&self) -> LanguageMode {
        self.language_mode
    }

    pub fn set_language_mode(&mut self, mode: LanguageMode) {
        self.language_mode = mode;
    }

    pub fn is_form_visible(&self) -> bool {
        self.show_form
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Open or close the panel.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Clear history and hide the form. An in-flight send is abandoned: its
    /// completion will be ignored.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.show_form = false;
        self.sending = false;
        self.submitting_contact = false;
    }

    /// Start a send. Returns the request to submit, or `None` when the input is
    /// blank, the panel is closed, or a send is already outstanding.
    pub fn begin_send(&mut self, input: &str) -> Option<ChatRequest> {
        if !self.open || self.sending || input.trim().is_empty() {
            return None;
        }

        let language_mode = match self.language_mode {
            LanguageMode::Auto => self.classifier.classify(input).into(),
            forced => forced,
        };

        self.push(WidgetEntry {
            message: ChatMessage::user(input),
            kind: EntryKind::Message(Delivery::Pending),
        });
        self.sending = true;

        let messages = self
            .entries
            .iter()
            .filter(|entry| entry.is_upstream())
            .map(|entry| entry.message.clone())
            .collect();

        Some(ChatRequest {
            messages,
            language_mode,
        })
    }

    /// Apply the server's answer to the outstanding send.
    pub fn complete_send(&mut self, outcome: Result<ChatResult, WidgetError>) {
        if !self.sending {
            return;
        }
        self.sending = false;

        let outcome = outcome.and_then(|result| {
            if result.reply.trim().is_empty() {
                Err(WidgetError::EmptyReply)
            } else {
                Ok(result)
            }
        });

        match outcome {
            Ok(result) => {
                self.mark_pending(Delivery::Delivered);
                self.push(WidgetEntry {
                    message: ChatMessage::assistant(result.reply),
                    kind: EntryKind::Message(Delivery::Delivered),
                });
                self.show_form = result.off_topic;
            }
            Err(e) => {
                self.mark_pending(Delivery::Failed);
                self.notice(format!("Error: {e}"));
            }
        }
    }

    /// Start a contact submission. Returns `None` unless the form is visible,
    /// complete, and not already being submitted.
    pub fn begin_contact(&mut self) -> Option<ContactRequest> {
        if !self.show_form || self.submitting_contact || !self.form.is_complete() {
            return None;
        }
        self.submitting_contact = true;
        Some(ContactRequest::new(
            self.form.name.clone(),
            self.form.email.clone(),
            self.form.message.clone(),
        ))
    }

    /// Apply the server's answer to the outstanding contact submission.
    pub fn complete_contact(&mut self, outcome: Result<ContactReceipt, WidgetError>) {
        if !self.submitting_contact {
            return;
        }
        self.submitting_contact = false;

        match outcome {
            Ok(receipt) if receipt.success => {
                self.notice(CONTACT_THANKS.to_string());
                self.show_form = false;
                self.form.clear();
            }
            Ok(_) => self.notice("Error: Something went wrong".to_string()),
            Err(e) => self.notice(format!("Error: {e}")),
        }
    }

    fn notice(&mut self, text: String) {
        self.push(WidgetEntry {
            message: ChatMessage::assistant(text),
            kind: EntryKind::Notice,
        });
    }

    fn push(&mut self, entry: WidgetEntry) {
        self.entries.push(entry);
        keep_recent(&mut self.entries, self.window);
    }

    fn mark_pending(&mut self, delivery: Delivery) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .rev()
            .find(|entry| entry.kind == EntryKind::Message(Delivery::Pending))
        {
            entry.kind = EntryKind::Message(delivery);
        }
    }
}
