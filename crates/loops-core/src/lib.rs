//! Business logic for the Loops chat assistant.
//!
//! Defines the "ports" (`LlmProvider`, `ContactSink`, `WidgetBackend`) that the
//! infrastructure layer implements, plus the pure pieces: the language
//! classifier, the chat relay, contact intake and the widget state machine.
//! Depends only on `loops-types` -- never on `loops-infra` or any IO crate.

pub mod contact;
pub mod language;
pub mod llm;
pub mod relay;
pub mod widget;
pub mod window;
