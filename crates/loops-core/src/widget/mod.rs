//! Chat widget: client-side state machine and the session that drives it
//! against a [`WidgetBackend`].

pub mod backend;
pub mod session;
pub mod state;

pub use backend::WidgetBackend;
pub use session::WidgetSession;
pub use state::{ChatWidget, ContactForm, Delivery, EntryKind, WidgetEntry, WidgetPhase};
