//! Terminal chat widget.
//!
//! Drives the widget state machine from `loops-core` against a running server:
//! optimistic sends, error notices, and the contact form when a reply is
//! flagged off-topic. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
