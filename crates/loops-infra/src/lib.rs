//! Infrastructure layer for the Loops assistant.
//!
//! Contains implementations of the traits defined in `loops-core`: the
//! OpenAI-compatible completion provider, contact sinks (log, webhook) and the
//! HTTP widget backend, plus the `loops.toml` loader.

pub mod config;
pub mod contact;
pub mod llm;
pub mod widget;
