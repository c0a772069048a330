//! Shared domain types for the Loops chat assistant.
//!
//! Chat window and relay result shapes, contact intake payloads, provider-neutral
//! LLM request/response types, configuration, and the error enums shared by the
//! core, infra and api crates.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod contact;
pub mod error;
pub mod llm;
