//! LLM provider abstraction consumed by the chat relay.

pub mod provider;
