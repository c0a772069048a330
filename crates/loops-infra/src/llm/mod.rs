//! LLM provider implementations.
//!
//! - `openai_compat`: any API speaking the OpenAI chat-completions protocol

pub mod openai_compat;
