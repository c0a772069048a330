//! Chat relay: brand directive, single completion call, sentinel parsing.
//!
//! - `prompt`: system directive and language hint composition
//! - `sentinel`: off-topic marker detection on the model's reply
//! - `service`: `ChatRelay`, the stateless orchestrator used by `POST /chat`

pub mod prompt;
pub mod sentinel;
pub mod service;

pub use service::{ChatRelay, RelaySettings};
