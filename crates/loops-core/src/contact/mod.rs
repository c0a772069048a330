//! Contact intake: validate a lead-capture submission and hand it to a sink.

pub mod service;
pub mod sink;

pub use service::ContactIntake;
pub use sink::ContactSink;
