use thiserror::Error;

/// Errors from the chat relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The completion provider call failed; carries the upstream message unredacted.
    #[error("completion API failed: {0}")]
    Upstream(String),
}

/// Errors from contact intake.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Missing fields")]
    MissingFields,

    #[error("contact sink failed: {0}")]
    Sink(String),
}

/// Errors seen by the widget when talking to the server.
#[derive(Debug, Clone, Error)]
pub enum WidgetError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),

    /// The server answered with an error payload.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The server answered 2xx without a reply.
    #[error("No response from chatbot. Check server logs.")]
    EmptyReply,

    #[error("unreadable response: {0}")]
    Decode(String),
}
