//! Off-topic sentinel detection.
//!
//! The model is asked to prefix off-topic replies with a literal marker. It is
//! not obliged to comply, so only an exact leading marker (after trimming)
//! counts; anything else is returned untouched with `off_topic = false`.

use loops_types::chat::ChatResult;

/// Split a raw model reply into the user-facing text and the off-topic flag.
pub fn parse_reply(raw: &str, sentinel: &str) -> ChatResult {
    let trimmed = raw.trim();

    if !sentinel.is_empty() {
        if let Some(rest) = trimmed.strip_prefix(sentinel) {
            return ChatResult {
                reply: rest.trim().to_string(),
                off_topic: true,
            };
        }
    }

    ChatResult {
        reply: trimmed.to_string(),
        off_topic: false,
    }
}
