//! Chat window types exchanged between the widget and the relay.
//!
//! Wire field names follow the widget's JSON (`languageMode`, `offTopic`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of most recent messages kept in a conversation window.
pub const DEFAULT_WINDOW: usize = 10;

/// Author of a chat message.
///
/// There is no `system` role: the system directive is composed by
/// the relay and never accepted from the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single turn in the conversation window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Language a reply should be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Si,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Si => write!(f, "si"),
        }
    }
}

/// Language hint sent with a chat request.
///
/// `Auto` lets the model mirror the user; `En`/`Si` force the reply language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageMode {
    #[default]
    Auto,
    En,
    Si,
}

impl LanguageMode {
    /// The forced language, if any.
    pub fn forced(self) -> Option<Language> {
        match self {
            LanguageMode::Auto => None,
            LanguageMode::En => Some(Language::En),
            LanguageMode::Si => Some(Language::Si),
        }
    }
}

impl From<Language> for LanguageMode {
    fn from(language: Language) -> Self {
        match language {
            Language::En => LanguageMode::En,
            Language::Si => LanguageMode::Si,
        }
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageMode::Auto => write!(f, "auto"),
            LanguageMode::En => write!(f, "en"),
            LanguageMode::Si => write!(f, "si"),
        }
    }
}

impl FromStr for LanguageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(LanguageMode::Auto),
            "en" => Ok(LanguageMode::En),
            "si" => Ok(LanguageMode::Si),
            other => Err(format!("invalid language mode: '{other}' (expected auto, en or si)")),
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub language_mode: LanguageMode,
}

/// Relay outcome returned to the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResult {
    pub reply: String,
    pub off_topic: bool,
}
