//! HTTP [`WidgetBackend`] talking to a running `loops serve`.
//!
//! Error payloads are read the way the browser widget reads them: a non-2xx
//! status, or any body carrying `error`, becomes [`WidgetError::Server`] with the
//! `error` text, else `details`, else a generic message.

use serde::Deserialize;

use loops_core::widget::WidgetBackend;
use loops_types::chat::{ChatRequest, ChatResult};
use loops_types::contact::{ContactReceipt, ContactRequest};
use loops_types::error::WidgetError;

const GENERIC_FAILURE: &str = "Something went wrong";

/// Loose view of any server reply; every field may be absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplyBody {
    reply: Option<String>,
    off_topic: Option<bool>,
    success: Option<bool>,
    reference: Option<String>,
    error: Option<String>,
    details: Option<String>,
}

impl ReplyBody {
    fn failure_message(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.details.clone())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string())
    }
}

pub struct HttpWidgetBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpWidgetBackend {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post<T: serde::Serialize>(&self, path: &str, body: &T) -> Result<ReplyBody, WidgetError> {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| WidgetError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| WidgetError::Transport(e.to_string()))?;

        let parsed = serde_json::from_str::<ReplyBody>(&text);
        match parsed {
            Ok(body) if status.is_success() && body.error.is_none() => Ok(body),
            Ok(body) => Err(WidgetError::Server {
                status: status.as_u16(),
                message: body.failure_message(),
            }),
            Err(_) if !status.is_success() => Err(WidgetError::Server {
                status: status.as_u16(),
                message: GENERIC_FAILURE.to_string(),
            }),
            Err(e) => Err(WidgetError::Decode(e.to_string())),
        }
    }
}

impl WidgetBackend for HttpWidgetBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResult, WidgetError> {
        let body = self.post("/chat", request).await?;
        match body.reply {
            Some(reply) if !reply.is_empty() => Ok(ChatResult {
                reply,
                off_topic: body.off_topic.unwrap_or(false),
            }),
            _ => Err(WidgetError::EmptyReply),
        }
    }

    async fn contact(&self, request: &ContactRequest) -> Result<ContactReceipt, WidgetError> {
        let body = self.post("/contact", request).await?;
        Ok(ContactReceipt {
            success: body.success.unwrap_or(false),
            reference: body.reference,
        })
    }
}
