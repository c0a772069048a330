//! POST /chat -- relay a conversation window to the completion API.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use loops_core::contact::ContactSink;
use loops_core::llm::provider::LlmProvider;
use loops_types::chat::{ChatRequest, ChatResult};

use crate::http::error::AppError;
use crate::state::AppState;

/// Returns `200 {reply, offTopic}`; relay failures map through [`AppError`].
pub async fn chat<P, S>(
    State(state): State<AppState<P, S>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResult>, AppError>
where
    P: LlmProvider + 'static,
    S: ContactSink + 'static,
{
    let Json(request) = payload.map_err(AppError::chat_body)?;
    let result = state.relay.relay(&request).await?;
    Ok(Json(result))
}
