//! POST /contact -- lead capture.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use loops_core::contact::ContactSink;
use loops_core::llm::provider::LlmProvider;
use loops_types::contact::{ContactReceipt, ContactRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// Returns `200 {success: true, reference}`, `400 {error: "Missing fields"}`
/// or `500 {error: "Contact error"}`.
pub async fn contact<P, S>(
    State(state): State<AppState<P, S>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactReceipt>, AppError>
where
    P: LlmProvider + 'static,
    S: ContactSink + 'static,
{
    let Json(request) = payload.map_err(AppError::contact_body)?;
    let receipt = state.contact.intake(&request).await?;
    Ok(Json(receipt))
}
