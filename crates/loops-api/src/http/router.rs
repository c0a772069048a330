//! Axum router configuration with middleware.
//!
//! Widget routes are mounted at the root (`/chat`, `/contact`) and again under
//! `/api` for pages that call `/api/chat`. Middleware: CORS, tracing.
//!
//! When a site directory is configured and exists, unknown paths are served
//! from it, falling back to its `index.html`. Otherwise only the API is served.

use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use loops_core::contact::ContactSink;
use loops_core::llm::provider::LlmProvider;

use crate::http::handlers;
use crate::state::AppState;

fn widget_routes<P, S>() -> Router<AppState<P, S>>
where
    P: LlmProvider + 'static,
    S: ContactSink + 'static,
{
    Router::new()
        .route("/chat", post(handlers::chat::chat::<P, S>))
        .route("/contact", post(handlers::contact::contact::<P, S>))
}

/// Build the complete router with all routes and middleware.
pub fn build_router<P, S>(state: AppState<P, S>, web_dir: Option<&Path>) -> Router
where
    P: LlmProvider + 'static,
    S: ContactSink + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .merge(widget_routes::<P, S>())
        .nest("/api", widget_routes::<P, S>())
        .route("/health", get(health_check));

    if let Some(dir) = web_dir.filter(|dir| dir.exists()) {
        let serve_dir = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %dir.display(), "static site serving enabled");
    } else if let Some(dir) = web_dir {
        tracing::warn!(path = %dir.display(), "web_dir does not exist, serving API only");
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::future::Future;
    use std::sync::Mutex;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use loops_core::contact::ContactIntake;
    use loops_core::relay::{ChatRelay, RelaySettings};
    use loops_types::contact::ContactLead;
    use loops_types::error::ContactError;
    use loops_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

    struct MockProvider {
        reply: Result<String, String>,
        calls: Mutex<Vec<CompletionRequest>>,
    }

    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn complete(
            &self,
            request: &CompletionRequest,
        ) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send {
            self.calls.lock().unwrap().push(request.clone());
            let reply = self.reply.clone();
            async move {
                let content = reply.map_err(LlmError::RateLimited)?;
                Ok(CompletionResponse {
                    id: "resp-1".into(),
                    content,
                    model: "mock".into(),
                    stop_reason: StopReason::EndTurn,
                    usage: Usage::default(),
                })
            }
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        fail: bool,
        leads: Mutex<Vec<ContactLead>>,
    }

    impl ContactSink for RecordingSink {
        fn name(&self) -> &str {
            "recording"
        }

        fn deliver(&self, lead: &ContactLead) -> impl Future<Output = Result<(), ContactError>> + Send {
            self.leads.lock().unwrap().push(lead.clone());
            let fail = self.fail;
            async move {
                if fail {
                    Err(ContactError::Sink("webhook returned HTTP 502".into()))
                } else {
                    Ok(())
                }
            }
        }
    }

    type TestState = AppState<MockProvider, RecordingSink>;

    fn state(reply: Result<&str, &str>, sink_fails: bool) -> TestState {
        let provider = MockProvider {
            reply: reply.map(String::from).map_err(String::from),
            calls: Mutex::new(Vec::new()),
        };
        let sink = RecordingSink {
            fail: sink_fails,
            ..Default::default()
        };
        AppState::new(
            ChatRelay::new(provider, RelaySettings::default()),
            ContactIntake::new(sink),
        )
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn chat_returns_reply_and_flag() {
        let state = state(Ok("[OFF_TOPIC] I can only help with marketing."), false);
        let router = build_router(state.clone(), None);

        let (status, body) = send(
            router,
            post_json(
                "/chat",
                r#"{"messages":[{"role":"user","content":"weather?"}],"languageMode":"en"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "reply": "I can only help with marketing.", "offTopic": true })
        );
        let calls = state.relay.provider().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].system.as_deref().unwrap().ends_with("(Reply only in English)"));
    }

    #[tokio::test]
    async fn api_prefix_serves_the_same_routes() {
        let router = build_router(state(Ok("Hello!"), false), None);
        let (status, body) = send(
            router,
            post_json("/api/chat", r#"{"messages":[{"role":"user","content":"hi"}]}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], "Hello!");
        assert_eq!(body["offTopic"], false);
    }

    #[tokio::test]
    async fn chat_upstream_failure_is_500_with_details() {
        let router = build_router(state(Err("You exceeded your current quota"), false), None);
        let (status, body) = send(
            router,
            post_json("/chat", r#"{"messages":[{"role":"user","content":"hi"}]}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("You exceeded your current quota"));
        assert!(body["details"].as_str().unwrap().contains("You exceeded your current quota"));
    }

    #[tokio::test]
    async fn empty_conversation_is_relayed() {
        let state = state(Ok("Hello! Ask me about our services."), false);
        let router = build_router(state.clone(), None);

        let (status, body) = send(router, post_json("/chat", r#"{"messages":[]}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], "Hello! Ask me about our services.");
        let calls = state.relay.provider().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].messages.is_empty());
    }

    #[tokio::test]
    async fn malformed_chat_bodies_are_500_with_details() {
        let state = state(Ok("unused"), false);

        for body in [
            "{}",
            r#"{"messages":"nope"}"#,
            r#"{"messages":[{"role":"system","content":"x"}]}"#,
            r#"{"messages":[{"role":"user","content":"x"}],"languageMode":"fr"}"#,
            "not json",
        ] {
            let router = build_router(state.clone(), None);
            let (status, json) = send(router, post_json("/chat", body)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body {body}");
            assert!(json["error"].is_string(), "body {body}");
            assert_eq!(json["details"], json["error"], "body {body}");
        }
        assert!(state.relay.provider().calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_contact_body_is_generic_500() {
        let state = state(Ok("unused"), false);

        for body in ["not json", r#"{"name":42,"email":"a","message":"b"}"#] {
            let router = build_router(state.clone(), None);
            let (status, json) = send(router, post_json("/contact", body)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body {body}");
            assert_eq!(json, json!({ "error": "Contact error" }), "body {body}");
        }
        assert!(state.contact.sink().leads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn contact_missing_fields_is_400_without_delivery() {
        let state = state(Ok("unused"), false);
        let router = build_router(state.clone(), None);

        let (status, body) = send(
            router,
            post_json("/contact", r#"{"name":"Nimal","email":"nimal@example.com"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing fields" }));
        assert!(state.contact.sink().leads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn contact_success_returns_reference() {
        let state = state(Ok("unused"), false);
        let router = build_router(state.clone(), None);

        let (status, body) = send(
            router,
            post_json(
                "/api/contact",
                r#"{"name":"Nimal","email":"nimal@example.com","message":"Campaign please"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let leads = state.contact.sink().leads.lock().unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(body["reference"], leads[0].reference.as_str());
    }

    #[tokio::test]
    async fn contact_sink_failure_is_generic_500() {
        let router = build_router(state(Ok("unused"), true), None);
        let (status, body) = send(
            router,
            post_json("/contact", r#"{"name":"a","email":"b","message":"c"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Contact error" }));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let router = build_router(state(Ok("unused"), false), None);
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn static_site_is_served_as_fallback() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("index.html"), "<h1>Loops</h1>").unwrap();

        let router = build_router(state(Ok("unused"), false), Some(tmp.path()));
        let request = Request::builder()
            .uri("/services")
            .header(header::ORIGIN, "https://loops.lk")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>Loops</h1>");
    }

    #[tokio::test]
    async fn missing_site_dir_serves_api_only() {
        let router = build_router(
            state(Ok("unused"), false),
            Some(Path::new("/definitely/not/here")),
        );
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
