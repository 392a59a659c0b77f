//! End-to-end: the coordinator over `HttpTransport` against a live backend
//! bound to an ephemeral port, plus a few hand-rolled misbehaving servers.

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use codechat_api::{create_router, AppState, Responder, ResponderError};
use codechat_core::config::ServerConfig;
use codechat_core::error::ExchangeFailure;
use codechat_core::fallback::APOLOGY;
use codechat_core::types::{Category, MessageId, Role, SessionId};
use codechat_session::{ExchangeState, HttpTransport, SendOutcome, SessionCoordinator};

struct EchoResponder;

#[async_trait]
impl Responder for EchoResponder {
    async fn respond(
        &self,
        message: &str,
        _category: Category,
        _session_id: &SessionId,
    ) -> Result<String, ResponderError> {
        Ok(format!("echo: {}", message))
    }
}

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_round_trip_against_reference_backend() {
    let state = AppState::with_responder(ServerConfig::default(), Arc::new(EchoResponder));
    let addr = spawn(create_router(state)).await;
    let coordinator = SessionCoordinator::new(HttpTransport::new(&base_url(addr)));

    let outcome = coordinator.send("напиши функцию сортировки").await;
    assert!(matches!(outcome, SendOutcome::Replied(_)));
    let session = coordinator.session_id().expect("session adopted");

    let outcome = coordinator.send("а теперь на Python").await;
    assert!(matches!(outcome, SendOutcome::Replied(_)));
    assert_eq!(coordinator.session_id(), Some(session));

    let messages = coordinator.messages();
    assert_eq!(messages.len(), 5);
    assert_eq!(messages[1].category, Category::Code);
    assert_eq!(messages[2].role, Role::Assistant);
    assert_eq!(messages[2].category, Category::Code);
    assert_eq!(messages[2].content, "echo: напиши функцию сортировки");
    assert_eq!(messages[4].content, "echo: а теперь на Python");
}

#[tokio::test]
async fn test_numeric_id_and_naive_timestamp_from_server() {
    let router = Router::new().route(
        "/api/chat/",
        post(|| async {
            Json(json!({
                "id": 42,
                "response": "...",
                "timestamp": "2024-05-01T12:00:00.000123",
                "category": "code",
                "session_id": "abc"
            }))
        }),
    );
    let addr = spawn(router).await;
    let coordinator = SessionCoordinator::new(HttpTransport::new(&base_url(addr)));

    let outcome = coordinator.send("напиши функцию сортировки").await;
    assert_eq!(outcome, SendOutcome::Replied(MessageId::from("42")));

    let last = coordinator.last_message().unwrap();
    assert_eq!(last.id, MessageId::from("42"));
    assert_eq!(last.category, Category::Code);
    assert_eq!(coordinator.session_id(), Some(SessionId::new("abc")));
}

#[tokio::test]
async fn test_server_error_status_is_failure() {
    let router = Router::new().route(
        "/api/chat/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = spawn(router).await;
    let coordinator = SessionCoordinator::new(HttpTransport::new(&base_url(addr)));

    let outcome = coordinator.send("привет").await;
    assert_eq!(
        outcome,
        SendOutcome::Failed(ExchangeFailure::Status { status: 500 })
    );
    let last = coordinator.last_message().unwrap();
    assert_eq!(last.category, Category::Error);
    assert_eq!(last.content, APOLOGY);
    assert!(coordinator.session_id().is_none());
    assert_eq!(coordinator.state(), ExchangeState::Idle);
}

#[tokio::test]
async fn test_malformed_body_is_failure() {
    let router = Router::new().route(
        "/api/chat/",
        post(|| async { Json(json!({"response": "missing everything else"})) }),
    );
    let addr = spawn(router).await;
    let coordinator = SessionCoordinator::new(HttpTransport::new(&base_url(addr)));

    let outcome = coordinator.send("привет").await;
    assert!(matches!(
        outcome,
        SendOutcome::Failed(ExchangeFailure::Malformed(_))
    ));
    assert_eq!(coordinator.len(), 3);
}

#[tokio::test]
async fn test_unreachable_backend_is_failure_and_retry_accepted() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let coordinator = SessionCoordinator::new(HttpTransport::new(&base_url(addr)));
    let outcome = coordinator.send("привет").await;
    assert!(matches!(
        outcome,
        SendOutcome::Failed(ExchangeFailure::Transport(_))
    ));
    assert!(coordinator.error().is_some());

    let retry = coordinator.send("привет").await;
    assert!(retry.was_accepted());
    assert_eq!(coordinator.len(), 5);
}
