//! Messages crate tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Duration, Utc};
use platform::rate_limit::{MemoryRateLimitStore, RateLimitConfig};
use tower::ServiceExt;

use crate::application::{
    GetMessagesInput, GetMessagesUseCase, ListConversationsUseCase, SendMessageInput,
    SendMessageUseCase,
};
use crate::convo::conversation_id;
use crate::domain::entity::Message;
use crate::domain::repository::MessageStore;
use crate::error::MessageError;
use crate::infra::memory::MemoryMessageStore;
use crate::presentation::handlers::MessagesAppState;
use crate::presentation::router::messages_router_generic;

const ALICE: &str = "0xaaaa000000000000000000000000000000000001";
const BOB: &str = "0xbbbb000000000000000000000000000000000002";
const CARA: &str = "0xcccc000000000000000000000000000000000003";

fn send_use_case(
    store: &Arc<MemoryMessageStore>,
    limit: RateLimitConfig,
) -> SendMessageUseCase<MemoryMessageStore, MemoryRateLimitStore> {
    SendMessageUseCase::new(store.clone(), Arc::new(MemoryRateLimitStore::new()), limit)
}

fn input(sender: &str, recipient: &str, body: &str) -> SendMessageInput {
    SendMessageInput {
        sender: sender.to_string(),
        recipient: recipient.to_string(),
        body: body.to_string(),
    }
}

fn seeded(convo_id: &str, sender: &str, recipient: &str, body: &str, age: Duration) -> Message {
    Message {
        id: kernel::id::message_id(),
        convo_id: convo_id.to_string(),
        sender: sender.to_string(),
        recipient: recipient.to_string(),
        body: body.to_string(),
        created_at: Utc::now() - age,
    }
}

#[tokio::test]
async fn test_send_message_happy_path() {
    let store = Arc::new(MemoryMessageStore::new());
    let uc = send_use_case(&store, RateLimitConfig::default());

    let message = uc.execute(input(ALICE, BOB, "  hello  ")).await.unwrap();
    assert!(message.id.starts_with("msg_"));
    assert_eq!(message.body, "hello");
    assert_eq!(message.convo_id, conversation_id(ALICE, BOB));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_send_message_rejects_empty_body() {
    let store = Arc::new(MemoryMessageStore::new());
    let uc = send_use_case(&store, RateLimitConfig::default());

    let err = uc.execute(input(ALICE, BOB, "   ")).await.unwrap_err();
    assert!(matches!(err, MessageError::EmptyBody));
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_send_message_rejects_oversize_body() {
    let store = Arc::new(MemoryMessageStore::new());
    let uc = send_use_case(&store, RateLimitConfig::default());

    let long = "x".repeat(2001);
    let err = uc.execute(input(ALICE, BOB, &long)).await.unwrap_err();
    assert!(matches!(err, MessageError::BodyTooLong));

    // Exactly at the ceiling is fine
    let at_limit = "x".repeat(2000);
    assert!(uc.execute(input(ALICE, BOB, &at_limit)).await.is_ok());
}

#[tokio::test]
async fn test_send_message_missing_recipient() {
    let store = Arc::new(MemoryMessageStore::new());
    let uc = send_use_case(&store, RateLimitConfig::default());

    let err = uc.execute(input(ALICE, "", "hi")).await.unwrap_err();
    assert!(matches!(err, MessageError::MissingField("recipient")));
}

#[tokio::test]
async fn test_send_message_rate_limited_per_sender() {
    let store = Arc::new(MemoryMessageStore::new());
    let uc = send_use_case(&store, RateLimitConfig::new(2, 60));

    assert!(uc.execute(input(ALICE, BOB, "one")).await.is_ok());
    assert!(uc.execute(input(ALICE, BOB, "two")).await.is_ok());

    let err = uc.execute(input(ALICE, BOB, "three")).await.unwrap_err();
    assert!(matches!(err, MessageError::RateLimited { .. }));
    assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);

    // A different sender is not affected
    assert!(uc.execute(input(BOB, ALICE, "reply")).await.is_ok());
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn test_get_messages_pagination() {
    let store = Arc::new(MemoryMessageStore::new());
    let convo = conversation_id(ALICE, BOB);
    for i in 0..5 {
        store
            .push(seeded(
                &convo,
                ALICE,
                BOB,
                &format!("m{i}"),
                Duration::minutes(5 - i),
            ))
            .await
            .unwrap();
    }

    let uc = GetMessagesUseCase::new(store.clone());

    // First page: the 2 newest, in chronological order, with a cursor
    let page = uc
        .execute(GetMessagesInput {
            convo_id: convo.clone(),
            cursor: None,
            limit: Some(2),
        })
        .await
        .unwrap();
    assert_eq!(page.messages.len(), 2);
    assert_eq!(page.messages[0].body, "m3");
    assert_eq!(page.messages[1].body, "m4");
    let cursor = page.next_cursor.expect("more pages exist");

    // Second page continues strictly older than the cursor
    let page = uc
        .execute(GetMessagesInput {
            convo_id: convo.clone(),
            cursor: Some(cursor),
            limit: Some(2),
        })
        .await
        .unwrap();
    assert_eq!(page.messages[0].body, "m1");
    assert_eq!(page.messages[1].body, "m2");
    let cursor = page.next_cursor.expect("one more page");

    // Final page has no cursor
    let page = uc
        .execute(GetMessagesInput {
            convo_id: convo,
            cursor: Some(cursor),
            limit: Some(2),
        })
        .await
        .unwrap();
    assert_eq!(page.messages.len(), 1);
    assert_eq!(page.messages[0].body, "m0");
    assert!(page.next_cursor.is_none());
}

#[tokio::test]
async fn test_get_messages_exact_fit_has_no_cursor() {
    let store = Arc::new(MemoryMessageStore::new());
    let convo = conversation_id(ALICE, BOB);
    for i in 0..3 {
        store
            .push(seeded(&convo, ALICE, BOB, "x", Duration::minutes(i)))
            .await
            .unwrap();
    }

    let uc = GetMessagesUseCase::new(store);
    let page = uc
        .execute(GetMessagesInput {
            convo_id: convo,
            cursor: None,
            limit: Some(3),
        })
        .await
        .unwrap();
    assert_eq!(page.messages.len(), 3);
    assert!(page.next_cursor.is_none());
}

#[tokio::test]
async fn test_get_messages_requires_convo_id() {
    let store = Arc::new(MemoryMessageStore::new());
    let uc = GetMessagesUseCase::new(store);

    let err = uc.execute(GetMessagesInput::default()).await.unwrap_err();
    assert!(matches!(err, MessageError::MissingField("convoId")));
}

#[tokio::test]
async fn test_list_conversations_groups_and_sorts() {
    let store = Arc::new(MemoryMessageStore::new());
    let ab = conversation_id(ALICE, BOB);
    let ac = conversation_id(ALICE, CARA);

    store
        .push(seeded(&ab, ALICE, BOB, "old ab", Duration::hours(2)))
        .await
        .unwrap();
    store
        .push(seeded(&ab, BOB, ALICE, "new ab", Duration::hours(1)))
        .await
        .unwrap();
    store
        .push(seeded(&ac, CARA, ALICE, "latest ac", Duration::minutes(5)))
        .await
        .unwrap();

    let uc = ListConversationsUseCase::new(store);
    let conversations = uc.execute(ALICE).await.unwrap();

    assert_eq!(conversations.len(), 2);
    // Most recently active first
    assert_eq!(conversations[0].convo_id, ac);
    assert_eq!(conversations[0].other_participant, CARA);
    assert_eq!(conversations[0].last_message.body, "latest ac");
    assert_eq!(conversations[1].convo_id, ab);
    assert_eq!(conversations[1].last_message.body, "new ab");
}

// ---- router-level tests ----

fn test_router(limit: RateLimitConfig) -> axum::Router {
    messages_router_generic(MessagesAppState {
        store: Arc::new(MemoryMessageStore::new()),
        limiter: Arc::new(MemoryRateLimitStore::new()),
        limit,
    })
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_message(sender: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(wallet) = sender {
        builder = builder.header("x-wallet-address", wallet);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_router_send_then_fetch() {
    let router = test_router(RateLimitConfig::default());
    let payload = serde_json::json!({ "recipient": BOB, "body": "hello" });

    let response = router
        .clone()
        .oneshot(post_message(Some(ALICE), payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let sent = body_json(response).await;
    assert_eq!(sent["success"], true);
    assert_eq!(sent["message"]["body"], "hello");
    let convo_id = sent["message"]["convoId"].as_str().unwrap().to_string();
    assert_eq!(convo_id, conversation_id(ALICE, BOB));

    let response = router
        .oneshot(
            Request::builder()
                .uri(format!("/?convoId={convo_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["messages"].as_array().unwrap().len(), 1);
    assert!(json.get("nextCursor").is_none());
}

#[tokio::test]
async fn test_router_send_requires_wallet_header() {
    let router = test_router(RateLimitConfig::default());
    let payload = serde_json::json!({ "recipient": BOB, "body": "hello" });

    let response = router.oneshot(post_message(None, payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required field: sender");
}

#[tokio::test]
async fn test_router_rate_limit_surface() {
    let router = test_router(RateLimitConfig::new(1, 60));
    let payload = serde_json::json!({ "recipient": BOB, "body": "hello" });

    let response = router
        .clone()
        .oneshot(post_message(Some(ALICE), payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(post_message(Some(ALICE), payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["resetAt"].is_i64());
}
