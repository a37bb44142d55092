//! Profiles crate tests

use std::sync::Arc;
use std::sync::Mutex;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use tower::ServiceExt;

use crate::domain::entity::{Profile, ProfileUpsert};
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileError;
use crate::presentation::handlers::ProfilesAppState;
use crate::presentation::router::profiles_router_generic;

#[derive(Clone, Default)]
struct MemoryProfileRepository {
    rows: Arc<Mutex<Vec<Profile>>>,
}

impl ProfileRepository for MemoryProfileRepository {
    async fn upsert(&self, upsert: &ProfileUpsert) -> Result<Profile, ProfileError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows
            .iter_mut()
            .find(|p| p.wallet_address == upsert.wallet_address)
        {
            existing.display_name = Some(upsert.display_name.clone());
            existing.avatar_url = Some(upsert.avatar_url.clone());
            return Ok(existing.clone());
        }

        let profile = Profile {
            wallet_address: upsert.wallet_address.clone(),
            display_name: Some(upsert.display_name.clone()),
            avatar_url: Some(upsert.avatar_url.clone()),
            created_at: Utc::now(),
        };
        rows.push(profile.clone());
        Ok(profile)
    }

    async fn find_by_wallet(&self, wallet: &str) -> Result<Option<Profile>, ProfileError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.wallet_address == wallet)
            .cloned())
    }
}

fn test_router() -> (axum::Router, MemoryProfileRepository) {
    let repo = MemoryProfileRepository::default();
    let router = profiles_router_generic(ProfilesAppState {
        repo: Arc::new(repo.clone()),
    });
    (router, repo)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_upsert_applies_defaults() {
    let (router, repo) = test_router();
    let body = serde_json::json!({ "walletAddress": "0xABCD" });

    let response = router.oneshot(post_json(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["profile"]["wallet_address"], "0xabcd");
    assert_eq!(json["profile"]["display_name"], "0xabcd");
    assert_eq!(
        json["profile"]["avatar_url"],
        "https://api.dicebear.com/6.x/identicon/svg?seed=0xabcd"
    );
    assert_eq!(repo.rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_upsert_replaces_existing() {
    let (router, repo) = test_router();

    let response = router
        .clone()
        .oneshot(post_json(serde_json::json!({
            "walletAddress": "0xabcd",
            "displayName": "Ada",
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(post_json(serde_json::json!({
            "walletAddress": "0xabcd",
            "displayName": "Ada Lovelace",
            "avatarUrl": "https://example.com/ada.png",
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["profile"]["display_name"], "Ada Lovelace");
    assert_eq!(json["profile"]["avatar_url"], "https://example.com/ada.png");
    assert_eq!(repo.rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_upsert_requires_wallet() {
    let (router, _repo) = test_router();
    let response = router
        .oneshot(post_json(serde_json::json!({ "displayName": "Ada" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required field: walletAddress");
}

#[tokio::test]
async fn test_get_profile_found_and_case_insensitive() {
    let (router, _repo) = test_router();
    router
        .clone()
        .oneshot(post_json(serde_json::json!({
            "walletAddress": "0xabcd",
            "displayName": "Ada",
        })))
        .await
        .unwrap();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/0xABCD")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["profile"]["display_name"], "Ada");
}

#[tokio::test]
async fn test_get_profile_not_found() {
    let (router, _repo) = test_router();
    let response = router
        .oneshot(
            Request::builder()
                .uri("/0xnobody")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Profile not found");
}
