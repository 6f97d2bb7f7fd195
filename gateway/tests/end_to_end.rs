//! End-to-end tests: gateway, identity, and inventory services wired
//! together over real sockets, driven through the gateway's public API.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use reqwest::StatusCode;

use booking_gateway::{build_router, AppState};
use booking_identity::{IdentityClient, IdentityService, JwtCodec, MemoryUserStore};
use booking_inventory::{BookingCoordinator, InventoryClient};
use booking_ledger::RoomLedger;

const TIMEOUT: Duration = Duration::from_secs(2);

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Boot the three services on ephemeral ports; returns the gateway URL.
async fn spawn_platform(rooms: usize) -> String {
    let identity = IdentityService::new(
        Arc::new(JwtCodec::new("e2e-secret")),
        Arc::new(MemoryUserStore::with_accounts([(
            "alice".to_owned(),
            "pw".to_owned(),
        )])),
        chrono::Duration::hours(1),
    );
    let identity_url = serve(booking_identity::http::router(Arc::new(identity))).await;

    let coordinator = BookingCoordinator::new(
        RoomLedger::new(rooms),
        Arc::new(IdentityClient::new(identity_url.clone(), TIMEOUT).unwrap()),
        None,
    );
    let inventory_url = serve(booking_inventory::http::router(Arc::new(coordinator))).await;

    let state = AppState::new(
        IdentityClient::new(identity_url, TIMEOUT).unwrap(),
        InventoryClient::new(inventory_url, TIMEOUT).unwrap(),
    );
    serve(build_router(state)).await
}

#[tokio::test]
async fn test_full_booking_lifecycle() {
    let gateway = spawn_platform(2).await;
    let client = reqwest::Client::new();

    // Create an account, then trade its credentials for a token.
    let response = client
        .post(format!("{gateway}/create"))
        .json(&serde_json::json!({"user": "bob", "password": "hunter2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = client
        .post(format!("{gateway}/authorize"))
        .json(&serde_json::json!({"user": "bob", "password": "hunter2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    let token = body["token"].as_str().unwrap().to_owned();

    // The token names its user end to end.
    let response = client
        .post(format!("{gateway}/validate"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"], "bob");

    // Two rooms, two bookings, ascending indexes.
    for expected in 0..2 {
        let response = client
            .post(format!("{gateway}/book/2020-06-13"))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["room_index"], expected);
    }

    // Third attempt finds the date sold out.
    let response = client
        .post(format!("{gateway}/book/2020-06-13"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "NO_ROOM_AVAILABLE");

    let response = client
        .get(format!("{gateway}/check/2020-06-13"))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["available"], 0);

    // A different date is untouched.
    let response = client
        .get(format!("{gateway}/check/2020-06-14"))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["available"], 2);
}

#[tokio::test]
async fn test_booking_with_invalid_token_is_rejected() {
    let gateway = spawn_platform(2).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{gateway}/book/2020-06-13"))
        .bearer_auth("not-a-token")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "INVALID_TOKEN");

    // The rejected attempt reserved nothing.
    let response = client
        .get(format!("{gateway}/check/2020-06-13"))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["available"], 2);
}

#[tokio::test]
async fn test_structural_errors_stop_at_the_gateway() {
    let gateway = spawn_platform(2).await;
    let client = reqwest::Client::new();

    // Malformed date, rejected before any downstream call.
    let response = client
        .post(format!("{gateway}/book/june-13th"))
        .bearer_auth("whatever")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing bearer token.
    let response = client
        .post(format!("{gateway}/book/2020-06-13"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_identity_errors_surface_through_the_gateway() {
    let gateway = spawn_platform(2).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{gateway}/authorize"))
        .json(&serde_json::json!({"user": "alice", "password": "wrong"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "INVALID_CREDENTIALS");

    let response = client
        .post(format!("{gateway}/create"))
        .json(&serde_json::json!({"user": "alice", "password": "again"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "USER_EXISTS");
}

#[tokio::test]
async fn test_unreachable_inventory_is_bad_gateway() {
    // Gateway pointed at a port nothing listens on.
    let state = AppState::new(
        IdentityClient::new("http://127.0.0.1:9", TIMEOUT).unwrap(),
        InventoryClient::new("http://127.0.0.1:9", TIMEOUT).unwrap(),
    );
    let gateway = serve(build_router(state)).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{gateway}/check/2020-06-13"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
