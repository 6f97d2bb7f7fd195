//! Correlation identifier propagation across the full chain: minted (or
//! restored) at the gateway, carried through inventory, observed at the
//! identity boundary, and echoed back to the caller.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
use uuid::Uuid;

use booking_correlation::CORRELATION_ID_HEADER;
use booking_gateway::{build_router, AppState};
use booking_identity::IdentityClient;
use booking_inventory::{BookingCoordinator, InventoryClient};
use booking_ledger::RoomLedger;

const TIMEOUT: Duration = Duration::from_secs(2);

/// Correlation header values observed at the identity boundary.
#[derive(Clone, Default)]
struct Observed(Arc<Mutex<Vec<String>>>);

impl Observed {
    fn values(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

async fn validate_stub(
    State(observed): State<Observed>,
    headers: HeaderMap,
) -> Json<serde_json::Value> {
    if let Some(value) = headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        observed.0.lock().unwrap().push(value.to_owned());
    }
    Json(serde_json::json!({"user": "alice"}))
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Gateway in front of a real inventory service, with the identity
/// boundary replaced by a header-recording stub.
async fn spawn_with_observer() -> (String, Observed) {
    let observed = Observed::default();
    let stub = Router::new()
        .route("/validate", post(validate_stub))
        .with_state(observed.clone());
    let identity_url = serve(stub).await;

    let coordinator = BookingCoordinator::new(
        RoomLedger::new(4),
        Arc::new(IdentityClient::new(identity_url.clone(), TIMEOUT).unwrap()),
        None,
    );
    let inventory_url = serve(booking_inventory::http::router(Arc::new(coordinator))).await;

    let state = AppState::new(
        IdentityClient::new(identity_url, TIMEOUT).unwrap(),
        InventoryClient::new(inventory_url, TIMEOUT).unwrap(),
    );
    (serve(build_router(state)).await, observed)
}

#[tokio::test]
async fn test_caller_supplied_id_travels_the_whole_chain() {
    let (gateway, observed) = spawn_with_observer().await;
    let client = reqwest::Client::new();
    let id = Uuid::new_v4().to_string();

    let response = client
        .post(format!("{gateway}/book/2020-06-13"))
        .header(CORRELATION_ID_HEADER, &id)
        .bearer_auth("some-token")
        .send()
        .await
        .unwrap();

    // Echoed to the caller and observed two process hops away.
    assert_eq!(
        response.headers().get(CORRELATION_ID_HEADER).unwrap(),
        id.as_str()
    );
    assert_eq!(observed.values(), vec![id]);
}

#[tokio::test]
async fn test_minted_id_travels_the_whole_chain() {
    let (gateway, observed) = spawn_with_observer().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{gateway}/book/2020-06-13"))
        .bearer_auth("some-token")
        .send()
        .await
        .unwrap();

    let echoed = response
        .headers()
        .get(CORRELATION_ID_HEADER)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    // Minted at the edge: a real identifier, not an empty placeholder.
    Uuid::parse_str(&echoed).unwrap();
    assert_eq!(observed.values(), vec![echoed]);
}

#[tokio::test]
async fn test_distinct_requests_get_distinct_ids() {
    let (gateway, observed) = spawn_with_observer().await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        client
            .post(format!("{gateway}/book/2020-06-13"))
            .bearer_auth("some-token")
            .send()
            .await
            .unwrap();
    }

    let values = observed.values();
    assert_eq!(values.len(), 2);
    assert_ne!(values[0], values[1]);
}
