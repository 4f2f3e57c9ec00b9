//! Round-trip test against a localhost Hermes stub.
//!
//! Serves a canned `/v2/updates/price/latest` response and drives the real
//! client against it, so the request path, query encoding, and response
//! decoding are exercised without touching the public Hermes endpoint.

use axum::{routing::get, Json, Router};
use lever_oracle::HermesClient;
use serde_json::json;

const SUI_USD_FEED: &str = "0x23d7315113f5b1d3ba7a83604c44b94d79f4fd69af77f804fc7f920a6dc65744";

async fn spawn_stub(response: serde_json::Value) -> String {
    let app = Router::new().route(
        "/v2/updates/price/latest",
        get(move || {
            let response = response.clone();
            async move { Json(response) }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn latest_price_round_trip() {
    let base_url = spawn_stub(json!({
        "parsed": [{
            "id": SUI_USD_FEED.trim_start_matches("0x"),
            "price": {
                "price": "352040000",
                "conf": "215000",
                "expo": -8,
                "publish_time": 1716300000
            }
        }]
    }))
    .await;

    let client = HermesClient::new(&base_url).unwrap();
    let info = client.latest_price(SUI_USD_FEED).await.unwrap();
    assert!((info.price - 3.5204).abs() < 1e-9);
    assert_eq!(info.raw_price, "352040000");
    assert_eq!(info.publish_time, 1716300000);
}

#[tokio::test]
async fn empty_feed_response_surfaces_an_error() {
    let base_url = spawn_stub(json!({ "parsed": [] })).await;

    let client = HermesClient::new(&base_url).unwrap();
    let err = client.latest_price(SUI_USD_FEED).await.unwrap_err();
    assert!(err.to_string().contains("no parsed price updates"));
}
