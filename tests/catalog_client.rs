//! Tests for CatalogClient and the one-shot loader against a mock server.

mod common;

use common::catalog_json;
use common::mock_catalog::{MockCatalog, MockResponse};
use rust_decimal::Decimal;
use shopterm::catalog::{load_catalog, spawn_catalog_load, CatalogClient, CatalogError};
use shopterm::config::CatalogConfig;
use std::str::FromStr;
use std::time::Duration;

fn client_for(endpoint: &str) -> CatalogClient {
    let config = CatalogConfig {
        endpoint: endpoint.to_string(),
        timeout_seconds: 1,
        connect_timeout_seconds: 1,
    };
    CatalogClient::new(&config).expect("client builds")
}

#[tokio::test]
async fn fetch_decodes_products_and_ignores_rating() {
    let server = MockCatalog::start().await;
    server.enqueue_response(MockResponse::json(&catalog_json())).await;

    let products = client_for(&server.products_url())
        .fetch_products()
        .await
        .unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Fjallraven Backpack");
    assert_eq!(products[0].price, Decimal::from_str("109.95").unwrap());
    assert_eq!(products[1].price, Decimal::from(64));
    assert_eq!(products[1].category, "electronics");

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/products");
    assert!(!requests[0]
        .headers
        .iter()
        .any(|(name, _)| name == "authorization"));
}

#[tokio::test]
async fn non_success_status_is_upstream_error() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::error(500, "boom"))
        .await;

    let err = client_for(&server.products_url())
        .fetch_products()
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::UpstreamError { status: 500 }));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::json(r#"{"not": "a list"}"#))
        .await;

    let err = client_for(&server.products_url())
        .fetch_products()
        .await
        .unwrap_err();
    assert_eq!(err.error_type(), "decode_error");
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::json("[]").with_delay(1500))
        .await;

    let err = client_for(&server.products_url())
        .fetch_products()
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Timeout { duration: 1 }));
}

#[tokio::test]
async fn unreachable_host_is_connection_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let err = client_for(&format!("http://127.0.0.1:{port}/products"))
        .fetch_products()
        .await
        .unwrap_err();
    assert_eq!(err.error_type(), "connection_error");
}

#[test]
fn invalid_endpoint_rejected_at_construction() {
    let config = CatalogConfig {
        endpoint: "not a url".to_string(),
        timeout_seconds: 1,
        connect_timeout_seconds: 1,
    };
    assert!(matches!(
        CatalogClient::new(&config),
        Err(CatalogError::InvalidEndpoint { .. })
    ));
}

#[tokio::test]
async fn load_catalog_falls_back_to_empty() {
    let server = MockCatalog::start().await;
    server
        .enqueue_response(MockResponse::error(503, "down"))
        .await;

    let products = load_catalog(&client_for(&server.products_url())).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn spawned_load_delivers_once() {
    let server = MockCatalog::start().await;
    server.enqueue_response(MockResponse::json(&catalog_json())).await;

    let (tx, rx) = std::sync::mpsc::channel();
    let handle = tokio::runtime::Handle::current();
    spawn_catalog_load(&handle, client_for(&server.products_url()), move |products| {
        let _ = tx.send(products);
    })
    .await
    .unwrap();

    let products = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    assert_eq!(products.len(), 2);
    assert!(rx.try_recv().is_err());
    assert_eq!(server.captured_requests().await.len(), 1);
}
