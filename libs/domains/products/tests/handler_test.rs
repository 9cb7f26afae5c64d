//! Handler tests for the Products domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization and rule-table validation
//! - Response serialization (`{data}` / `{errors}` / `{error}` shapes)
//! - HTTP status codes
//!
//! They run against the in-memory repository, so they exercise the full
//! handler → service → repository path without a database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository);
    handlers::router(service)
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_product_returns_data_with_defaults() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("create_defaults");
    let name = builder.name("product", "create");

    let response = app
        .oneshot(post_json("/", json!({ "name": name, "price": 300 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], name);
    assert_eq!(body["data"]["price"], 300.0);
    assert_eq!(body["data"]["availability"], true);
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_product_trims_name() {
    let app = app();

    let response = app
        .oneshot(post_json("/", json!({ "name": "  Monitor  ", "price": 300 })))
        .await
        .unwrap();

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Monitor");
}

#[tokio::test]
async fn test_create_product_accumulates_validation_errors_in_order() {
    let app = app();

    let response = app
        .oneshot(post_json("/", json!({ "name": "", "price": -10 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["errors"],
        json!([
            { "field": "name", "message": "Name is empty" },
            { "field": "price", "message": "Price must be a positive number" },
        ])
    );
}

#[tokio::test]
async fn test_create_product_reports_type_mismatch() {
    let app = app();

    let response = app
        .oneshot(post_json("/", json!({ "name": 42, "price": "300" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    let messages: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["message"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        vec!["Name must be a string", "Price must be a positive number"]
    );
}

#[tokio::test]
async fn test_create_with_malformed_json_returns_json_error_body() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The rejection text still arrives, but wrapped in the uniform shape
    let body = json_body(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("JSON"));
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let app = app();

    let response = app.oneshot(request("GET", "/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn test_get_with_non_numeric_id_returns_400() {
    let app = app();

    let response = app.oneshot(request("GET", "/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["errors"],
        json!([{ "field": "id", "message": "ID not valid" }])
    );
}

#[tokio::test]
async fn test_get_product_round_trip() {
    let app = app();

    app.clone()
        .oneshot(post_json("/", json!({ "name": "Monitor", "price": 300 })))
        .await
        .unwrap();

    let response = app.oneshot(request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Monitor");
    assert_eq!(body["data"]["price"], 300.0);
}

#[tokio::test]
async fn test_update_requires_all_fields() {
    let app = app();

    app.clone()
        .oneshot(post_json("/", json!({ "name": "Mouse", "price": 25 })))
        .await
        .unwrap();

    // Missing availability
    let response = app
        .oneshot(put_json("/1", json!({ "name": "Mouse", "price": 30 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["errors"],
        json!([{ "field": "availability", "message": "Availability is empty" }])
    );
}

#[tokio::test]
async fn test_update_missing_product_returns_404_before_mutation() {
    let app = app();

    let response = app
        .oneshot(put_json(
            "/50",
            json!({ "name": "Ghost", "price": 1, "availability": false }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let app = app();

    app.clone()
        .oneshot(post_json("/", json!({ "name": "Mouse", "price": 25 })))
        .await
        .unwrap();

    let response = app
        .oneshot(put_json(
            "/1",
            json!({ "name": "Gaming Mouse", "price": 45.5, "availability": false }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Gaming Mouse");
    assert_eq!(body["data"]["price"], 45.5);
    assert_eq!(body["data"]["availability"], false);
}

#[tokio::test]
async fn test_patch_toggle_is_an_involution() {
    let app = app();

    app.clone()
        .oneshot(post_json("/", json!({ "name": "Webcam", "price": 60 })))
        .await
        .unwrap();

    let response = app.clone().oneshot(request("PATCH", "/1")).await.unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["availability"], false);

    let response = app.oneshot(request("PATCH", "/1")).await.unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["availability"], true);
}

#[tokio::test]
async fn test_patch_missing_product_returns_404() {
    let app = app();

    let response = app.oneshot(request("PATCH", "/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_last_state_then_get_404() {
    let app = app();

    app.clone()
        .oneshot(post_json(
            "/",
            json!({ "name": "Headset", "price": 120, "availability": false }),
        ))
        .await
        .unwrap();

    let response = app.clone().oneshot(request("DELETE", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Headset");
    assert_eq!(body["data"]["availability"], false);

    let response = app.oneshot(request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let app = app();

    app.clone()
        .oneshot(post_json("/", json!({ "name": "First", "price": 10 })))
        .await
        .unwrap();
    app.clone().oneshot(request("DELETE", "/1")).await.unwrap();

    let response = app
        .oneshot(post_json("/", json!({ "name": "Second", "price": 20 })))
        .await
        .unwrap();

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["id"], 2);
}

#[tokio::test]
async fn test_list_is_ordered_by_ascending_id() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("list_ordered");

    for i in 0..3 {
        app.clone()
            .oneshot(post_json(
                "/",
                json!({
                    "name": builder.name("product", &format!("p{}", i)),
                    "price": builder.price(),
                }),
            ))
            .await
            .unwrap();
    }

    // Touch the middle row so updated order differs from id order
    app.clone().oneshot(request("PATCH", "/2")).await.unwrap();

    let response = app.oneshot(request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
