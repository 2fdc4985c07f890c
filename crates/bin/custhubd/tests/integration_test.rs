//! End-to-end smoke tests for the full custhubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use custhub_adapter_http_axum::router;
use custhub_adapter_http_axum::state::AppState;
use custhub_adapter_storage_sqlite_sqlx::{
    Config, SqliteAddressRepository, SqliteCustomerRepository,
};
use custhub_app::services::address_service::AddressService;
use custhub_app::services::customer_service::CustomerService;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config::in_memory()
        .build()
        .await
        .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let state = AppState::new(
        CustomerService::new(SqliteCustomerRepository::new(pool.clone())),
        AddressService::new(SqliteAddressRepository::new(pool)),
    );

    router::build(state)
}

async fn call(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn create_customer(app: &axum::Router, first: &str, last: &str, phone: &str) -> i64 {
    let (status, body) = call(
        app,
        "POST",
        "/api/customers",
        Some(json!({ "first_name": first, "last_name": last, "phone_number": phone })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

fn address(city: &str) -> Value {
    json!({
        "address_details": "221B Baker Street",
        "city": city,
        "state": "MH",
        "pin_code": "400001",
    })
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_customer_lifecycle() {
    let app = app().await;

    let id = create_customer(&app, "A", "B", "123").await;
    assert_eq!(id, 1);

    let (status, body) = call(&app, "GET", "/api/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "id": 1, "first_name": "A", "last_name": "B", "phone_number": "123" })
    );

    let (status, body) = call(&app, "DELETE", "/api/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Customer deleted successfully");

    let (status, _) = call(&app, "GET", "/api/customers/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, "DELETE", "/api/customers/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_duplicate_phone_number_as_server_error() {
    let app = app().await;
    create_customer(&app, "A", "B", "123").await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/customers",
        Some(json!({ "first_name": "C", "last_name": "D", "phone_number": "123" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("unique"));
}

#[tokio::test]
async fn should_reject_customer_with_missing_field() {
    let app = app().await;
    let (status, body) = call(
        &app,
        "POST",
        "/api/customers",
        Some(json!({ "first_name": "A", "last_name": "", "phone_number": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");

    let (_, body) = call(&app, "GET", "/api/customers", None).await;
    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn should_paginate_customer_listing() {
    let app = app().await;
    for n in 0..5 {
        create_customer(&app, "F", "L", &format!("90{n}")).await;
    }

    let (status, body) = call(&app, "GET", "/api/customers?page=2&limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [3, 4]);
    assert_eq!(
        body["pagination"],
        json!({ "total": 5, "page": 2, "limit": 2, "totalPages": 3 })
    );
}

#[tokio::test]
async fn should_use_default_window_when_page_params_unparseable() {
    let app = app().await;
    create_customer(&app, "A", "B", "123").await;

    let (status, body) = call(&app, "GET", "/api/customers?page=&limit=abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["pagination"],
        json!({ "total": 1, "page": 1, "limit": 10, "totalPages": 1 })
    );
}

#[tokio::test]
async fn should_answer_json_envelope_when_body_not_declared_json() {
    let app = app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/customers")
        .body(Body::from(
            json!({ "first_name": "A", "last_name": "B", "phone_number": "1" }).to_string(),
        ))
        .unwrap();

    let resp = app.clone().oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Invalid request");

    let (_, body) = call(&app, "GET", "/api/customers", None).await;
    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn should_filter_customers_by_search_term() {
    let app = app().await;
    create_customer(&app, "Ann", "Lee", "5551000").await;
    create_customer(&app, "Bob", "Ray", "1112222").await;
    create_customer(&app, "Cat", "X555", "3334444").await;

    let (_, body) = call(&app, "GET", "/api/customers?search=555", None).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["first_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Ann", "Cat"]);
    assert_eq!(body["pagination"]["total"], 2);
    assert_eq!(body["pagination"]["totalPages"], 1);
}

#[tokio::test]
async fn should_update_customer_in_place() {
    let app = app().await;
    let id = create_customer(&app, "A", "B", "123").await;

    let (status, body) = call(
        &app,
        "PUT",
        &format!("/api/customers/{id}"),
        Some(json!({ "first_name": "X", "last_name": "Y", "phone_number": "456" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Customer updated successfully");

    let (_, body) = call(&app, "GET", &format!("/api/customers/{id}"), None).await;
    assert_eq!(body["data"]["phone_number"], "456");
}

#[tokio::test]
async fn should_not_create_row_when_updating_missing_customer() {
    let app = app().await;
    let (status, _) = call(
        &app,
        "PUT",
        "/api/customers/42",
        Some(json!({ "first_name": "X", "last_name": "Y", "phone_number": "456" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = call(&app, "GET", "/api/customers", None).await;
    assert_eq!(body["pagination"]["total"], 0);
}

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_address_lifecycle() {
    let app = app().await;
    let customer = create_customer(&app, "A", "B", "123").await;
    let base = format!("/api/customers/{customer}/addresses");

    let (status, body) = call(&app, "POST", &base, Some(address("Mumbai"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let address_id = body["id"].as_i64().unwrap();

    let (status, body) = call(&app, "GET", &base, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["customer_id"], customer);
    assert_eq!(body["data"][0]["city"], "Mumbai");

    let (status, _) = call(
        &app,
        "PUT",
        &format!("/api/addresses/{address_id}"),
        Some(address("Pune")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, "GET", &base, None).await;
    assert_eq!(body["data"][0]["city"], "Pune");

    let (status, _) = call(&app, "DELETE", &format!("/api/addresses/{address_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(&app, "DELETE", &format!("/api/addresses/{address_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = call(&app, "GET", &base, None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn should_reject_address_with_missing_field() {
    let app = app().await;
    let customer = create_customer(&app, "A", "B", "123").await;

    let mut body = address("Mumbai");
    body.as_object_mut().unwrap().remove("pin_code");

    let (status, _) = call(
        &app,
        "POST",
        &format!("/api/customers/{customer}/addresses"),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_address() {
    let app = app().await;
    let (status, body) = call(&app, "PUT", "/api/addresses/99", Some(address("Pune"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Address not found");
}

#[tokio::test]
async fn should_reject_address_for_unknown_customer() {
    let app = app().await;
    let (status, _) = call(&app, "POST", "/api/customers/77/addresses", Some(address("Goa"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = call(&app, "GET", "/api/customers/77/addresses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn should_cascade_addresses_when_customer_deleted() {
    let app = app().await;
    let owner = create_customer(&app, "A", "B", "123").await;
    let other = create_customer(&app, "C", "D", "456").await;
    for city in ["Delhi", "Agra", "Jaipur"] {
        call(
            &app,
            "POST",
            &format!("/api/customers/{owner}/addresses"),
            Some(address(city)),
        )
        .await;
    }
    call(
        &app,
        "POST",
        &format!("/api/customers/{other}/addresses"),
        Some(address("Surat")),
    )
    .await;

    let (status, _) = call(&app, "DELETE", &format!("/api/customers/{owner}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, "GET", &format!("/api/customers/{owner}/addresses"), None).await;
    assert_eq!(body["data"], json!([]));

    let (_, body) = call(&app, "GET", &format!("/api/customers/{other}/addresses"), None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
