//! Handler tests for Products domain
//!
//! These drive the product router end to end over the in-memory repository:
//! - Request parsing and field validation
//! - Status codes and the `Location` header
//! - Purchase and like transitions
//! - Error response bodies
//!
//! Postgres-backed behaviour lives in `integration_test.rs`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    let service = ProductService::new(InMemoryProductRepository::new());
    Router::new().nest("/api/products", handlers::router(service))
}

fn product_body(name: &str, category: &str, stock: i32, available: bool) -> Value {
    json!({
        "name": name,
        "price": 10,
        "category": category,
        "stock": stock,
        "create_date": "2024-01-01",
        "available": available,
        "likes": 0
    })
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: Value) -> Product {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/products", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

async fn error_message(response: axum::response::Response) -> String {
    let body: Value = json_body(response.into_body()).await;
    body["message"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_product_returns_201_with_location() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/products",
            &product_body("p1", "c1", 1, true),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let product: Product = json_body(response.into_body()).await;
    assert!(product.id > 0);
    assert_eq!(product.name, "p1");
    assert_eq!(location, format!("/api/products/{}", product.id));
}

#[tokio::test]
async fn test_create_ignores_id_in_body() {
    let app = app();

    let mut body = product_body("p1", "c1", 1, true);
    body["id"] = json!(999);
    let product = create(&app, body).await;

    assert_ne!(product.id, 999);
}

#[tokio::test]
async fn test_created_ids_are_distinct() {
    let app = app();

    let a = create(&app, product_body("a", "c1", 1, true)).await;
    let b = create(&app, product_body("b", "c1", 1, true)).await;

    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_create_without_content_type_returns_415() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .body(Body::from(
            serde_json::to_string(&product_body("p1", "c1", 1, true)).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_create_with_wrong_content_type_returns_415() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header("content-type", "text/html")
        .body(Body::from("<p>hat</p>"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_create_missing_field_names_the_key() {
    let app = app();

    let mut body = product_body("p1", "c1", 1, true);
    body.as_object_mut().unwrap().remove("category");

    let response = app
        .oneshot(json_request("POST", "/api/products", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(response).await,
        "Invalid Product: missing category"
    );
}

#[tokio::test]
async fn test_create_with_empty_object_returns_400() {
    let app = app();

    let response = app
        .oneshot(json_request("POST", "/api/products", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(response).await,
        "Invalid Product: missing name"
    );
}

#[tokio::test]
async fn test_create_rejects_string_available() {
    let app = app();

    let mut body = product_body("p1", "c1", 1, true);
    body["available"] = json!("true");

    let response = app
        .oneshot(json_request("POST", "/api/products", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("available"));
}

#[tokio::test]
async fn test_create_rejects_field_rule_violations() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/products",
            &product_body("", "c1", -1, true),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["name"].is_array());
    assert!(body["details"]["stock"].is_array());
}

#[tokio::test]
async fn test_get_product_returns_200() {
    let app = app();
    let created = create(&app, product_body("p1", "c1", 3, true)).await;

    let response = app
        .oneshot(empty_request(
            "GET",
            &format!("/api/products/{}", created.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product, created);
}

#[tokio::test]
async fn test_get_missing_product_returns_404_with_message() {
    let app = app();

    let response = app
        .oneshot(empty_request("GET", "/api/products/0"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        error_message(response).await,
        "product with id '0' was not found."
    );
}

#[tokio::test]
async fn test_get_with_non_integer_id_returns_400() {
    let app = app();

    let response = app
        .oneshot(empty_request("GET", "/api/products/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_product_overwrites_fields() {
    let app = app();
    let created = create(&app, product_body("p1", "c1", 3, true)).await;

    let mut body = product_body("renamed", "c2", 9, true);
    body["id"] = json!(created.id + 100);

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/products/{}", created.id),
            &body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.category, "c2");
    assert_eq!(updated.stock, 9);
}

#[tokio::test]
async fn test_update_without_desc_or_likes_keeps_them() {
    let app = app();

    let mut body = product_body("p1", "c1", 3, true);
    body["desc"] = json!("keep me");
    body["likes"] = json!(5);
    let created = create(&app, body).await;

    let mut body = product_body("p1", "c1", 4, true);
    body.as_object_mut().unwrap().remove("likes");

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/products/{}", created.id),
            &body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.desc.as_deref(), Some("keep me"));
    assert_eq!(updated.likes, 5);
    assert_eq!(updated.stock, 4);

    let mut body = product_body("p1", "c1", 4, true);
    body["desc"] = Value::Null;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/products/{}", created.id),
            &body,
        ))
        .await
        .unwrap();

    let cleared: Product = json_body(response.into_body()).await;
    assert_eq!(cleared.desc, None);
    assert_eq!(cleared.likes, 0);
}

#[tokio::test]
async fn test_update_missing_product_returns_404() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/products/77",
            &product_body("p1", "c1", 1, true),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_invalid_body_returns_400() {
    let app = app();
    let created = create(&app, product_body("p1", "c1", 3, true)).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/products/{}", created.id),
            &json!(["not", "an", "object"]),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_is_idempotent_and_returns_204() {
    let app = app();
    let created = create(&app, product_body("p1", "c1", 3, true)).await;
    let uri = format!("/api/products/{}", created.id);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_purchase_last_unit_then_conflict() {
    let app = app();
    let created = create(&app, product_body("p1", "c1", 1, true)).await;
    let uri = format!("/api/products/{}/purchase", created.id);

    let response = app
        .clone()
        .oneshot(empty_request("POST", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bought: Product = json_body(response.into_body()).await;
    assert_eq!(bought.stock, 0);
    assert!(!bought.available);

    let response = app.oneshot(empty_request("POST", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(error_message(response).await.contains("not available"));
}

#[tokio::test]
async fn test_purchase_keeps_availability_while_stock_remains() {
    let app = app();
    let created = create(&app, product_body("p1", "c1", 3, true)).await;

    let response = app
        .oneshot(empty_request(
            "PUT",
            &format!("/api/products/{}/purchase", created.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bought: Product = json_body(response.into_body()).await;
    assert_eq!(bought.stock, 2);
    assert!(bought.available);
}

#[tokio::test]
async fn test_purchase_unavailable_product_with_stock_is_conflict() {
    let app = app();
    let created = create(&app, product_body("p1", "c1", 10, false)).await;

    let response = app
        .oneshot(empty_request(
            "POST",
            &format!("/api/products/{}/purchase", created.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(error_message(response).await.contains("not available"));
}

#[tokio::test]
async fn test_purchase_available_without_stock_is_out_of_stock() {
    let app = app();
    let created = create(&app, product_body("p1", "c1", 0, true)).await;

    let response = app
        .oneshot(empty_request(
            "POST",
            &format!("/api/products/{}/purchase", created.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(error_message(response).await.contains("out of stock"));
}

#[tokio::test]
async fn test_purchase_missing_product_returns_404() {
    let app = app();

    let response = app
        .oneshot(empty_request("POST", "/api/products/0/purchase"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_like_increments_each_call() {
    let app = app();
    let created = create(&app, product_body("p1", "c1", 1, true)).await;
    let uri = format!("/api/products/{}/like", created.id);

    for expected in 1..=3 {
        let response = app
            .clone()
            .oneshot(empty_request("PUT", &uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let liked: Product = json_body(response.into_body()).await;
        assert_eq!(liked.likes, expected);
    }
}

#[tokio::test]
async fn test_like_at_i32_max_is_conflict() {
    let app = app();

    let mut body = product_body("p1", "c1", 1, true);
    body["likes"] = json!(i32::MAX);
    let created = create(&app, body).await;
    let uri = format!("/api/products/{}/like", created.id);

    let response = app
        .clone()
        .oneshot(empty_request("PUT", &uri))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(error_message(response).await.contains("cannot take more likes"));

    let response = app
        .oneshot(empty_request("GET", &format!("/api/products/{}", created.id)))
        .await
        .unwrap();
    let stored: Product = json_body(response.into_body()).await;
    assert_eq!(stored.likes, i32::MAX);
}

#[tokio::test]
async fn test_like_missing_product_returns_404() {
    let app = app();

    let response = app
        .oneshot(empty_request("PUT", "/api/products/5/like"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_empty_returns_200() {
    let app = app();

    let response = app
        .oneshot(empty_request("GET", "/api/products"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_list_applies_single_filter_by_precedence() {
    let app = app();
    create(&app, product_body("hat", "cloths", 1, true)).await;
    create(&app, product_body("hat", "toys", 1, false)).await;
    create(&app, product_body("scarf", "cloths", 0, false)).await;

    let list = |uri: &'static str| {
        let app = app.clone();
        async move {
            let response = app.oneshot(empty_request("GET", uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            json_body::<Vec<Product>>(response.into_body()).await
        }
    };

    // category wins over name and available
    let products = list("/api/products?category=cloths&name=hat&available=true").await;
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.category == "cloths"));

    // name wins over available
    let products = list("/api/products?name=hat&available=false").await;
    assert_eq!(products.len(), 2);

    let products = list("/api/products?available=false").await;
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| !p.available));

    let products = list("/api/products?stock=0").await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "scarf");

    let products = list("/api/products?price=10").await;
    assert_eq!(products.len(), 3);

    let products = list("/api/products?category=").await;
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn test_list_with_bad_filter_value_returns_400() {
    let app = app();

    let response = app
        .oneshot(empty_request("GET", "/api/products?available=maybe"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
