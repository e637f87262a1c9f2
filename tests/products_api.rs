use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use product_catalog::{
    app::products::{handler::AppState, store::ProductStore},
    build_router,
    infrastructure::memory_store::InMemoryProductStore,
};
use serde_json::{json, Value};

fn test_server() -> (TestServer, Arc<InMemoryProductStore>) {
    let store = Arc::new(InMemoryProductStore::new());
    let app = build_router(AppState::new(store.clone()));
    (TestServer::new(app).unwrap(), store)
}

async fn create_paperclip(server: &TestServer) {
    server
        .post("/products")
        .json(&json!({
            "name": "Paperclip",
            "weight": 0.05,
            "type": "office_supplies",
            "price": 0.1
        }))
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_list_empty_collection() {
    let (server, _) = test_server();

    let response = server.get("/products").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "statusCode": 200,
            "message": "Products fetched successfully",
            "data": []
        })
    );
}

#[tokio::test]
async fn test_create_then_list_and_get() {
    let (server, _) = test_server();
    let started = Utc::now();

    let response = server
        .post("/products")
        .json(&json!({
            "name": "Paperclip",
            "weight": 0.05,
            "type": "office_supplies",
            "price": 0.1
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "statusCode": 201, "message": "Product created successfully" })
    );

    let body = server.get("/products").await.json::<Value>();
    let products = body["data"].as_array().unwrap();
    assert_eq!(products.len(), 1);

    let product = &products[0];
    assert_eq!(product["name"], "Paperclip");
    assert_eq!(product["weight"], 0.05);
    assert_eq!(product["type"], "office_supplies");
    assert_eq!(product["price"], 0.1);
    assert_eq!(product["description"], "");
    assert_eq!(product["color"], "");

    let registered: DateTime<Utc> = product["registerDate"].as_str().unwrap().parse().unwrap();
    assert!(registered >= started);

    let id = product["id"].as_str().unwrap();
    assert_eq!(id.len(), 24);

    let response = server.get(&format!("/products/{id}")).await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Product fetched successfully");
    assert_eq!(body["data"], *product);
}

#[tokio::test]
async fn test_optional_fields_are_kept() {
    let (server, _) = test_server();

    server
        .post("/products")
        .json(&json!({
            "name": "Stapler",
            "description": "Binds paper",
            "color": "red",
            "weight": 0.4,
            "type": "office_supplies",
            "price": 7.5
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let body = server.get("/products").await.json::<Value>();
    assert_eq!(body["data"][0]["description"], "Binds paper");
    assert_eq!(body["data"][0]["color"], "red");
}

#[tokio::test]
async fn test_invalid_body_is_not_stored() {
    let (server, store) = test_server();

    let response = server
        .post("/products")
        .json(&json!({ "name": "Paperclip", "weight": 0.05, "price": 0.1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "statusCode": 400, "message": "Invalid request body data" })
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_get_unknown_and_malformed_ids() {
    let (server, _) = test_server();

    let response = server.get("/products/6858565146f6a7e3cbc2e4e1").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Product not found");

    let response = server.get("/products/not-an-id").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Invalid product ID");
}

#[tokio::test]
async fn test_update_replaces_every_field() {
    let (server, store) = test_server();
    create_paperclip(&server).await;
    let id = store.find_all().await.unwrap()[0].id.to_hex();

    let response = server
        .put(&format!("/products/{id}"))
        .json(&json!({
            "name": "Jumbo paperclip",
            "weight": 0.08,
            "type": "office_supplies",
            "price": 0.25,
            "registerDate": "2025-06-22T19:57:53.788Z"
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "Product updated successfully");

    let body = server.get(&format!("/products/{id}")).await.json::<Value>();
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["name"], "Jumbo paperclip");
    assert_eq!(body["data"]["price"], 0.25);
    assert_eq!(body["data"]["registerDate"], "2025-06-22T19:57:53.788Z");
}

// 目前未命中的更新也返回 200，而不是 404
#[tokio::test]
async fn test_update_unknown_product_reports_success() {
    let (server, store) = test_server();

    let response = server
        .put("/products/6858565146f6a7e3cbc2e4e1")
        .json(&json!({ "name": "Ghost" }))
        .await;

    response.assert_status_ok();
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_delete_twice() {
    let (server, store) = test_server();
    create_paperclip(&server).await;
    let id = store.find_all().await.unwrap()[0].id.to_hex();

    let response = server.delete(&format!("/products/{id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "Product deleted successfully");

    let response = server.delete(&format!("/products/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Product not found");

    server
        .delete("/products/not-an-id")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (server, _) = test_server();

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let doc = response.json::<Value>();
    assert_eq!(doc["info"]["title"], "Product's CRUD API");
    assert!(doc["paths"]["/products/{id}"]["delete"].is_object());
}
