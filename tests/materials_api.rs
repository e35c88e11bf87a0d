//! End-to-end exercises of the HTTP surface over the in-memory record store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use materialx_backend::auth::jwt::sign_token;
use materialx_backend::models::partner::{NewPartner, Partner};
use materialx_backend::routes;
use materialx_backend::state::AppState;
use materialx_backend::store::memory::MemoryStore;
use materialx_backend::store::Store;

const SECRET: &str = "integration-test-secret";

static JWT_SECRET_INIT: std::sync::Once = std::sync::Once::new();

// Tests run concurrently; write the process-wide secret exactly once.
fn init_jwt_secret() {
    JWT_SECRET_INIT.call_once(|| std::env::set_var("JWT_SECRET", SECRET));
}

fn bearer() -> String {
    init_jwt_secret();
    let token = sign_token(1, "manager", "tester", SECRET).unwrap();
    format!("Bearer {token}")
}

async fn app_with_supplier() -> (Router, Partner) {
    let store = Arc::new(MemoryStore::new());
    let supplier = store
        .create_supplier(NewPartner { name: "Acme Textiles".to_string(), email: None })
        .await
        .unwrap();
    let app = Router::new()
        .nest("/api", routes::create_router())
        .with_state(AppState::new(store));
    (app, supplier)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", bearer());
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn denim(supplier_id: i64) -> Value {
    json!({
        "code": "MAT-001",
        "name": "Denim Fabric",
        "material_type": "jeans",
        "buy_price": 150.0,
        "supplier_id": supplier_id,
    })
}

#[tokio::test]
async fn material_routes_require_bearer_token() {
    let (app, _) = app_with_supplier().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/materials").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_then_list_shows_supplier_name() {
    let (app, supplier) = app_with_supplier().await;

    let (status, body) =
        send(&app, "POST", "/api/materials/create", Some(denim(supplier.id))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Material created successfully");
    assert!(body["id"].as_i64().unwrap() > 0);

    let (status, body) = send(&app, "GET", "/api/materials", None).await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["code"], "MAT-001");
    assert_eq!(data[0]["name"], "Denim Fabric");
    assert_eq!(data[0]["material_type"], "jeans");
    assert_eq!(data[0]["buy_price"], 150.0);
    assert_eq!(data[0]["supplier"], supplier.name);
}

#[tokio::test]
async fn create_below_price_floor_is_rejected() {
    let (app, supplier) = app_with_supplier().await;

    let mut cheap = denim(supplier.id);
    cheap["buy_price"] = json!(50.0);
    let (status, body) = send(&app, "POST", "/api/materials/create", Some(cheap)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Buy Price must be at least 100.");

    let (_, body) = send(&app, "GET", "/api/materials", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn create_with_unknown_supplier_is_rejected() {
    let (app, _) = app_with_supplier().await;

    let (status, body) = send(&app, "POST", "/api/materials/create", Some(denim(999))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Supplier does not exist");
}

#[tokio::test]
async fn create_with_missing_field_is_a_client_error() {
    let (app, _) = app_with_supplier().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/materials/create",
        Some(json!({ "code": "MAT-002", "name": "Linen" })),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn listing_is_sorted_by_name_ascending() {
    let (app, supplier) = app_with_supplier().await;

    for (code, name) in [("M3", "Raw Cotton"), ("M1", "Denim Fabric"), ("M2", "Linen")] {
        let mut material = denim(supplier.id);
        material["code"] = json!(code);
        material["name"] = json!(name);
        let (status, _) = send(&app, "POST", "/api/materials/create", Some(material)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, "GET", "/api/materials", None).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Denim Fabric", "Linen", "Raw Cotton"]);
}

#[tokio::test]
async fn update_missing_material_returns_not_found() {
    let (app, _) = app_with_supplier().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/materials/update/999",
        Some(json!({ "buy_price": 200.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Material not found");
}

#[tokio::test]
async fn update_missing_material_with_invalid_price_still_reports_not_found() {
    let (app, _) = app_with_supplier().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/materials/update/999",
        Some(json!({ "buy_price": 50.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Material not found");
}

#[tokio::test]
async fn update_overwrites_fields_and_reruns_price_rule() {
    let (app, supplier) = app_with_supplier().await;

    let (_, created) = send(&app, "POST", "/api/materials/create", Some(denim(supplier.id))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/materials/update/{id}"),
        Some(json!({ "buy_price": 200.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Material updated successfully");

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/materials/update/{id}"),
        Some(json!({ "buy_price": 80.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Buy Price must be at least 100.");

    let (_, body) = send(&app, "GET", "/api/materials", None).await;
    assert_eq!(body["data"][0]["buy_price"], 200.0);
}

#[tokio::test]
async fn delete_removes_material_then_reports_not_found() {
    let (app, supplier) = app_with_supplier().await;

    let (_, created) = send(&app, "POST", "/api/materials/create", Some(denim(supplier.id))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/api/materials/delete/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Material deleted successfully");

    let (_, body) = send(&app, "GET", "/api/materials", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, body) = send(&app, "DELETE", &format!("/api/materials/delete/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Material not found");
}

#[tokio::test]
async fn suppliers_listing_shows_flagged_partners() {
    let (app, supplier) = app_with_supplier().await;

    let (status, body) = send(&app, "GET", "/api/suppliers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], supplier.name);
    assert_eq!(body[0]["is_material_supplier"], true);
}

#[tokio::test]
async fn register_login_me_flow() {
    let (app, _) = app_with_supplier().await;
    init_jwt_secret();

    let (status, body) = send(
        &app,
        "POST",
        "/api/users/register",
        Some(json!({ "username": "amara", "password": "secret-pw", "role": "manager" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "amara");

    let (status, body) = send(
        &app,
        "POST",
        "/api/users/login",
        Some(json!({ "username": "amara", "password": "secret-pw" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().unwrap().to_string();

    let request = Request::builder()
        .uri("/api/users/me")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let me: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(me["username"], "amara");
    assert_eq!(me["role"], "manager");
}
